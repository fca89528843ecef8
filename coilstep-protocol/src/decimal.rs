//! Decimal argument parsing
//!
//! Arguments are parsed the way a C `strtol` clamped to 16 bits would:
//! leading whitespace, an optional sign, then digits up to the first
//! non-digit byte. Out-of-range values saturate, and input without any
//! digits maps to `i16::MIN`. [`parse_decimal`] reports which of these
//! happened; [`ParseError::sentinel`] gives the saturated value.

/// Reasons a decimal argument could not be represented exactly
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// No digits after the optional sign
    NoDigits,
    /// Value above `i16::MAX`
    PositiveOverflow,
    /// Value below `i16::MIN`
    NegativeOverflow,
}

impl ParseError {
    /// The saturated value a 16-bit `strtol` would have produced
    pub fn sentinel(self) -> i16 {
        match self {
            ParseError::NoDigits | ParseError::NegativeOverflow => i16::MIN,
            ParseError::PositiveOverflow => i16::MAX,
        }
    }
}

// Any magnitude above this is out of range for both signs; capping the
// accumulator here keeps it from overflowing on long digit runs.
const MAGNITUDE_CAP: u32 = i16::MAX as u32 + 2;

/// Parse a signed decimal integer from the start of `bytes`
pub fn parse_decimal(bytes: &[u8]) -> Result<i16, ParseError> {
    let start = bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(bytes.len());
    let mut rest = &bytes[start..];

    let negative = match rest.first() {
        Some(b'-') => {
            rest = &rest[1..];
            true
        }
        Some(b'+') => {
            rest = &rest[1..];
            false
        }
        _ => false,
    };

    let digits = rest.iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return Err(ParseError::NoDigits);
    }

    let magnitude = rest[..digits].iter().fold(0u32, |acc, &b| {
        (acc * 10 + u32::from(b - b'0')).min(MAGNITUDE_CAP)
    });

    let value = if negative {
        -(magnitude as i32)
    } else {
        magnitude as i32
    };

    i16::try_from(value).map_err(|_| {
        if negative {
            ParseError::NegativeOverflow
        } else {
            ParseError::PositiveOverflow
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn saturated(bytes: &[u8]) -> i16 {
        parse_decimal(bytes).unwrap_or_else(ParseError::sentinel)
    }

    #[test]
    fn test_parse_plain_values() {
        assert_eq!(parse_decimal(b"0"), Ok(0));
        assert_eq!(parse_decimal(b"42"), Ok(42));
        assert_eq!(parse_decimal(b"-42"), Ok(-42));
        assert_eq!(parse_decimal(b"+7"), Ok(7));
        assert_eq!(parse_decimal(b"00015"), Ok(15));
    }

    #[test]
    fn test_parse_bounds() {
        assert_eq!(parse_decimal(b"32767"), Ok(i16::MAX));
        assert_eq!(parse_decimal(b"-32768"), Ok(i16::MIN));
        assert_eq!(parse_decimal(b"32768"), Err(ParseError::PositiveOverflow));
        assert_eq!(parse_decimal(b"-32769"), Err(ParseError::NegativeOverflow));
    }

    #[test]
    fn test_parse_long_digit_runs_saturate() {
        assert_eq!(
            parse_decimal(b"99999999999999999999"),
            Err(ParseError::PositiveOverflow)
        );
        assert_eq!(saturated(b"99999999999999999999"), i16::MAX);
        assert_eq!(saturated(b"-99999999999999999999"), i16::MIN);
    }

    #[test]
    fn test_parse_stops_at_first_non_digit() {
        assert_eq!(parse_decimal(b"120\r"), Ok(120));
        assert_eq!(parse_decimal(b"12x4"), Ok(12));
        assert_eq!(parse_decimal(b"  \t5"), Ok(5));
    }

    #[test]
    fn test_parse_no_digits() {
        assert_eq!(parse_decimal(b""), Err(ParseError::NoDigits));
        assert_eq!(parse_decimal(b"-"), Err(ParseError::NoDigits));
        assert_eq!(parse_decimal(b"abc"), Err(ParseError::NoDigits));
        assert_eq!(parse_decimal(b" - 5"), Err(ParseError::NoDigits));
        assert_eq!(saturated(b"abc"), i16::MIN);
    }

    proptest! {
        #[test]
        fn prop_parse_matches_display(value: i16) {
            let text = value.to_string();
            prop_assert_eq!(parse_decimal(text.as_bytes()), Ok(value));
        }

        #[test]
        fn prop_out_of_range_saturates(value in any::<i32>()) {
            let text = value.to_string();
            let expected = value.clamp(i32::from(i16::MIN), i32::from(i16::MAX)) as i16;
            prop_assert_eq!(saturated(text.as_bytes()), expected);
        }
    }
}
