//! Coil driver output abstraction
//!
//! A stepper's coils hang off a group of digital outputs driven together.
//! Bit `n` of a pattern energizes coil line `n`.

/// Eight-line coil output
///
/// Implementations configure their lines as outputs once, at construction,
/// and never change direction afterwards. Writes cannot fail.
pub trait CoilPort {
    /// Drive every line to the matching bit of `pattern`
    fn write(&mut self, pattern: u8);

    /// The pattern most recently written
    fn pattern(&self) -> u8;

    /// De-energize all coils
    fn release(&mut self) {
        self.write(0);
    }
}

impl<P: CoilPort + ?Sized> CoilPort for &mut P {
    fn write(&mut self, pattern: u8) {
        (**self).write(pattern);
    }

    fn pattern(&self) -> u8 {
        (**self).pattern()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Latch(u8);

    impl CoilPort for Latch {
        fn write(&mut self, pattern: u8) {
            self.0 = pattern;
        }

        fn pattern(&self) -> u8 {
            self.0
        }
    }

    #[test]
    fn test_release_clears_all_lines() {
        let mut port = Latch::default();
        port.write(0x0F);
        port.release();
        assert_eq!(port.pattern(), 0);
    }

    #[test]
    fn test_mut_ref_forwards() {
        fn drive<P: CoilPort>(mut port: P) -> u8 {
            port.write(0x9);
            port.pattern()
        }

        let mut port = Latch::default();
        assert_eq!(drive(&mut port), 0x9);
        assert_eq!(port.pattern(), 0x9);
    }
}
