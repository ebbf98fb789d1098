pub mod alphabet;
pub mod distribution;
pub mod error;
pub mod fast;
pub mod observer;
pub mod odometer;
pub mod slow;

pub use alphabet::Alphabet;
pub use distribution::SumDistribution;
pub use error::GoodError;
pub use observer::{Observer, Silent, Traced};

/// Shape of the numbers being counted: `half_len` digits on each side of a
/// single free middle digit, every digit drawn from a `base`-symbol alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Params {
    pub base: u32,
    pub half_len: usize,
}

impl Params {
    /// Thirteen base-13 digits, six on each side of the middle one.
    pub const GOOD13: Params = Params {
        base: 13,
        half_len: 6,
    };

    pub fn new(base: u32, half_len: usize) -> Result<Self, GoodError> {
        let params = Self { base, half_len };
        params.validate()?;
        Ok(params)
    }

    /// Checks the base has an alphabet and that every derived length fits.
    pub fn validate(&self) -> Result<(), GoodError> {
        let alphabet = Alphabet::new(self.base)?;
        let total = self
            .half_len
            .checked_mul(2)
            .and_then(|len| len.checked_add(1));
        let max_sum = self
            .half_len
            .checked_mul(alphabet.base() as usize - 1)
            .and_then(|sum| sum.checked_add(1));
        if total.is_none() || max_sum.is_none() {
            return Err(GoodError::InvalidHalfLength(self.half_len));
        }
        Ok(())
    }

    /// Number of symbols in a full candidate number.
    pub fn total_len(&self) -> usize {
        2 * self.half_len + 1
    }

    /// Index of the unconstrained digit.
    pub fn middle(&self) -> usize {
        self.half_len
    }

    /// Largest digit sum a half can reach.
    pub fn max_sum(&self) -> usize {
        self.half_len * self.base.saturating_sub(1) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_good13_shape() {
        let params = Params::GOOD13;
        assert_eq!(13, params.total_len());
        assert_eq!(6, params.middle());
        assert_eq!(72, params.max_sum());
    }

    #[rstest]
    #[case(0)]
    #[case(37)]
    fn test_rejects_unspellable_base(#[case] base: u32) {
        assert!(matches!(
            Params::new(base, 2),
            Err(GoodError::InvalidBase(b)) if b == base
        ));
    }

    #[rstest]
    #[case(13, usize::MAX)]
    #[case(13, usize::MAX / 2)]
    #[case(36, usize::MAX / 35 + 1)]
    #[case(1, usize::MAX)]
    fn test_rejects_oversized_half_len(#[case] base: u32, #[case] half_len: usize) {
        assert!(matches!(
            Params::new(base, half_len),
            Err(GoodError::InvalidHalfLength(h)) if h == half_len
        ));
    }

    #[test]
    fn test_accepts_largest_half_len() -> Result<(), GoodError> {
        let params = Params::new(2, usize::MAX / 2 - 1)?;
        assert_eq!(usize::MAX - 2, params.total_len());
        Ok(())
    }

    #[test]
    fn test_accepts_unary_base() -> Result<(), GoodError> {
        let params = Params::new(1, 4)?;
        assert_eq!(0, params.max_sum());
        assert_eq!(9, params.total_len());
        Ok(())
    }
}
