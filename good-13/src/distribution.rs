use itertools::Itertools;

use crate::{error::GoodError, observer::Observer, odometer::Odometer, Params};

/// How many digit sequences of one fixed length produce each digit sum.
/// Entry `s` is the count for sum `s`; every achievable sum has an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SumDistribution {
    counts: Vec<u64>,
}

impl SumDistribution {
    /// Coefficients of `(1 + x + ... + x^(base-1))^half_len`, built by
    /// appending one digit at a time.
    #[tracing::instrument(skip(observer))]
    pub fn convolve(params: Params, observer: &mut impl Observer) -> Result<Self, GoodError> {
        params.validate()?;

        let mut distribution = Self::empty();
        observer.distribution(0, &distribution);
        for placed in 1..=params.half_len {
            distribution = distribution.push_digit(params.base)?;
            observer.distribution(placed, &distribution);
        }

        Ok(distribution)
    }

    /// Same table, counted by walking every sequence. Exponential in
    /// `half_len`; kept as a reference.
    #[tracing::instrument(skip(observer))]
    pub fn enumerate(params: Params, observer: &mut impl Observer) -> Result<Self, GoodError> {
        params.validate()?;

        let grouped = Odometer::new(params.base, params.half_len)
            .map(|digits| digits.iter().map(|&digit| digit as usize).sum::<usize>())
            .counts();

        let mut counts = vec![0u64; params.max_sum() + 1];
        for (sum, count) in grouped {
            counts[sum] = count as u64;
        }

        let distribution = Self { counts };
        observer.distribution(params.half_len, &distribution);
        Ok(distribution)
    }

    /// The zero-length sequence: one way to reach sum zero.
    fn empty() -> Self {
        Self { counts: vec![1] }
    }

    /// Convolves with the single-digit table of `base` ones. Each new entry
    /// is the sum of a window of `base` old entries, slid one step at a time.
    fn push_digit(&self, base: u32) -> Result<Self, GoodError> {
        let base = base as usize;
        let len = self.counts.len() + base - 1;
        let mut counts = Vec::with_capacity(len);
        let mut window = 0u64;
        for sum in 0..len {
            if let Some(&entering) = self.counts.get(sum) {
                window = window
                    .checked_add(entering)
                    .ok_or(GoodError::Overflow("convolving digit sums"))?;
            }
            if let Some(&leaving) = sum.checked_sub(base).and_then(|old| self.counts.get(old)) {
                window -= leaving;
            }
            counts.push(window);
        }
        Ok(Self { counts })
    }

    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Sequences summing to `sum`; zero for sums out of reach.
    pub fn count(&self, sum: usize) -> u64 {
        self.counts.get(sum).copied().unwrap_or(0)
    }

    /// Number of entries, `max_sum() + 1`. Never zero.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn max_sum(&self) -> usize {
        self.counts.len() - 1
    }

    /// Total number of sequences counted.
    pub fn total(&self) -> Result<u128, GoodError> {
        self.counts
            .iter()
            .try_fold(0u128, |acc, &count| acc.checked_add(u128::from(count)))
            .ok_or(GoodError::Overflow("totalling a distribution"))
    }

    /// `(sum, count)` pairs in increasing sum order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, u64)> + '_ {
        self.counts.iter().copied().enumerate()
    }
}
