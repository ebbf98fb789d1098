use tracing::debug;

use crate::distribution::SumDistribution;

/// Diagnostic sink for intermediate results. Implementations only watch;
/// nothing they do feeds back into a count.
pub trait Observer {
    /// Called with the distribution of every prefix length that gets built.
    fn distribution(&mut self, _half_len: usize, _distribution: &SumDistribution) {}

    /// Called with `(sum, count^2)` for every achievable sum.
    fn squares(&mut self, _squares: &[(usize, u128)]) {}
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Observer for Silent {}

/// Dumps intermediate tables as `debug` records.
#[derive(Debug, Default, Clone, Copy)]
pub struct Traced;

impl Observer for Traced {
    fn distribution(&mut self, half_len: usize, distribution: &SumDistribution) {
        debug!(half_len, "(Sum, Count)");
        for (sum, count) in distribution.iter() {
            debug!(sum, count);
        }
    }

    fn squares(&mut self, squares: &[(usize, u128)]) {
        debug!("(Sum, Count^2)");
        for (sum, square) in squares {
            debug!(sum, square = %square);
        }
    }
}
