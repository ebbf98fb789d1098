use std::time::{Duration, Instant};

use tracing::info;

use crate::{
    alphabet::Alphabet,
    distribution::SumDistribution,
    error::GoodError,
    fast::good_count,
    observer::Observer,
    Params,
};

const REPORT_EVERY: Duration = Duration::from_secs(5);

/// Whether the left and right halves of `number` have equal digit sums.
/// The middle symbol is ignored but must still belong to the alphabet.
pub fn is_good(params: Params, number: &str) -> Result<bool, GoodError> {
    params.validate()?;
    let alphabet = Alphabet::new(params.base)?;

    let found = number.chars().count();
    if found != params.total_len() {
        return Err(GoodError::InvalidLength {
            expected: params.total_len(),
            found,
        });
    }

    let digits = alphabet.digits(number)?;
    let left = digit_sum(&digits[..params.middle()]);
    let right = digit_sum(&digits[params.middle() + 1..]);
    Ok(left == right)
}

fn digit_sum(digits: &[u32]) -> u64 {
    digits.iter().map(|&digit| u64::from(digit)).sum()
}

/// Combinatorial reference: halves are enumerated one by one and grouped
/// by sum, then paired up exactly like the fast path.
#[tracing::instrument(skip(observer))]
pub fn count_by_halves(params: Params, observer: &mut impl Observer) -> Result<u128, GoodError> {
    let distribution = SumDistribution::enumerate(params, observer)?;
    good_count(&distribution, params.base, observer)
}

/// Tests every full-length number in turn. Stops early once `limit` good
/// numbers have been seen; a limit of zero searches nothing.
#[tracing::instrument]
pub fn count_direct(params: Params, limit: Option<u128>) -> Result<u128, GoodError> {
    params.validate()?;
    let alphabet = Alphabet::new(params.base)?;
    if limit == Some(0) {
        return Ok(0);
    }
    let len = params.total_len();
    let end = u32::try_from(len)
        .ok()
        .and_then(|exp| u128::from(params.base).checked_pow(exp))
        .ok_or(GoodError::Overflow("sizing the search space"))?;

    let mut progress = Progress::new(end, REPORT_EVERY);
    let mut good = 0u128;
    for value in 0..end {
        let number = alphabet.encode(value, len)?;
        if is_good(params, &number)? {
            good += 1;
            progress.tick(good, value, &number);
            if limit == Some(good) {
                break;
            }
        }
    }

    info!(%good, "brute force finished");
    Ok(good)
}

/// Rate-limited progress reporting for long brute-force runs.
#[derive(Debug)]
pub struct Progress {
    total: u128,
    every: Duration,
    started: Instant,
    last: Instant,
}

impl Progress {
    pub fn new(total: u128, every: Duration) -> Self {
        let now = Instant::now();
        Self {
            total,
            every,
            started: now,
            last: now,
        }
    }

    /// Share of the search space before `position`.
    pub fn fraction(&self, position: u128) -> f64 {
        if self.total == 0 {
            return 1.0;
        }
        position as f64 / self.total as f64
    }

    /// Projected total run time, if any progress has been made.
    pub fn estimate(&self, elapsed: Duration, fraction: f64) -> Option<Duration> {
        if fraction <= 0.0 {
            return None;
        }
        Duration::try_from_secs_f64(elapsed.as_secs_f64() / fraction).ok()
    }

    pub fn tick(&mut self, good: u128, position: u128, number: &str) {
        if self.last.elapsed() < self.every {
            return;
        }
        self.last = Instant::now();

        let fraction = self.fraction(position);
        let elapsed = self.started.elapsed();
        let estimated = self.estimate(elapsed, fraction);
        info!(
            %good,
            number,
            percent = fraction * 100.0,
            ?elapsed,
            ?estimated,
            "brute force progress"
        );
    }
}
