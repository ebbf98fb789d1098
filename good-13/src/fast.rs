use miette::Context;
use tracing::info;

use crate::{
    distribution::SumDistribution,
    error::GoodError,
    observer::{Observer, Silent, Traced},
    Params,
};

/// Number of (left, right) half pairs with equal digit sums: the sum of
/// every count squared.
pub fn balanced_halves(
    distribution: &SumDistribution,
    observer: &mut impl Observer,
) -> Result<u128, GoodError> {
    let squares = distribution
        .iter()
        .map(|(sum, count)| {
            let count = u128::from(count);
            count
                .checked_mul(count)
                .map(|square| (sum, square))
                .ok_or(GoodError::Overflow("squaring a sum count"))
        })
        .collect::<Result<Vec<_>, _>>()?;
    observer.squares(&squares);

    squares
        .iter()
        .try_fold(0u128, |acc, &(_, square)| acc.checked_add(square))
        .ok_or(GoodError::Overflow("summing balanced halves"))
}

/// Balanced halves times `base` choices for the free middle digit.
pub fn good_count(
    distribution: &SumDistribution,
    base: u32,
    observer: &mut impl Observer,
) -> Result<u128, GoodError> {
    balanced_halves(distribution, observer)?
        .checked_mul(u128::from(base))
        .ok_or(GoodError::Overflow("adding the middle digit"))
}

#[tracing::instrument(skip(observer))]
pub fn count(params: Params, observer: &mut impl Observer) -> Result<u128, GoodError> {
    let distribution = SumDistribution::convolve(params, observer)?;
    let good = good_count(&distribution, params.base, observer)?;
    info!(%good, "counted good numbers");
    Ok(good)
}

/// Counts good numbers of the given shape, dumping intermediate tables when
/// debug logging is on.
#[tracing::instrument]
pub fn process(params: Params) -> miette::Result<String> {
    let good = if tracing::enabled!(tracing::Level::DEBUG) {
        count(params, &mut Traced)
    } else {
        count(params, &mut Silent)
    }
    .context("count good numbers")?;

    Ok(good.to_string())
}
