//! Uniform random pick over a pool of quotes.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog::Quote;
use crate::error::QuoteError;

pub(crate) const EMPTY_POOL: &str = "No quotes found for this category";

/// Pick one quote from `pool` with the thread-local RNG.
pub fn pick_random<'a>(pool: &[&'a Quote]) -> Result<&'a Quote, QuoteError> {
    pick_random_with(pool, &mut rand::thread_rng())
}

/// Pick one quote from `pool` with a caller-supplied RNG.
///
/// An empty pool is `NotFound`.
pub fn pick_random_with<'a, R: Rng + ?Sized>(
    pool: &[&'a Quote],
    rng: &mut R,
) -> Result<&'a Quote, QuoteError> {
    pool.choose(rng)
        .copied()
        .ok_or_else(|| QuoteError::NotFound(EMPTY_POOL.to_string()))
}
