use anyhow::Result;
use diskpack::entities::Sheet;
use rand::SeedableRng;
use rand::prelude::SmallRng;

use crate::config::RSAConfig;

pub mod rsa_optimizer;
pub mod solution;
pub mod stop_criterion;

#[doc(inline)]
pub use rsa_optimizer::RSAOptimizer;
#[doc(inline)]
pub use solution::{CandidateOutcome, RSASolution, StopReason};

/// Samples a diameter pool and performs a single run, all from `config`.
///
/// The pool and the placement each get their own PRNG, both seeded with `prng_seed`.
pub fn run(config: &RSAConfig) -> Result<RSASolution> {
    config.validate()?;
    let sheet = Sheet::try_new(config.sheet_width, config.sheet_height)?;
    let (mut pool_rng, rng) = match config.prng_seed {
        Some(seed) => (SmallRng::seed_from_u64(seed), SmallRng::seed_from_u64(seed)),
        None => (SmallRng::from_os_rng(), SmallRng::from_os_rng()),
    };
    let pool = config.diameter_distribution.sample_pool(&mut pool_rng)?;
    RSAOptimizer::new(sheet, pool, *config, rng)?.solve()
}
