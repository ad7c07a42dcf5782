use anyhow::Result;
use diskpack::ensure_param;
use log::info;
use rayon::prelude::*;
use thousands::Separable;

use crate::config::RSAConfig;
use crate::opt::{self, RSASolution};

/// Performs `n_runs` independent runs in parallel.
///
/// Run `i` uses seed `prng_seed + i` (or OS entropy if no seed is configured).
/// Solutions are returned in run order. Fails if any of the runs fails.
pub fn run_batch(config: &RSAConfig, n_runs: usize) -> Result<Vec<RSASolution>> {
    config.validate()?;
    ensure_param!(n_runs > 0, "n_runs", "at least one run is required");
    info!(
        "[BATCH] starting {} runs on {} threads",
        n_runs.separate_with_commas(),
        rayon::current_num_threads()
    );

    let solutions = (0..n_runs)
        .into_par_iter()
        .map(|i| {
            let run_config = RSAConfig {
                prng_seed: config.prng_seed.map(|s| s.wrapping_add(i as u64)),
                ..*config
            };
            opt::run(&run_config)
        })
        .collect::<Result<Vec<_>>>()?;

    let (min, max) = solutions
        .iter()
        .map(|s| s.efficiency)
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), e| {
            (lo.min(e), hi.max(e))
        });
    let mean = solutions.iter().map(|s| s.efficiency).sum::<f64>() / solutions.len() as f64;
    info!(
        "[BATCH] {} runs finished, density min/mean/max: {:.3}%/{:.3}%/{:.3}%",
        solutions.len(),
        min * 100.0,
        mean * 100.0,
        max * 100.0
    );
    Ok(solutions)
}
