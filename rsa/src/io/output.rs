use anyhow::Result;
use diskpack::io::export::export_packing;
use diskpack::io::ext_repr::ExtPacking;
use serde::{Deserialize, Serialize};

use crate::config::RSAConfig;
use crate::opt::{CandidateOutcome, RSASolution, StopReason};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RSAOutput {
    pub solution: ExtRSASolution,
    pub config: RSAConfig,
}

/// External representation of a [`RSASolution`]
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtRSASolution {
    #[serde(flatten)]
    pub packing: ExtPacking,
    pub n_skips: usize,
    pub n_candidates: usize,
    pub n_samples: usize,
    pub stop_reason: StopReason,
    pub outcomes: Vec<CandidateOutcome>,
    pub run_time_ms: u64,
}

pub fn export_solution(sol: &RSASolution, diameter_bin_width: f64) -> Result<ExtRSASolution> {
    Ok(ExtRSASolution {
        packing: export_packing(
            &sol.sheet,
            &sol.disks,
            &sol.attempt_histogram,
            diameter_bin_width,
        )?,
        n_skips: sol.n_skips,
        n_candidates: sol.n_candidates,
        n_samples: sol.n_samples,
        stop_reason: sol.stop_reason,
        outcomes: sol.outcomes.clone(),
        run_time_ms: sol.run_time.as_millis() as u64,
    })
}
