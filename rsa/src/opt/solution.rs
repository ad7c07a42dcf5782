use std::time::Duration;

use diskpack::entities::{AttemptHistogram, Sheet};
use diskpack::geometry::primitives::Disk;
use serde::{Deserialize, Serialize};

/// Fate of a single candidate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CandidateOutcome {
    /// Placed after `n_rejections` overlapping positions
    Accepted { diameter: f64, n_rejections: usize },
    /// Abandoned after all attempts overlapped
    Skipped { diameter: f64 },
}

impl CandidateOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, CandidateOutcome::Accepted { .. })
    }

    pub fn diameter(&self) -> f64 {
        match *self {
            CandidateOutcome::Accepted { diameter, .. } | CandidateOutcome::Skipped { diameter } => {
                diameter
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    CriterionMet,
    CandidatesExhausted,
    CandidateLimitReached,
}

/// Result of a finished run
#[derive(Debug, Clone)]
pub struct RSASolution {
    pub sheet: Sheet,
    /// Accepted disks, in acceptance order
    pub disks: Vec<Disk>,
    pub attempt_histogram: AttemptHistogram,
    pub n_skips: usize,
    pub n_candidates: usize,
    /// Total number of sampled positions, over all candidates
    pub n_samples: usize,
    /// One entry per drawn candidate, in draw order
    pub outcomes: Vec<CandidateOutcome>,
    pub stop_reason: StopReason,
    /// Fraction of the sheet covered by the disks
    pub efficiency: f64,
    pub run_time: Duration,
}

impl RSASolution {
    /// Number of skips after each candidate, in draw order
    pub fn skip_trajectory(&self) -> Vec<usize> {
        self.outcomes
            .iter()
            .scan(0, |n_skips, o| {
                if !o.is_accepted() {
                    *n_skips += 1;
                }
                Some(*n_skips)
            })
            .collect()
    }
}
