use diskpack::util::assertions::{all_contained, no_overlap};
use log::error;

use crate::opt::RSASolution;

/// Cross-checks the disks, the histogram, the counters and the outcome trace of a finished run.
pub fn solution_is_consistent(sol: &RSASolution) -> bool {
    let n_accepted = sol.outcomes.iter().filter(|o| o.is_accepted()).count();
    let n_skipped = sol.outcomes.len() - n_accepted;

    if sol.attempt_histogram.total() != sol.disks.len() {
        error!(
            "attempt histogram holds {} disks, solution has {}",
            sol.attempt_histogram.total(),
            sol.disks.len()
        );
        return false;
    }
    if n_accepted != sol.disks.len() || n_skipped != sol.n_skips {
        error!(
            "outcome trace ({n_accepted} accepted, {n_skipped} skipped) does not match solution ({} disks, {} skips)",
            sol.disks.len(),
            sol.n_skips
        );
        return false;
    }
    if sol.outcomes.len() != sol.n_candidates {
        error!("{} outcomes for {} candidates", sol.outcomes.len(), sol.n_candidates);
        return false;
    }
    let radii_match = sol
        .outcomes
        .iter()
        .filter(|o| o.is_accepted())
        .zip(sol.disks.iter())
        .all(|(o, d)| o.diameter() / 2.0 == d.radius);

    radii_match && no_overlap(&sol.disks) && all_contained(&sol.disks, &sol.sheet)
}
