use anyhow::Result;
use diskpack::ensure_param;
use serde::{Deserialize, Serialize};

/// Decides when a run is finished. Evaluated after every skipped candidate.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum StopCriterion {
    /// Finished as soon as `total_skips` candidates have been skipped.
    /// A budget of 0 is never reached: the run only ends when the candidates run out.
    SkipBudget { total_skips: usize },
    /// Finished as soon as the number of skips, as a percentage of the accepted disks, exceeds `threshold_pct`.
    /// Not evaluated while no disk has been accepted.
    SkipRatio { threshold_pct: f64 },
}

impl StopCriterion {
    pub fn validate(&self) -> Result<()> {
        if let StopCriterion::SkipRatio { threshold_pct } = self {
            ensure_param!(
                threshold_pct.is_finite() && *threshold_pct >= 0.0,
                "threshold_pct",
                "skip ratio threshold must be a non-negative percentage, got {threshold_pct}"
            );
        }
        Ok(())
    }

    pub fn is_met(&self, n_skips: usize, n_accepted: usize) -> bool {
        match *self {
            StopCriterion::SkipBudget { total_skips } => total_skips > 0 && n_skips >= total_skips,
            StopCriterion::SkipRatio { threshold_pct } => match n_accepted {
                0 => false,
                _ => (n_skips as f64 * 100.0) / n_accepted as f64 > threshold_pct,
            },
        }
    }

    /// Whether the criterion can end a run on its own, without the candidates running out.
    pub fn is_bounded(&self) -> bool {
        match *self {
            StopCriterion::SkipBudget { total_skips } => total_skips > 0,
            StopCriterion::SkipRatio { .. } => true,
        }
    }
}

impl Default for StopCriterion {
    fn default() -> Self {
        StopCriterion::SkipRatio { threshold_pct: 1.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skip_budget_is_reached_exactly() {
        let c = StopCriterion::SkipBudget { total_skips: 3 };
        assert!(!c.is_met(2, 100));
        assert!(c.is_met(3, 100));
        assert!(c.is_met(3, 0));
    }

    #[test]
    fn zero_skip_budget_never_fires() {
        let c = StopCriterion::SkipBudget { total_skips: 0 };
        assert!(!c.is_met(0, 0));
        assert!(!c.is_met(10, 5));
        assert!(!c.is_bounded());
    }

    #[test]
    fn skip_ratio_must_be_exceeded() {
        let c = StopCriterion::SkipRatio { threshold_pct: 1.0 };
        //exactly 1%
        assert!(!c.is_met(1, 100));
        assert!(c.is_met(2, 100));
        assert!(c.is_met(1, 99));
    }

    #[test]
    fn skip_ratio_without_disks_is_not_evaluated() {
        let c = StopCriterion::SkipRatio { threshold_pct: 1.0 };
        assert!(!c.is_met(1, 0));
        assert!(!c.is_met(1000, 0));
    }

    #[test]
    fn negative_threshold_is_invalid() {
        assert!(StopCriterion::SkipRatio { threshold_pct: -1.0 }.validate().is_err());
        assert!(StopCriterion::default().validate().is_ok());
    }
}
