use anyhow::Result;
use diskpack::ensure_param;
use diskpack::util::{CDEConfig, SpatialIndexConfig};
use serde::{Deserialize, Serialize};

use crate::opt::stop_criterion::StopCriterion;
use crate::samplers::diameter_sampler::{DiameterDistribution, DiameterDraw};
use crate::samplers::uniform_rect_sampler::CoordinateSnap;

/// Configuration of a Random Sequential Addition run
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct RSAConfig {
    pub sheet_width: f64,
    pub sheet_height: f64,
    /// Distribution from which the pool of candidate diameters is sampled
    pub diameter_distribution: DiameterDistribution,
    /// How candidates are drawn from the pool
    #[serde(default)]
    pub diameter_draw: DiameterDraw,
    /// Maximum number of positions tried for a single candidate before it is skipped
    pub max_attempts: usize,
    /// When the run is finished
    pub stop_criterion: StopCriterion,
    /// Grid onto which sampled centers are snapped
    #[serde(default)]
    pub coordinate_snap: CoordinateSnap,
    /// Configuration of the overlap checks
    #[serde(default)]
    pub cde_config: CDEConfig,
    /// Seed for the PRNG. If undefined, the algorithm will run in non-deterministic mode using entropy
    pub prng_seed: Option<u64>,
    /// Limits the number of candidates drawn. If undefined, only the stop criterion ends the run
    #[serde(default)]
    pub max_candidates: Option<usize>,
    /// Number of independent runs, executed in parallel with consecutive seeds
    #[serde(default = "default_n_runs")]
    pub n_runs: usize,
    /// Width of the bins of the exported diameter histogram
    #[serde(default = "default_diameter_bin_width")]
    pub diameter_bin_width: f64,
}

fn default_n_runs() -> usize {
    1
}

fn default_diameter_bin_width() -> f64 {
    1.0
}

impl RSAConfig {
    /// Checks all parameters which can be verified without sampling.
    pub fn validate(&self) -> Result<()> {
        self.diameter_distribution.validate()?;
        self.stop_criterion.validate()?;
        ensure_param!(
            self.max_attempts > 0,
            "max_attempts",
            "at least one attempt per candidate is required"
        );
        ensure_param!(self.n_runs > 0, "n_runs", "at least one run is required");
        ensure_param!(
            self.diameter_bin_width.is_finite() && self.diameter_bin_width > 0.0,
            "diameter_bin_width",
            "bin width must be positive, got {}",
            self.diameter_bin_width
        );
        ensure_param!(
            self.stop_criterion.is_bounded() || self.has_finite_candidates(),
            "stop_criterion",
            "{:?} never ends a run with an endless stream of candidates, use a sequential draw or set max_candidates",
            self.stop_criterion
        );
        Ok(())
    }

    /// Whether the stream of candidates ends on its own
    pub fn has_finite_candidates(&self) -> bool {
        self.diameter_draw == DiameterDraw::Sequential || self.max_candidates.is_some()
    }
}

impl Default for RSAConfig {
    fn default() -> Self {
        Self {
            sheet_width: 200.0,
            sheet_height: 200.0,
            diameter_distribution: DiameterDistribution::default(),
            diameter_draw: DiameterDraw::Random,
            max_attempts: 1000,
            stop_criterion: StopCriterion::SkipRatio { threshold_pct: 1.0 },
            coordinate_snap: CoordinateSnap::None,
            cde_config: CDEConfig {
                spatial_index: SpatialIndexConfig::KdTree,
            },
            prng_seed: Some(42),
            max_candidates: None,
            n_runs: 1,
            diameter_bin_width: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diskpack::InvalidParameter;

    #[test]
    fn default_config_is_valid() {
        assert!(RSAConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_attempts_is_invalid() {
        let config = RSAConfig {
            max_attempts: 0,
            ..RSAConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.downcast_ref::<InvalidParameter>().is_some());
    }

    #[test]
    fn unbounded_run_is_invalid() {
        let mut config = RSAConfig {
            stop_criterion: StopCriterion::SkipBudget { total_skips: 0 },
            ..RSAConfig::default()
        };
        assert!(config.validate().is_err());
        config.diameter_draw = DiameterDraw::Sequential;
        assert!(config.validate().is_ok());
        config.diameter_draw = DiameterDraw::Random;
        config.max_candidates = Some(100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn minimal_json_config() {
        let json = r#"{
            "sheet_width": 100.0,
            "sheet_height": 50.0,
            "diameter_distribution": { "mean": 8.0, "std_dev": 1.5, "n_samples": 500 },
            "max_attempts": 200,
            "stop_criterion": { "mode": "skip_budget", "total_skips": 25 },
            "prng_seed": 7
        }"#;
        let config: RSAConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.stop_criterion, StopCriterion::SkipBudget { total_skips: 25 });
        assert_eq!(config.cde_config.spatial_index, SpatialIndexConfig::KdTree);
        assert_eq!(config.diameter_draw, DiameterDraw::Random);
        assert_eq!(config.n_runs, 1);
        assert!(config.validate().is_ok());

        let round_trip: RSAConfig =
            serde_json::from_str(&serde_json::to_string(&config).unwrap()).unwrap();
        assert_eq!(round_trip, config);
    }
}
