use anyhow::{Result, anyhow};
use diskpack::ensure_param;
use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

/// Normal distribution of diameters, discretized and optionally truncated.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct DiameterDistribution {
    pub mean: f64,
    pub std_dev: f64,
    /// Number of diameters drawn, before truncation
    pub n_samples: usize,
    #[serde(default)]
    pub discretization: Discretization,
    /// Diameters outside these bounds are discarded. If undefined, only non-positive diameters are discarded.
    #[serde(default)]
    pub bounds: Option<DiameterBounds>,
}

/// Inclusive range of accepted diameters
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct DiameterBounds {
    pub min: f64,
    pub max: f64,
}

/// Unit to which sampled diameters are discretized
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Discretization {
    /// Whole units, fractional part is truncated
    #[default]
    Integer,
    /// Rounded to one decimal
    Decimal,
    /// Left as sampled
    Continuous,
}

impl Discretization {
    pub fn apply(&self, d: f64) -> f64 {
        match self {
            Discretization::Integer => d.trunc(),
            Discretization::Decimal => (d * 10.0).round() / 10.0,
            Discretization::Continuous => d,
        }
    }
}

impl DiameterBounds {
    pub fn contains(&self, d: f64) -> bool {
        self.min <= d && d <= self.max
    }
}

impl DiameterDistribution {
    pub fn validate(&self) -> Result<()> {
        ensure_param!(
            self.std_dev.is_finite() && self.std_dev > 0.0,
            "std_dev",
            "standard deviation must be positive, got {}",
            self.std_dev
        );
        ensure_param!(
            self.mean.is_finite(),
            "mean",
            "mean must be finite, got {}",
            self.mean
        );
        ensure_param!(
            self.n_samples > 0,
            "n_samples",
            "at least one diameter must be sampled"
        );
        if let Some(DiameterBounds { min, max }) = self.bounds {
            ensure_param!(
                min.is_finite() && max.is_finite() && 0.0 < min && min <= max,
                "bounds",
                "diameter bounds must satisfy 0 < min <= max, got [{min}, {max}]"
            );
        }
        Ok(())
    }

    /// Draws `n_samples` discretized diameters, without truncation.
    pub fn sample(&self, rng: &mut impl Rng) -> Result<Vec<f64>> {
        self.validate()?;
        let normal = Normal::new(self.mean, self.std_dev).map_err(|e| anyhow!("{e}"))?;
        let diameters = normal
            .sample_iter(rng)
            .take(self.n_samples)
            .map(|d| self.discretization.apply(d))
            .collect();
        Ok(diameters)
    }

    /// Keeps only the positive diameters within the bounds (if any). Values are discarded, never clamped.
    pub fn truncate(&self, diameters: Vec<f64>) -> Vec<f64> {
        diameters
            .into_iter()
            .filter(|&d| d > 0.0)
            .filter(|&d| self.bounds.is_none_or(|b| b.contains(d)))
            .collect()
    }

    /// Samples, truncates and collects the diameters into a [`DiameterPool`].
    /// Fails if no sampled diameter survives the truncation.
    pub fn sample_pool(&self, rng: &mut impl Rng) -> Result<DiameterPool> {
        let sampled = self.sample(rng)?;
        let n_sampled = sampled.len();
        let pool = DiameterPool::try_new(self.truncate(sampled))?;
        log::debug!(
            "[SAMPLER] {}/{} diameters survived truncation, max diameter: {}",
            pool.diameters().len(),
            n_sampled,
            pool.max_diameter()
        );
        Ok(pool)
    }
}

impl Default for DiameterDistribution {
    fn default() -> Self {
        Self {
            mean: 10.0,
            std_dev: 2.0,
            n_samples: 10_000,
            discretization: Discretization::Integer,
            bounds: Some(DiameterBounds {
                min: 5.0,
                max: 15.0,
            }),
        }
    }
}

/// Non-empty set of usable diameters, from which candidates are drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct DiameterPool {
    diameters: Vec<f64>,
    max_diameter: f64,
}

impl DiameterPool {
    pub fn try_new(diameters: Vec<f64>) -> Result<Self> {
        ensure_param!(
            !diameters.is_empty(),
            "diameter_pool",
            "the diameter pool is empty"
        );
        ensure_param!(
            diameters.iter().all(|d| d.is_finite() && *d > 0.0),
            "diameter_pool",
            "all diameters must be positive and finite"
        );
        let max_diameter = diameters.iter().copied().fold(0.0, f64::max);
        Ok(Self {
            diameters,
            max_diameter,
        })
    }

    /// Draws a diameter uniformly at random, with replacement
    pub fn draw(&self, rng: &mut impl Rng) -> f64 {
        self.diameters[rng.random_range(0..self.diameters.len())]
    }

    pub fn get(&self, idx: usize) -> Option<f64> {
        self.diameters.get(idx).copied()
    }

    pub fn max_diameter(&self) -> f64 {
        self.max_diameter
    }

    pub fn diameters(&self) -> &[f64] {
        &self.diameters
    }
}

/// How candidate diameters are drawn from the [`DiameterPool`]
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DiameterDraw {
    /// Uniformly at random with replacement, an endless stream of candidates
    #[default]
    Random,
    /// Every diameter of the pool exactly once, in pool order
    Sequential,
}
