use std::time::Instant;

use anyhow::Result;
use diskpack::ensure_param;
use diskpack::entities::{AttemptHistogram, DiskLayout, Sheet};
use diskpack::geometry::primitives::Disk;
use log::{debug, info};
use rand::prelude::SmallRng;
use thousands::Separable;

use crate::config::RSAConfig;
use crate::opt::solution::{CandidateOutcome, RSASolution, StopReason};
use crate::opt::stop_criterion::StopCriterion;
use crate::samplers::diameter_sampler::{DiameterDraw, DiameterPool};
use crate::samplers::uniform_rect_sampler::UniformRectSampler;
use crate::util::assertions;

/// Random Sequential Addition (RSA) optimizer.
///
/// Candidates are drawn one by one from the diameter pool. Each candidate gets up to `max_attempts`
/// uniformly sampled positions. The first position free of overlap is accepted for good, if none is
/// found the candidate is skipped.
pub struct RSAOptimizer {
    pub pool: DiameterPool,
    pub config: RSAConfig,
    pub layout: DiskLayout,
    pub attempt_histogram: AttemptHistogram,
    /// SmallRng is a fast, non-cryptographic PRNG <https://rust-random.github.io/book/guide-rngs.html>
    pub rng: SmallRng,
    pub n_skips: usize,
    pub n_candidates: usize,
    pub sample_counter: usize,
    outcomes: Vec<CandidateOutcome>,
}

impl RSAOptimizer {
    /// Validates all parameters, fails before any placement is attempted.
    pub fn new(sheet: Sheet, pool: DiameterPool, config: RSAConfig, rng: SmallRng) -> Result<Self> {
        config.validate()?;
        if let StopCriterion::SkipRatio { .. } = config.stop_criterion {
            ensure_param!(
                config.has_finite_candidates()
                    || pool
                        .diameters()
                        .iter()
                        .any(|d| sheet.center_region(d / 2.0).is_some()),
                "diameter_pool",
                "no diameter in the pool fits in a {}x{} sheet, the skip ratio can never be evaluated",
                sheet.width,
                sheet.height
            );
        }
        let layout = DiskLayout::new(sheet, config.cde_config, pool.max_diameter())?;

        Ok(Self {
            pool,
            config,
            layout,
            attempt_histogram: AttemptHistogram::new(),
            rng,
            n_skips: 0,
            n_candidates: 0,
            sample_counter: 0,
            outcomes: vec![],
        })
    }

    pub fn solve(mut self) -> Result<RSASolution> {
        let start = Instant::now();
        info!(
            "[RSA] starting run on a {}x{} sheet, {} diameters in pool ({:?} draw), stop criterion: {:?}",
            self.layout.sheet().width,
            self.layout.sheet().height,
            self.pool.diameters().len().separate_with_commas(),
            self.config.diameter_draw,
            self.config.stop_criterion
        );

        let stop_reason = loop {
            if self
                .config
                .max_candidates
                .is_some_and(|limit| self.n_candidates >= limit)
            {
                break StopReason::CandidateLimitReached;
            }
            let Some(diameter) = self.next_diameter() else {
                break StopReason::CandidatesExhausted;
            };
            self.n_candidates += 1;

            let outcome = self.place_candidate(diameter);
            self.outcomes.push(outcome);

            if let CandidateOutcome::Skipped { .. } = outcome {
                self.n_skips += 1;
                debug!(
                    "[RSA] skipped candidate {} with diameter {diameter} after {} attempts ({} skips, {} disks)",
                    self.n_candidates, self.config.max_attempts, self.n_skips, self.layout.len()
                );
                if self
                    .config
                    .stop_criterion
                    .is_met(self.n_skips, self.layout.len())
                {
                    break StopReason::CriterionMet;
                }
            }
        };

        let run_time = start.elapsed();
        info!(
            "[RSA] run finished ({stop_reason:?}) in {:.3}ms ({} candidates, {} samples)",
            run_time.as_secs_f64() * 1000.0,
            self.n_candidates.separate_with_commas(),
            self.sample_counter.separate_with_commas()
        );

        let efficiency = self.layout.efficiency()?;
        info!(
            "[RSA] solution contains {} disks and {} skips with a density of {:.3}%",
            self.layout.len().separate_with_commas(),
            self.n_skips.separate_with_commas(),
            efficiency * 100.0
        );

        let solution = RSASolution {
            sheet: *self.layout.sheet(),
            disks: self.layout.into_disks(),
            attempt_histogram: self.attempt_histogram,
            n_skips: self.n_skips,
            n_candidates: self.n_candidates,
            n_samples: self.sample_counter,
            outcomes: self.outcomes,
            stop_reason,
            efficiency,
            run_time,
        };
        debug_assert!(assertions::solution_is_consistent(&solution));
        Ok(solution)
    }

    /// Next candidate diameter, `None` once the stream of candidates has ended.
    fn next_diameter(&mut self) -> Option<f64> {
        match self.config.diameter_draw {
            DiameterDraw::Random => Some(self.pool.draw(&mut self.rng)),
            DiameterDraw::Sequential => self.pool.get(self.n_candidates),
        }
    }

    /// Tries up to `max_attempts` positions for a disk with `diameter` and accepts the first free one.
    pub fn place_candidate(&mut self, diameter: f64) -> CandidateOutcome {
        let radius = diameter / 2.0;
        let Some(sampler) =
            UniformRectSampler::new(self.layout.sheet(), radius, self.config.coordinate_snap)
        else {
            //too large for the sheet, no position can be valid
            return CandidateOutcome::Skipped { diameter };
        };

        for n_rejections in 0..self.config.max_attempts {
            let center = sampler.sample(&mut self.rng);
            self.sample_counter += 1;
            let disk = Disk::new(center, radius);
            if !self.layout.overlaps(&disk) {
                let idx = self.layout.place(disk);
                self.attempt_histogram.record(n_rejections);
                debug!("[RSA] placed disk {idx} [{disk}] after {n_rejections} rejections");
                return CandidateOutcome::Accepted {
                    diameter,
                    n_rejections,
                };
            }
        }
        CandidateOutcome::Skipped { diameter }
    }
}
