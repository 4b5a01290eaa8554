//! Candidate selection policies.
//!
//! - **Best-Fit**: the minimum-score candidate; ties go to the lowest
//!   classroom id.
//! - **RCL**: a Restricted Candidate List holds every candidate whose score
//!   is within `α` of the score range above the minimum; one member is drawn
//!   uniformly at random.
//!
//! # Reference
//! Feo & Resende (1995), "Greedy Randomized Adaptive Search Procedures"

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use super::candidate::{Candidate, Score, BEST_FIT_PREFERENCE_PENALTY, RCL_PREFERENCE_PENALTY};

/// How the RCL random generator is seeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedMode {
    /// Fixed seed: identical instance, α and seed give identical output.
    Reproducible(u64),
    /// Seed drawn from OS entropy for every run.
    NonReproducible,
}

impl From<u64> for SeedMode {
    /// `0` requests entropy seeding; any other value is a fixed seed.
    fn from(seed: u64) -> Self {
        if seed == 0 {
            Self::NonReproducible
        } else {
            Self::Reproducible(seed)
        }
    }
}

impl SeedMode {
    /// Creates the generator for one run.
    pub fn rng(&self) -> SmallRng {
        match *self {
            Self::Reproducible(seed) => SmallRng::seed_from_u64(seed),
            Self::NonReproducible => {
                let seed: u64 = rand::random();
                info!(seed, "seeding RCL generator from entropy");
                SmallRng::seed_from_u64(seed)
            }
        }
    }
}

/// Strategy that picks one classroom out of a candidate list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SelectionPolicy {
    /// Deterministic minimum-score choice.
    BestFit,
    /// Randomized choice from the restricted candidate list.
    Rcl {
        /// RCL width in `[0, 1]`.
        alpha: f64,
        /// Generator seeding.
        seed: SeedMode,
    },
}

impl SelectionPolicy {
    /// RCL policy. `alpha` is clamped to `[0, 1]`; NaN becomes 0.
    pub fn rcl(alpha: f64, seed: impl Into<SeedMode>) -> Self {
        Self::Rcl {
            alpha: clamp_alpha(alpha),
            seed: seed.into(),
        }
    }

    /// Short policy name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::BestFit => "best-fit",
            Self::Rcl { .. } => "rcl",
        }
    }

    /// Preference penalty the policy runs with unless overridden.
    pub fn default_preference_penalty(&self) -> Score {
        match self {
            Self::BestFit => BEST_FIT_PREFERENCE_PENALTY,
            Self::Rcl { .. } => RCL_PREFERENCE_PENALTY,
        }
    }

    /// Per-run selection state (owns the generator for RCL).
    pub(crate) fn selector(&self) -> Selector {
        match *self {
            Self::BestFit => Selector::BestFit,
            Self::Rcl { alpha, seed } => Selector::Rcl {
                alpha,
                rng: seed.rng(),
            },
        }
    }
}

/// Runtime counterpart of [`SelectionPolicy`].
#[derive(Debug)]
pub(crate) enum Selector {
    BestFit,
    Rcl { alpha: f64, rng: SmallRng },
}

impl Selector {
    /// Picks one candidate, or `None` when `candidates` is empty.
    pub(crate) fn select<'c>(&mut self, candidates: &'c [Candidate]) -> Option<&'c Candidate> {
        match self {
            Self::BestFit => best_fit(candidates),
            Self::Rcl { alpha, rng } => {
                let rcl = restricted_candidates(candidates, *alpha);
                match rcl.len() {
                    0 => None,
                    1 => Some(rcl[0]),
                    n => Some(rcl[rng.random_range(0..n)]),
                }
            }
        }
    }
}

/// Clamps `alpha` into `[0, 1]`.
pub fn clamp_alpha(alpha: f64) -> f64 {
    if alpha.is_nan() {
        0.0
    } else {
        alpha.clamp(0.0, 1.0)
    }
}

/// Minimum-score candidate, first in list order on ties.
pub fn best_fit(candidates: &[Candidate]) -> Option<&Candidate> {
    candidates.iter().min_by_key(|c| c.score)
}

/// RCL quality threshold: `min + α·(max − min)`, rounded half up.
pub fn rcl_threshold(min_score: Score, max_score: Score, alpha: f64) -> Score {
    if max_score <= min_score {
        return min_score;
    }
    let span = (max_score - min_score) as f64;
    let offset = (clamp_alpha(alpha) * span + 0.5).floor() as Score;
    min_score.saturating_add(offset).min(max_score)
}

/// Builds the restricted candidate list.
///
/// Returns every candidate with `score ≤ threshold`, in list order. With
/// `alpha == 0` the list is the best-fit singleton.
pub fn restricted_candidates(candidates: &[Candidate], alpha: f64) -> Vec<&Candidate> {
    let Some(best) = best_fit(candidates) else {
        return Vec::new();
    };
    if clamp_alpha(alpha) == 0.0 {
        return vec![best];
    }

    let max_score = candidates.iter().map(|c| c.score).max().unwrap_or(best.score);
    let threshold = rcl_threshold(best.score, max_score, alpha);
    let rcl: Vec<&Candidate> = candidates.iter().filter(|c| c.score <= threshold).collect();
    if rcl.is_empty() {
        vec![best]
    } else {
        rcl
    }
}
