use thiserror::Error;

use crate::ItemId;

pub const DEFAULT_OVERFETCH_FACTOR: f64 = 1.5;

const PERMILLE: usize = 1000;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    #[error("overfetch factor must be a finite number >= 1.0, got {0}")]
    InvalidOverfetchFactor(f64),
}

/// Picks how many leading ranked ids to fetch so that, after filtering,
/// `target` qualifying items are likely to remain.
///
/// The factor is held in thousandths so counts are exact integer ceilings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverfetchPlanner {
    factor_permille: usize,
}

impl Default for OverfetchPlanner {
    fn default() -> Self {
        Self {
            factor_permille: 1500,
        }
    }
}

impl OverfetchPlanner {
    pub fn new(factor: f64) -> Result<Self, PlanError> {
        if !factor.is_finite() || factor < 1.0 {
            return Err(PlanError::InvalidOverfetchFactor(factor));
        }
        // Precision beyond thousandths is rounded away.
        let factor_permille = (factor * PERMILLE as f64).round() as usize;
        Ok(Self { factor_permille })
    }

    /// Number of ids to fetch for `target` before bounding by list length.
    pub fn fetch_count(&self, target: usize) -> usize {
        target
            .saturating_mul(self.factor_permille)
            .div_ceil(PERMILLE)
    }

    /// Leading slice of `ranked`: `ceil(target * factor)` ids, or all of them.
    pub fn plan<'a>(&self, ranked: &'a [ItemId], target: usize) -> &'a [ItemId] {
        let count = self.fetch_count(target).min(ranked.len());
        &ranked[..count]
    }
}
