//! Investment Analytics
//!
//! Rent, yield, and appreciation figures derived from a point estimate.
//!
//! Rent follows the amortization convention: a property is assumed to pay
//! back its price in rent over `horizon_years`, so
//!
//! ```text
//! monthly_rent     = estimate / (horizon_years * 12)
//! annual_yield_pct = monthly_rent * 12 / estimate * 100
//! value[y]         = estimate * (1 + appreciation_pct / 100)^y,  y = 1..=10
//! ```

use crate::error::{InvestError, Result};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Number of yearly points in a projection.
pub const PROJECTION_YEARS: u32 = 10;

/// Accepted amortization horizons, in years.
pub const HORIZON_RANGE: RangeInclusive<u32> = 12..=30;

/// Accepted yearly appreciation rates, in percent.
pub const APPRECIATION_RANGE: RangeInclusive<f64> = 10.0..=100.0;

/// User-facing investment assumptions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InvestmentAssumptions {
    /// Years of rent that repay the purchase price
    pub horizon_years: u32,
    /// Expected yearly appreciation, in percent
    pub appreciation_pct: f64,
}

impl Default for InvestmentAssumptions {
    fn default() -> Self {
        Self {
            horizon_years: 20,
            appreciation_pct: 40.0,
        }
    }
}

impl InvestmentAssumptions {
    /// Create assumptions within the accepted ranges.
    ///
    /// # Errors
    ///
    /// [`InvestError::InvalidAssumption`] when the horizon is outside
    /// 12–30 years or the appreciation outside 10–100 %.
    pub fn new(horizon_years: u32, appreciation_pct: f64) -> Result<Self> {
        if !HORIZON_RANGE.contains(&horizon_years) {
            return Err(InvestError::InvalidAssumption(format!(
                "horizon of {horizon_years} years is outside {}..={}",
                HORIZON_RANGE.start(),
                HORIZON_RANGE.end()
            )));
        }
        if !APPRECIATION_RANGE.contains(&appreciation_pct) {
            return Err(InvestError::InvalidAssumption(format!(
                "appreciation of {appreciation_pct}% is outside {}..={}",
                APPRECIATION_RANGE.start(),
                APPRECIATION_RANGE.end()
            )));
        }
        Ok(Self {
            horizon_years,
            appreciation_pct,
        })
    }

    /// Project `estimate` under these assumptions.
    pub fn project(&self, estimate: f64) -> Result<InvestmentProjection> {
        project(estimate, self.horizon_years, self.appreciation_pct)
    }
}

/// Projected value at the end of a year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    /// Years from today, starting at 1
    pub year: u32,
    /// Projected value
    pub value: f64,
}

/// Derived investment figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentProjection {
    /// Estimate the figures are derived from
    pub estimate: f64,
    /// Amortization horizon used
    pub horizon_years: u32,
    /// Appreciation rate used, in percent
    pub appreciation_pct: f64,
    /// Implied monthly rent
    pub monthly_rent: f64,
    /// Gross rental yield, in percent
    pub annual_yield_pct: f64,
    /// Values for years 1 through 10
    pub points: Vec<ProjectionPoint>,
}

impl InvestmentProjection {
    /// Projected value after `year` years, if within the projection.
    pub fn value_at(&self, year: u32) -> Option<f64> {
        self.points.iter().find(|p| p.year == year).map(|p| p.value)
    }

    /// Total appreciation over the projection, as a multiple of the estimate.
    pub fn growth_multiple(&self) -> f64 {
        self.points
            .last()
            .map_or(1.0, |p| p.value / self.estimate)
    }
}

/// Derive rent, yield, and a 10-year value projection from an estimate.
///
/// No rounding is applied; callers format for display.
///
/// # Errors
///
/// [`InvestError::InvalidAssumption`] when `horizon_years` is zero, when
/// `estimate` is not a positive finite number, or when `appreciation_pct` is
/// not finite or is at or below −100 %.
pub fn project(
    estimate: f64,
    horizon_years: u32,
    appreciation_pct: f64,
) -> Result<InvestmentProjection> {
    if horizon_years == 0 {
        return Err(InvestError::InvalidAssumption(
            "amortization horizon must be at least one year".to_string(),
        ));
    }
    if !estimate.is_finite() || estimate <= 0.0 {
        return Err(InvestError::InvalidAssumption(format!(
            "estimate must be positive, got {estimate}"
        )));
    }
    if !appreciation_pct.is_finite() || appreciation_pct <= -100.0 {
        return Err(InvestError::InvalidAssumption(format!(
            "appreciation must be above -100%, got {appreciation_pct}"
        )));
    }

    let monthly_rent = estimate / (f64::from(horizon_years) * 12.0);
    let annual_yield_pct = monthly_rent * 12.0 / estimate * 100.0;

    let growth = 1.0 + appreciation_pct / 100.0;
    let points = (1..=PROJECTION_YEARS)
        .map(|year| ProjectionPoint {
            year,
            value: estimate * growth.powi(year as i32),
        })
        .collect();

    Ok(InvestmentProjection {
        estimate,
        horizon_years,
        appreciation_pct,
        monthly_rent,
        annual_yield_pct,
        points,
    })
}
