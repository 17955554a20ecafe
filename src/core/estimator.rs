use crate::core::tariff::CostEstimate;
use crate::core::units::daily_to_monthly;
use crate::errors::EstimateCoreError;
use crate::input::{AccommodationType, HouseholdProfile};
use indexmap::IndexMap;
use serde::Serialize;
use strum_macros::{Display, EnumIter};

/// This module implements the estimator itself: a pure function from a
/// household profile (plus an optional tariff rate) to an energy estimate.
/// No I/O, no randomness, no state between calls.

/// Daily consumption added per appliance present in the household, in kWh.
pub const APPLIANCE_DAILY_KWH: f64 = 3.0;

/// Fixed seasonal multipliers applied to the daily baseline, January first.
/// These are a deterministic scaling, not a forecast.
pub const SEASONAL_FACTORS: [f64; 12] = [
    0.9, 0.9, 1.0, 1.2, 1.4, 1.5, 1.5, 1.4, 1.2, 1.0, 0.9, 0.9,
];

#[derive(Clone, Copy, Debug, Display, EnumIter, Eq, Hash, PartialEq, Serialize)]
pub enum EndUseCategory {
    Base,
    #[serde(rename = "AC")]
    #[strum(serialize = "AC")]
    AirConditioning,
    Fridge,
    WashingMachine,
}

/// The derived output of one evaluation. Recomputed from scratch on every
/// input change; never mutated or persisted.
#[derive(Clone, Debug, Serialize)]
pub struct EnergyEstimate {
    pub daily_kwh: f64,
    /// Per-category daily consumption. Zero-valued entries are kept here;
    /// the presentation layer may filter them out.
    pub breakdown: IndexMap<EndUseCategory, f64>,
    /// One entry per calendar month, January first.
    pub monthly_projection_kwh: [f64; 12],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub costs: Option<CostEstimate>,
}

/// Evaluate the estimate for a profile, deriving cost figures when a tariff
/// rate is given. The rate is used as-is; range clamping belongs to the
/// input surface, not here.
pub fn estimate(
    profile: &HouseholdProfile,
    rate_per_kwh: Option<f64>,
) -> Result<EnergyEstimate, EstimateCoreError> {
    let base = base_daily_kwh(&profile.accommodation_type)?;
    let appliance_addend = |present: bool| if present { APPLIANCE_DAILY_KWH } else { 0. };
    let breakdown = IndexMap::from([
        (EndUseCategory::Base, base),
        (EndUseCategory::AirConditioning, appliance_addend(profile.has_ac)),
        (EndUseCategory::Fridge, appliance_addend(profile.has_fridge)),
        (
            EndUseCategory::WashingMachine,
            appliance_addend(profile.has_washing_machine),
        ),
    ]);
    let daily_kwh = breakdown.values().sum::<f64>();
    let monthly_projection_kwh = SEASONAL_FACTORS.map(|factor| daily_to_monthly(daily_kwh) * factor);
    let costs = rate_per_kwh.map(|rate| CostEstimate::from_daily_consumption(daily_kwh, rate));

    Ok(EnergyEstimate {
        daily_kwh,
        breakdown,
        monthly_projection_kwh,
        costs,
    })
}

/// Base daily consumption for the accommodation type, from the fixed lookup
/// table. The catch-all variant is the one failure mode of the calculation.
fn base_daily_kwh(accommodation_type: &AccommodationType) -> Result<f64, EstimateCoreError> {
    Ok(match accommodation_type {
        AccommodationType::OneBhk => 2.4,
        AccommodationType::TwoBhk => 3.6,
        AccommodationType::ThreeBhk => 4.8,
        AccommodationType::Unrecognised(value) => {
            return Err(EstimateCoreError::InvalidInput(value.clone()))
        }
    })
}
