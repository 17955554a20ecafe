use crate::core::units::{daily_to_monthly, MONTHS_PER_YEAR};
use serde::Serialize;

/// Cost figures derived from a daily consumption total and a tariff rate.
/// Derived only when a rate is supplied; the rate itself is any non-negative
/// float, with range clamping left to the input surface.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CostEstimate {
    pub daily_cost: f64,
    pub monthly_cost: f64,
    pub yearly_cost: f64,
}

impl CostEstimate {
    pub(crate) fn from_daily_consumption(daily_kwh: f64, rate_per_kwh: f64) -> Self {
        let daily_cost = daily_kwh * rate_per_kwh;
        let monthly_cost = daily_to_monthly(daily_cost);
        let yearly_cost = monthly_cost * MONTHS_PER_YEAR as f64;
        Self {
            daily_cost,
            monthly_cost,
            yearly_cost,
        }
    }
}
