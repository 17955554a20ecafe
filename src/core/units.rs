pub const DAYS_PER_BILLING_MONTH: u32 = 30;
pub const MONTHS_PER_YEAR: u32 = 12;

pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Scale a per-day figure to the uniform 30-day billing month used
/// throughout the model (real month lengths are deliberately not used).
pub fn daily_to_monthly(daily: f64) -> f64 {
    daily * DAYS_PER_BILLING_MONTH as f64
}
