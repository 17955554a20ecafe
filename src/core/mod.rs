pub mod estimator;
pub mod tariff;
pub mod units;
