use serde::{Deserialize, Serialize};

/// Aggregated statistics for one calendar month.
///
/// Keyed by `"YYYY-MM"` in the state's stats map. Always rebuilt in full
/// from the record set and current settings — never patched incrementally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyStats {
    /// Sum of daily mileage over the month's records, in km
    pub total_mileage: f64,

    /// Liters purchased this month
    pub total_fuel: f64,

    /// Liters of fuel consumed this month — purchases, not theoretical burn
    pub fuel_consumption: f64,

    /// Average consumption, liters per 100 km. 0 when no mileage.
    pub average_consumption: f64,

    /// Projected tank level at the start of the month, liters
    pub start_fuel: f64,

    /// Projected tank level at the end of the month, liters
    pub end_fuel: f64,

    /// Liters left of the monthly fuel limit. Never negative.
    pub remaining_fuel_limit: f64,

    /// Total spend this month
    pub total_cost: f64,

    /// Average price per liter actually paid. Falls back to the
    /// default price when nothing was purchased.
    pub average_fuel_price: f64,

    /// Cost of driving 100 km this month. 0 when no mileage.
    pub cost_per_100km: f64,
}

/// Statistics for a single day — a fuel-balance projection anchored on
/// the settings' current tank level. Computed on demand, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyStats {
    /// Odometer at the start of the day, in km
    pub start_mileage: f64,

    /// Odometer at the end of the day, in km
    pub end_mileage: f64,

    /// Distance driven that day, in km
    pub daily_mileage: f64,

    /// Liters refueled that day
    pub fuel_added: f64,

    /// Projected tank level at the start of the day, liters. Never negative.
    pub start_fuel: f64,

    /// Projected tank level at the end of the day, liters. Never negative.
    pub end_fuel: f64,

    /// Theoretical burn that day, liters
    pub fuel_used: f64,
}
