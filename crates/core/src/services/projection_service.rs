use chrono::NaiveDate;

use crate::models::record::FuelRecord;
use crate::models::settings::AppSettings;
use crate::models::stats::DailyStats;

/// Projects tank levels for arbitrary dates.
///
/// `settings.current_fuel_amount` is the anchor for "right now"; the
/// balance on any other date is reached by walking all intervening
/// refuels and theoretical burn. Pure — no I/O, no state.
pub struct ProjectionService;

impl ProjectionService {
    pub fn new() -> Self {
        Self
    }

    /// Theoretical burn of one record's driving, in liters.
    fn burn(record: &FuelRecord, settings: &AppSettings) -> f64 {
        (record.daily_mileage * settings.fuel_consumption_per_100km) / 100.0
    }

    /// Projected tank level at the start of `date`: the anchor plus
    /// everything refueled strictly before that date, minus the
    /// theoretical burn of all driving before it. An empty tank is the
    /// floor — the projection never goes negative.
    pub fn fuel_balance_before(
        &self,
        records: &[FuelRecord],
        settings: &AppSettings,
        date: NaiveDate,
    ) -> f64 {
        let mut added = 0.0;
        let mut used = 0.0;
        for record in records.iter().filter(|r| r.date < date) {
            added += record.fuel_amount;
            used += Self::burn(record, settings);
        }
        (settings.current_fuel_amount + added - used).max(0.0)
    }

    /// Compute the per-day breakdown for `date` — mileage, refuels, and
    /// the start/end fuel-balance projection.
    pub fn compute_daily_stats(
        &self,
        records: &[FuelRecord],
        settings: &AppSettings,
        date: NaiveDate,
    ) -> DailyStats {
        let mut fuel_added = 0.0;
        let mut daily_mileage = 0.0;
        for record in records.iter().filter(|r| r.date == date) {
            fuel_added += record.fuel_amount;
            daily_mileage += record.daily_mileage;
        }

        let fuel_used = (daily_mileage * settings.fuel_consumption_per_100km) / 100.0;

        let start_fuel = self.fuel_balance_before(records, settings, date);
        let end_fuel = (start_fuel + fuel_added - fuel_used).max(0.0);

        DailyStats {
            start_mileage: settings.total_mileage - daily_mileage,
            end_mileage: settings.total_mileage,
            daily_mileage,
            fuel_added,
            start_fuel,
            end_fuel,
            fuel_used,
        }
    }
}

impl Default for ProjectionService {
    fn default() -> Self {
        Self::new()
    }
}
