use chrono::{Datelike, NaiveDate};
use std::collections::{HashMap, HashSet};

use crate::models::analytics::MonthAnalytics;
use crate::models::record::FuelRecord;
use crate::models::settings::AppSettings;
use crate::models::stats::MonthlyStats;
use crate::services::projection_service::ProjectionService;

/// Month key for a date, `"YYYY-MM"` — the key format of the stats map.
pub fn month_key(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

/// What one fill-up cost, via the ordered fallback chain: the explicit
/// total cost when the record carries one, else price × amount, else
/// default price × amount.
pub fn resolve_record_cost(record: &FuelRecord, settings: &AppSettings) -> f64 {
    match (record.total_cost, record.fuel_price) {
        (Some(cost), _) => cost,
        (None, Some(price)) => price * record.fuel_amount,
        (None, None) => settings.default_fuel_price * record.fuel_amount,
    }
}

/// Computes per-month aggregates: mileage, fuel, cost, averages, and the
/// remaining limit/budget. Pure functions of (records, month, settings) —
/// inputs are never mutated.
pub struct StatsService {
    projection_service: ProjectionService,
}

impl StatsService {
    pub fn new() -> Self {
        Self {
            projection_service: ProjectionService::new(),
        }
    }

    /// Aggregate one month.
    ///
    /// A month with no records returns zeroed sums with settings-derived
    /// fallbacks: the tank projection collapses to the current level, the
    /// full limit remains, and the average price is the default price.
    pub fn compute_monthly_stats(
        &self,
        records: &[FuelRecord],
        month: &str,
        settings: &AppSettings,
    ) -> MonthlyStats {
        let month_records: Vec<&FuelRecord> = records
            .iter()
            .filter(|r| month_key(r.date) == month)
            .collect();

        if month_records.is_empty() {
            return MonthlyStats {
                total_mileage: 0.0,
                total_fuel: 0.0,
                fuel_consumption: 0.0,
                average_consumption: 0.0,
                start_fuel: settings.current_fuel_amount,
                end_fuel: settings.current_fuel_amount,
                remaining_fuel_limit: settings.monthly_fuel_limit,
                total_cost: 0.0,
                average_fuel_price: settings.default_fuel_price,
                cost_per_100km: 0.0,
            };
        }

        let total_mileage: f64 = month_records.iter().map(|r| r.daily_mileage).sum();
        let total_fuel: f64 = month_records.iter().map(|r| r.fuel_amount).sum();
        let total_cost: f64 = month_records
            .iter()
            .map(|r| resolve_record_cost(r, settings))
            .sum();

        let average_fuel_price = if total_fuel > 0.0 {
            total_cost / total_fuel
        } else {
            settings.default_fuel_price
        };
        let average_consumption = if total_mileage > 0.0 {
            (total_fuel / total_mileage) * 100.0
        } else {
            0.0
        };
        let cost_per_100km = if total_mileage > 0.0 {
            (total_cost / total_mileage) * 100.0
        } else {
            0.0
        };

        // Tank level at the month boundaries, projected from the same
        // anchor the daily view uses.
        let first_date = month_records[0].date;
        let month_start = first_date.with_day(1).unwrap_or(first_date);
        let start_fuel = self
            .projection_service
            .fuel_balance_before(records, settings, month_start);
        let month_burn = (total_mileage * settings.fuel_consumption_per_100km) / 100.0;
        let end_fuel = (start_fuel + total_fuel - month_burn).max(0.0);

        MonthlyStats {
            total_mileage,
            total_fuel,
            fuel_consumption: total_fuel,
            average_consumption,
            start_fuel,
            end_fuel,
            remaining_fuel_limit: (settings.monthly_fuel_limit - total_fuel).max(0.0),
            total_cost,
            average_fuel_price,
            cost_per_100km,
        }
    }

    /// Re-derive stats for every month present in the record set.
    /// Run whenever the records or the settings change, so no stored
    /// month goes stale relative to the current rate/limit/price.
    pub fn recompute_all_months(
        &self,
        records: &[FuelRecord],
        settings: &AppSettings,
    ) -> HashMap<String, MonthlyStats> {
        let months: HashSet<String> = records.iter().map(|r| month_key(r.date)).collect();
        months
            .into_iter()
            .map(|month| {
                let stats = self.compute_monthly_stats(records, &month, settings);
                (month, stats)
            })
            .collect()
    }

    /// Spending analytics for one month.
    ///
    /// `budget_remaining` is deliberately unclamped — a negative value is
    /// the over-budget signal the analytics view highlights.
    pub fn compute_month_analytics(
        &self,
        records: &[FuelRecord],
        month: &str,
        settings: &AppSettings,
    ) -> MonthAnalytics {
        let stats = self.compute_monthly_stats(records, month, settings);

        let budget_used_percent = if settings.monthly_budget > 0.0 {
            (stats.total_cost / settings.monthly_budget) * 100.0
        } else {
            0.0
        };
        let fuel_efficiency_km_per_liter = if stats.total_mileage > 0.0 && stats.total_fuel > 0.0 {
            stats.total_mileage / stats.total_fuel
        } else {
            0.0
        };

        MonthAnalytics {
            month: month.to_string(),
            total_cost: stats.total_cost,
            average_fuel_price: stats.average_fuel_price,
            cost_per_100km: stats.cost_per_100km,
            budget_remaining: settings.monthly_budget - stats.total_cost,
            budget_used_percent,
            fuel_efficiency_km_per_liter,
        }
    }
}

impl Default for StatsService {
    fn default() -> Self {
        Self::new()
    }
}
