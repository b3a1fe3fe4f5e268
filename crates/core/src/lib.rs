pub mod errors;
pub mod format;
pub mod models;
pub mod services;
pub mod storage;
pub mod validation;

use chrono::NaiveDate;
use uuid::Uuid;

use models::{
    analytics::MonthAnalytics,
    record::FuelRecord,
    settings::AppSettings,
    state::AppState,
    stats::{DailyStats, MonthlyStats},
};
use services::{
    projection_service::ProjectionService, record_service::RecordService,
    stats_service::StatsService,
};
use storage::manager::StorageManager;

use errors::CoreError;

/// Main entry point for the Fuel Tracker core library.
/// Holds the application state and all services needed to operate on it.
///
/// Single-owner model: one `FuelTracker` owns the records and settings,
/// all mutations go through it serially, and the derived stats are
/// rebuilt before a mutating call returns. The struct itself provides no
/// locking — concurrent callers must serialize access.
#[must_use]
pub struct FuelTracker {
    state: AppState,
    record_service: RecordService,
    stats_service: StatsService,
    projection_service: ProjectionService,
    /// Tracks whether any mutation has occurred since the last save/load.
    dirty: bool,
}

impl std::fmt::Debug for FuelTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FuelTracker")
            .field("records", &self.state.records.len())
            .field("current_month", &self.state.current_month)
            .field("settings", &self.state.settings)
            .field("dirty", &self.dirty)
            .finish()
    }
}

impl FuelTracker {
    /// Create a brand new empty tracker with default settings.
    pub fn create_new() -> Self {
        Self::build(AppState::default())
    }

    /// Load existing state from a snapshot string (read from the
    /// platform's local storage by the frontend shell).
    ///
    /// Daily mileage is re-derived and every month recomputed before the
    /// state is handed out, so snapshots written under older rules are
    /// brought up to date on load.
    pub fn load_from_str(json: &str) -> Result<Self, CoreError> {
        let state = StorageManager::load_from_str(json)?;
        Ok(Self::build(state))
    }

    /// Save the current state to a snapshot string.
    /// Clears the unsaved-changes flag on success.
    pub fn save_to_string(&mut self) -> Result<String, CoreError> {
        let json = StorageManager::save_to_string(&self.state)?;
        self.dirty = false;
        Ok(json)
    }

    /// Load state from a snapshot file on disk (native only, not WASM).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_file(path: &str) -> Result<Self, CoreError> {
        let state = StorageManager::load_from_file(path)?;
        Ok(Self::build(state))
    }

    /// Save to a snapshot file on disk (native only, not WASM).
    /// Clears the unsaved-changes flag on success.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to_file(&mut self, path: &str) -> Result<(), CoreError> {
        StorageManager::save_to_file(&self.state, path)?;
        self.dirty = false;
        Ok(())
    }

    // ── Record Management ───────────────────────────────────────────

    /// Add a fill-up record.
    ///
    /// Daily mileage is derived from the odometer readings of the whole
    /// set, the running vehicle total is adjusted, and the affected
    /// months are recomputed before this returns.
    pub fn add_record(
        &mut self,
        date: NaiveDate,
        total_mileage: Option<f64>,
        fuel_amount: f64,
        fuel_price: Option<f64>,
        total_cost: Option<f64>,
    ) -> Result<Uuid, CoreError> {
        let record = FuelRecord::new(date, total_mileage, fuel_amount, fuel_price, total_cost);
        let id = self.record_service.add_record(&mut self.state, record)?;
        self.dirty = true;
        Ok(id)
    }

    /// Update an existing record by its ID. The id is immutable;
    /// everything derived is recomputed.
    #[allow(clippy::too_many_arguments)]
    pub fn update_record(
        &mut self,
        record_id: Uuid,
        date: NaiveDate,
        total_mileage: Option<f64>,
        fuel_amount: f64,
        fuel_price: Option<f64>,
        total_cost: Option<f64>,
    ) -> Result<(), CoreError> {
        self.record_service.update_record(
            &mut self.state,
            record_id,
            date,
            total_mileage,
            fuel_amount,
            fuel_price,
            total_cost,
        )?;
        self.dirty = true;
        Ok(())
    }

    /// Remove a record by its ID.
    pub fn delete_record(&mut self, record_id: Uuid) -> Result<(), CoreError> {
        self.record_service.delete_record(&mut self.state, record_id)?;
        self.dirty = true;
        Ok(())
    }

    /// Get a single record by its ID.
    #[must_use]
    pub fn get_record(&self, record_id: Uuid) -> Option<&FuelRecord> {
        self.state.records.iter().find(|r| r.id == record_id)
    }

    /// Get all records, newest first (internal storage is oldest-first).
    #[must_use]
    pub fn get_records(&self) -> Vec<&FuelRecord> {
        let mut records: Vec<&FuelRecord> = self.state.records.iter().collect();
        records.reverse();
        records
    }

    /// Records belonging to one month, oldest first.
    #[must_use]
    pub fn records_for_month(&self, month: &str) -> Vec<&FuelRecord> {
        self.state
            .records
            .iter()
            .filter(|r| services::stats_service::month_key(r.date) == month)
            .collect()
    }

    /// The most recent record — what the entry form prefills from.
    #[must_use]
    pub fn get_last_record(&self) -> Option<&FuelRecord> {
        self.state.records.last()
    }

    /// Total number of records without materializing a sorted vector.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.state.records.len()
    }

    // ── Statistics ──────────────────────────────────────────────────

    /// Stats for a month: the cached entry when the map has one,
    /// computed fresh otherwise — any month is queryable, not just the
    /// stored ones.
    #[must_use]
    pub fn monthly_stats(&self, month: &str) -> MonthlyStats {
        self.state
            .monthly_stats
            .get(month)
            .cloned()
            .unwrap_or_else(|| {
                self.stats_service.compute_monthly_stats(
                    &self.state.records,
                    month,
                    &self.state.settings,
                )
            })
    }

    /// Stats for the month currently on screen.
    #[must_use]
    pub fn current_month_stats(&self) -> MonthlyStats {
        self.monthly_stats(&self.state.current_month)
    }

    /// Per-day fuel-balance breakdown for an arbitrary date.
    #[must_use]
    pub fn daily_stats(&self, date: NaiveDate) -> DailyStats {
        self.projection_service
            .compute_daily_stats(&self.state.records, &self.state.settings, date)
    }

    /// Per-day breakdown for today.
    #[must_use]
    pub fn today_stats(&self) -> DailyStats {
        self.daily_stats(chrono::Utc::now().date_naive())
    }

    /// Spending analytics for a month: budget usage and fuel efficiency.
    #[must_use]
    pub fn month_analytics(&self, month: &str) -> MonthAnalytics {
        self.stats_service
            .compute_month_analytics(&self.state.records, month, &self.state.settings)
    }

    // ── Month Navigation ────────────────────────────────────────────

    /// Switch the month on screen. Guarantees the stats map has an entry
    /// for it.
    pub fn set_current_month(&mut self, month: impl Into<String>) {
        self.state.current_month = month.into();
        self.record_service.refresh_stats(&mut self.state);
        self.dirty = true;
    }

    /// The month currently on screen, `"YYYY-MM"`.
    #[must_use]
    pub fn current_month(&self) -> &str {
        &self.state.current_month
    }

    /// Sorted list of months that have records.
    #[must_use]
    pub fn months(&self) -> Vec<String> {
        let mut months: Vec<String> = self
            .state
            .records
            .iter()
            .map(|r| services::stats_service::month_key(r.date))
            .collect();
        months.dedup(); // records are date-sorted, so duplicates are adjacent
        months
    }

    /// Date of the earliest record, if any.
    #[must_use]
    pub fn earliest_record_date(&self) -> Option<NaiveDate> {
        self.state.records.first().map(|r| r.date)
    }

    /// Date of the most recent record, if any.
    #[must_use]
    pub fn latest_record_date(&self) -> Option<NaiveDate> {
        self.state.records.last().map(|r| r.date)
    }

    // ── Settings ────────────────────────────────────────────────────

    /// Replace the settings and re-derive every stored month, so stats
    /// never go stale relative to the new rate, limit, or price.
    pub fn update_settings(&mut self, settings: AppSettings) -> Result<(), CoreError> {
        Self::validate_settings(&settings)?;
        self.state.settings = settings;
        self.record_service.refresh_stats(&mut self.state);
        self.dirty = true;
        Ok(())
    }

    /// Get current settings.
    #[must_use]
    pub fn settings(&self) -> &AppSettings {
        &self.state.settings
    }

    // ── Dirty State ─────────────────────────────────────────────────

    /// Returns `true` if the state has been modified since the last save
    /// or load.
    #[must_use]
    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }

    // ── Export / Import ─────────────────────────────────────────────

    /// Export all records as a JSON string.
    pub fn export_records_to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(&self.state.records)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize records to JSON: {e}")))
    }

    /// Export all records as a CSV string.
    /// Columns: id, date, total_mileage, daily_mileage, fuel_amount, fuel_price, total_cost
    #[must_use]
    pub fn export_records_to_csv(&self) -> String {
        let opt = |v: Option<f64>| v.map(|v| v.to_string()).unwrap_or_default();
        let mut csv =
            String::from("id,date,total_mileage,daily_mileage,fuel_amount,fuel_price,total_cost\n");
        for record in &self.state.records {
            csv.push_str(&format!(
                "{},{},{},{},{},{},{}\n",
                record.id,
                record.date,
                opt(record.total_mileage),
                record.daily_mileage,
                record.fuel_amount,
                opt(record.fuel_price),
                opt(record.total_cost),
            ));
        }
        csv
    }

    /// Import records from a JSON string. Every record is validated
    /// before any is added (all-or-nothing). Returns the number imported.
    pub fn import_records_from_json(&mut self, json: &str) -> Result<usize, CoreError> {
        let records: Vec<FuelRecord> = serde_json::from_str(json)?;
        let count = records.len();
        self.record_service.import_records(&mut self.state, records)?;
        if count > 0 {
            self.dirty = true;
        }
        Ok(count)
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(mut state: AppState) -> Self {
        let record_service = RecordService::new();
        let stats_service = StatsService::new();
        let projection_service = ProjectionService::new();

        record_service.reload(&mut state);

        Self {
            state,
            record_service,
            stats_service,
            projection_service,
            dirty: false,
        }
    }

    fn validate_settings(settings: &AppSettings) -> Result<(), CoreError> {
        let fields = [
            ("fuel consumption per 100 km", settings.fuel_consumption_per_100km),
            ("total mileage", settings.total_mileage),
            ("current fuel amount", settings.current_fuel_amount),
            ("monthly fuel limit", settings.monthly_fuel_limit),
            ("default fuel price", settings.default_fuel_price),
            ("monthly budget", settings.monthly_budget),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(CoreError::ValidationError(format!(
                    "{field} must be a finite number"
                )));
            }
            if value < 0.0 {
                return Err(CoreError::ValidationError(format!(
                    "{field} must not be negative"
                )));
            }
        }
        Ok(())
    }
}
