use chrono::NaiveDate;
use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::record::FuelRecord;
use crate::models::state::AppState;
use crate::services::mileage_service::MileageService;
use crate::services::stats_service::StatsService;

/// Manages fill-up records and keeps the derived state consistent.
///
/// Every mutation runs the same pipeline: snapshot the derived mileage
/// total, apply the change, reconstruct daily mileage over the full set,
/// move the settings' running vehicle total by the net mileage delta,
/// and rebuild the per-month stats map.
pub struct RecordService {
    mileage_service: MileageService,
    stats_service: StatsService,
}

impl RecordService {
    pub fn new() -> Self {
        Self {
            mileage_service: MileageService::new(),
            stats_service: StatsService::new(),
        }
    }

    /// Add a new record. Validates the input before any state changes.
    pub fn add_record(&self, state: &mut AppState, record: FuelRecord) -> Result<Uuid, CoreError> {
        Self::validate_record(&record)?;
        let id = record.id;
        let before = MileageService::total_daily_mileage(&state.records);
        state.records.push(record);
        self.rebuild_from(state, before);
        Ok(id)
    }

    /// Replace the user-entered fields of an existing record.
    /// The id is immutable; derived mileage is recomputed afterwards.
    #[allow(clippy::too_many_arguments)]
    pub fn update_record(
        &self,
        state: &mut AppState,
        record_id: Uuid,
        date: NaiveDate,
        total_mileage: Option<f64>,
        fuel_amount: f64,
        fuel_price: Option<f64>,
        total_cost: Option<f64>,
    ) -> Result<(), CoreError> {
        let idx = state
            .records
            .iter()
            .position(|r| r.id == record_id)
            .ok_or_else(|| CoreError::RecordNotFound(record_id.to_string()))?;

        let updated = FuelRecord {
            id: record_id,
            date,
            total_mileage,
            daily_mileage: 0.0,
            fuel_amount,
            fuel_price,
            total_cost,
        };
        Self::validate_record(&updated)?;

        let before = MileageService::total_daily_mileage(&state.records);
        state.records[idx] = updated;
        self.rebuild_from(state, before);
        Ok(())
    }

    /// Remove a record by its ID. Returns the removed record.
    pub fn delete_record(
        &self,
        state: &mut AppState,
        record_id: Uuid,
    ) -> Result<FuelRecord, CoreError> {
        let idx = state
            .records
            .iter()
            .position(|r| r.id == record_id)
            .ok_or_else(|| CoreError::RecordNotFound(record_id.to_string()))?;

        let before = MileageService::total_daily_mileage(&state.records);
        let removed = state.records.remove(idx);
        self.rebuild_from(state, before);
        Ok(removed)
    }

    /// Add many records at once. All are validated first; if any fails,
    /// none are added.
    pub fn import_records(
        &self,
        state: &mut AppState,
        records: Vec<FuelRecord>,
    ) -> Result<(), CoreError> {
        for record in &records {
            Self::validate_record(record)?;
        }
        let before = MileageService::total_daily_mileage(&state.records);
        state.records.extend(records);
        self.rebuild_from(state, before);
        Ok(())
    }

    /// Re-derive mileage and stats for a freshly loaded snapshot. The
    /// stored running total is trusted as-is — it carries the vehicle's
    /// pre-app baseline.
    pub fn reload(&self, state: &mut AppState) {
        state.records = self.mileage_service.reconstruct(&state.records);
        self.refresh_stats(state);
    }

    /// Rebuild the stats map: every month with records, plus the month
    /// currently on screen (so the main view always finds an entry).
    pub fn refresh_stats(&self, state: &mut AppState) {
        let mut stats = self
            .stats_service
            .recompute_all_months(&state.records, &state.settings);
        if !stats.contains_key(&state.current_month) {
            let current = self.stats_service.compute_monthly_stats(
                &state.records,
                &state.current_month,
                &state.settings,
            );
            stats.insert(state.current_month.clone(), current);
        }
        state.monthly_stats = stats;
    }

    /// Finish a mutation: reconstruct daily mileage, move the running
    /// vehicle total by the net delta against `before_total` (the derived
    /// mileage sum captured before the change), and refresh the stats.
    ///
    /// The running total moves by the net reconstruction delta, not just
    /// the touched record's own mileage — an insertion between two
    /// existing records shifts the successor's delta too. Deletions must
    /// not drive the total below zero.
    fn rebuild_from(&self, state: &mut AppState, before_total: f64) {
        state.records = self.mileage_service.reconstruct(&state.records);
        let after_total = MileageService::total_daily_mileage(&state.records);

        state.settings.total_mileage =
            (state.settings.total_mileage + (after_total - before_total)).max(0.0);

        self.refresh_stats(state);
    }

    /// Numeric sanity of the user-entered fields. The engine assumes
    /// fields are valid numbers or absent; this is where that assumption
    /// is enforced.
    fn validate_record(record: &FuelRecord) -> Result<(), CoreError> {
        Self::check_non_negative("fuel amount", Some(record.fuel_amount))?;
        Self::check_non_negative("odometer reading", record.total_mileage)?;
        Self::check_non_negative("fuel price", record.fuel_price)?;
        Self::check_non_negative("total cost", record.total_cost)?;
        Ok(())
    }

    fn check_non_negative(field: &str, value: Option<f64>) -> Result<(), CoreError> {
        match value {
            Some(v) if !v.is_finite() => Err(CoreError::ValidationError(format!(
                "{field} must be a finite number"
            ))),
            Some(v) if v < 0.0 => Err(CoreError::ValidationError(format!(
                "{field} must not be negative"
            ))),
            _ => Ok(()),
        }
    }
}

impl Default for RecordService {
    fn default() -> Self {
        Self::new()
    }
}
