use crate::models::record::FuelRecord;

/// Rebuilds per-record daily mileage from cumulative odometer readings.
///
/// Pure business logic — no I/O, no state. Always operates on the full
/// record set, freshly sorted; out-of-order insertion can never corrupt
/// later entries because nothing is patched incrementally.
pub struct MileageService;

impl MileageService {
    pub fn new() -> Self {
        Self
    }

    /// Populate `daily_mileage` for every record and return the set
    /// sorted by date ascending (stable — records sharing a date keep
    /// their relative order).
    ///
    /// Rules:
    /// - No usable odometer reading → `daily_mileage = 0`.
    /// - First usable reading in date order → its own value (the odometer
    ///   baseline counts as "all driven since the car's zero").
    /// - Otherwise → delta to the nearest preceding usable reading,
    ///   clamped to 0 so an odometer rollback never produces a negative.
    pub fn reconstruct(&self, records: &[FuelRecord]) -> Vec<FuelRecord> {
        let mut sorted = records.to_vec();
        sorted.sort_by_key(|r| r.date);

        let mut last_reading: Option<f64> = None;
        for record in &mut sorted {
            record.daily_mileage = match record.usable_mileage() {
                None => 0.0,
                Some(reading) => {
                    let daily = match last_reading {
                        None => reading,
                        Some(prev) => (reading - prev).max(0.0),
                    };
                    last_reading = Some(reading);
                    daily
                }
            };
        }

        sorted
    }

    /// Sum of daily mileage across a record set — what the settings'
    /// running vehicle total is kept in sync with.
    pub fn total_daily_mileage(records: &[FuelRecord]) -> f64 {
        records.iter().map(|r| r.daily_mileage).sum()
    }
}

impl Default for MileageService {
    fn default() -> Self {
        Self::new()
    }
}
