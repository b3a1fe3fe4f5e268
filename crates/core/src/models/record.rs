use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single fill-up event.
///
/// **Important**: `daily_mileage` is derived, never user-entered. It is
/// recomputed from the cumulative odometer readings whenever the record set
/// changes, and is `>= 0` in every record the library hands out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelRecord {
    /// Unique identifier, assigned at creation, immutable
    pub id: Uuid,

    /// Date of the fill-up (no time component — daily granularity).
    /// Multiple fill-ups per day are valid.
    pub date: NaiveDate,

    /// Cumulative odometer reading at this fill-up, in km.
    /// Absent for legacy entries; a stored zero is treated as absent.
    #[serde(default)]
    pub total_mileage: Option<f64>,

    /// Distance driven since the previous chronological record, in km. Derived.
    #[serde(default)]
    pub daily_mileage: f64,

    /// Liters added
    pub fuel_amount: f64,

    /// Price per liter at the time of the fill-up
    #[serde(default)]
    pub fuel_price: Option<f64>,

    /// Total cost of this fill-up. When absent it is resolved from
    /// `fuel_amount × fuel_price`, falling back to the default price.
    #[serde(default)]
    pub total_cost: Option<f64>,
}

impl FuelRecord {
    pub fn new(
        date: NaiveDate,
        total_mileage: Option<f64>,
        fuel_amount: f64,
        fuel_price: Option<f64>,
        total_cost: Option<f64>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            total_mileage,
            daily_mileage: 0.0,
            fuel_amount,
            fuel_price,
            total_cost,
        }
    }

    /// The odometer reading, if it is usable as a diff reference.
    /// Zero readings are treated as absent — legacy entries stored 0
    /// when the odometer field was left empty.
    pub fn usable_mileage(&self) -> Option<f64> {
        self.total_mileage.filter(|m| *m > 0.0)
    }
}
