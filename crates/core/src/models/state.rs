use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::record::FuelRecord;
use super::settings::AppSettings;
use super::stats::MonthlyStats;

/// The main data container. Everything in here gets serialized into the
/// persisted snapshot.
///
/// `records` is kept sorted by date ascending; records sharing a date keep
/// their insertion order. `monthly_stats` is a pure projection of
/// `records` + `settings` and is rebuilt after every mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppState {
    /// All fill-up records, date ascending
    pub records: Vec<FuelRecord>,

    /// The month the user is currently viewing, `"YYYY-MM"`
    pub current_month: String,

    /// Derived per-month statistics, keyed by `"YYYY-MM"`
    #[serde(default)]
    pub monthly_stats: HashMap<String, MonthlyStats>,

    /// User settings
    pub settings: AppSettings,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            current_month: chrono::Utc::now().date_naive().format("%Y-%m").to_string(),
            monthly_stats: HashMap::new(),
            settings: AppSettings::default(),
        }
    }
}
