use serde::{Deserialize, Serialize};

/// Color theme preference. Presentation-only — the engine ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Follow the OS setting
    System,
    Light,
    Dark,
}

/// Font size preference. Presentation-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Normal,
    Medium,
    Large,
}

/// User-configurable settings, stored inside the persisted snapshot.
///
/// `total_mileage` is a running total: it is adjusted on every record
/// mutation so it equals the sum of all `daily_mileage` values plus the
/// baseline the user started the app with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Assumed average consumption, liters per 100 km. Used to project
    /// fuel burn when it is not separately measured.
    pub fuel_consumption_per_100km: f64,

    /// Running total of vehicle mileage, in km
    pub total_mileage: f64,

    /// Known tank level as of "now", in liters. Anchor for
    /// backward/forward fuel-balance projection.
    pub current_fuel_amount: f64,

    /// Soft cap on monthly fuel purchase, in liters
    pub monthly_fuel_limit: f64,

    /// Fallback price per liter when a record lacks one
    pub default_fuel_price: f64,

    /// Soft cap on monthly spend
    pub monthly_budget: f64,

    /// Whether the analytics block is shown. Presentation-only.
    #[serde(default = "default_show_analytics")]
    pub show_analytics: bool,

    /// Presentation-only
    #[serde(default)]
    pub font_size: FontSize,

    /// Presentation-only
    #[serde(default)]
    pub theme: Theme,
}

fn default_show_analytics() -> bool {
    true
}

impl Default for Theme {
    fn default() -> Self {
        Theme::System
    }
}

impl Default for FontSize {
    fn default() -> Self {
        FontSize::Normal
    }
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            fuel_consumption_per_100km: 13.0,
            total_mileage: 0.0,
            current_fuel_amount: 0.0,
            monthly_fuel_limit: 100.0,
            default_fuel_price: 50.0,
            monthly_budget: 5000.0,
            show_analytics: true,
            font_size: FontSize::Normal,
            theme: Theme::System,
        }
    }
}
