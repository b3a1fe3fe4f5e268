use serde::{Deserialize, Serialize};

/// Spending analytics for one month, derived on demand for the
/// analytics view.
///
/// Unlike `MonthlyStats.remaining_fuel_limit`, `budget_remaining` is NOT
/// clamped: a negative value is the over-budget signal the view highlights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthAnalytics {
    /// Month key, `"YYYY-MM"`
    pub month: String,

    /// Total spend this month
    pub total_cost: f64,

    /// Average price per liter actually paid
    pub average_fuel_price: f64,

    /// Cost of driving 100 km this month
    pub cost_per_100km: f64,

    /// monthly_budget − total_cost. Negative when over budget.
    pub budget_remaining: f64,

    /// Share of the budget spent, in percent. 0 when no budget is set.
    pub budget_used_percent: f64,

    /// km driven per liter purchased. 0 when either side is 0.
    pub fuel_efficiency_km_per_liter: f64,
}
