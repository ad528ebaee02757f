use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MonthlyTrend {
    pub month: &'static str,
    pub sales: u32,
}

#[derive(Debug, Serialize)]
pub struct SalesTrendsResponse {
    pub monthly_trends: Vec<MonthlyTrend>,
}

const MONTHLY_SALES: [(&str, u32); 5] = [
    ("Oct 2025", 2500),
    ("Nov 2025", 3200),
    ("Dec 2025", 4100),
    ("Jan 2026", 3800),
    ("Feb 2026", 4600),
];

/// Monthly sales trend for the dashboard chart (fixed series)
pub async fn sales_trends() -> Json<SalesTrendsResponse> {
    let monthly_trends = MONTHLY_SALES
        .iter()
        .map(|&(month, sales)| MonthlyTrend { month, sales })
        .collect();

    Json(SalesTrendsResponse { monthly_trends })
}
