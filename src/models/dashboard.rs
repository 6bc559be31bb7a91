use serde::{Deserialize, Serialize};

/// Aggregate numbers shown on the console landing page.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub friend_count: u64,
    pub send_count: u64,
    pub send_limit: u64,
    pub average_ctr: f64,
    pub monthly_revenue: f64,
}
