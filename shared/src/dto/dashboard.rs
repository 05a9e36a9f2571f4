//! Dashboard aggregates from `GET /api/pos/dashboard`.
//!
//! Everything here is computed server-side; the client only sums and scales
//! for display.

use serde::{Deserialize, Serialize};

/// Total nominal collected per category type
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryNominal {
    #[serde(default, deserialize_with = "crate::de::string")]
    pub category: String,
    #[serde(default, deserialize_with = "crate::de::amount")]
    pub total_nominal: i64,
}

/// Transaction count per category type
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCount {
    #[serde(default, deserialize_with = "crate::de::string")]
    pub category: String,
    #[serde(default, deserialize_with = "crate::de::amount")]
    pub total_count: i64,
}

/// Transaction count per payment method
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodCount {
    #[serde(default, deserialize_with = "crate::de::string")]
    pub method: String,
    #[serde(default, deserialize_with = "crate::de::amount")]
    pub total_count: i64,
}

/// Total nominal per event
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EventTotal {
    #[serde(default, deserialize_with = "crate::de::string")]
    pub event_name: String,
    #[serde(default, deserialize_with = "crate::de::amount")]
    pub total_nominal: i64,
}

/// Progress toward the fundraising target
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TargetSummary {
    #[serde(default, deserialize_with = "crate::de::amount")]
    pub current_total: i64,
    #[serde(default, deserialize_with = "crate::de::amount")]
    pub target: i64,
    #[serde(default, deserialize_with = "crate::de::float")]
    pub percentage: f64,
}

impl TargetSummary {
    /// `current / target * 100` when a target is set, otherwise the server's figure.
    pub fn progress_percentage(&self) -> f64 {
        if self.target > 0 {
            self.current_total as f64 / self.target as f64 * 100.0
        } else {
            self.percentage
        }
    }

    /// Width of the progress bar, 0.0..=1.0
    pub fn bar_fraction(&self) -> f32 {
        (self.progress_percentage() / 100.0).clamp(0.0, 1.0) as f32
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    #[serde(default)]
    pub category_nominal_summary: Vec<CategoryNominal>,
    #[serde(default)]
    pub category_count_summary: Vec<CategoryCount>,
    #[serde(default)]
    pub payment_method_summary: Vec<PaymentMethodCount>,
    #[serde(default)]
    pub event_summary: Vec<EventTotal>,
    #[serde(default)]
    pub target_summary: Option<TargetSummary>,
}

impl DashboardSummary {
    pub fn total_nominal(&self) -> i64 {
        self.category_nominal_summary.iter().map(|c| c.total_nominal).sum()
    }

    pub fn total_count(&self) -> i64 {
        self.category_count_summary.iter().map(|c| c.total_count).sum()
    }

    /// Share of the grand total for one category, in percent. Zero when nothing was collected.
    pub fn nominal_share(&self, nominal: i64) -> f64 {
        let total = self.total_nominal();
        if total > 0 {
            nominal as f64 / total as f64 * 100.0
        } else {
            0.0
        }
    }
}
