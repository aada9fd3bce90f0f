//! Core data models for the performance map.
//! Shapes and metrics are owned by the data source; the map only reads them.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionId(pub String);

impl RegionId {
    #[cfg(test)]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PerformanceClass {
    Outperforming,
    Underperforming,
    Neutral,
}

impl PerformanceClass {
    pub fn label(self) -> &'static str {
        match self {
            PerformanceClass::Outperforming => "Outperforming",
            PerformanceClass::Underperforming => "Underperforming",
            PerformanceClass::Neutral => "Neutral performance",
        }
    }

    /// Fill used for the region shape and the legend swatch.
    pub fn fill(self) -> &'static str {
        match self {
            PerformanceClass::Outperforming => "#22C55E",
            PerformanceClass::Underperforming => "#EF4444",
            PerformanceClass::Neutral => "#9CA3AF",
        }
    }

    /// (background, text) colors for the detail panel badge.
    pub fn badge_colors(self) -> (&'static str, &'static str) {
        match self {
            PerformanceClass::Outperforming => ("#F0FDF4", "#15803D"),
            PerformanceClass::Underperforming => ("#FEF2F2", "#B91C1C"),
            PerformanceClass::Neutral => ("#F3F4F6", "#374151"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegionShape {
    pub id: RegionId,
    /// SVG path data in the 800x420 map space. Never interpreted by the core.
    pub path: String,
    pub performance: PerformanceClass,
    /// Buybox filter values this region belongs to.
    #[serde(default)]
    pub buyboxes: Vec<String>,
}

impl RegionShape {
    pub fn in_buybox(&self, buybox: &str) -> bool {
        self.buyboxes.iter().any(|b| b == buybox)
    }
}

/// Display record for one region. Values arrive pre-formatted from the source.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionMetrics {
    pub zip_code: String,
    pub properties: String,
    pub county: String,
    pub client_deals: String,
    pub market_deals: String,
    pub client_deals_concentration: String,
    pub market_deals_concentration: String,
    pub client_avg_profit: String,
    pub market_avg_profit: String,
    pub client_total_profit: String,
    pub market_total_profit: String,
    pub sales: String,
    pub performance: PerformanceClass,
}

/// Read-only lookup of metrics by region.
pub trait MetricsSource {
    fn lookup(&self, id: &RegionId) -> Option<RegionMetrics>;
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MetricsTable {
    rows: HashMap<RegionId, RegionMetrics>,
}

impl MetricsTable {
    pub fn new(rows: impl IntoIterator<Item = (RegionId, RegionMetrics)>) -> Self {
        Self {
            rows: rows.into_iter().collect(),
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl MetricsSource for MetricsTable {
    fn lookup(&self, id: &RegionId) -> Option<RegionMetrics> {
        self.rows.get(id).cloned()
    }
}

pub fn find_shape<'a>(shapes: &'a [RegionShape], id: &RegionId) -> Option<&'a RegionShape> {
    shapes.iter().find(|s| &s.id == id)
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn table_lookup_hits_and_misses() {
        let table = MetricsTable::new([(
            RegionId::new("99504"),
            metrics("99504", PerformanceClass::Outperforming),
        )]);
        assert_eq!(table.len(), 1);
        let hit = table.lookup(&RegionId::new("99504")).map(|m| m.zip_code);
        assert_eq!(hit.as_deref(), Some("99504"));
        assert!(table.lookup(&RegionId::new("85001")).is_none());
    }

    #[test]
    fn shapes_are_found_by_id_only() {
        let shapes = vec![
            shape("a", PerformanceClass::Neutral, &[]),
            shape("b", PerformanceClass::Outperforming, &["phoenix"]),
        ];
        assert_eq!(
            find_shape(&shapes, &RegionId::new("b")).map(|s| s.performance),
            Some(PerformanceClass::Outperforming)
        );
        assert!(find_shape(&shapes, &RegionId::new("c")).is_none());
        assert!(shapes[1].in_buybox("phoenix"));
        assert!(!shapes[0].in_buybox("phoenix"));
    }

    #[test]
    fn performance_class_uses_lowercase_names() {
        let parsed: PerformanceClass = serde_json::from_str("\"underperforming\"").unwrap();
        assert_eq!(parsed, PerformanceClass::Underperforming);
        assert_eq!(PerformanceClass::Neutral.label(), "Neutral performance");
    }
}
