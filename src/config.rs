//! Map configuration: filter options plus the region shapes and metrics the
//! data source supplies. The bundled sample data lives in `assets/`.

use crate::model::{MetricsTable, RegionId, RegionMetrics, RegionShape};
use crate::state::FilterOption;
use crate::state::filter::ALL_VALUE;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use thiserror::Error;

const SAMPLE_CONFIG: &str = include_str!("../assets/map_config.json");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("map config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("region {0} is defined more than once")]
    DuplicateRegion(RegionId),
    #[error("filter option {0:?} is defined more than once")]
    DuplicateFilter(String),
    #[error("filter option has an empty value")]
    EmptyFilterValue,
    #[error("filter value \"all\" is reserved")]
    ReservedFilterValue,
    #[error("region {region} references unknown buybox {buybox:?}")]
    UnknownBuybox { region: RegionId, buybox: String },
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    #[serde(default)]
    pub filters: Vec<FilterOption>,
    #[serde(default)]
    pub shapes: Vec<RegionShape>,
    #[serde(default)]
    pub metrics: BTreeMap<RegionId, RegionMetrics>,
}

impl MapConfig {
    pub fn sample() -> Result<Self, ConfigError> {
        Self::from_json(SAMPLE_CONFIG)
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let cfg: MapConfig = serde_json::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut filter_values = HashSet::new();
        for opt in &self.filters {
            if opt.value.is_empty() {
                return Err(ConfigError::EmptyFilterValue);
            }
            if opt.value == ALL_VALUE {
                return Err(ConfigError::ReservedFilterValue);
            }
            if !filter_values.insert(opt.value.as_str()) {
                return Err(ConfigError::DuplicateFilter(opt.value.clone()));
            }
        }
        let mut ids = HashSet::new();
        for shape in &self.shapes {
            if !ids.insert(&shape.id) {
                return Err(ConfigError::DuplicateRegion(shape.id.clone()));
            }
            if let Some(b) = shape
                .buyboxes
                .iter()
                .find(|b| !filter_values.contains(b.as_str()))
            {
                return Err(ConfigError::UnknownBuybox {
                    region: shape.id.clone(),
                    buybox: b.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn metrics_table(&self) -> MetricsTable {
        MetricsTable::new(self.metrics.iter().map(|(k, v)| (k.clone(), v.clone())))
    }
}
