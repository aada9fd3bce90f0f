use crate::model::RegionShape;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const ALL_VALUE: &str = "all";
pub const ALL_LABEL: &str = "All buyboxes";

/// Category filter over buyboxes. `All` is the default and admits every region.
/// Serialized as its select value ("all" or the buybox value).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BuyboxFilter {
    #[default]
    All,
    Buybox(String),
}

impl BuyboxFilter {
    /// Parses the `<select>` value; "all" and the empty string both mean `All`.
    pub fn from_value(value: &str) -> Self {
        match value {
            "" | ALL_VALUE => BuyboxFilter::All,
            other => BuyboxFilter::Buybox(other.to_string()),
        }
    }

    pub fn value(&self) -> &str {
        match self {
            BuyboxFilter::All => ALL_VALUE,
            BuyboxFilter::Buybox(v) => v,
        }
    }

    pub fn admits(&self, shape: &RegionShape) -> bool {
        match self {
            BuyboxFilter::All => true,
            BuyboxFilter::Buybox(v) => shape.in_buybox(v),
        }
    }
}

impl From<String> for BuyboxFilter {
    fn from(value: String) -> Self {
        BuyboxFilter::from_value(&value)
    }
}

impl From<BuyboxFilter> for String {
    fn from(filter: BuyboxFilter) -> Self {
        filter.value().to_string()
    }
}

impl fmt::Display for BuyboxFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
}

/// Options as shown in the dropdown, "all" first.
pub fn dropdown_options(configured: &[FilterOption]) -> Vec<FilterOption> {
    let mut out = Vec::with_capacity(configured.len() + 1);
    out.push(FilterOption {
        value: ALL_VALUE.to_string(),
        label: ALL_LABEL.to_string(),
    });
    out.extend(configured.iter().cloned());
    out
}
