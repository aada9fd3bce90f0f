//! Detail panel contents, derived from the current selection and the data
//! source. Holds no state; recomputed on every render.

use crate::model::{MetricsSource, PerformanceClass, RegionId, RegionShape, find_shape};
use crate::state::BuyboxFilter;

#[derive(Clone, Debug, PartialEq)]
pub struct PanelRow {
    pub label: &'static str,
    pub value: String,
    /// Rendered as a link-styled value.
    pub link: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PanelDetails {
    pub region: RegionId,
    pub zip_code: String,
    pub performance: PerformanceClass,
    pub rows: Vec<PanelRow>,
    /// False when the current filter no longer covers this region.
    pub in_filter: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PanelView {
    Hidden,
    /// Selected, but the region has no shape or no metrics record.
    NoData { region: RegionId },
    Details(PanelDetails),
}

impl PanelView {
    pub fn is_visible(&self) -> bool {
        !matches!(self, PanelView::Hidden)
    }
}

pub fn bind_panel(
    selected: Option<&RegionId>,
    shapes: &[RegionShape],
    source: &dyn MetricsSource,
    filter: &BuyboxFilter,
) -> PanelView {
    let Some(id) = selected else {
        return PanelView::Hidden;
    };
    // A selection whose shape disappeared is not re-targeted, just reported empty.
    let Some(shape) = find_shape(shapes, id) else {
        return PanelView::NoData { region: id.clone() };
    };
    let Some(m) = source.lookup(id) else {
        return PanelView::NoData { region: id.clone() };
    };
    let row = |label: &'static str, value: &str| PanelRow {
        label,
        value: value.to_string(),
        link: false,
    };
    let rows = vec![
        row("Properties", &m.properties),
        row("County", &m.county),
        PanelRow {
            label: "Client deals",
            value: m.client_deals.clone(),
            link: true,
        },
        row("Market deals", &m.market_deals),
        row("Client deals concentration", &m.client_deals_concentration),
        row("Market deals concentration", &m.market_deals_concentration),
        row("Client Avg. gross profit", &m.client_avg_profit),
        row("Market Avg. gross profit", &m.market_avg_profit),
        row("Client Total gross profit", &m.client_total_profit),
        row("Market Total gross profit", &m.market_total_profit),
        row("Sales", &m.sales),
    ];
    PanelView::Details(PanelDetails {
        region: id.clone(),
        zip_code: m.zip_code,
        performance: m.performance,
        rows,
        in_filter: filter.admits(shape),
    })
}
