//! Map interaction state and its reducer.
//! Every input event becomes a `MapAction`; `MapState::apply` is the only
//! place state changes, so each transition can be tested without a browser.

pub mod filter;
pub mod keys;
pub mod selection;
pub mod viewport;

pub use filter::{BuyboxFilter, FilterOption};
pub use keys::key_action;
pub use selection::Selection;
pub use viewport::Viewport;

use crate::model::{RegionId, RegionShape, find_shape};
use serde::Serialize;
use std::rc::Rc;
use yew::Reducible;

#[derive(Clone, Debug, PartialEq)]
pub enum MapAction {
    ZoomIn,
    ZoomOut,
    ToggleFullscreen,
    Focus,
    Blur,
    /// Raw `KeyboardEvent::key()`. Ignored unless the map is focused, and
    /// ignored when it bubbled up from a nested form control.
    Key { key: String, in_control: bool },
    Select(RegionId),
    ClearSelection,
    SetFilter(BuyboxFilter),
    /// Data source refreshed underneath the map.
    ReplaceShapes(Rc<Vec<RegionShape>>),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct MapState {
    pub viewport: Viewport,
    pub selection: Selection,
    pub filter: BuyboxFilter,
    #[serde(skip)]
    pub shapes: Rc<Vec<RegionShape>>,
}

impl MapState {
    pub fn new(shapes: Rc<Vec<RegionShape>>) -> Self {
        Self {
            shapes,
            ..Default::default()
        }
    }

    /// Known regions must pass the filter; unknown ids are always selectable
    /// so the panel can report that no data exists for them.
    pub fn is_eligible(&self, id: &RegionId) -> bool {
        match find_shape(&self.shapes, id) {
            Some(shape) => self.filter.admits(shape),
            None => true,
        }
    }

    /// Applies one action. Returns false when the state is unchanged.
    pub fn apply(&mut self, action: MapAction) -> bool {
        use MapAction::*;
        let before = (
            self.viewport.clone(),
            self.selection.clone(),
            self.filter.clone(),
        );
        match action {
            ZoomIn => self.viewport.zoom_in(),
            ZoomOut => self.viewport.zoom_out(),
            ToggleFullscreen => self.viewport.toggle_fullscreen(),
            Focus => self.viewport.focused = true,
            Blur => self.viewport.focused = false,
            Key { key, in_control } => {
                if !self.viewport.focused || in_control {
                    return false;
                }
                match key_action(&key) {
                    Some(mapped) => return self.apply(mapped),
                    None => return false,
                }
            }
            Select(id) => {
                if !self.is_eligible(&id) {
                    log::debug!("ignoring select of {id}: excluded by filter {}", self.filter);
                    return false;
                }
                self.selection.select(id);
            }
            ClearSelection => self.selection.clear(),
            SetFilter(filter) => {
                self.filter = filter;
                let stale = self
                    .selection
                    .region
                    .as_ref()
                    .is_some_and(|id| !self.is_eligible(id));
                if stale {
                    log::debug!("filter {} excludes selected region, clearing", self.filter);
                    self.selection.clear();
                }
            }
            ReplaceShapes(shapes) => {
                self.shapes = shapes;
                return true;
            }
        }
        let changed = before != (
            self.viewport.clone(),
            self.selection.clone(),
            self.filter.clone(),
        );
        if changed {
            log::debug!(
                "map state: zoom={} fullscreen={} selected={:?} filter={}",
                self.viewport.zoom,
                self.viewport.fullscreen,
                self.selection.region.as_ref().map(RegionId::as_str),
                self.filter
            );
        }
        changed
    }
}

impl Reducible for MapState {
    type Action = MapAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        if new.apply(action) { Rc::new(new) } else { self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PerformanceClass::*;
    use crate::model::fixtures::{metrics, shape};
    use crate::model::{MetricsTable, PerformanceClass};
    use crate::panel::{PanelView, bind_panel};

    fn sample() -> MapState {
        MapState::new(Rc::new(vec![
            shape("R1", Outperforming, &["phoenix"]),
            shape("R2", Underperforming, &["tucson"]),
            shape("R3", Neutral, &["phoenix", "tucson"]),
        ]))
    }

    fn run(state: MapState, actions: impl IntoIterator<Item = MapAction>) -> Rc<MapState> {
        actions
            .into_iter()
            .fold(Rc::new(state), |s, a| s.reduce(a))
    }

    fn key(k: &str) -> MapAction {
        MapAction::Key {
            key: k.to_string(),
            in_control: false,
        }
    }

    fn select(id: &str) -> MapAction {
        MapAction::Select(RegionId::new(id))
    }

    #[test]
    fn fresh_state() {
        let s = sample();
        assert_eq!(s.viewport.zoom, 1.0);
        assert!(!s.viewport.fullscreen);
        assert_eq!(s.selection.region, None);
        assert_eq!(s.filter, BuyboxFilter::All);
    }

    fn panel_of(s: &MapState, table: &MetricsTable) -> (String, PerformanceClass) {
        match bind_panel(s.selection.region.as_ref(), &s.shapes, table, &s.filter) {
            PanelView::Details(d) => (d.zip_code, d.performance),
            other => panic!("expected details, got {other:?}"),
        }
    }

    #[test]
    fn walkthrough_zoom_select_fullscreen() {
        let table = MetricsTable::new([
            (RegionId::new("R1"), metrics("85001", Outperforming)),
            (RegionId::new("R2"), metrics("85002", Underperforming)),
        ]);

        let s = run(sample(), [MapAction::Focus, key("+")]);
        assert_eq!(s.viewport.zoom, 1.2);

        let s = run((*s).clone(), [key("+"), key("+"), key("+"), key("+")]);
        assert_eq!(s.viewport.zoom, 2.0);

        let s = run((*s).clone(), [select("R1")]);
        assert_eq!(s.selection.region, Some(RegionId::new("R1")));
        let (zip, class) = panel_of(&s, &table);
        assert_eq!(zip, "85001");
        assert_eq!(class.label(), "Outperforming");

        let s = run((*s).clone(), [select("R2")]);
        assert_eq!(s.selection.region, Some(RegionId::new("R2")));
        let (zip, class) = panel_of(&s, &table);
        assert_eq!(zip, "85002");
        assert_eq!(class.label(), "Underperforming");

        let s = run((*s).clone(), [key("f")]);
        assert!(s.viewport.fullscreen);
        let s = run((*s).clone(), [key("f")]);
        assert!(!s.viewport.fullscreen);
        assert_eq!(s.viewport.zoom, 2.0);
        assert_eq!(s.selection.region, Some(RegionId::new("R2")));
        assert_eq!(panel_of(&s, &table).0, "85002");
    }

    #[test]
    fn keys_from_nested_controls_are_ignored() {
        let focused = run(sample(), [MapAction::Focus]);
        for k in ["f", "-", "+"] {
            let after = focused.clone().reduce(MapAction::Key {
                key: k.to_string(),
                in_control: true,
            });
            assert!(Rc::ptr_eq(&focused, &after), "key {k:?}");
        }
    }

    #[test]
    fn blur_keeps_selection() {
        let s = run(sample(), [MapAction::Focus, select("R1"), MapAction::Blur]);
        assert!(!s.viewport.focused);
        assert_eq!(s.selection.region, Some(RegionId::new("R1")));
    }

    #[test]
    fn keys_ignored_without_focus() {
        let start = Rc::new(sample());
        let after = start.clone().reduce(key("+"));
        assert!(Rc::ptr_eq(&start, &after));

        let after = run(sample(), [MapAction::Focus, MapAction::Blur, key("f"), key("-")]);
        assert!(!after.viewport.fullscreen);
        assert_eq!(after.viewport.zoom, 1.0);
    }

    #[test]
    fn unknown_key_leaves_state_untouched() {
        let focused = run(sample(), [MapAction::Focus]);
        let after = focused.clone().reduce(key("Escape"));
        assert!(Rc::ptr_eq(&focused, &after));
    }

    #[test]
    fn every_press_is_one_step() {
        let s = run(sample(), [MapAction::Focus, key("-"), key("-")]);
        assert_eq!(s.viewport.zoom, 0.6);
        let s = run((*s).clone(), [key("="), key("+"), key("+")]);
        assert_eq!(s.viewport.zoom, 1.2);
    }

    #[test]
    fn buttons_work_without_focus() {
        let s = run(sample(), [MapAction::ZoomOut, MapAction::ToggleFullscreen]);
        assert_eq!(s.viewport.zoom, 0.8);
        assert!(s.viewport.fullscreen);
    }

    #[test]
    fn clear_after_select_is_idempotent() {
        let s = run(sample(), [select("R1"), MapAction::ClearSelection]);
        assert_eq!(s.selection.region, None);
        let again = s.clone().reduce(MapAction::ClearSelection);
        assert!(Rc::ptr_eq(&s, &again));
    }

    #[test]
    fn unknown_region_is_still_recorded() {
        let s = run(sample(), [select("00000")]);
        assert_eq!(s.selection.region, Some(RegionId::new("00000")));
    }

    #[test]
    fn filter_change_clears_excluded_selection() {
        let s = run(
            sample(),
            [select("R2"), MapAction::SetFilter(BuyboxFilter::from_value("phoenix"))],
        );
        assert_eq!(s.selection.region, None);
        assert_eq!(s.filter.value(), "phoenix");
    }

    #[test]
    fn filter_change_keeps_eligible_selection() {
        let s = run(
            sample(),
            [select("R3"), MapAction::SetFilter(BuyboxFilter::from_value("tucson"))],
        );
        assert_eq!(s.selection.region, Some(RegionId::new("R3")));
    }

    #[test]
    fn filter_change_keeps_unknown_selection() {
        let s = run(
            sample(),
            [select("gone"), MapAction::SetFilter(BuyboxFilter::from_value("phoenix"))],
        );
        assert_eq!(s.selection.region, Some(RegionId::new("gone")));
    }

    #[test]
    fn excluded_region_cannot_be_selected() {
        let s = run(
            sample(),
            [
                select("R1"),
                MapAction::SetFilter(BuyboxFilter::from_value("phoenix")),
                select("R2"),
            ],
        );
        assert_eq!(s.selection.region, Some(RegionId::new("R1")));
    }

    #[test]
    fn filter_does_not_touch_viewport() {
        let s = run(
            sample(),
            [
                MapAction::ZoomIn,
                MapAction::ToggleFullscreen,
                MapAction::SetFilter(BuyboxFilter::from_value("tucson")),
                MapAction::SetFilter(BuyboxFilter::All),
            ],
        );
        assert_eq!(s.viewport.zoom, 1.2);
        assert!(s.viewport.fullscreen);
    }

    #[test]
    fn replacing_shapes_keeps_selection() {
        let s = run(
            sample(),
            [
                select("R1"),
                MapAction::ReplaceShapes(Rc::new(vec![shape("R9", Neutral, &[])])),
            ],
        );
        assert_eq!(s.selection.region, Some(RegionId::new("R1")));
        assert_eq!(s.shapes.len(), 1);
    }

    #[test]
    fn state_serializes_without_shapes() {
        let s = run(sample(), [select("R1")]);
        let json = serde_json::to_value(&*s).unwrap();
        assert_eq!(json["viewport"]["zoom"], 1.0);
        assert_eq!(json["selection"]["region"], "R1");
        assert_eq!(json["filter"], "all");
        assert!(json.get("shapes").is_none());
    }
}
