use super::{
    detail_panel::DetailPanel, filter_select::FilterSelect, map_controls::MapControls,
    map_legend::MapLegend, region_layer::RegionLayer,
};
use crate::config::MapConfig;
use crate::model::RegionId;
use crate::panel::bind_panel;
use crate::state::{BuyboxFilter, MapAction, MapState, key_action};
use std::rc::Rc;
use web_sys::{FocusEvent, HtmlSelectElement, KeyboardEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PerformanceMapProps {
    pub config: Rc<MapConfig>,
    #[prop_or_default]
    pub on_selection_change: Callback<Option<RegionId>>,
    #[prop_or_default]
    pub on_filter_change: Callback<BuyboxFilter>,
    #[prop_or_default]
    pub on_add_to_buybox: Callback<RegionId>,
}

#[function_component]
pub fn PerformanceMap(props: &PerformanceMapProps) -> Html {
    let shapes = use_memo(props.config.clone(), |cfg| cfg.shapes.clone());
    let metrics = use_memo(props.config.clone(), |cfg| cfg.metrics_table());
    let state = {
        let shapes = shapes.clone();
        use_reducer(move || MapState::new(shapes))
    };

    // Config swapped by the host: keep the selection, re-point the shapes.
    {
        let state = state.clone();
        use_effect_with(shapes.clone(), move |shapes| {
            if !Rc::ptr_eq(&state.shapes, shapes) {
                state.dispatch(MapAction::ReplaceShapes(shapes.clone()));
            }
            || ()
        });
    }
    {
        let cb = props.on_selection_change.clone();
        use_effect_with(state.selection.region.clone(), move |region| {
            cb.emit(region.clone());
            || ()
        });
    }
    {
        let cb = props.on_filter_change.clone();
        use_effect_with(state.filter.clone(), move |filter| {
            cb.emit(filter.clone());
            || ()
        });
    }

    let dispatcher = |action: MapAction| {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(action.clone()))
    };

    let onkeydown = {
        let state = state.clone();
        Callback::from(move |e: KeyboardEvent| {
            let key = e.key();
            // The buybox dropdown keeps its own keys (type-ahead, arrows).
            let in_control = e.target_dyn_into::<HtmlSelectElement>().is_some();
            if state.viewport.focused && !in_control && key_action(&key).is_some() {
                e.prevent_default();
            }
            state.dispatch(MapAction::Key { key, in_control });
        })
    };
    let onfocusin = {
        let state = state.clone();
        Callback::from(move |_: FocusEvent| state.dispatch(MapAction::Focus))
    };
    let onfocusout = {
        let state = state.clone();
        Callback::from(move |_: FocusEvent| state.dispatch(MapAction::Blur))
    };
    let on_select = {
        let state = state.clone();
        Callback::from(move |id: RegionId| state.dispatch(MapAction::Select(id)))
    };
    let on_filter = {
        let state = state.clone();
        Callback::from(move |f: BuyboxFilter| state.dispatch(MapAction::SetFilter(f)))
    };

    let panel = bind_panel(
        state.selection.region.as_ref(),
        &state.shapes,
        &*metrics,
        &state.filter,
    );
    let viewport = &state.viewport;

    html! {
        <div style={viewport.container_css()} tabindex="0" {onkeydown} {onfocusin} {onfocusout}>
            <div style="display:flex; align-items:center; justify-content:space-between; padding:16px; border-bottom:1px solid #E5E7EB;">
                <div style="display:flex; align-items:center; gap:12px;">
                    <h3 style="margin:0; font-size:18px; font-weight:600; color:#111827;">{"Performance by Zip Code"}</h3>
                    <span title="A ZIP is outperforming when your % of deals in that ZIP is greater than the market's % of deals in that ZIP." style="font-size:12px; color:#6B7280; padding:4px 8px; background:#F3F4F6; border-radius:4px;">
                        {"What does outperforming the market mean?"}
                    </span>
                </div>
                <FilterSelect options={props.config.filters.clone()} current={state.filter.clone()} on_change={on_filter} />
            </div>
            <div style={if viewport.fullscreen { "position:relative; height:calc(100% - 69px); background:#F3F4F6; overflow:hidden;" } else { "position:relative; height:420px; background:#F3F4F6; overflow:hidden;" }}>
                <RegionLayer
                    shapes={state.shapes.clone()}
                    filter={state.filter.clone()}
                    selection={state.selection.clone()}
                    transform={viewport.transform_css()}
                    {on_select}
                />
                <DetailPanel
                    view={panel}
                    on_close={dispatcher(MapAction::ClearSelection)}
                    on_add_to_buybox={props.on_add_to_buybox.clone()}
                />
                <MapLegend />
                <MapControls
                    zoom_label={viewport.zoom_percent()}
                    can_zoom_in={viewport.can_zoom_in()}
                    can_zoom_out={viewport.can_zoom_out()}
                    fullscreen={viewport.fullscreen}
                    on_zoom_in={dispatcher(MapAction::ZoomIn)}
                    on_zoom_out={dispatcher(MapAction::ZoomOut)}
                    on_toggle_fullscreen={dispatcher(MapAction::ToggleFullscreen)}
                />
            </div>
        </div>
    }
}
