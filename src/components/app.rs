use super::performance_map::PerformanceMap;
use crate::config::MapConfig;
use crate::model::RegionId;
use crate::state::BuyboxFilter;
use std::rc::Rc;
use yew::prelude::*;

// Shell: loads map data once and logs what the map emits.
#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| match MapConfig::sample() {
        Ok(cfg) => Some(Rc::new(cfg)),
        Err(err) => {
            log::error!("failed to load map config: {err}");
            None
        }
    });

    let on_selection_change = Callback::from(|region: Option<RegionId>| match region {
        Some(id) => log::info!("selected region {id}"),
        None => log::debug!("selection cleared"),
    });
    let on_filter_change = Callback::from(|filter: BuyboxFilter| {
        log::info!("buybox filter: {filter}");
    });
    let on_add_to_buybox = Callback::from(|id: RegionId| {
        log::info!("add to buybox requested for region {id}");
    });

    let content = match (*config).clone() {
        Some(config) => html! { <PerformanceMap
            {config}
            {on_selection_change}
            {on_filter_change}
            {on_add_to_buybox}
        /> },
        None => html! {
            <div style="padding:24px; background:#fff; border-radius:12px; color:#6B7280;">
                {"Map data unavailable."}
            </div>
        },
    };

    html! { <div id="root" style="padding:24px; background:#F9FAFB; min-height:100vh; font-family:system-ui, sans-serif;">{ content }</div> }
}
