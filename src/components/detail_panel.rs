use crate::model::RegionId;
use crate::panel::{PanelDetails, PanelView};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct DetailPanelProps {
    pub view: PanelView,
    pub on_close: Callback<()>,
    pub on_add_to_buybox: Callback<RegionId>,
}

const PANEL_STYLE: &str = "position:absolute; top:16px; left:16px; width:300px; background:#fff; \
    border:1px solid #E5E7EB; border-radius:12px; box-shadow:0 10px 15px rgba(0,0,0,0.1); \
    overflow:hidden; font-size:14px; color:#111827;";
const HEADER_STYLE: &str = "padding:16px; border-bottom:1px solid #F3F4F6;";
const TITLE_ROW_STYLE: &str = "display:flex; align-items:center; justify-content:space-between;";
const CLOSE_STYLE: &str = "padding:4px; color:#9CA3AF; background:none; border:none; cursor:pointer;";

#[function_component]
pub fn DetailPanel(props: &DetailPanelProps) -> Html {
    if !props.view.is_visible() {
        return html! {};
    }
    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let close_btn = html! { <button onclick={close_cb} style={CLOSE_STYLE} aria-label="Close">{"✕"}</button> };

    match &props.view {
        PanelView::Hidden => html! {},
        PanelView::NoData { region } => html! {
            <div style={PANEL_STYLE}>
                <div style={HEADER_STYLE}>
                    <div style={TITLE_ROW_STYLE}>
                        <h4 style="margin:0; font-weight:600;">{ format!("ZIP {}", region) }</h4>
                        { close_btn }
                    </div>
                </div>
                <div style="padding:16px; color:#6B7280;">{"No data available for this region."}</div>
            </div>
        },
        PanelView::Details(details) => {
            let add_cb = {
                let cb = props.on_add_to_buybox.clone();
                let id = details.region.clone();
                Callback::from(move |_| cb.emit(id.clone()))
            };
            html! {
                <div style={PANEL_STYLE}>
                    <div style={HEADER_STYLE}>
                        <div style={TITLE_ROW_STYLE}>
                            <h4 style="margin:0; font-weight:600;">{ format!("ZIP {}", details.zip_code) }</h4>
                            { close_btn }
                        </div>
                        { badge(details) }
                        { if !details.in_filter {
                            html! { <div style="margin-top:6px; font-size:11px; color:#9CA3AF;">{"Outside the selected buybox"}</div> }
                        } else { html! {} } }
                    </div>
                    <div style="padding:16px; display:flex; flex-direction:column; gap:8px; max-height:280px; overflow-y:auto;">
                        { for details.rows.iter().map(|row| html! {
                            <div key={row.label} style="display:flex; justify-content:space-between; gap:12px;">
                                <span style="color:#6B7280;">{ row.label }</span>
                                { if row.link {
                                    html! { <a href="#" style="color:#2563EB; font-weight:500;">{ row.value.clone() }</a> }
                                } else {
                                    html! { <span style="font-weight:500;">{ row.value.clone() }</span> }
                                } }
                            </div>
                        }) }
                    </div>
                    <div style="padding:16px; border-top:1px solid #F3F4F6;">
                        <button onclick={add_cb} style="width:100%; padding:8px 16px; font-size:14px; font-weight:500; color:#fff; background:#2563EB; border:none; border-radius:8px; cursor:pointer;">{"Add to buybox"}</button>
                    </div>
                </div>
            }
        }
    }
}

fn badge(details: &PanelDetails) -> Html {
    let (bg, fg) = details.performance.badge_colors();
    html! {
        <span style={format!("display:inline-block; margin-top:4px; padding:2px 8px; font-size:12px; font-weight:500; border-radius:4px; background:{bg}; color:{fg};")}>
            { details.performance.label() }
        </span>
    }
}
