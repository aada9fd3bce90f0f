use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct MapControlsProps {
    pub zoom_label: String,
    pub can_zoom_in: bool,
    pub can_zoom_out: bool,
    pub fullscreen: bool,
    pub on_zoom_in: Callback<()>,
    pub on_zoom_out: Callback<()>,
    pub on_toggle_fullscreen: Callback<()>,
}

#[function_component(MapControls)]
pub fn map_controls(props: &MapControlsProps) -> Html {
    let zi = {
        let cb = props.on_zoom_in.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let zo = {
        let cb = props.on_zoom_out.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let fs = {
        let cb = props.on_toggle_fullscreen.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let btn = "width:36px; height:36px; background:#fff; border:1px solid #D1D5DB; border-radius:8px; display:flex; align-items:center; justify-content:center; cursor:pointer; box-shadow:0 1px 2px rgba(0,0,0,0.05);";
    html! {<div style="position:absolute; right:16px; bottom:16px; display:flex; flex-direction:column; align-items:center; gap:4px;">
        <span style="font-size:11px; color:#6B7280; font-variant-numeric:tabular-nums;">{ props.zoom_label.clone() }</span>
        <button style={btn} onclick={zi} disabled={!props.can_zoom_in} aria-label="Zoom in"> {"+"} </button>
        <button style={btn} onclick={zo} disabled={!props.can_zoom_out} aria-label="Zoom out"> {"−"} </button>
        <button style={btn} onclick={fs} aria-label="Toggle fullscreen" aria-pressed={props.fullscreen.to_string()}> { if props.fullscreen { "⤡" } else { "⤢" } } </button>
    </div>}
}
