use crate::model::{RegionId, RegionShape};
use crate::state::{BuyboxFilter, Selection};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct RegionLayerProps {
    pub shapes: Rc<Vec<RegionShape>>,
    pub filter: BuyboxFilter,
    pub selection: Selection,
    pub transform: String,
    pub on_select: Callback<RegionId>,
}

// Each shape is its own click target; no coordinate hit-testing here.
#[function_component]
pub fn RegionLayer(props: &RegionLayerProps) -> Html {
    html! {
        <svg viewBox="0 0 800 420" style={format!("display:block; width:100%; height:100%; {}", props.transform)}>
            <rect width="800" height="420" fill="#E5E7EB" />
            { for props.shapes.iter().map(|shape| {
                let eligible = props.filter.admits(shape);
                let selected = props.selection.is_selected(&shape.id);
                let onclick = eligible.then(|| {
                    let cb = props.on_select.clone();
                    let id = shape.id.clone();
                    Callback::from(move |_: MouseEvent| cb.emit(id.clone()))
                });
                let opacity = match (eligible, selected) {
                    (false, _) => "0.25",
                    (true, true) => "1",
                    (true, false) => "0.7",
                };
                let cursor = if eligible { "cursor:pointer;" } else { "cursor:default;" };
                html! {
                    <path
                        key={shape.id.as_str().to_string()}
                        d={shape.path.clone()}
                        fill={shape.performance.fill()}
                        opacity={opacity}
                        stroke={if selected { "#1D4ED8" } else { "none" }}
                        stroke-width="3"
                        style={cursor}
                        {onclick}
                    >
                        <title>{ format!("ZIP {}", shape.id) }</title>
                    </path>
                }
            }) }
        </svg>
    }
}
