use crate::model::PerformanceClass;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LegendRowProps {
    pub performance: PerformanceClass,
}

#[function_component(LegendRow)]
pub fn legend_row(props: &LegendRowProps) -> Html {
    html! { <div style="display:flex; align-items:center; gap:6px;"> <span style={format!("display:inline-block; width:12px; height:12px; background:{}; border-radius:3px;", props.performance.fill())}></span> <span style="color:#4B5563;">{ props.performance.label() }</span> </div> }
}

#[function_component]
pub fn MapLegend() -> Html {
    html! {<div style="position:absolute; left:16px; bottom:16px; display:flex; align-items:center; gap:16px; padding:8px 12px; background:rgba(255,255,255,0.9); border-radius:8px; font-size:12px;">
        <LegendRow performance={PerformanceClass::Outperforming} />
        <LegendRow performance={PerformanceClass::Underperforming} />
        <LegendRow performance={PerformanceClass::Neutral} />
    </div>}
}
