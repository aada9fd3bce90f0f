use crate::state::filter::dropdown_options;
use crate::state::{BuyboxFilter, FilterOption};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct FilterSelectProps {
    pub options: Vec<FilterOption>,
    pub current: BuyboxFilter,
    pub on_change: Callback<BuyboxFilter>,
}

#[function_component]
pub fn FilterSelect(props: &FilterSelectProps) -> Html {
    let onchange = {
        let cb = props.on_change.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                cb.emit(BuyboxFilter::from_value(&select.value()));
            }
        })
    };
    let current = props.current.value().to_string();
    html! {
        <select {onchange} style="padding:6px 12px; font-size:14px; color:#374151; background:#fff; border:1px solid #D1D5DB; border-radius:8px; outline:none;">
            { for dropdown_options(&props.options).into_iter().map(|opt| {
                let selected = opt.value == current;
                html! { <option value={opt.value.clone()} {selected}>{ opt.label }</option> }
            }) }
        </select>
    }
}
