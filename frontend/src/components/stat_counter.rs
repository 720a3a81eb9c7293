use yew::prelude::*;

use crate::motion::hooks::use_counter;

#[derive(Properties, PartialEq)]
pub struct StatCounterProps {
    /// Final text, e.g. "1,200+". Text without a number is shown as is.
    pub value: AttrValue,
    pub label: AttrValue,
}

#[function_component(StatCounter)]
pub fn stat_counter(props: &StatCounterProps) -> Html {
    let node = use_node_ref();
    use_counter(node.clone(), props.value.clone());

    html! {
        <div class="stat reveal-item">
            <span ref={node} class="stat-value"></span>
            <span class="stat-label">{&props.label}</span>
        </div>
    }
}
