use yew::prelude::*;

use crate::config::DEFAULT_COUNTER_DURATION_SECS;
use crate::hooks::counter::use_counter;
use crate::hooks::in_view::use_in_view;
use crate::motion::entry::ViewportMargin;

#[derive(Properties, PartialEq)]
pub struct CounterProps {
    pub target: i32,
    #[prop_or(DEFAULT_COUNTER_DURATION_SECS)]
    pub duration: f64,
}

#[function_component(Counter)]
pub fn counter(props: &CounterProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), ViewportMargin::NONE, true);
    let value = use_counter(props.target, props.duration, in_view);

    html! {
        <span ref={node}>{format!("{}+", value)}</span>
    }
}
