use gloo_timers::callback::Interval;
use web_sys::js_sys::Date;
use yew::prelude::*;

use crate::config;
use crate::hooks::in_view::use_in_view;
use crate::motion::entry::ViewportMargin;
use crate::motion::sequencer::{Phase, Transition};
use crate::motion::variants::VariantKind;

/// What starts an element's entry animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Trigger {
    /// As soon as the element mounts.
    Mount,
    /// The first time the element enters the viewport.
    InView(ViewportMargin),
}

#[derive(Properties, PartialEq)]
pub struct MotionBoxProps {
    pub variant: VariantKind,
    pub transition: Transition,
    #[prop_or(Trigger::InView(ViewportMargin::NONE))]
    pub trigger: Trigger,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Plays `variant` from hidden to visible exactly once, sampling one frame per tick.
#[function_component(MotionBox)]
pub fn motion_box(props: &MotionBoxProps) -> Html {
    let node = use_node_ref();
    let (margin, watch) = match props.trigger {
        Trigger::InView(margin) => (margin, true),
        Trigger::Mount => (ViewportMargin::NONE, false),
    };
    let in_view = use_in_view(node.clone(), margin, watch);
    let triggered = !watch || in_view;

    let phase = use_state_eq(Phase::default);
    let progress = use_state_eq(|| 0.0_f64);

    {
        let phase = phase.clone();
        use_effect_with_deps(
            move |triggered| {
                let mut next = *phase;
                if *triggered && next.enter() {
                    phase.set(next);
                }
                || ()
            },
            triggered,
        );
    }

    // The ticker only exists while animating; settling changes the phase, which drops it.
    {
        let phase = phase.clone();
        let progress = progress.clone();
        let transition = props.transition;
        let current_phase = *phase;
        use_effect_with_deps(
            move |current| {
                let ticker = (*current == Phase::Animating).then(|| {
                    let started = Date::now();
                    Interval::new(config::tick_interval_ms(), move || {
                        let elapsed_secs = (Date::now() - started) / 1000.0;
                        progress.set(transition.progress_at(elapsed_secs));
                        if transition.is_settled_at(elapsed_secs) {
                            let mut settled = Phase::Animating;
                            settled.settle();
                            phase.set(settled);
                        }
                    })
                });
                move || drop(ticker)
            },
            current_phase,
        );
    }

    let frame = props.variant.variant().sample(phase.frame_progress(*progress));
    let mut style = frame.to_css();
    if *phase == Phase::Animating {
        style.push_str(" will-change: opacity, transform;");
    }

    let phase_name = match *phase {
        Phase::Hidden => "hidden",
        Phase::Animating => "animating",
        Phase::Visible => "visible",
    };

    html! {
        <div ref={node} class={classes!("motion", props.class.clone())} data-phase={phase_name} {style}>
            { for props.children.iter() }
        </div>
    }
}
