use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::debug;
use yew::prelude::*;

use crate::config;
use crate::motion::counter::{CounterState, Tick};

pub enum CounterAction {
    Trigger,
    Tick,
}

impl Reducible for CounterState {
    type Action = CounterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            CounterAction::Trigger => {
                if self.has_triggered() {
                    return self;
                }
                next.trigger();
            }
            CounterAction::Tick => {
                if !self.is_running() {
                    return self;
                }
                if let Tick::Done(value) = next.tick() {
                    debug!("counter finished at {}", value);
                }
            }
        }
        Rc::new(next)
    }
}

/// Counts from 0 up to `target` over `duration_secs`, starting once `triggered` is true.
#[hook]
pub fn use_counter(target: i32, duration_secs: f64, triggered: bool) -> i32 {
    let counter = use_reducer(|| CounterState::new(target, duration_secs));

    {
        let dispatcher = counter.dispatcher();
        use_effect_with_deps(
            move |triggered| {
                if *triggered {
                    dispatcher.dispatch(CounterAction::Trigger);
                }
                || ()
            },
            triggered,
        );
    }

    // The interval lives exactly as long as the counter is running; finishing or
    // unmounting drops it, which clears the browser timer.
    let running = counter.is_running();
    {
        let dispatcher = counter.dispatcher();
        use_effect_with_deps(
            move |running| {
                let interval = running.then(|| {
                    Interval::new(config::tick_interval_ms(), move || {
                        dispatcher.dispatch(CounterAction::Tick);
                    })
                });
                move || drop(interval)
            },
            running,
        );
    }

    counter.displayed()
}
