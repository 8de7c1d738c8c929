use yew::prelude::*;

use crate::components::counter::Counter;
use crate::components::motion_box::{MotionBox, Trigger};
use crate::config::{BRICK_DURATION_SECS, BRICK_MARGIN_PX};
use crate::content::{Brick, BrickKind};
use crate::motion::entry::ViewportMargin;
use crate::motion::sequencer::{Stagger, Transition};

#[derive(Properties, PartialEq)]
pub struct BrickWallProps {
    pub rows: Vec<Vec<Brick>>,
}

/// Stats and words laid out as a brick wall; every brick flies in on its own, cascading
/// row by row and left to right.
#[function_component(BrickWall)]
pub fn brick_wall(props: &BrickWallProps) -> Html {
    html! {
        <div class="brick-wall">
            { for props.rows.iter().enumerate().map(|(row, bricks)| html! {
                <div key={row} class={classes!("brick-row", (row % 2 == 1).then(|| "offset"))}>
                    { for bricks.iter().enumerate().map(|(column, brick)| {
                        let transition = Transition::new(BRICK_DURATION_SECS).staggered(Stagger::at(row, column));
                        html! {
                            <MotionBox
                                key={column}
                                variant={brick.animation}
                                {transition}
                                trigger={Trigger::InView(ViewportMargin(BRICK_MARGIN_PX))}
                                class={classes!(brick.kind.class())}
                            >
                                { brick_body(&brick.kind) }
                            </MotionBox>
                        }
                    }) }
                </div>
            }) }
        </div>
    }
}

fn brick_body(kind: &BrickKind) -> Html {
    match kind {
        BrickKind::Empty => html! {},
        BrickKind::Word { text } => html! { {text.clone()} },
        BrickKind::Stat { number, label } => html! {
            <>
                <div class="brick-number"><Counter target={*number} /></div>
                <div class="brick-label">{label.clone()}</div>
            </>
        },
    }
}
