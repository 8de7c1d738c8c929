use yew::prelude::*;

use crate::motion::reveal::{RevealLabel, RevealView};

#[derive(Properties, PartialEq)]
pub struct BeforeAfterProps {
    pub before_src: AttrValue,
    pub after_src: AttrValue,
}

fn hover_setter<E: 'static>(hovered: &UseStateHandle<bool>, value: bool) -> Callback<E> {
    let hovered = hovered.clone();
    Callback::from(move |_: E| hovered.set(value))
}

/// Two stacked photos; hovering, focusing or tapping fades the "after" photo in.
#[function_component(BeforeAfterReveal)]
pub fn before_after_reveal(props: &BeforeAfterProps) -> Html {
    let hovered = use_state_eq(|| false);
    let view = RevealView::from_hover(*hovered);

    let onmouseenter: Callback<MouseEvent> = hover_setter(&hovered, true);
    let onmouseleave: Callback<MouseEvent> = hover_setter(&hovered, false);
    let onfocus: Callback<FocusEvent> = hover_setter(&hovered, true);
    let onblur: Callback<FocusEvent> = hover_setter(&hovered, false);
    let ontouchstart = {
        let hovered = hovered.clone();
        Callback::from(move |_: TouchEvent| hovered.set(!*hovered))
    };

    let label_class = |label: RevealLabel, name: &'static str| {
        classes!("ba-reveal-label", name, view.is_emphasized(label).then(|| "active"))
    };

    html! {
        <div class="ba-reveal" tabindex="0" {onmouseenter} {onmouseleave} {onfocus} {onblur} {ontouchstart}>
            <style>
                {r#"
                    .ba-reveal {
                        position: relative;
                        width: 100%;
                        aspect-ratio: 16 / 9;
                        border-radius: 8px;
                        overflow: hidden;
                        cursor: pointer;
                        outline: none;
                    }
                    .ba-reveal-before,
                    .ba-reveal-after {
                        position: absolute;
                        inset: 0;
                    }
                    .ba-reveal-after {
                        transition: opacity 0.6s ease;
                    }
                    .ba-reveal img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .ba-reveal-label {
                        position: absolute;
                        bottom: 1.5rem;
                        padding: 0.4rem 1rem;
                        font-size: 0.8rem;
                        letter-spacing: 0.15em;
                        text-transform: uppercase;
                        color: #fff;
                        background: rgba(0, 0, 0, 0.35);
                        opacity: 0.45;
                        transition: opacity 0.4s ease, background 0.4s ease;
                    }
                    .ba-reveal-label.before { left: 1.5rem; }
                    .ba-reveal-label.after { right: 1.5rem; }
                    .ba-reveal-label.active {
                        opacity: 1;
                        background: #b08d57;
                    }
                "#}
            </style>
            <div class="ba-reveal-before">
                <img src={props.before_src.clone()} alt="Before renovation" />
            </div>
            <div class="ba-reveal-after" style={format!("opacity: {};", view.after_opacity)}>
                <img src={props.after_src.clone()} alt="After renovation" />
            </div>
            <div class={label_class(RevealLabel::Before, "before")}>{"Before"}</div>
            <div class={label_class(RevealLabel::After, "after")}>{"After"}</div>
        </div>
    }
}
