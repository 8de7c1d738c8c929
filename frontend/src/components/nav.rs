use std::rc::Rc;

use yew::prelude::*;

use crate::content::SiteContent;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub content: Rc<SiteContent>,
    pub scrolled: bool,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { content, scrolled } = props;
    let links = &content.nav;
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Anchor navigation still happens; only the mobile menu closes.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    html! {
        <nav class={classes!("site-nav", scrolled.then(|| "scrolled"))}>
            <a href="#" class="logo">{content.logo.clone()}</a>
            <button class="burger-menu" aria-label="Menu" onclick={toggle_menu}>
                <span></span>
                <span></span>
                <span></span>
            </button>
            <ul class={classes!("nav-links", menu_open.then(|| "open"))}>
                { for links.iter().map(|link| html! {
                    <li key={link.anchor.clone()}>
                        <a href={format!("#{}", link.anchor)} onclick={close_menu.clone()}>{link.label.clone()}</a>
                    </li>
                }) }
            </ul>
        </nav>
    }
}
