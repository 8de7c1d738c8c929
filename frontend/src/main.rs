use std::rc::Rc;

use log::{error, info, warn};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod contact;
mod content;
mod dom;
mod motion {
    pub mod counter;
    pub mod entry;
    pub mod region;
    pub mod reveal;
    pub mod scroll;
    pub mod sequencer;
    pub mod variants;
}
mod hooks {
    pub mod counter;
    pub mod in_view;
    pub mod listener;
    pub mod region;
    pub mod scroll;
}
mod components {
    pub mod before_after;
    pub mod brick_wall;
    pub mod contact_form;
    pub mod counter;
    pub mod motion_box;
    pub mod nav;
}
mod pages {
    pub mod home;
    pub mod privacy;
}

use content::SiteContent;
use pages::{home::Home, privacy::PrivacyPolicy};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/privacy")]
    Privacy,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        }
        Route::NotFound => {
            info!("Unknown route, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    let content = use_state(|| SiteContent::load().map(Rc::new));

    {
        let metadata = (*content).as_ref().ok().map(|c| c.metadata.clone());
        use_effect_with_deps(
            move |metadata| {
                if let Some(metadata) = metadata {
                    let applied = dom::set_title(&metadata.title)
                        .and_then(|_| dom::set_meta_description(&metadata.description));
                    if let Err(err) = applied {
                        warn!("could not apply page metadata: {}", err);
                    }
                }
                || ()
            },
            metadata,
        );
    }

    match &*content {
        Ok(content) => html! {
            <ContextProvider<Rc<SiteContent>> context={content.clone()}>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </ContextProvider<Rc<SiteContent>>>
        },
        Err(err) => {
            error!("site content failed to load: {}", err);
            html! {
                <div class="content-error">
                    <p>{"This page is temporarily unavailable."}</p>
                </div>
            }
        }
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(err) = console_log::init_with_level(config::log_level()) {
        // Logging is best effort; the site works without it.
        gloo_console::warn!("error initializing log:", err.to_string());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
