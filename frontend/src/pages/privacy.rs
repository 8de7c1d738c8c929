use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::SiteContent;
use crate::Route;

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    let company = use_context::<Rc<SiteContent>>()
        .map(|content| content.company.clone())
        .unwrap_or_default();

    html! {
        <div class="legal-content privacy-policy">
            <style>
                {r#"
                    .legal-content {
                        min-height: 100vh;
                        background: #1c1a17;
                        color: #f5efe6;
                        padding: 8rem 2rem 4rem;
                        font-family: "Georgia", "Times New Roman", serif;
                    }
                    .legal-content > * {
                        max-width: 720px;
                        margin-left: auto;
                        margin-right: auto;
                    }
                    .legal-content h1 {
                        font-weight: 400;
                        font-size: 2.25rem;
                        margin-bottom: 2.5rem;
                    }
                    .legal-content h2 {
                        color: #d9c3a0;
                        font-weight: 400;
                        font-size: 1.3rem;
                    }
                    .legal-content p,
                    .legal-content li {
                        line-height: 1.7;
                        opacity: 0.8;
                    }
                    .legal-links a {
                        color: #b08d57;
                    }
                "#}
            </style>

            <h1>{"Privacy Policy"}</h1>

            <section>
                <h2>{"1. What this website stores"}</h2>
                <p>{format!("The {} website does not use accounts, cookies or analytics. Nothing you do on this site is stored by us.", company)}</p>
            </section>

            <section>
                <h2>{"2. The consultation form"}</h2>
                <ul>
                    <li>{"The details you enter stay in your browser."}</li>
                    <li>{"Submitting the form shows a confirmation; no data is transmitted."}</li>
                    <li>{"To reach us directly, call or message us on WhatsApp using the details on the contact section."}</li>
                </ul>
            </section>

            <section>
                <h2>{"3. Third parties"}</h2>
                <p>{"Following the WhatsApp link opens a service operated by WhatsApp, which has its own privacy policy."}</p>
            </section>

            <div class="legal-links">
                <Link<Route> to={Route::Home}>{"Back to home"}</Link<Route>>
            </div>
        </div>
    }
}
