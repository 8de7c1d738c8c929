use log::warn;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::contact::{self, ContactRequest, Submission};
use crate::dom;

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub acknowledgment: AttrValue,
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let name = use_state(String::new);
    let phone = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);
    let acknowledged = use_state(|| false);

    let onsubmit = {
        let name = name.clone();
        let phone = phone.clone();
        let email = email.clone();
        let message = message.clone();
        let acknowledged = acknowledged.clone();
        let acknowledgment = props.acknowledgment.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = ContactRequest::new(&name, &phone, &email, &message);
            if let Ok(payload) = serde_json::to_string(&request) {
                gloo_console::log!("Consultation request:", payload);
            }

            match contact::submit(&request) {
                Submission::Acknowledged => {
                    if let Err(err) = dom::window().and_then(|w| w.alert_with_message(&acknowledgment).map_err(Into::into)) {
                        warn!("could not show acknowledgment dialog: {}", err);
                    }
                    for field in [&name, &phone, &email, &message] {
                        field.set(String::new());
                    }
                    acknowledged.set(true);
                }
            }
        })
    };

    let input_setter = |field: &UseStateHandle<String>| {
        let field = field.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            field.set(input.value());
        })
    };

    let onmessage = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(input.value());
        })
    };

    html! {
        <form class="contact-form" {onsubmit}>
            <div class="form-group">
                <label for="contact-name">{"Your Name"}</label>
                <input id="contact-name" type="text" placeholder="Enter your name" required={true}
                    value={(*name).clone()} oninput={input_setter(&name)} />
            </div>

            <div class="form-group">
                <label for="contact-phone">{"Phone Number"}</label>
                <input id="contact-phone" type="tel" placeholder="+971 XX XXX XXXX" required={true}
                    value={(*phone).clone()} oninput={input_setter(&phone)} />
            </div>

            <div class="form-group">
                <label for="contact-email">{"Email Address"}</label>
                <input id="contact-email" type="email" placeholder="your@email.com"
                    value={(*email).clone()} oninput={input_setter(&email)} />
            </div>

            <div class="form-group">
                <label for="contact-message">{"Tell us about your property"}</label>
                <textarea id="contact-message"
                    placeholder="Property location, size, current condition, and what you'd like to achieve..."
                    value={(*message).clone()} oninput={onmessage} />
            </div>

            <button type="submit" class="submit-btn">
                {"Request Free Consultation"}
            </button>

            {
                if *acknowledged {
                    html! { <p class="form-acknowledgment">{props.acknowledgment.clone()}</p> }
                } else {
                    html! {}
                }
            }
        </form>
    }
}
