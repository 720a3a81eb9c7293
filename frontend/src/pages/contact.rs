use std::collections::BTreeMap;

use gloo_net::http::Request;
use log::{error, info};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::notification::{Status, StatusBanner};
use crate::components::ripple::RippleButton;
use crate::config;
use crate::error::{SubmitError, ValidationError};

pub const INTERESTS: [&str; 4] = ["Buying", "Selling", "Renting", "Just browsing"];

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub interest: String,
    pub message: String,
}

impl ContactForm {
    /// Name, email and message are required; phone and interest are not.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::Missing("name"));
        }
        if self.email.trim().is_empty() {
            return Err(ValidationError::Missing("email"));
        }
        if !is_valid_email(self.email.trim()) {
            return Err(ValidationError::InvalidEmail);
        }
        if self.message.trim().is_empty() {
            return Err(ValidationError::Missing("message"));
        }
        Ok(())
    }

    /// Trimmed, non-empty fields keyed by name.
    pub fn fields(&self) -> BTreeMap<String, String> {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("interest", &self.interest),
            ("message", &self.message),
        ]
        .into_iter()
        .filter(|(_, value)| !value.trim().is_empty())
        .map(|(key, value)| (key.to_string(), value.trim().to_string()))
        .collect()
    }
}

fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

/// Sends the form fields to the backend as a JSON object.
pub async fn submit(data: BTreeMap<String, String>) -> Result<(), SubmitError> {
    let response = Request::post(&format!("{}/api/contact", config::get_backend_url()))
        .json(&data)
        .map_err(|e| SubmitError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| SubmitError::Network(e.to_string()))?;

    if response.ok() {
        Ok(())
    } else {
        Err(SubmitError::Rejected(response.status()))
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let form = use_state(ContactForm::default);
    let sending = use_state(|| false);
    let status = use_state(|| None::<Status>);

    let update = |apply: fn(&mut ContactForm, String)| {
        let form = form.clone();
        move |value: String| {
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
        }
    };

    let on_name = {
        let set = update(|f, v| f.name = v);
        Callback::from(move |e: InputEvent| set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_email = {
        let set = update(|f, v| f.email = v);
        Callback::from(move |e: InputEvent| set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_phone = {
        let set = update(|f, v| f.phone = v);
        Callback::from(move |e: InputEvent| set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_interest = {
        let set = update(|f, v| f.interest = v);
        Callback::from(move |e: Event| set(e.target_unchecked_into::<HtmlSelectElement>().value()))
    };
    let on_message = {
        let set = update(|f, v| f.message = v);
        Callback::from(move |e: InputEvent| set(e.target_unchecked_into::<HtmlTextAreaElement>().value()))
    };

    let onsubmit = {
        let form = form.clone();
        let sending = sending.clone();
        let status = status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *sending {
                return;
            }
            if let Err(e) = form.validate() {
                status.set(Some(Status::error(e.to_string())));
                return;
            }

            let data = form.fields();
            let form = form.clone();
            let sending = sending.clone();
            let status = status.clone();
            sending.set(true);
            spawn_local(async move {
                match submit(data).await {
                    Ok(()) => {
                        info!("Contact form sent");
                        form.set(ContactForm::default());
                        status.set(Some(Status::success("Thanks! We'll be in touch within one working day.")));
                    }
                    Err(e) => {
                        error!("Contact form failed: {}", e);
                        status.set(Some(Status::error("Sorry, your message didn't go through. Please try again or call us.")));
                    }
                }
                sending.set(false);
            });
        })
    };

    let on_dismiss = {
        let status = status.clone();
        Callback::from(move |_: ()| status.set(None))
    };

    html! {
        <div class="contact-page">
            <style>
                {r#"
                    .contact-form { max-width: 640px; margin: 0 auto; padding: 0 24px; display: flex; flex-direction: column; gap: 18px; }
                    .contact-form label { display: flex; flex-direction: column; gap: 6px; font-weight: 500; }
                    .contact-form input, .contact-form select, .contact-form textarea { padding: 12px 14px; border-radius: 10px; border: 1px solid rgba(20, 33, 43, 0.2); font: inherit; background: #fff; }
                    .submit-button { align-self: flex-start; padding: 14px 28px; border: none; border-radius: 999px; background: var(--sea); color: #fff; font-size: 1rem; cursor: pointer; }
                    .submit-button:disabled { opacity: 0.6; cursor: default; }
                "#}
            </style>
            <section class="page-hero">
                <h1>{"Book a viewing"}</h1>
                <p>{"Tell us what you're looking for and an agent will get back to you."}</p>
            </section>

            <form class="contact-form" {onsubmit} novalidate=true>
                <label>
                    {"Name"}
                    <input type="text" value={form.name.clone()} oninput={on_name} />
                </label>
                <label>
                    {"Email"}
                    <input type="email" value={form.email.clone()} oninput={on_email} />
                </label>
                <label>
                    {"Phone (optional)"}
                    <input type="tel" value={form.phone.clone()} oninput={on_phone} />
                </label>
                <label>
                    {"I'm interested in"}
                    <select onchange={on_interest}>
                        <option value="" selected={form.interest.is_empty()}>{"Choose one"}</option>
                        {
                            INTERESTS.iter().map(|interest| html! {
                                <option value={*interest} selected={form.interest == *interest}>{*interest}</option>
                            }).collect::<Html>()
                        }
                    </select>
                </label>
                <label>
                    {"Message"}
                    <textarea rows="5" value={form.message.clone()} oninput={on_message} />
                </label>
                <RippleButton kind="submit" class="submit-button" disabled={*sending}>
                    { if *sending { "Sending..." } else { "Send message" } }
                </RippleButton>
            </form>

            <StatusBanner status={(*status).clone()} {on_dismiss} />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            phone: String::new(),
            interest: "Buying".to_string(),
            message: "Two bedrooms near the water please".to_string(),
        }
    }

    #[test]
    fn test_valid_form_passes() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn test_missing_required_fields() {
        let form = ContactForm { name: "  ".to_string(), ..filled() };
        assert_eq!(form.validate(), Err(ValidationError::Missing("name")));

        let form = ContactForm { email: String::new(), ..filled() };
        assert_eq!(form.validate(), Err(ValidationError::Missing("email")));

        let form = ContactForm { message: String::new(), ..filled() };
        assert_eq!(form.validate(), Err(ValidationError::Missing("message")));
    }

    #[test]
    fn test_malformed_email_rejected() {
        for email in ["ada", "ada@", "@example.com", "ada@example", "ada@.com", "ada@@example.com", "a da@example.com"] {
            let form = ContactForm { email: email.to_string(), ..filled() };
            assert_eq!(form.validate(), Err(ValidationError::InvalidEmail), "{}", email);
        }
    }

    #[test]
    fn test_optional_fields_may_be_empty() {
        let form = ContactForm { interest: String::new(), ..filled() };
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn test_fields_skip_empty_and_trim() {
        let form = ContactForm { name: " Ada ".to_string(), ..filled() };
        let fields = form.fields();
        assert_eq!(fields.get("name").map(String::as_str), Some("Ada"));
        assert!(!fields.contains_key("phone"));
        assert_eq!(fields.len(), 4);
    }

    #[test]
    fn test_payload_is_flat_json_object() {
        let json = serde_json::to_value(filled().fields()).unwrap();
        assert_eq!(json["email"], "ada@example.com");
        assert_eq!(json["interest"], "Buying");
        assert!(json.get("phone").is_none());
    }
}
