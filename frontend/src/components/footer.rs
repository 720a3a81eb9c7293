use chrono::{Datelike, Local};
use log::warn;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::clipboard;
use crate::components::notification::{Status, StatusBanner};
use crate::config;
use crate::Route;

#[derive(Properties, PartialEq)]
struct CopyButtonProps {
    label: &'static str,
    value: &'static str,
    on_status: Callback<Status>,
}

#[function_component(CopyButton)]
fn copy_button(props: &CopyButtonProps) -> Html {
    let onclick = {
        let label = props.label;
        let value = props.value;
        let on_status = props.on_status.clone();
        Callback::from(move |_: MouseEvent| {
            let on_status = on_status.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match clipboard::copy_text(value).await {
                    Ok(()) => on_status.emit(Status::success(format!("{} copied to clipboard", label))),
                    Err(e) => {
                        warn!("Copy failed: {}", e);
                        on_status.emit(Status::error(format!("Couldn't copy the {}, it's {}", label.to_lowercase(), value)));
                    }
                }
            });
        })
    };

    html! {
        <button class="copy-button" {onclick} title={format!("Copy {}", props.label.to_lowercase())}>
            <span class="copy-value">{props.value}</span>
            <span class="copy-hint">{"Copy"}</span>
        </button>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let status = use_state(|| None::<Status>);
    let year = Local::now().year();

    let on_status = {
        let status = status.clone();
        Callback::from(move |s: Status| status.set(Some(s)))
    };
    let on_dismiss = {
        let status = status.clone();
        Callback::from(move |_: ()| status.set(None))
    };

    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <div class="footer-brand">
                    <span class="footer-logo">{"Harborline"}</span>
                    <p>{"Homes by the water, sold with care."}</p>
                </div>
                <div class="footer-contact">
                    <CopyButton label="Email" value={config::CONTACT_EMAIL} on_status={on_status.clone()} />
                    <CopyButton label="Phone" value={config::CONTACT_PHONE} on_status={on_status} />
                </div>
                <nav class="footer-links">
                    <Link<Route> to={Route::Listings}>{"Listings"}</Link<Route>>
                    <Link<Route> to={Route::Faq}>{"FAQ"}</Link<Route>>
                    <Link<Route> to={Route::Contact}>{"Contact"}</Link<Route>>
                </nav>
            </div>
            <p class="footer-legal">{format!("© {} Harborline Estates", year)}</p>
            <StatusBanner status={(*status).clone()} {on_dismiss} />
        </footer>
    }
}
