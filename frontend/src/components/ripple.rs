use yew::prelude::*;
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};

use crate::config;
use crate::motion::dom::DomSurface;
use crate::motion::pointer::ripple_geometry;
use crate::motion::surface::Surface;

#[derive(Properties, PartialEq)]
pub struct RippleButtonProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    #[prop_or("button")]
    pub kind: &'static str,
    #[prop_or_default]
    pub disabled: bool,
    pub children: Children,
}

/// Button that spreads a ripple from the click point.
#[function_component(RippleButton)]
pub fn ripple_button(props: &RippleButtonProps) -> Html {
    let button = use_node_ref();

    let onclick = {
        let button = button.clone();
        let onclick = props.onclick.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(host) = button.cast::<HtmlElement>() {
                spawn_ripple(&host, f64::from(e.client_x()), f64::from(e.client_y()));
            }
            onclick.emit(e);
        })
    };

    html! {
        <button
            ref={button}
            type={props.kind}
            class={classes!("ripple-button", props.class.clone())}
            disabled={props.disabled}
            {onclick}
        >
            { for props.children.iter() }
        </button>
    }
}

fn spawn_ripple(host: &HtmlElement, x: f64, y: f64) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(ripple) = document
        .create_element("span")
        .ok()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };

    let geometry = ripple_geometry(DomSurface.bounds(host), x, y);
    DomSurface.add_class(&ripple, "ripple");
    DomSurface.set_style(&ripple, "width", &format!("{}px", geometry.size));
    DomSurface.set_style(&ripple, "height", &format!("{}px", geometry.size));
    DomSurface.set_style(&ripple, "left", &format!("{}px", geometry.left));
    DomSurface.set_style(&ripple, "top", &format!("{}px", geometry.top));

    if host.append_child(&ripple).is_err() {
        return;
    }
    Timeout::new(config::RIPPLE_LIFETIME_MS, move || ripple.remove()).forget();
}
