use yew::prelude::*;

use crate::config;
use crate::motion::hooks::use_pointer_effect;
use crate::motion::pointer::PointerEffect;

#[derive(Properties, PartialEq)]
pub struct MagneticProps {
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Wrapper whose content leans toward the pointer while hovered.
#[function_component(Magnetic)]
pub fn magnetic(props: &MagneticProps) -> Html {
    let host = use_node_ref();
    let pointer = use_pointer_effect(
        host.clone(),
        Some(".magnetic-target"),
        PointerEffect::Magnetic { strength: config::MAGNETIC_STRENGTH },
    );

    html! {
        <div
            ref={host}
            class={classes!("magnetic", props.class.clone())}
            onmousemove={pointer.onmousemove}
            onmouseleave={pointer.onmouseleave}
        >
            <div class="magnetic-target">
                { for props.children.iter() }
            </div>
        </div>
    }
}
