use yew::prelude::*;

use crate::config;
use crate::listings::Listing;
use crate::motion::hooks::use_pointer_effect;
use crate::motion::pointer::PointerEffect;

#[derive(Properties, PartialEq)]
pub struct PropertyCardProps {
    pub listing: Listing,
}

#[function_component(PropertyCard)]
pub fn property_card(props: &PropertyCardProps) -> Html {
    let host = use_node_ref();
    let pointer = use_pointer_effect(
        host.clone(),
        Some(".card-inner"),
        PointerEffect::Tilt { max_degrees: config::TILT_MAX_DEGREES },
    );
    let listing = &props.listing;

    html! {
        <article
            ref={host}
            class="property-card reveal-item"
            onmousemove={pointer.onmousemove}
            onmouseleave={pointer.onmouseleave}
        >
            <div class="card-inner">
                <div class="card-image">
                    <img src={listing.image} alt={listing.title} loading="lazy" />
                    <span class="card-badge">{listing.kind.label()}</span>
                </div>
                <div class="card-body">
                    <h3>{listing.title}</h3>
                    <p class="card-location">{listing.neighborhood}</p>
                    <p class="card-price">{listing.price}</p>
                    <ul class="card-facts">
                        <li>{format!("{} bd", listing.beds)}</li>
                        <li>{format!("{} ba", listing.baths)}</li>
                        <li>{format!("{} sqft", listing.area_sqft)}</li>
                    </ul>
                </div>
            </div>
        </article>
    }
}
