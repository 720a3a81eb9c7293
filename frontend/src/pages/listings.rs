use yew::prelude::*;

use crate::components::property_card::PropertyCard;
use crate::listings::{self, ListingKind};
use crate::motion::hooks::use_reveal;

const FILTERS: [(Option<ListingKind>, &str); 3] = [
    (None, "All"),
    (Some(ListingKind::Sale), "For sale"),
    (Some(ListingKind::Rent), "For rent"),
];

#[function_component(Listings)]
pub fn listings_page() -> Html {
    let filter = use_state(|| None::<ListingKind>);
    let grid_ref = use_node_ref();

    // Re-run on every filter change so freshly rendered cards get revealed too
    use_reveal(grid_ref.clone(), ".reveal-item", *filter);

    let shown = listings::filtered(*filter);

    html! {
        <div class="listings-page">
            <style>
                {r#"
                    .filter-bar { display: flex; justify-content: center; gap: 12px; margin-bottom: 12px; }
                    .filter-button { padding: 10px 20px; border-radius: 999px; border: 1px solid var(--sea); background: transparent; color: var(--sea); cursor: pointer; }
                    .filter-button.selected { background: var(--sea); color: #fff; }
                    .empty-state { grid-column: 1 / -1; text-align: center; color: var(--muted); }
                "#}
            </style>
            <section class="page-hero">
                <h1>{"Listings"}</h1>
                <p>{"Every home we currently represent, updated daily."}</p>
            </section>

            <div class="filter-bar" role="tablist">
                {
                    FILTERS.iter().map(|(kind, label)| {
                        let kind = *kind;
                        let onclick = {
                            let filter = filter.clone();
                            Callback::from(move |_: MouseEvent| filter.set(kind))
                        };
                        html! {
                            <button
                                class={classes!("filter-button", (*filter == kind).then(|| "selected"))}
                                role="tab"
                                aria-selected={(*filter == kind).to_string()}
                                {onclick}
                            >
                                {*label}
                            </button>
                        }
                    }).collect::<Html>()
                }
            </div>

            <section class="card-grid" ref={grid_ref}>
                if shown.is_empty() {
                    <p class="empty-state">{"Nothing here right now. Check back soon."}</p>
                } else {
                    {
                        shown.into_iter().map(|listing| {
                            let id = listing.id;
                            html! { <PropertyCard key={id} {listing} /> }
                        }).collect::<Html>()
                    }
                }
            </section>
        </div>
    }
}
