use yew::prelude::*;
use yew_router::prelude::*;
use web_sys::MouseEvent;
use yew::{Children, Properties};

use crate::motion::hooks::use_reveal;
use crate::Route;

/// Next open item after `clicked` is toggled. At most one item is open.
pub fn toggle_open(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: String,
    is_open: bool,
    on_toggle: Callback<()>,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        // The reveal classes live on the wrapper so toggling never overwrites them
        <div class="reveal-item">
            <div class={classes!("faq-item", props.is_open.then(|| "open"))}>
                <button class="faq-question" onclick={toggle} aria-expanded={props.is_open.to_string()}>
                    <span class="question-text">{&props.question}</span>
                    <span class="toggle-icon">{if props.is_open { "−" } else { "+" }}</span>
                </button>
                <div class="faq-answer">
                    { for props.children.iter() }
                </div>
            </div>
        </div>
    }
}

const QUESTIONS: [(&str, &str); 6] = [
    (
        "How do I book a viewing?",
        "Use the contact form or call us. We usually confirm a time within one working day, and evening or weekend slots are available for most homes.",
    ),
    (
        "Do you charge buyers a fee?",
        "No. Our commission is paid by the seller and agreed before a home is listed.",
    ),
    (
        "How long does a sale usually take?",
        "Most of our sales close between 30 and 45 days after an accepted offer, depending on financing and inspections.",
    ),
    (
        "Can you value my home before I decide to sell?",
        "Yes. A valuation is free and comes with no obligation. An agent visits, walks through recent sales on your street and sends a written estimate.",
    ),
    (
        "Do you handle rentals as well?",
        "We manage a small number of long-term rentals. Listings marked 'For rent' are available for leases of twelve months or more.",
    ),
    (
        "Which neighbourhoods do you cover?",
        "The whole city, with most of our work along the northern waterfront and the hills above it.",
    ),
];

#[function_component(Faq)]
pub fn faq() -> Html {
    let open = use_state(|| None::<usize>);
    let list_ref = use_node_ref();
    use_reveal(list_ref.clone(), ".reveal-item", ());

    html! {
        <div class="faq-page">
            <style>
                {r#"
                    .faq-hero { padding: 140px 24px 40px; text-align: center; }
                    .faq-section { max-width: 800px; margin: 0 auto; padding: 0 24px; }
                    .faq-item { border-bottom: 1px solid rgba(20, 33, 43, 0.12); }
                    .faq-question { width: 100%; display: flex; justify-content: space-between; align-items: center; padding: 22px 0; background: none; border: none; font-size: 1.1rem; text-align: left; cursor: pointer; color: inherit; }
                    .toggle-icon { font-size: 1.4rem; color: var(--sea); }
                    .faq-answer { max-height: 0; overflow: hidden; transition: max-height 0.4s ease; color: var(--muted); }
                    .faq-item.open .faq-answer { max-height: 400px; }
                    .faq-footer { text-align: center; margin-top: 48px; }
                "#}
            </style>
            <section class="faq-hero">
                <h1>{"Frequently Asked Questions"}</h1>
                <p>{"Everything you need to know about buying, selling and renting with Harborline"}</p>
            </section>

            <section class="faq-section" ref={list_ref}>
                {
                    QUESTIONS.iter().enumerate().map(|(i, (question, answer))| {
                        let on_toggle = {
                            let open = open.clone();
                            Callback::from(move |_: ()| open.set(toggle_open(*open, i)))
                        };
                        html! {
                            <FaqItem
                                key={i}
                                question={question.to_string()}
                                is_open={*open == Some(i)}
                                {on_toggle}
                            >
                                <p>{*answer}</p>
                            </FaqItem>
                        }
                    }).collect::<Html>()
                }
            </section>

            <section class="faq-footer">
                <p>
                    {"Still have a question? "}
                    <Link<Route> to={Route::Contact}>{"Get in touch"}</Link<Route>>
                </p>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_opens_clicked_item() {
        assert_eq!(toggle_open(None, 2), Some(2));
    }

    #[test]
    fn test_toggle_closes_open_item() {
        assert_eq!(toggle_open(Some(2), 2), None);
    }

    #[test]
    fn test_toggle_switches_to_other_item() {
        // Opening another item closes the previous one
        assert_eq!(toggle_open(Some(0), 3), Some(3));
    }

    #[test]
    fn test_toggle_sequence_keeps_one_open() {
        let mut open = None;
        for clicked in [1, 4, 4, 0, 2] {
            open = toggle_open(open, clicked);
        }
        assert_eq!(open, Some(2));
    }
}
