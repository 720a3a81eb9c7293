use std::time::Duration;

use yew::prelude::*;

use crate::motion::hooks::use_rotation;
use crate::motion::rotation::RotationConfig;

#[derive(Properties, PartialEq)]
pub struct SlideshowProps {
    /// One entry per slide, rendered in order.
    pub slides: Vec<Html>,
    pub interval_ms: u64,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub show_progress: bool,
    #[prop_or("Slideshow")]
    pub label: &'static str,
}

/// Auto-advancing slideshow with dots, arrows and an optional progress bar.
///
/// Hovering pauses it, arrow keys step through it while focused.
#[function_component(Slideshow)]
pub fn slideshow(props: &SlideshowProps) -> Html {
    let container = use_node_ref();
    let controls = use_rotation(
        container.clone(),
        RotationConfig::with_interval(Duration::from_millis(props.interval_ms)),
    );
    let total = props.slides.len();

    html! {
        <div
            ref={container}
            class={classes!("slideshow", props.class.clone())}
            tabindex="0"
            role="region"
            aria-label={props.label}
            onmouseenter={controls.pause.clone()}
            onmouseleave={controls.resume.clone()}
            onkeydown={controls.keydown.clone()}
        >
            <div class="slides">
                {
                    props.slides.iter().enumerate().map(|(i, slide)| {
                        // Only the first slide starts active; the cycle owns the class afterwards
                        let class = if i == 0 { "slide active" } else { "slide" };
                        html! {
                            <div class={class} data-slide="">
                                {slide.clone()}
                            </div>
                        }
                    }).collect::<Html>()
                }
            </div>

            if total > 1 {
                <div class="slideshow-controls">
                    <button class="slide-arrow" aria-label="Previous slide" onclick={controls.previous.clone()}>
                        {"←"}
                    </button>
                    <div class="slide-indicators">
                        {
                            (0..total).map(|i| {
                                let select = controls.select.clone();
                                let class = if i == 0 { "indicator active" } else { "indicator" };
                                html! {
                                    <button
                                        class={class}
                                        data-indicator=""
                                        aria-label={format!("Go to slide {}", i + 1)}
                                        onclick={Callback::from(move |_: MouseEvent| select.emit(i))}
                                    />
                                }
                            }).collect::<Html>()
                        }
                    </div>
                    <span class="slide-count">
                        {format!("{:02} / {:02}", controls.active + 1, total)}
                    </span>
                    <button class="slide-arrow" aria-label="Next slide" onclick={controls.next.clone()}>
                        {"→"}
                    </button>
                </div>
            }

            if props.show_progress {
                <div class="slide-progress-track">
                    <div class="slide-progress" data-progress=""></div>
                </div>
            }
        </div>
    }
}
