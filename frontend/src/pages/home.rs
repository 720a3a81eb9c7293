use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::magnetic::Magnetic;
use crate::components::property_card::PropertyCard;
use crate::components::slideshow::Slideshow;
use crate::components::stat_counter::StatCounter;
use crate::config;
use crate::listings;
use crate::motion::hooks::{use_parallax, use_reveal};
use crate::Route;

struct HeroSlide {
    image: &'static str,
    eyebrow: &'static str,
    title: &'static str,
    body: &'static str,
}

const HERO_SLIDES: [HeroSlide; 4] = [
    HeroSlide {
        image: "/assets/hero/waterfront.webp",
        eyebrow: "Waterfront",
        title: "Wake up to the bay",
        body: "Homes along the shoreline, from restored boathouses to glass pavilions.",
    },
    HeroSlide {
        image: "/assets/hero/hills.webp",
        eyebrow: "Hillside",
        title: "Views that never get old",
        body: "Quiet streets above the city with light from morning to dusk.",
    },
    HeroSlide {
        image: "/assets/hero/victorian.webp",
        eyebrow: "Heritage",
        title: "Character, carefully kept",
        body: "Period homes restored by people who love them as much as you will.",
    },
    HeroSlide {
        image: "/assets/hero/loft.webp",
        eyebrow: "City living",
        title: "Close to everything",
        body: "Lofts and penthouses a short walk from the water and the best tables in town.",
    },
];

const TESTIMONIALS: [(&str, &str); 3] = [
    ("Harborline found us the house we didn't know we were looking for. Three viewings, one offer, done.", "Maya & Jonas, Noe Valley"),
    ("They knew every street and every quirk of every building. Selling felt calm for the first time.", "Daniel R., Sea Cliff"),
    ("Honest advice, fast answers and a great eye for light. We'd go with them again tomorrow.", "Priya S., Embarcadero"),
];

const STATS: [(&str, &str); 4] = [
    ("1,250+", "Homes sold"),
    ("$2,400M", "In closed sales"),
    ("98%", "Clients who refer us"),
    ("24/7", "Viewing requests"),
];

fn hero_slides() -> Vec<Html> {
    HERO_SLIDES
        .iter()
        .map(|slide| {
            html! {
                <div class="hero-slide" style={format!("background-image: url('{}')", slide.image)}>
                    <div class="hero-overlay"></div>
                    <div class="hero-copy">
                        <span class="hero-eyebrow">{slide.eyebrow}</span>
                        <h1>{slide.title}</h1>
                        <p>{slide.body}</p>
                        <Link<Route> to={Route::Listings} classes="hero-cta">
                            {"Browse listings"}
                        </Link<Route>>
                    </div>
                </div>
            }
        })
        .collect()
}

fn testimonial_slides() -> Vec<Html> {
    TESTIMONIALS
        .iter()
        .map(|(quote, author)| {
            html! {
                <blockquote class="testimonial">
                    <p>{format!("“{}”", quote)}</p>
                    <cite>{*author}</cite>
                </blockquote>
            }
        })
        .collect()
}

#[function_component(Home)]
pub fn home() -> Html {
    let featured_ref = use_node_ref();
    let stats_ref = use_node_ref();
    let band_ref = use_node_ref();

    use_reveal(featured_ref.clone(), ".reveal-item", ());
    use_reveal(stats_ref.clone(), ".reveal-item", ());
    use_parallax(band_ref.clone(), ".parallax-layer", config::PARALLAX_SPEED);

    html! {
        <div class="home-page">
            <style>
                {r#"
                    .hero { min-height: 92vh; color: #fff; }
                    .hero .slideshow-controls { position: absolute; left: 0; right: 0; bottom: 24px; z-index: 2; color: #fff; }
                    .hero .slide-count { color: rgba(255, 255, 255, 0.8); }
                    .hero-slide { position: relative; min-height: 92vh; background-size: cover; background-position: center; display: flex; align-items: center; }
                    .hero-overlay { position: absolute; inset: 0; background: linear-gradient(90deg, rgba(10, 20, 28, 0.75), rgba(10, 20, 28, 0.1)); }
                    .hero-copy { position: relative; max-width: 560px; margin-left: 8vw; }
                    .hero-eyebrow { text-transform: uppercase; letter-spacing: 0.2em; font-size: 0.8rem; opacity: 0.8; }
                    .hero-copy h1 { font-size: clamp(2.4rem, 5vw, 4rem); margin: 12px 0; }
                    .hero-cta { display: inline-block; margin-top: 16px; padding: 14px 26px; border-radius: 999px; background: #fff; color: var(--ink); text-decoration: none; font-weight: 600; }
                    .stats { display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 24px; max-width: 1100px; margin: 60px auto; padding: 0 24px; text-align: center; }
                    .stat-value { display: block; font-size: 2.6rem; font-weight: 700; color: var(--sea); font-variant-numeric: tabular-nums; }
                    .stat-label { color: var(--muted); }
                    .section-heading { text-align: center; }
                    .eyebrow { text-transform: uppercase; letter-spacing: 0.2em; font-size: 0.8rem; color: var(--sea); }
                    .section-link { display: block; text-align: center; margin-top: 12px; color: var(--sea); }
                    .parallax-band { position: relative; overflow: hidden; margin: 80px 0; min-height: 420px; display: flex; align-items: center; justify-content: center; color: #fff; text-align: center; }
                    .parallax-layer { position: absolute; inset: -20% 0; background: url('/assets/band.webp') center / cover; will-change: transform; }
                    .band-copy { position: relative; padding: 24px; }
                    .band-cta { display: inline-block; margin-top: 16px; padding: 16px 30px; border-radius: 999px; background: var(--sea); color: #fff; text-decoration: none; }
                    .testimonials { max-width: 800px; margin: 0 auto; text-align: center; padding: 0 24px; }
                    .testimonial-carousel .slides { min-height: 180px; }
                    .testimonial p { font-size: 1.3rem; line-height: 1.6; }
                    .testimonial cite { color: var(--muted); font-style: normal; }
                "#}
            </style>
            <Slideshow
                class="hero"
                label="Featured neighbourhoods"
                slides={hero_slides()}
                interval_ms={config::HERO_INTERVAL_MS}
                show_progress=true
            />

            <section class="stats" ref={stats_ref}>
                {
                    STATS.iter().map(|(value, label)| html! {
                        <StatCounter value={*value} label={*label} />
                    }).collect::<Html>()
                }
            </section>

            <section class="featured" ref={featured_ref}>
                <div class="section-heading reveal-item">
                    <span class="eyebrow">{"Featured"}</span>
                    <h2>{"This week's picks"}</h2>
                </div>
                <div class="card-grid">
                    {
                        listings::featured().into_iter().map(|listing| {
                            let id = listing.id;
                            html! { <PropertyCard key={id} {listing} /> }
                        }).collect::<Html>()
                    }
                </div>
                <Link<Route> to={Route::Listings} classes="section-link">
                    {"See all listings →"}
                </Link<Route>>
            </section>

            <section class="parallax-band" ref={band_ref}>
                <div class="parallax-layer"></div>
                <div class="band-copy">
                    <h2>{"Thinking of selling?"}</h2>
                    <p>{"Get a free valuation from an agent who knows your street."}</p>
                    <Magnetic>
                        <Link<Route> to={Route::Contact} classes="band-cta">
                            {"Request a valuation"}
                        </Link<Route>>
                    </Magnetic>
                </div>
            </section>

            <section class="testimonials">
                <h2>{"What our clients say"}</h2>
                <Slideshow
                    class="testimonial-carousel"
                    label="Client testimonials"
                    slides={testimonial_slides()}
                    interval_ms={config::TESTIMONIAL_INTERVAL_MS}
                />
            </section>
        </div>
    }
}
