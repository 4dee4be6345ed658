//! Filterable portfolio grid. The active category lives in component state;
//! the visible subset is derived on every render by `filter::visible_projects`.
//! Cards are keyed on (filter, id) so switching filters replays the entrance
//! animation for the new subset.

use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::gallery::data::PORTFOLIO;
use crate::gallery::filter::{filter_label, visible_projects, ALL_CATEGORY, CATEGORIES};

#[function_component(FilterableGallery)]
pub fn filterable_gallery() -> Html {
    let active = use_state(|| ALL_CATEGORY);

    let visible = visible_projects(&PORTFOLIO, *active);

    let on_filter = {
        let active = active.clone();
        move |category: &'static str| {
            let active = active.clone();
            Callback::from(move |_: MouseEvent| {
                active.set(category);
            })
        }
    };

    html! {
        <section id="projects" class="portfolio-section">
            <style>
            {r#".portfolio-section {
                padding: 7rem 1.5rem;
                background: var(--cream);
            }
            .portfolio-inner {
                max-width: 80rem;
                margin: 0 auto;
            }
            .portfolio-header {
                text-align: center;
                margin-bottom: 3rem;
            }
            .portfolio-header .eyebrow {
                color: var(--gold);
                font-size: 0.85rem;
                letter-spacing: 0.3em;
                text-transform: uppercase;
                margin-bottom: 1rem;
            }
            .portfolio-header h2 {
                font-family: 'Playfair Display', serif;
                font-size: clamp(2.5rem, 5vw, 3.75rem);
                color: var(--charcoal);
                margin-bottom: 2rem;
            }
            .filter-row {
                display: flex;
                flex-wrap: wrap;
                justify-content: center;
                gap: 0.75rem;
            }
            .filter-button {
                padding: 0.6rem 1.5rem;
                font-size: 0.85rem;
                letter-spacing: 0.1em;
                text-transform: uppercase;
                background: transparent;
                border: 1px solid rgba(43, 43, 40, 0.2);
                color: var(--warm-gray);
                cursor: pointer;
                transition: all 0.3s ease;
            }
            .filter-button:hover {
                border-color: var(--gold);
                color: var(--gold);
            }
            .filter-button.active {
                background: var(--charcoal);
                border-color: var(--charcoal);
                color: var(--cream);
            }
            .portfolio-grid {
                display: grid;
                grid-template-columns: 1fr;
                gap: 1rem;
            }
            @media (min-width: 640px) {
                .portfolio-grid { grid-template-columns: repeat(2, 1fr); }
            }
            @media (min-width: 1024px) {
                .portfolio-grid { grid-template-columns: repeat(3, 1fr); }
            }
            .portfolio-card {
                position: relative;
                overflow: hidden;
                aspect-ratio: 4 / 3;
                cursor: pointer;
                animation: cardIn 0.5s cubic-bezier(0.25, 0.1, 0.25, 1);
            }
            @keyframes cardIn {
                from { opacity: 0; transform: scale(0.8); }
                to { opacity: 1; transform: scale(1); }
            }
            .portfolio-card img {
                width: 100%;
                height: 100%;
                object-fit: cover;
                transition: transform 0.6s cubic-bezier(0.25, 0.1, 0.25, 1);
            }
            .portfolio-card:hover img {
                transform: scale(1.1);
            }
            .portfolio-card .shade {
                position: absolute;
                inset: 0;
                background: linear-gradient(to top,
                    rgba(43, 43, 40, 0.8) 0%,
                    rgba(43, 43, 40, 0.2) 50%,
                    transparent 100%);
                opacity: 0;
                transition: opacity 0.5s ease;
            }
            .portfolio-card:hover .shade {
                opacity: 1;
            }
            .portfolio-card .caption {
                position: absolute;
                left: 0;
                right: 0;
                bottom: 0;
                padding: 1.5rem;
                transform: translateY(100%);
                transition: transform 0.5s ease-out;
            }
            .portfolio-card:hover .caption {
                transform: translateY(0);
            }
            .portfolio-card .caption h3 {
                font-family: 'Playfair Display', serif;
                font-size: 1.4rem;
                color: var(--cream);
                margin-bottom: 0.25rem;
            }
            .portfolio-card .caption p {
                color: var(--gold);
                font-size: 0.85rem;
                text-transform: capitalize;
            }
            .portfolio-empty {
                text-align: center;
                padding: 4rem 0;
                color: var(--warm-gray);
                font-size: 1.1rem;
                animation: cardIn 0.4s ease-out;
            }"#}
            </style>
            <div class="portfolio-inner">
                <Reveal class="portfolio-header">
                    <p class="eyebrow">{"Portfolio"}</p>
                    <h2>{"Our Projects"}</h2>
                    <div class="filter-row" role="group" aria-label="Filter projects by category">
                        {
                            CATEGORIES.iter().map(|category| {
                                let is_active = *active == *category;
                                html! {
                                    <button
                                        key={*category}
                                        class={classes!("filter-button", is_active.then_some("active"))}
                                        onclick={on_filter(*category)}
                                        aria-pressed={is_active.to_string()}
                                    >
                                        { filter_label(category) }
                                    </button>
                                }
                            }).collect::<Html>()
                        }
                    </div>
                </Reveal>
                {
                    if visible.is_empty() {
                        html! {
                            <div class="portfolio-empty">
                                <p>{"No projects found in this category."}</p>
                            </div>
                        }
                    } else {
                        html! {
                            <div class="portfolio-grid">
                                {
                                    visible.iter().map(|project| html! {
                                        <div
                                            class="portfolio-card"
                                            key={format!("{}-{}", *active, project.id)}
                                        >
                                            <img src={project.image} alt={project.title} />
                                            <div class="shade"></div>
                                            <div class="caption">
                                                <h3>{project.title}</h3>
                                                <p>{project.label}</p>
                                            </div>
                                        </div>
                                    }).collect::<Html>()
                                }
                            </div>
                        }
                    }
                }
            </div>
        </section>
    }
}
