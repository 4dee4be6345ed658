//! Bento-grid gallery of selected works. Cards stagger in as the grid
//! scrolls into view; hovering zooms the image and slides the caption up.

use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::gallery::data::{Project, SELECTED_WORKS};

const STAGGER_MS: u32 = 150;

fn card_class(project: &Project) -> Classes {
    classes!(
        "bento-card",
        (!project.span.is_empty()).then(|| format!("bento-{}", project.span))
    )
}

#[function_component(BentoGallery)]
pub fn bento_gallery() -> Html {
    html! {
        <section id="projects" class="bento-section">
            <style>
            {r#".bento-section {
                padding: 7rem 1.5rem;
                background: var(--cream);
            }
            .bento-inner {
                max-width: 80rem;
                margin: 0 auto;
            }
            .bento-header {
                text-align: center;
                margin-bottom: 4rem;
            }
            .bento-header .eyebrow {
                color: var(--gold);
                font-size: 0.85rem;
                letter-spacing: 0.3em;
                text-transform: uppercase;
                margin-bottom: 1rem;
            }
            .bento-header h2 {
                font-family: 'Playfair Display', serif;
                font-size: clamp(2.5rem, 5vw, 3.75rem);
                color: var(--charcoal);
            }
            .bento-grid {
                display: grid;
                grid-template-columns: 1fr;
                grid-auto-rows: 280px;
                gap: 1rem;
            }
            @media (min-width: 768px) {
                .bento-grid {
                    grid-template-columns: repeat(4, 1fr);
                    grid-auto-rows: 250px;
                }
                .bento-feature { grid-column: span 2; grid-row: span 2; }
                .bento-tall { grid-row: span 2; }
                .bento-wide { grid-column: span 2; }
            }
            .bento-card {
                position: relative;
                overflow: hidden;
                cursor: pointer;
                height: 100%;
            }
            .bento-card img {
                width: 100%;
                height: 100%;
                object-fit: cover;
                transition: transform 0.6s cubic-bezier(0.25, 0.1, 0.25, 1);
            }
            .bento-card:hover img {
                transform: scale(1.08);
            }
            .bento-card .shade {
                position: absolute;
                inset: 0;
                background: linear-gradient(to top,
                    rgba(43, 43, 40, 0.8) 0%,
                    rgba(43, 43, 40, 0.2) 50%,
                    transparent 100%);
                opacity: 0;
                transition: opacity 0.4s ease;
            }
            .bento-card:hover .shade {
                opacity: 1;
            }
            .bento-card .caption {
                position: absolute;
                left: 0;
                right: 0;
                bottom: 0;
                padding: 1.5rem;
                transform: translateY(100%);
                opacity: 0;
                transition: transform 0.4s cubic-bezier(0.25, 0.1, 0.25, 1),
                            opacity 0.4s ease;
            }
            .bento-card:hover .caption {
                transform: translateY(0);
                opacity: 1;
            }
            .bento-card .caption h3 {
                font-family: 'Playfair Display', serif;
                font-size: 1.4rem;
                color: var(--cream);
                margin-bottom: 0.25rem;
            }
            .bento-card .caption p {
                color: rgba(250, 247, 242, 0.7);
                font-size: 0.85rem;
            }"#}
            </style>
            <div class="bento-inner">
                <Reveal class="bento-header">
                    <p class="eyebrow">{"Portfolio"}</p>
                    <h2>{"Selected Works"}</h2>
                </Reveal>
                <div class="bento-grid">
                    {
                        SELECTED_WORKS.iter().enumerate().map(|(index, project)| html! {
                            <Reveal
                                key={project.id}
                                class={card_class(project)}
                                delay_ms={index as u32 * STAGGER_MS}
                            >
                                <img src={project.image} alt={project.title} />
                                <div class="shade"></div>
                                <div class="caption">
                                    <h3>{project.title}</h3>
                                    <p>{project.label}</p>
                                </div>
                            </Reveal>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}
