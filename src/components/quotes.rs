//! Philosophy section. Each quote types itself out once the section scrolls
//! into view, staggered so the quotes start one after another.

use yew::prelude::*;

use crate::components::reveal::use_on_screen;
use crate::components::typewriter::Typewriter;

const QUOTES: [(&str, &str); 3] = [
    (
        "Design is not just what it looks like and feels like. Design is how it works.",
        "Steve Jobs",
    ),
    (
        "The details are not the details. They make the design.",
        "Charles Eames",
    ),
    (
        "Simplicity is the ultimate sophistication.",
        "Leonardo da Vinci",
    ),
];

#[function_component(QuotesSection)]
pub fn quotes_section() -> Html {
    let node = use_node_ref();
    let visible = use_on_screen(node.clone());

    html! {
        <section id="philosophy" class="quotes-section" ref={node}>
            <style>
            {r#".quotes-section {
                padding: 7rem 1.5rem;
                background: #F5F0E8;
            }
            .quotes-inner {
                max-width: 64rem;
                margin: 0 auto;
            }
            .quotes-header {
                text-align: center;
                margin-bottom: 5rem;
            }
            .quotes-header .eyebrow {
                color: var(--gold);
                font-size: 0.85rem;
                letter-spacing: 0.3em;
                text-transform: uppercase;
                margin-bottom: 1rem;
            }
            .quotes-header h2 {
                font-family: 'Playfair Display', serif;
                font-size: clamp(2.5rem, 5vw, 3.75rem);
                color: var(--charcoal);
            }
            .quote-entry {
                display: flex;
                flex-direction: column;
                gap: 1.5rem;
                padding-bottom: 4rem;
                margin-bottom: 4rem;
                border-bottom: 1px solid rgba(43, 43, 40, 0.1);
            }
            .quote-entry:last-child {
                border-bottom: none;
                margin-bottom: 0;
                padding-bottom: 0;
            }
            @media (min-width: 768px) {
                .quote-entry {
                    flex-direction: row;
                    gap: 2.5rem;
                }
            }
            .quote-mark {
                flex-shrink: 0;
                font-family: 'Playfair Display', serif;
                font-size: 5rem;
                line-height: 1;
                color: rgba(201, 162, 39, 0.3);
            }
            .quote-entry blockquote {
                flex: 1;
                margin: 0;
            }
            .quote-entry blockquote p {
                font-family: 'Playfair Display', serif;
                font-style: italic;
                font-size: clamp(1.5rem, 3vw, 2.25rem);
                color: var(--charcoal);
                line-height: 1.5;
                margin-bottom: 1.5rem;
                min-height: 3em;
            }
            .quote-author {
                display: flex;
                align-items: center;
                gap: 1rem;
            }
            .quote-author .rule {
                width: 3rem;
                height: 1px;
                background: var(--gold);
            }
            .quote-author cite {
                font-style: normal;
                color: var(--warm-gray);
                font-size: 0.85rem;
                letter-spacing: 0.2em;
                text-transform: uppercase;
            }
            .typewriter-caret {
                display: inline-block;
                width: 2px;
                height: 1em;
                margin-left: 2px;
                background: var(--gold);
                vertical-align: text-bottom;
                animation: caretBlink 0.9s step-end infinite;
            }
            @keyframes caretBlink {
                50% { opacity: 0; }
            }"#}
            </style>
            <div class="quotes-inner">
                <div class="quotes-header">
                    <p class="eyebrow">{"Philosophy"}</p>
                    <h2>{"Words We Live By"}</h2>
                </div>
                {
                    QUOTES.iter().enumerate().map(|(index, &(text, author))| html! {
                        <div class="quote-entry" key={author}>
                            <div class="quote-mark" aria-hidden="true">{"\u{201C}"}</div>
                            <blockquote>
                                <p>
                                    <Typewriter
                                        text={format!("\u{201C}{}\u{201D}", text)}
                                        start_delay_ms={index as u32 * 1500}
                                        visible={visible}
                                    />
                                </p>
                                <div class="quote-author">
                                    <div class="rule"></div>
                                    <cite>{author}</cite>
                                </div>
                            </blockquote>
                        </div>
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}
