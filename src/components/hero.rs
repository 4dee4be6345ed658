use yew::prelude::*;

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section class="hero-section">
            <style>
            {r#".hero-section {
                position: relative;
                height: 100vh;
                width: 100%;
                overflow: hidden;
            }
            .hero-backdrop {
                position: absolute;
                inset: 0;
            }
            .hero-backdrop img {
                width: 100%;
                height: 100%;
                object-fit: cover;
            }
            .hero-backdrop::after {
                content: '';
                position: absolute;
                inset: 0;
                background: rgba(43, 43, 40, 0.4);
            }
            .hero-content {
                position: relative;
                z-index: 1;
                height: 100%;
                display: flex;
                flex-direction: column;
                align-items: center;
                justify-content: center;
                text-align: center;
                padding: 0 1.5rem;
            }
            @keyframes heroFadeUp {
                from { opacity: 0; transform: translateY(24px); }
                to { opacity: 1; transform: translateY(0); }
            }
            .hero-content > * {
                opacity: 0;
                animation: heroFadeUp 0.8s ease-out forwards;
            }
            .hero-eyebrow {
                color: rgba(250, 247, 242, 0.8);
                font-size: 0.85rem;
                letter-spacing: 0.3em;
                text-transform: uppercase;
                margin-bottom: 1.5rem;
                animation-delay: 0.2s;
            }
            .hero-title {
                font-family: 'Playfair Display', serif;
                font-size: clamp(3rem, 8vw, 6rem);
                color: var(--cream);
                max-width: 60rem;
                line-height: 1.1;
                margin-bottom: 2rem;
                animation-delay: 0.4s;
                animation-duration: 1s;
            }
            .hero-title em {
                display: block;
                font-style: italic;
                color: var(--gold);
            }
            .hero-copy {
                color: rgba(250, 247, 242, 0.7);
                font-size: 1.1rem;
                max-width: 36rem;
                margin-bottom: 2.5rem;
                animation-delay: 0.7s;
            }
            .hero-cta {
                display: inline-block;
                border: 1px solid rgba(250, 247, 242, 0.5);
                color: var(--cream);
                padding: 1rem 2rem;
                font-size: 0.85rem;
                letter-spacing: 0.1em;
                text-decoration: none;
                transition: background 0.5s ease, color 0.5s ease;
                animation-delay: 0.9s;
            }
            .hero-cta:hover {
                background: var(--cream);
                color: var(--charcoal);
            }
            .hero-scroll-cue {
                position: absolute;
                bottom: 2.5rem;
                left: 50%;
                transform: translateX(-50%);
                text-align: center;
                opacity: 0;
                animation: heroFadeUp 1s ease-out 1.2s forwards;
            }
            .hero-scroll-cue .line {
                width: 1px;
                height: 4rem;
                background: rgba(250, 247, 242, 0.3);
                margin: 0 auto 0.5rem;
            }
            .hero-scroll-cue span {
                color: rgba(250, 247, 242, 0.5);
                font-size: 0.7rem;
                letter-spacing: 0.2em;
            }"#}
            </style>
            <div class="hero-backdrop">
                <img
                    src="https://images.unsplash.com/photo-1600210492486-724fe5c67fb0?q=80&w=2574&auto=format&fit=crop"
                    alt="Luxury interiors"
                />
            </div>
            <div class="hero-content">
                <p class="hero-eyebrow">{"Luxury Interiors"}</p>
                <h1 class="hero-title">
                    {"Where Elegance Meets"}
                    <em>{"Timeless Design"}</em>
                </h1>
                <p class="hero-copy">
                    {"Creating bespoke interiors that reflect your unique vision and elevate everyday living."}
                </p>
                <a href="#projects" class="hero-cta">{"VIEW PORTFOLIO"}</a>
            </div>
            <div class="hero-scroll-cue">
                <div class="line"></div>
                <span>{"SCROLL"}</span>
            </div>
        </section>
    }
}
