use yew::prelude::*;

use crate::components::hero::Hero;
use crate::components::quotes::QuotesSection;
use crate::contact::form::ContactForm;
use crate::gallery::bento::BentoGallery;

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="home-page">
            <Hero />
            <BentoGallery />
            <QuotesSection />
            <ContactForm />
        </div>
    }
}
