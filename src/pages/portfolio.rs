use yew::prelude::*;

use crate::contact::form::ContactForm;
use crate::gallery::filterable::FilterableGallery;

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
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
        <div class="portfolio-page">
            <div class="portfolio-offset"></div>
            <style>
            {r#".portfolio-offset {
                height: 5rem;
                background: var(--charcoal);
            }"#}
            </style>
            <FilterableGallery />
            <ContactForm />
        </div>
    }
}
