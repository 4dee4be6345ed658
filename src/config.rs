// Contact form submissions go to a Formspree-style endpoint. The URL is
// supplied at build time via CONTACT_FORM_ENDPOINT so each deployment can
// point at its own form id.

#[cfg(debug_assertions)]
pub fn get_form_endpoint() -> &'static str {
    match option_env!("CONTACT_FORM_ENDPOINT") {
        Some(url) => url,
        None => "http://localhost:3001/contact", // Local echo endpoint when running locally
    }
}

#[cfg(not(debug_assertions))]
pub fn get_form_endpoint() -> &'static str {
    match option_env!("CONTACT_FORM_ENDPOINT") {
        Some(url) => url,
        None => "", // The form logs an error and stays editable instead of posting
    }
}
