//! Contact form component and its submission state machine.
//!
//! The lifecycle is Idle -> Submitting -> Succeeded, with Submitting falling
//! back to Idle on any failure so the user keeps what they typed. At most one
//! request is in flight: the submit button is disabled while Submitting.

use std::collections::{HashMap, HashSet};

use gloo_console::error;
use gloo_net::http::Request;
use serde::Deserialize;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, FocusEvent, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, InputEvent, SubmitEvent};
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::config;
use crate::contact::validation::{validate, validate_all, Field, FieldErrors, FormValues};

pub const PROJECT_TYPES: [(&str, &str); 4] = [
    ("residential", "Residential"),
    ("commercial", "Commercial"),
    ("hospitality", "Hospitality"),
    ("consultation", "Design Consultation"),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
    Succeeded,
}

impl SubmissionState {
    /// Submit attempt: only a valid form leaves Idle.
    pub fn on_submit(self, form_valid: bool) -> SubmissionState {
        match self {
            SubmissionState::Idle if form_valid => SubmissionState::Submitting,
            other => other,
        }
    }

    /// Endpoint response: 2xx finishes the lifecycle, anything else returns
    /// the form to its editable state.
    pub fn on_response(self, success: bool) -> SubmissionState {
        match self {
            SubmissionState::Submitting if success => SubmissionState::Succeeded,
            SubmissionState::Submitting => SubmissionState::Idle,
            other => other,
        }
    }
}

/// Form-encodes the payload in wire-name order.
pub fn encode_payload(values: &FormValues) -> String {
    Field::ALL
        .iter()
        .map(|field| {
            format!(
                "{}={}",
                field.as_str(),
                urlencoding::encode(values.get(*field))
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

// Formspree-style endpoints return a JSON body describing the rejection.
#[derive(Deserialize)]
struct EndpointError {
    error: Option<String>,
}

fn event_value(event: &Event) -> Option<String> {
    let target = event.target()?;
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    if let Some(select) = target.dyn_ref::<HtmlSelectElement>() {
        return Some(select.value());
    }
    if let Some(area) = target.dyn_ref::<HtmlTextAreaElement>() {
        return Some(area.value());
    }
    None
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let values = use_state(FormValues::default);
    let touched = use_state(HashSet::<Field>::new);
    let errors = use_state(FieldErrors::new);
    let submission = use_state(|| SubmissionState::Idle);

    // on change: update the value; re-validate live only once the field has
    // been touched via blur.
    let handle_input = {
        let values = values.clone();
        let touched = touched.clone();
        let errors = errors.clone();
        move |field: Field| {
            let values = values.clone();
            let touched = touched.clone();
            let errors = errors.clone();
            Callback::from(move |e: InputEvent| {
                if let Some(raw) = event_value(&e) {
                    let mut next = (*values).clone();
                    next.set(field, raw);
                    if touched.contains(&field) {
                        let mut errs = (*errors).clone();
                        match validate(field, next.get(field)) {
                            Some(message) => {
                                errs.insert(field, message);
                            }
                            None => {
                                errs.remove(&field);
                            }
                        }
                        errors.set(errs);
                    }
                    values.set(next);
                }
            })
        }
    };

    // The select fires a plain change event rather than an input event.
    let handle_select = {
        let values = values.clone();
        let touched = touched.clone();
        let errors = errors.clone();
        Callback::from(move |e: Event| {
            if let Some(raw) = event_value(&e) {
                let mut next = (*values).clone();
                next.set(Field::Project, raw);
                if touched.contains(&Field::Project) {
                    let mut errs = (*errors).clone();
                    match validate(Field::Project, next.get(Field::Project)) {
                        Some(message) => {
                            errs.insert(Field::Project, message);
                        }
                        None => {
                            errs.remove(&Field::Project);
                        }
                    }
                    errors.set(errs);
                }
                values.set(next);
            }
        })
    };

    // on blur: mark touched and surface the field's error from then on.
    let handle_blur = {
        let values = values.clone();
        let touched = touched.clone();
        let errors = errors.clone();
        move |field: Field| {
            let values = values.clone();
            let touched = touched.clone();
            let errors = errors.clone();
            Callback::from(move |e: FocusEvent| {
                let raw = event_value(&e).unwrap_or_else(|| values.get(field).to_string());
                let mut marked = (*touched).clone();
                marked.insert(field);
                touched.set(marked);
                let mut errs = (*errors).clone();
                match validate(field, &raw) {
                    Some(message) => {
                        errs.insert(field, message);
                    }
                    None => {
                        errs.remove(&field);
                    }
                }
                errors.set(errs);
            })
        }
    };

    let handle_submit = {
        let values = values.clone();
        let touched = touched.clone();
        let errors = errors.clone();
        let submission = submission.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submission != SubmissionState::Idle {
                return;
            }

            let all_errors = validate_all(&values);
            touched.set(Field::ALL.into_iter().collect());
            errors.set(all_errors.clone());
            let next = submission.on_submit(all_errors.is_empty());
            submission.set(next);
            if next != SubmissionState::Submitting {
                return;
            }

            let endpoint = config::get_form_endpoint();
            if endpoint.is_empty() {
                error!("Contact form endpoint is not configured, dropping submission");
                submission.set(SubmissionState::Idle);
                return;
            }

            let body = encode_payload(&values);
            let values = values.clone();
            let touched = touched.clone();
            let errors = errors.clone();
            let submission = submission.clone();
            spawn_local(async move {
                let result = Request::post(endpoint)
                    .header("Accept", "application/json")
                    .header("Content-Type", "application/x-www-form-urlencoded")
                    .body(body)
                    .send()
                    .await;
                match result {
                    Ok(response) => {
                        if response.ok() {
                            values.set(FormValues::default());
                            touched.set(HashSet::new());
                            errors.set(HashMap::new());
                            submission.set(SubmissionState::Submitting.on_response(true));
                        } else {
                            match response.json::<EndpointError>().await {
                                Ok(EndpointError { error: Some(message) }) => {
                                    error!("Form submission rejected:", message);
                                }
                                _ => {
                                    error!(format!(
                                        "Form submission failed with status {}",
                                        response.status()
                                    ));
                                }
                            }
                            submission.set(SubmissionState::Submitting.on_response(false));
                        }
                    }
                    Err(e) => {
                        error!("Form submission error:", e.to_string());
                        submission.set(SubmissionState::Submitting.on_response(false));
                    }
                }
            });
        })
    };

    let field_error = |field: Field| -> Option<&'static str> {
        if touched.contains(&field) {
            errors.get(&field).copied()
        } else {
            None
        }
    };

    let input_class = |field: Field| -> &'static str {
        if field_error(field).is_some() {
            "form-input invalid"
        } else {
            "form-input"
        }
    };

    let error_hint = |field: Field| -> Html {
        match field_error(field) {
            Some(message) => html! {
                <p id={format!("{}-error", field.as_str())} class="field-error" role="alert">
                    {message}
                </p>
            },
            None => html! {},
        }
    };

    let is_submitting = *submission == SubmissionState::Submitting;

    html! {
        <section id="contact" class="contact-section">
            <style>
            {r#".contact-section {
                padding: 7rem 1.5rem;
                background: var(--cream);
            }
            .contact-inner {
                max-width: 56rem;
                margin: 0 auto;
            }
            .contact-header {
                text-align: center;
                margin-bottom: 4rem;
            }
            .contact-header .eyebrow {
                color: var(--gold);
                font-size: 0.85rem;
                letter-spacing: 0.3em;
                text-transform: uppercase;
                margin-bottom: 1rem;
            }
            .contact-header h2 {
                font-family: 'Playfair Display', serif;
                font-size: clamp(2.5rem, 5vw, 3.75rem);
                color: var(--charcoal);
                margin-bottom: 1.5rem;
            }
            .contact-header p {
                color: var(--warm-gray);
                max-width: 36rem;
                margin: 0 auto;
            }
            .contact-form {
                display: flex;
                flex-direction: column;
                gap: 2rem;
            }
            .field-row {
                display: grid;
                grid-template-columns: 1fr;
                gap: 1.5rem;
            }
            @media (min-width: 768px) {
                .field-row {
                    grid-template-columns: 1fr 1fr;
                    gap: 2rem;
                }
            }
            .field-group label {
                display: block;
                font-size: 0.85rem;
                letter-spacing: 0.1em;
                text-transform: uppercase;
                color: var(--charcoal);
                margin-bottom: 0.5rem;
            }
            .field-group label span {
                color: var(--gold);
            }
            .form-input {
                width: 100%;
                background: transparent;
                border: none;
                border-bottom: 2px solid rgba(43, 43, 40, 0.2);
                padding: 0.75rem 0;
                font: inherit;
                color: var(--charcoal);
                outline: none;
                transition: border-color 0.3s ease;
            }
            .form-input:focus {
                border-bottom-color: var(--gold);
            }
            .form-input.invalid,
            .form-input.invalid:focus {
                border-bottom-color: #dc2626;
            }
            textarea.form-input {
                resize: none;
            }
            select.form-input {
                cursor: pointer;
            }
            .field-error {
                color: #dc2626;
                font-size: 0.8rem;
                margin-top: 0.4rem;
                animation: errorIn 0.25s ease-out;
            }
            @keyframes errorIn {
                from { opacity: 0; transform: translateY(-5px); }
                to { opacity: 1; transform: translateY(0); }
            }
            .submit-row {
                text-align: center;
                padding-top: 1rem;
            }
            .submit-button {
                display: inline-flex;
                align-items: center;
                justify-content: center;
                gap: 0.75rem;
                background: var(--charcoal);
                color: var(--cream);
                border: none;
                padding: 1rem 3rem;
                font-size: 0.85rem;
                letter-spacing: 0.1em;
                cursor: pointer;
                transition: background 0.3s ease;
            }
            .submit-button:hover {
                background: #1a1a18;
            }
            .submit-button:disabled {
                opacity: 0.5;
                cursor: not-allowed;
            }
            .submit-spinner {
                display: inline-block;
                width: 16px;
                height: 16px;
                border: 2px solid rgba(250, 247, 242, 0.3);
                border-radius: 50%;
                border-top-color: var(--cream);
                animation: spin 1s linear infinite;
            }
            @keyframes spin { to { transform: rotate(360deg); } }
            .success-panel {
                text-align: center;
                padding: 4rem 1.5rem;
                border: 1px solid rgba(201, 162, 39, 0.3);
                animation: successIn 0.4s ease-out;
            }
            @keyframes successIn {
                from { opacity: 0; transform: scale(0.95); }
                to { opacity: 1; transform: scale(1); }
            }
            .success-panel .check-circle {
                width: 4rem;
                height: 4rem;
                margin: 0 auto 1.5rem;
                border: 2px solid var(--gold);
                border-radius: 50%;
                display: flex;
                align-items: center;
                justify-content: center;
                color: var(--gold);
                font-size: 1.75rem;
            }
            .success-panel h3 {
                font-family: 'Playfair Display', serif;
                font-size: 1.5rem;
                color: var(--charcoal);
                margin-bottom: 0.5rem;
            }
            .success-panel p {
                color: var(--warm-gray);
            }"#}
            </style>
            <div class="contact-inner">
                <Reveal class="contact-header">
                    <p class="eyebrow">{"Get In Touch"}</p>
                    <h2>{"Start Your Project"}</h2>
                    <p>{"Ready to transform your space? Share your vision with us and let's create something extraordinary together."}</p>
                </Reveal>
                <Reveal delay_ms={200}>
                {
                    if *submission == SubmissionState::Succeeded {
                        html! {
                            <div class="success-panel">
                                <div class="check-circle">{"\u{2713}"}</div>
                                <h3>{"Thank You"}</h3>
                                <p>{"We'll be in touch within 24 hours."}</p>
                            </div>
                        }
                    } else {
                        html! {
                            <form class="contact-form" onsubmit={handle_submit} novalidate=true>
                                <div class="field-row">
                                    <div class="field-group">
                                        <label for="name">{"Name "}<span>{"*"}</span></label>
                                        <input
                                            type="text"
                                            id="name"
                                            name="name"
                                            class={input_class(Field::Name)}
                                            placeholder="Your full name"
                                            value={values.name.clone()}
                                            oninput={handle_input(Field::Name)}
                                            onblur={handle_blur(Field::Name)}
                                            aria-invalid={field_error(Field::Name).is_some().to_string()}
                                            aria-describedby={field_error(Field::Name).is_some().then_some("name-error")}
                                        />
                                        { error_hint(Field::Name) }
                                    </div>
                                    <div class="field-group">
                                        <label for="email">{"Email "}<span>{"*"}</span></label>
                                        <input
                                            type="email"
                                            id="email"
                                            name="email"
                                            class={input_class(Field::Email)}
                                            placeholder="your@email.com"
                                            value={values.email.clone()}
                                            oninput={handle_input(Field::Email)}
                                            onblur={handle_blur(Field::Email)}
                                            aria-invalid={field_error(Field::Email).is_some().to_string()}
                                            aria-describedby={field_error(Field::Email).is_some().then_some("email-error")}
                                        />
                                        { error_hint(Field::Email) }
                                    </div>
                                </div>
                                <div class="field-group">
                                    <label for="project">{"Project Type "}<span>{"*"}</span></label>
                                    <select
                                        id="project"
                                        name="project"
                                        class={input_class(Field::Project)}
                                        onchange={handle_select}
                                        onblur={handle_blur(Field::Project)}
                                        aria-invalid={field_error(Field::Project).is_some().to_string()}
                                        aria-describedby={field_error(Field::Project).is_some().then_some("project-error")}
                                    >
                                        <option value="" selected={values.project.is_empty()}>
                                            {"Select a project type"}
                                        </option>
                                        {
                                            PROJECT_TYPES.iter().map(|(value, label)| html! {
                                                <option
                                                    value={*value}
                                                    selected={values.project == *value}
                                                >
                                                    {label}
                                                </option>
                                            }).collect::<Html>()
                                        }
                                    </select>
                                    { error_hint(Field::Project) }
                                </div>
                                <div class="field-group">
                                    <label for="message">{"Message "}<span>{"*"}</span></label>
                                    <textarea
                                        id="message"
                                        name="message"
                                        rows="5"
                                        class={input_class(Field::Message)}
                                        placeholder="Tell us about your project..."
                                        value={values.message.clone()}
                                        oninput={handle_input(Field::Message)}
                                        onblur={handle_blur(Field::Message)}
                                        aria-invalid={field_error(Field::Message).is_some().to_string()}
                                        aria-describedby={field_error(Field::Message).is_some().then_some("message-error")}
                                    />
                                    { error_hint(Field::Message) }
                                </div>
                                <div class="submit-row">
                                    <button type="submit" class="submit-button" disabled={is_submitting}>
                                        {
                                            if is_submitting {
                                                html! { <><span class="submit-spinner"></span>{"SENDING..."}</> }
                                            } else {
                                                html! { {"SEND INQUIRY"} }
                                            }
                                        }
                                    </button>
                                </div>
                            </form>
                        }
                    }
                }
                </Reveal>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_values() -> FormValues {
        FormValues {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            project: "residential".into(),
            message: "I would like a full home renovation consultation.".into(),
        }
    }

    #[test]
    fn invalid_form_never_leaves_idle() {
        let values = FormValues {
            name: "A".into(),
            email: "x".into(),
            project: "".into(),
            message: "short".into(),
        };
        let errors = validate_all(&values);
        assert!(!errors.is_empty());
        // The gate that decides whether the network call happens
        assert_eq!(
            SubmissionState::Idle.on_submit(errors.is_empty()),
            SubmissionState::Idle
        );
    }

    #[test]
    fn valid_form_starts_submitting() {
        let errors = validate_all(&valid_values());
        assert!(errors.is_empty());
        assert_eq!(
            SubmissionState::Idle.on_submit(errors.is_empty()),
            SubmissionState::Submitting
        );
    }

    #[test]
    fn success_finishes_the_lifecycle() {
        assert_eq!(
            SubmissionState::Submitting.on_response(true),
            SubmissionState::Succeeded
        );
    }

    #[test]
    fn failure_returns_to_editable_idle() {
        assert_eq!(
            SubmissionState::Submitting.on_response(false),
            SubmissionState::Idle
        );
    }

    #[test]
    fn terminal_states_ignore_spurious_events() {
        assert_eq!(
            SubmissionState::Succeeded.on_submit(true),
            SubmissionState::Succeeded
        );
        assert_eq!(
            SubmissionState::Succeeded.on_response(false),
            SubmissionState::Succeeded
        );
        // A second submit while one is in flight changes nothing
        assert_eq!(
            SubmissionState::Submitting.on_submit(true),
            SubmissionState::Submitting
        );
    }

    #[test]
    fn payload_uses_wire_names_in_order() {
        let encoded = encode_payload(&FormValues {
            name: "Jane".into(),
            email: "jane@example.com".into(),
            project: "residential".into(),
            message: "hello there".into(),
        });
        assert_eq!(
            encoded,
            "name=Jane&email=jane%40example.com&project=residential&message=hello%20there"
        );
    }

    #[test]
    fn payload_escapes_reserved_characters() {
        let encoded = encode_payload(&FormValues {
            name: "A&B=C".into(),
            email: "a+b@example.com".into(),
            project: "consultation".into(),
            message: "100% sure? yes & no".into(),
        });
        assert!(encoded.contains("name=A%26B%3DC"));
        assert!(encoded.contains("message=100%25%20sure%3F%20yes%20%26%20no"));
        assert!(!encoded.contains(' '));
    }
}
