use gloo_console::log;
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::confetti::ConfettiOverlay;
use crate::utils::api::Api;
use crate::utils::viewport::use_viewport_size;

use super::fields::{humanize, FIELDS};
use super::session::{FieldErrors, Step, SubmissionState, WaitlistAction, WaitlistSession};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JoinWaitlistRequest {
    email: String,
    full_name: String,
    phone_number: String,
    country: String,
}

#[derive(Properties, PartialEq)]
pub struct WaitlistFormProps {
    /// Owned by the page so the step and the typed values survive the
    /// modal closing and reopening.
    pub session: UseReducerHandle<WaitlistSession>,
}

/// The waitlist lead-capture flow: descriptor-driven inputs with inline
/// errors, one POST per validated submit, and a success step with a
/// 5 second confetti burst.
#[function_component(WaitlistForm)]
pub fn waitlist_form(props: &WaitlistFormProps) -> Html {
    let session = props.session.clone();
    let failure_notice = use_state(|| None::<String>);
    let celebrating = use_state(|| false);
    let (viewport_width, viewport_height) = use_viewport_size();

    let onsubmit = {
        let session = session.clone();
        let failure_notice = failure_notice.clone();
        let celebrating = celebrating.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let snapshot = (*session).clone();
            // Full pass over every field, touched or not; previously
            // stored errors are not trusted for the gate.
            let errors = FieldErrors::compute(&snapshot.fields);
            session.dispatch(WaitlistAction::SubmitRequested);

            if !errors.is_clean() {
                if let Some(window) = web_sys::window() {
                    let _ =
                        window.alert_with_message("Please fix form errors before submitting.");
                }
                return;
            }
            if !snapshot.can_submit() {
                return;
            }

            failure_notice.set(None);
            let payload = JoinWaitlistRequest {
                email: snapshot.fields.email.clone(),
                full_name: snapshot.fields.full_name.clone(),
                phone_number: snapshot.fields.phone_number.clone(),
                country: snapshot.fields.country.clone(),
            };

            let session = session.clone();
            let failure_notice = failure_notice.clone();
            let celebrating = celebrating.clone();
            spawn_local(async move {
                let result = Api::post("/api/waitlists/join")
                    .json(&payload)
                    .expect("Failed to serialize waitlist request")
                    .send()
                    .await;

                match result {
                    Ok(response) if response.ok() => {
                        // The body is only checked for being JSON; its
                        // contents are not used.
                        match response.json::<serde_json::Value>().await {
                            Ok(_) => {
                                session.dispatch(WaitlistAction::SubmissionSucceeded);
                                celebrating.set(true);
                                gloo_timers::future::TimeoutFuture::new(5_000).await;
                                // Harmless no-op when the form has been
                                // unmounted in the meantime.
                                celebrating.set(false);
                            }
                            Err(e) => {
                                log::error!("Waitlist response was not valid JSON: {:?}", e);
                                session.dispatch(WaitlistAction::SubmissionFailed);
                                failure_notice.set(Some(
                                    "Something went wrong. Please try again.".to_string(),
                                ));
                            }
                        }
                    }
                    Ok(response) => {
                        log!("Waitlist submission failed with status:", response.status());
                        session.dispatch(WaitlistAction::SubmissionFailed);
                        failure_notice
                            .set(Some("Something went wrong. Please try again.".to_string()));
                    }
                    Err(e) => {
                        log::error!("Waitlist request failed: {}", e);
                        session.dispatch(WaitlistAction::SubmissionFailed);
                        failure_notice
                            .set(Some("Something went wrong. Please try again.".to_string()));
                    }
                }
            });
        })
    };

    let submitting = session.submission == SubmissionState::Submitting;

    html! {
        <div class="waitlist-flow">
            <style>
            {r#".waitlist-form h2 {
                font-size: 1.6rem;
                color: #8B5E3C;
                margin: 0 0 1.25rem;
            }
            .waitlist-field {
                margin-bottom: 1rem;
            }
            .waitlist-field label {
                display: block;
                margin-bottom: 0.3rem;
                color: #3d3d3d;
                text-transform: capitalize;
            }
            .waitlist-field .required-mark {
                color: #e04f4f;
                margin-left: 0.25rem;
            }
            .waitlist-field input {
                width: 100%;
                padding: 0.55rem 0.75rem;
                font-size: 1rem;
                border: 1px solid #d0d0d0;
                border-radius: 8px;
                transition: border-color 0.2s ease, box-shadow 0.2s ease;
            }
            .waitlist-field input:focus {
                outline: none;
                border-color: #8B5E3C;
                box-shadow: 0 0 0 2px rgba(139, 94, 60, 0.25);
            }
            .waitlist-field input.has-error {
                border-color: #e04f4f;
            }
            .waitlist-field .field-error {
                color: #e04f4f;
                font-size: 0.85rem;
                margin: 0.3rem 0 0;
            }
            .waitlist-form .error-message {
                color: #e04f4f;
                margin-bottom: 0.75rem;
            }
            .waitlist-form button[type="submit"] {
                width: 100%;
                margin-top: 1rem;
                padding: 0.65rem;
                font-size: 1.05rem;
                color: #fff;
                background: #8B5E3C;
                border: none;
                border-radius: 8px;
                cursor: pointer;
                transition: background 0.2s ease;
            }
            .waitlist-form button[type="submit"]:hover {
                background: #75492E;
            }
            .waitlist-form button[type="submit"]:disabled {
                background: rgba(139, 94, 60, 0.7);
                cursor: not-allowed;
            }
            .waitlist-success {
                display: flex;
                flex-direction: column;
                align-items: center;
                text-align: center;
                padding: 2rem 1rem;
            }
            .waitlist-success h2 {
                font-size: 1.9rem;
                color: #8B5E3C;
                margin: 0 0 1rem;
            }
            .waitlist-success p {
                color: #3d3d3d;
                margin: 0;
            }"#}
            </style>
            {
                if *celebrating {
                    html! {
                        <ConfettiOverlay width={viewport_width} height={viewport_height} />
                    }
                } else {
                    html! {}
                }
            }
            {
                match session.step {
                    Step::Form => html! {
                        <form class="waitlist-form" onsubmit={onsubmit}>
                            <h2>{"Join the Waitlist!"}</h2>
                            {
                                if let Some(notice) = (*failure_notice).as_ref() {
                                    html! { <div class="error-message">{notice}</div> }
                                } else {
                                    html! {}
                                }
                            }
                            {
                                for FIELDS.iter().map(|field| {
                                    let error = session.errors.get(field.name).to_string();
                                    let oninput = {
                                        let session = session.clone();
                                        let name = field.name;
                                        Callback::from(move |e: InputEvent| {
                                            let input: HtmlInputElement = e.target_unchecked_into();
                                            session.dispatch(WaitlistAction::FieldChanged {
                                                name: name.to_string(),
                                                value: input.value(),
                                            });
                                        })
                                    };
                                    html! {
                                        <div class="waitlist-field" key={field.name}>
                                            <label>
                                                {humanize(field.name)}
                                                {
                                                    if field.required {
                                                        html! { <span class="required-mark">{"*"}</span> }
                                                    } else {
                                                        html! {}
                                                    }
                                                }
                                            </label>
                                            <input
                                                type={field.input_kind.html_type()}
                                                name={field.name}
                                                value={session.fields.value(field.name).to_string()}
                                                class={if error.is_empty() { "" } else { "has-error" }}
                                                oninput={oninput}
                                            />
                                            {
                                                if error.is_empty() {
                                                    html! {}
                                                } else {
                                                    html! { <p class="field-error">{error}</p> }
                                                }
                                            }
                                        </div>
                                    }
                                })
                            }
                            <button type="submit" disabled={submitting}>
                                { if submitting { "Submitting..." } else { "Submit" } }
                            </button>
                        </form>
                    },
                    Step::Success => html! {
                        <div class="waitlist-success">
                            <h2>{"Form Submitted"}<br/>{"Successfully!"}</h2>
                            <p>
                                {format!(
                                    "Thank you, {}. We will get back to you shortly.",
                                    session.fields.full_name
                                )}
                            </p>
                        </div>
                    },
                }
            }
        </div>
    }
}
