use web_sys::AbortController;
use yew::prelude::*;

use crate::api_client::predict::predict;
use crate::common::error::ErrorAlert;
use crate::common::loading::{Spinner, SpinnerSize};
use crate::common::toast::ToastContext;
use crate::form::{Measurement, MeasurementForm};
use crate::hooks::SubmitState;

use super::field::MeasurementInput;
use super::result::ResultCard;

/// The water quality prediction form.
///
/// Owns the form state and the submission lifecycle: one request in flight
/// at a time, outcome rendered inline below the form.
#[function_component(PredictionForm)]
pub fn prediction_form() -> Html {
    let form = use_state(MeasurementForm::new);
    let state = use_state(SubmitState::default);
    // Controller for the in-flight request. Doubles as the synchronous
    // single-flight latch: state handle reads lag a render behind, this slot
    // flips immediately.
    let in_flight = use_mut_ref(|| None::<AbortController>);
    let toast_ctx = use_context::<ToastContext>().unwrap();

    // Abort whatever is still in flight when the form unmounts.
    {
        let in_flight = in_flight.clone();
        use_effect_with((), move |_| {
            move || {
                if let Some(controller) = in_flight.borrow_mut().take() {
                    log::debug!("Aborting in-flight prediction request on unmount");
                    controller.abort();
                }
            }
        });
    }

    let on_change = {
        let form = form.clone();
        Callback::from(move |(field, value): (Measurement, String)| {
            let mut next = (*form).clone();
            next.set(field, value);
            form.set(next);
        })
    };

    let on_reset = {
        let form = form.clone();
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            // Reset must not clear the submitting state.
            if state.is_submitting() {
                return;
            }
            log::debug!("Resetting measurement form");
            form.set(MeasurementForm::new());
            state.set(SubmitState::Idle);
        })
    };

    let on_submit = {
        let form = form.clone();
        let state = state.clone();
        let in_flight = in_flight.clone();
        let toast_ctx = toast_ctx.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if !state.can_submit() || in_flight.borrow().is_some() {
                log::warn!("Submit ignored: a prediction request is already in flight");
                return;
            }

            let request = match form.to_request() {
                Ok(request) => request,
                Err(message) => {
                    log::warn!("Rejecting submission: {}", message);
                    toast_ctx.show_error(message.clone());
                    state.set(SubmitState::Failed(message));
                    return;
                }
            };

            state.set(SubmitState::Submitting);

            let controller = AbortController::new().ok();
            let signal = controller.as_ref().map(|c| c.signal());
            *in_flight.borrow_mut() = controller;

            let state = state.clone();
            let in_flight = in_flight.clone();
            let toast_ctx = toast_ctx.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = predict(&request, signal.as_ref()).await;
                in_flight.borrow_mut().take();
                match result {
                    Ok(response) => state.set(SubmitState::Completed(response)),
                    Err(message) => {
                        toast_ctx.show_error(message.clone());
                        state.set(SubmitState::Failed(message));
                    }
                }
            });
        })
    };

    let submitting = state.is_submitting();

    html! {
        <div class="card w-full max-w-2xl mx-auto shadow-lg bg-base-100 border border-base-200">
            <div class="card-body">
                <h2 class="card-title text-3xl font-bold text-blue-600 justify-center">
                    {"🌊 Water Quality Prediction"}
                </h2>
                <p class="text-center text-gray-600">
                    {"Enter water parameters to predict potability."}
                </p>

                <form onsubmit={on_submit} class="space-y-6 mt-4">
                    <div class="grid gap-6 md:grid-cols-2">
                        { for Measurement::ALL.iter().map(|&field| html! {
                            <MeasurementInput
                                key={field.key()}
                                {field}
                                value={form.value(field).to_string()}
                                on_change={on_change.clone()}
                            />
                        })}
                    </div>
                    <div class="flex gap-4">
                        <button type="submit" class="btn btn-primary flex-1" disabled={submitting}>
                            { if submitting {
                                html! { <><Spinner size={SpinnerSize::Small} />{" Processing..."}</> }
                            } else {
                                html! { {"Predict Water Quality"} }
                            }}
                        </button>
                        <button
                            type="button"
                            class="btn btn-outline w-1/3"
                            onclick={on_reset}
                            disabled={submitting}
                        >
                            {"Reset"}
                        </button>
                    </div>
                </form>

                { match &*state {
                    SubmitState::Failed(message) => html! { <ErrorAlert message={message.clone()} /> },
                    SubmitState::Completed(response) => html! { <ResultCard response={response.clone()} /> },
                    _ => html! {},
                }}
            </div>
        </div>
    }
}
