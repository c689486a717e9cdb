//! Browser-bound smoke checks for the form controller types.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use frontend::form::{Measurement, MeasurementForm};
use frontend::hooks::SubmitState;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn form_state_round_trips_in_wasm() {
    let mut form = MeasurementForm::new();
    form.set(Measurement::Ph, "7.0".to_string());
    assert_eq!(form.value(Measurement::Ph), "7.0");

    form.reset();
    assert_eq!(form, MeasurementForm::new());
}

#[wasm_bindgen_test]
fn submit_guard_blocks_while_submitting() {
    assert!(SubmitState::Idle.can_submit());
    assert!(!SubmitState::Submitting.can_submit());
}
