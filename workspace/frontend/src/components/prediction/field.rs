use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::form::Measurement;

#[derive(Properties, PartialEq)]
pub struct MeasurementInputProps {
    pub field: Measurement,
    pub value: String,
    pub on_change: Callback<(Measurement, String)>,
}

/// One controlled numeric input for a single measurement.
///
/// `type="number" step="0.01" required` lets the browser police the common
/// path; text arriving through other paths is rejected at payload-conversion
/// time instead.
#[function_component(MeasurementInput)]
pub fn measurement_input(props: &MeasurementInputProps) -> Html {
    let oninput = {
        let field = props.field;
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit((field, input.value()));
        })
    };

    html! {
        <div class="form-control">
            <label class="label">
                <span class="label-text">{props.field.label()}</span>
            </label>
            <input
                type="number"
                step="0.01"
                name={props.field.key()}
                value={props.value.clone()}
                placeholder={props.field.placeholder()}
                class="input input-bordered w-full"
                required={true}
                {oninput}
            />
        </div>
    }
}
