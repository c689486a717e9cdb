//! Form state for the nine water-quality measurements.
//!
//! `Measurement` is the only way to address a field, so the form always
//! carries exactly the nine known keys; none can be added or removed.

use common::PredictionRequest;

/// One of the nine measurements the prediction service scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Measurement {
    Ph,
    Hardness,
    Solids,
    Chloramines,
    Sulfate,
    Conductivity,
    OrganicCarbon,
    Trihalomethanes,
    Turbidity,
}

impl Measurement {
    /// Display order, matching the service's field order.
    pub const ALL: [Measurement; 9] = [
        Measurement::Ph,
        Measurement::Hardness,
        Measurement::Solids,
        Measurement::Chloramines,
        Measurement::Sulfate,
        Measurement::Conductivity,
        Measurement::OrganicCarbon,
        Measurement::Trihalomethanes,
        Measurement::Turbidity,
    ];

    /// Field name on the wire.
    pub fn key(self) -> &'static str {
        match self {
            Measurement::Ph => "ph",
            Measurement::Hardness => "Hardness",
            Measurement::Solids => "Solids",
            Measurement::Chloramines => "Chloramines",
            Measurement::Sulfate => "Sulfate",
            Measurement::Conductivity => "Conductivity",
            Measurement::OrganicCarbon => "Organic_carbon",
            Measurement::Trihalomethanes => "Trihalomethanes",
            Measurement::Turbidity => "Turbidity",
        }
    }

    /// Human-readable input label.
    pub fn label(self) -> &'static str {
        match self {
            Measurement::Ph => "pH Level",
            Measurement::Hardness => "Water Hardness",
            Measurement::Solids => "Total Dissolved Solids",
            Measurement::Chloramines => "Chloramines Level",
            Measurement::Sulfate => "Sulfate Content",
            Measurement::Conductivity => "Conductivity",
            Measurement::OrganicCarbon => "Organic Carbon",
            Measurement::Trihalomethanes => "Trihalomethanes Level",
            Measurement::Turbidity => "Turbidity Level",
        }
    }

    /// Advisory range shown as the input placeholder. Not validated.
    pub fn placeholder(self) -> &'static str {
        match self {
            Measurement::Ph => "0-14",
            Measurement::Hardness => "0-323",
            Measurement::Solids => "0-61227",
            Measurement::Chloramines => "0-13",
            Measurement::Sulfate => "0-481",
            Measurement::Conductivity => "0-753",
            Measurement::OrganicCarbon => "0-28.3",
            Measurement::Trihalomethanes => "0-124",
            Measurement::Turbidity => "1.45-6.74",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Live, editable record of user-entered measurement strings.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MeasurementForm {
    values: [String; 9],
}

impl MeasurementForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: Measurement) -> &str {
        &self.values[field.index()]
    }

    /// Replace one field's value. No other field is touched, and no numeric
    /// validation happens here; malformed text is caught at conversion time.
    pub fn set(&mut self, field: Measurement, value: String) {
        self.values[field.index()] = value;
    }

    /// Restore every field to the empty string.
    pub fn reset(&mut self) {
        self.values = Default::default();
    }

    /// Convert to the numeric wire payload.
    ///
    /// Fails with a user-visible message naming the first field whose text is
    /// not a finite number; nothing is sent in that case (JSON cannot carry
    /// NaN or infinities).
    pub fn to_request(&self) -> Result<PredictionRequest, String> {
        let mut parsed = [0f64; 9];
        for field in Measurement::ALL {
            let number = self
                .value(field)
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite());
            match number {
                Some(n) => parsed[field.index()] = n,
                None => return Err(format!("{} is not a number", field.label())),
            }
        }

        Ok(PredictionRequest {
            ph: parsed[Measurement::Ph.index()],
            hardness: parsed[Measurement::Hardness.index()],
            solids: parsed[Measurement::Solids.index()],
            chloramines: parsed[Measurement::Chloramines.index()],
            sulfate: parsed[Measurement::Sulfate.index()],
            conductivity: parsed[Measurement::Conductivity.index()],
            organic_carbon: parsed[Measurement::OrganicCarbon.index()],
            trihalomethanes: parsed[Measurement::Trihalomethanes.index()],
            turbidity: parsed[Measurement::Turbidity.index()],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::SubmitState;
    use common::{PredictionResponse, POTABLE_MESSAGE};

    fn reference_form() -> MeasurementForm {
        let mut form = MeasurementForm::new();
        for (field, value) in [
            (Measurement::Ph, "7.0"),
            (Measurement::Hardness, "150"),
            (Measurement::Solids, "20000"),
            (Measurement::Chloramines, "5"),
            (Measurement::Sulfate, "250"),
            (Measurement::Conductivity, "400"),
            (Measurement::OrganicCarbon, "10"),
            (Measurement::Trihalomethanes, "60"),
            (Measurement::Turbidity, "3.5"),
        ] {
            form.set(field, value.to_string());
        }
        form
    }

    #[test]
    fn set_changes_exactly_that_field() {
        for field in Measurement::ALL {
            let mut form = MeasurementForm::new();
            form.set(field, "1.5".to_string());
            for other in Measurement::ALL {
                if other == field {
                    assert_eq!(form.value(other), "1.5");
                } else {
                    assert_eq!(form.value(other), "", "{} leaked into {}", field.key(), other.key());
                }
            }
        }
    }

    #[test]
    fn new_form_is_all_empty() {
        let form = MeasurementForm::new();
        for field in Measurement::ALL {
            assert_eq!(form.value(field), "");
        }
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut form = reference_form();
        form.reset();
        assert_eq!(form, MeasurementForm::new());
    }

    #[test]
    fn reference_vector_converts_to_nine_numeric_fields() {
        let request = reference_form().to_request().expect("reference vector parses");
        let value = serde_json::to_value(request).expect("request serializes");
        let object = value.as_object().expect("request is a JSON object");

        assert_eq!(object.len(), 9);
        for (key, expected) in [
            ("ph", 7.0),
            ("Hardness", 150.0),
            ("Solids", 20000.0),
            ("Chloramines", 5.0),
            ("Sulfate", 250.0),
            ("Conductivity", 400.0),
            ("Organic_carbon", 10.0),
            ("Trihalomethanes", 60.0),
            ("Turbidity", 3.5),
        ] {
            assert_eq!(object[key].as_f64(), Some(expected), "field {key}");
        }
    }

    #[test]
    fn non_numeric_field_fails_conversion_naming_the_field() {
        let mut form = reference_form();
        form.set(Measurement::Sulfate, "abc".to_string());
        assert_eq!(
            form.to_request().unwrap_err(),
            "Sulfate Content is not a number"
        );
    }

    #[test]
    fn empty_and_non_finite_fields_fail_conversion() {
        for bad in ["", "NaN", "inf", "-inf"] {
            let mut form = reference_form();
            form.set(Measurement::Turbidity, bad.to_string());
            assert_eq!(
                form.to_request().unwrap_err(),
                "Turbidity Level is not a number",
                "value {bad:?}"
            );
        }
    }

    #[test]
    fn editing_after_result_keeps_previous_outcome() {
        // A displayed verdict stays visible while the user edits fields;
        // only reset or a new submission replaces it.
        let mut form = reference_form();
        let state = SubmitState::Completed(PredictionResponse {
            prediction: Some(1.0),
            message: POTABLE_MESSAGE.to_string(),
        });

        form.set(Measurement::Turbidity, "9.99".to_string());

        assert!(state.is_completed());
        assert_eq!(form.value(Measurement::Turbidity), "9.99");
    }
}
