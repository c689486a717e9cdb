//! Common transport-layer types shared with the water potability prediction
//! service. These structs mirror the service's request/response payloads so
//! the frontend can build and decode API traffic without duplicating shapes.

use serde::{Deserialize, Serialize};

/// Verdict message the prediction service returns for drinkable water.
/// Matching is case- and string-exact; every other message is the negative
/// case.
pub const POTABLE_MESSAGE: &str = "Water is potable";

/// Request body for a potability prediction (mirrors the service).
///
/// All nine measurements travel as floating-point numbers under the
/// service's exact field names.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub ph: f64,
    #[serde(rename = "Hardness")]
    pub hardness: f64,
    #[serde(rename = "Solids")]
    pub solids: f64,
    #[serde(rename = "Chloramines")]
    pub chloramines: f64,
    #[serde(rename = "Sulfate")]
    pub sulfate: f64,
    #[serde(rename = "Conductivity")]
    pub conductivity: f64,
    #[serde(rename = "Organic_carbon")]
    pub organic_carbon: f64,
    #[serde(rename = "Trihalomethanes")]
    pub trihalomethanes: f64,
    #[serde(rename = "Turbidity")]
    pub turbidity: f64,
}

/// Response body from the prediction service.
///
/// Only `message` drives the UI; `prediction` is carried for completeness
/// and tolerated when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    #[serde(default)]
    pub prediction: Option<f64>,
    pub message: String,
}

/// Binary potability verdict derived from the service's message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Potable,
    NotPotable,
}

impl PredictionResponse {
    pub fn verdict(&self) -> Verdict {
        if self.message == POTABLE_MESSAGE {
            Verdict::Potable
        } else {
            Verdict::NotPotable
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_under_service_field_names() {
        let request = PredictionRequest {
            ph: 7.0,
            hardness: 150.0,
            solids: 20000.0,
            chloramines: 5.0,
            sulfate: 250.0,
            conductivity: 400.0,
            organic_carbon: 10.0,
            trihalomethanes: 60.0,
            turbidity: 3.5,
        };

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
    fn response_tolerates_missing_prediction() {
        let response: PredictionResponse =
            serde_json::from_str(r#"{"message":"Water is potable"}"#).expect("response parses");
        assert_eq!(response.prediction, None);
        assert_eq!(response.verdict(), Verdict::Potable);
    }

    #[test]
    fn response_carries_prediction_when_present() {
        let response: PredictionResponse =
            serde_json::from_str(r#"{"prediction":0.0,"message":"Water is not potable"}"#)
                .expect("response parses");
        assert_eq!(response.prediction, Some(0.0));
        assert_eq!(response.verdict(), Verdict::NotPotable);
    }

    #[test]
    fn verdict_matches_potable_message_exactly() {
        let potable = PredictionResponse {
            prediction: Some(1.0),
            message: POTABLE_MESSAGE.to_string(),
        };
        assert_eq!(potable.verdict(), Verdict::Potable);

        // Any other string is the negative case, including case variants.
        for message in ["water is potable", "Water is not potable", "WATER IS POTABLE", ""] {
            let response = PredictionResponse {
                prediction: None,
                message: message.to_string(),
            };
            assert_eq!(response.verdict(), Verdict::NotPotable, "message {message:?}");
        }
    }
}
