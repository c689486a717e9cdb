use common::PredictionResponse;

/// Submission lifecycle for a prediction request
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitState {
    Idle,
    Submitting,
    Completed(PredictionResponse),
    Failed(String),
}

impl Default for SubmitState {
    fn default() -> Self {
        Self::Idle
    }
}

impl SubmitState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Explicit single-flight guard: a new submission may only start when no
    /// request is in flight. The disabled submit control is an affordance on
    /// top of this, not the mechanism.
    pub fn can_submit(&self) -> bool {
        !self.is_submitting()
    }

    pub fn response(&self) -> Option<&PredictionResponse> {
        match self {
            Self::Completed(response) => Some(response),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_submitting_blocks_a_new_submission() {
        assert!(SubmitState::Idle.can_submit());
        assert!(!SubmitState::Submitting.can_submit());
        assert!(SubmitState::Failed("boom".to_string()).can_submit());
        assert!(SubmitState::Completed(PredictionResponse {
            prediction: None,
            message: "Water is potable".to_string(),
        })
        .can_submit());
    }

    #[test]
    fn accessors_match_variants() {
        let failed = SubmitState::Failed("Model unavailable".to_string());
        assert!(failed.is_failed());
        assert_eq!(failed.error(), Some("Model unavailable"));
        assert_eq!(failed.response(), None);

        assert_eq!(SubmitState::default(), SubmitState::Idle);
    }
}
