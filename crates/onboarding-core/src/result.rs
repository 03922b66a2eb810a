use serde::{Deserialize, Serialize};

/// Terminal output of a flow instance. Persisting it is the host's job.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingResult {
    pub profession: String,
    pub interests: Vec<String>,
    pub completed: bool,
}

impl OnboardingResult {
    pub fn skipped() -> Self {
        Self {
            profession: String::new(),
            interests: Vec::new(),
            completed: false,
        }
    }

    pub fn completed(profession: impl Into<String>, interests: Vec<String>) -> Self {
        Self {
            profession: profession.into(),
            interests,
            completed: true,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Completion callback. Called at most once per flow.
pub type OnComplete = Box<dyn FnOnce(OnboardingResult)>;
