//! State of the survey generator widget.
//!
//! `GenerationState` is what the widget renders: the typed description, the
//! loading flag, the last visible error and the last generated survey. The
//! network call itself lives in the frontend; this type decides what a
//! finished call does to the state and to the attached form store.
//!
//! A failed generation only replaces the error message. The last successful
//! survey stays on screen until another generation succeeds.

use thiserror::Error;

use crate::form::{self, BridgeError, FormStore};
use crate::mapping::{OptionIds, to_mapped_questions};
use crate::model::survey::Survey;
use crate::requests::GenerateSurveyRequest;

/// Path of the generation endpoint, relative to the serving origin.
pub const GENERATE_ENDPOINT: &str = "/api/surveys/generate";

/// Why a generation request did not produce a survey.
///
/// The `Display` text is what the widget shows to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// The service answered with a status outside `200..=299`.
    #[error("Error {0}")]
    Status(u16),
    /// The request never completed.
    #[error("{0}")]
    Transport(String),
    /// The response body was not a survey document.
    #[error("{0}")]
    Parse(String),
}

impl GenerateError {
    /// Maps an HTTP status to `Ok` for success codes and `Status` otherwise.
    pub fn check_status(status: u16) -> Result<(), GenerateError> {
        if (200..300).contains(&status) {
            Ok(())
        } else {
            Err(GenerateError::Status(status))
        }
    }
}

/// Parses a response body into a survey.
pub fn parse_survey(body: &str) -> Result<Survey, GenerateError> {
    serde_json::from_str(body).map_err(|e| GenerateError::Parse(e.to_string()))
}

/// What happened when a request finished.
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    /// Survey shown and written into the form store.
    Applied,
    /// Survey shown; no form store attached.
    Detached,
    /// Survey shown but the form store rejected a write.
    BridgeFailed(BridgeError),
    /// No survey; the error message was updated.
    Failed,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationState {
    pub description: String,
    pub loading: bool,
    pub error: Option<String>,
    pub survey: Option<Survey>,
}

impl GenerationState {
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Starts a request for the current description.
    ///
    /// Returns `None` while another request is outstanding.
    pub fn begin(&mut self) -> Option<GenerateSurveyRequest> {
        if self.loading {
            return None;
        }
        self.loading = true;
        self.error = None;
        Some(GenerateSurveyRequest {
            description: self.description.clone(),
        })
    }

    /// Records the outcome of the request started by [`begin`](Self::begin).
    ///
    /// On success the survey is mapped and written into `store` when one is
    /// attached. Store failures are reported through the returned
    /// [`Completion`] and never become the visible error.
    pub fn complete(
        &mut self,
        result: Result<Survey, GenerateError>,
        store: Option<&mut dyn FormStore>,
        ids: &mut OptionIds,
    ) -> Completion {
        self.loading = false;

        let survey = match result {
            Ok(survey) => survey,
            Err(error) => {
                self.error = Some(error.to_string());
                return Completion::Failed;
            }
        };

        self.error = None;
        let completion = match store {
            Some(store) => {
                let questions = to_mapped_questions(&survey.questions, ids);
                match form::apply(&survey, questions, store) {
                    Ok(()) => Completion::Applied,
                    Err(error) => Completion::BridgeFailed(error),
                }
            }
            None => Completion::Detached,
        };
        self.survey = Some(survey);
        completion
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormField;
    use crate::form::tests::{RecordingStore, survey};
    use crate::model::mapped::UiType;
    use pretty_assertions::assert_eq;

    fn started(description: &str) -> GenerationState {
        let mut state = GenerationState::default();
        state.set_description(description);
        state.begin().unwrap();
        state
    }

    #[test]
    fn begin_sends_description_and_clears_error() {
        let mut state = GenerationState {
            error: Some("Error 502".to_string()),
            ..Default::default()
        };
        state.set_description("customer feedback");

        let request = state.begin().unwrap();

        assert_eq!(request.description, "customer feedback");
        assert!(state.loading);
        assert_eq!(state.error, None);
    }

    #[test]
    fn begin_is_refused_while_loading() {
        let mut state = started("first");
        assert_eq!(state.begin(), None);
    }

    #[test]
    fn success_shows_survey_and_fills_form() {
        let mut state = started("retro");
        let mut store = RecordingStore::default();

        let completion = state.complete(Ok(survey()), Some(&mut store), &mut OptionIds::default());

        assert_eq!(completion, Completion::Applied);
        assert!(!state.loading);
        assert_eq!(state.error, None);
        assert_eq!(state.survey.as_ref().map(|s| s.title.as_str()), Some("Team retro"));

        let types: Vec<UiType> = store.draft.questions.iter().map(|q| q.ui_type).collect();
        assert_eq!(types, [UiType::SingleChoice, UiType::Scale]);
        assert_eq!(store.draft.questions[0].options.len(), 2);
        assert!(store.draft.questions[1].options.is_empty());
    }

    #[test]
    fn server_error_is_visible_and_skips_form() {
        let mut state = started("retro");
        let mut store = RecordingStore::default();

        let completion = state.complete(
            Err(GenerateError::Status(500)),
            Some(&mut store),
            &mut OptionIds::default(),
        );

        assert_eq!(completion, Completion::Failed);
        assert!(state.error.as_deref().unwrap().contains("500"));
        assert!(store.calls.is_empty());
        assert_eq!(state.survey, None);
    }

    #[test]
    fn failing_store_still_shows_preview() {
        let mut state = started("retro");
        let mut store = RecordingStore {
            fail_on: Some(FormField::Title),
            ..Default::default()
        };

        let completion = state.complete(Ok(survey()), Some(&mut store), &mut OptionIds::default());

        assert!(matches!(
            completion,
            Completion::BridgeFailed(BridgeError { field: FormField::Title, .. })
        ));
        assert_eq!(state.error, None);
        assert!(state.survey.is_some());
    }

    #[test]
    fn failure_keeps_previous_survey() {
        let mut state = started("retro");
        state.complete(Ok(survey()), None, &mut OptionIds::default());

        state.begin().unwrap();
        let completion = state.complete(
            Err(GenerateError::Transport("Failed to fetch".to_string())),
            None,
            &mut OptionIds::default(),
        );

        assert_eq!(completion, Completion::Failed);
        assert_eq!(state.error.as_deref(), Some("Failed to fetch"));
        assert_eq!(state.survey, Some(survey()));
    }

    #[test]
    fn success_without_store_is_detached() {
        let mut state = started("retro");
        let completion = state.complete(Ok(survey()), None, &mut OptionIds::default());
        assert_eq!(completion, Completion::Detached);
    }

    #[test]
    fn status_check() {
        assert_eq!(GenerateError::check_status(200), Ok(()));
        assert_eq!(GenerateError::check_status(201), Ok(()));
        assert_eq!(
            GenerateError::check_status(429),
            Err(GenerateError::Status(429))
        );
        assert_eq!(GenerateError::Status(500).to_string(), "Error 500");
    }

    #[test]
    fn malformed_body_is_a_parse_error() {
        assert!(matches!(parse_survey("<html>"), Err(GenerateError::Parse(_))));
        assert!(matches!(parse_survey(r#"{"title": "x"}"#), Err(GenerateError::Parse(_))));
    }
}
