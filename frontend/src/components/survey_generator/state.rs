//! Component state for the survey generator.

use common::generation::GenerationState;

/// State container for the `SurveyGeneratorComponent`.
///
/// All observable state lives in [`GenerationState`] so the transitions can
/// be exercised without a browser; this wrapper is what Yew instantiates.
pub struct SurveyGeneratorComponent {
    pub generation: GenerationState,
}

impl SurveyGeneratorComponent {
    pub fn new() -> Self {
        Self {
            generation: GenerationState::default(),
        }
    }

    /// Label of the submit button.
    pub fn button_label(&self) -> &'static str {
        if self.generation.loading {
            "Generating..."
        } else {
            "Generate Survey"
        }
    }
}
