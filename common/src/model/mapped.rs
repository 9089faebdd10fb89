//! Question shape understood by the survey form editor.
//!
//! A `MappedQuestion` is built once per generation and handed to a
//! [`crate::form::FormStore`], which owns every later edit. The editor reads
//! these values as camelCase JSON, hence the serde renames.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::survey::QuestionId;

/// Minimum number of options an editable choice question must carry.
pub const MIN_CHOICE_OPTIONS: usize = 2;

/// Closed set of question kinds the form editor can edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UiType {
    SingleChoice,
    MultipleChoice,
    OpenQuestion,
    Scale,
    ShortAnswer,
}

impl UiType {
    /// Choice questions are the only ones that carry options.
    pub fn is_choice(self) -> bool {
        matches!(self, UiType::SingleChoice | UiType::MultipleChoice)
    }

    /// Human readable label used by the form panel.
    pub fn label(self) -> &'static str {
        match self {
            UiType::SingleChoice => "Single choice",
            UiType::MultipleChoice => "Multiple choice",
            UiType::OpenQuestion => "Open question",
            UiType::Scale => "Scale",
            UiType::ShortAnswer => "Short answer",
        }
    }
}

impl fmt::Display for UiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One editable answer slot of a choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappedOption {
    pub id: u64,
    pub text: String,
}

/// A generated question translated into the editor's shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappedQuestion {
    pub id: QuestionId,
    #[serde(rename = "type")]
    pub ui_type: UiType,
    pub title: String,
    /// Whether the editor has persisted this question. Always `false` when mapped.
    pub saved: bool,
    pub options: Vec<MappedOption>,
}

impl MappedQuestion {
    /// Checks the editor contract: choice questions need at least
    /// [`MIN_CHOICE_OPTIONS`] options, other kinds carry none.
    pub fn validate(&self) -> Result<(), String> {
        if self.ui_type.is_choice() && self.options.len() < MIN_CHOICE_OPTIONS {
            return Err(format!(
                "question {} is a {} question with {} option(s), at least {} required",
                self.id,
                self.ui_type,
                self.options.len(),
                MIN_CHOICE_OPTIONS
            ));
        }
        if !self.ui_type.is_choice() && !self.options.is_empty() {
            return Err(format!(
                "question {} is a {} question and cannot carry options",
                self.id, self.ui_type
            ));
        }
        Ok(())
    }
}
