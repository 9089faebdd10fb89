//! Translation of generated questions into editor questions.
//!
//! The generation service speaks an open taxonomy of question tags
//! (`multiple_choice`, `likert`, ...). The form editor only understands the
//! closed [`UiType`] set, and expects every choice question to arrive with at
//! least two editable option slots. This module bridges the two.

use crate::model::mapped::{MappedOption, MappedQuestion, UiType};
use crate::model::survey::Question;

/// Backend tag whose options are always the fixed "Yes"/"No" pair.
pub const YES_NO: &str = "yes_no";

/// Generates option identifiers for one mapping pass.
///
/// Ids are a counter starting at the seed, so they are distinct within a pass.
/// Callers seed from the clock to make collisions between passes unlikely.
#[derive(Debug, Clone)]
pub struct OptionIds {
    next: u64,
}

impl OptionIds {
    pub fn starting_at(seed: u64) -> Self {
        Self { next: seed }
    }

    pub fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next = self.next.wrapping_add(1);
        id
    }
}

impl Default for OptionIds {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

/// Maps a backend question tag to the editor's question kind.
///
/// Total over strings: anything outside the known tags becomes
/// [`UiType::ShortAnswer`].
pub fn map_type(backend_type: &str) -> UiType {
    match backend_type {
        "multiple_choice" => UiType::SingleChoice,
        "checkboxes" => UiType::MultipleChoice,
        "open_text" => UiType::OpenQuestion,
        "rating" | "likert" => UiType::Scale,
        YES_NO => UiType::SingleChoice,
        "matrix" => UiType::MultipleChoice,
        _ => UiType::ShortAnswer,
    }
}

/// Builds the editable option list for `question`.
///
/// - non-choice kinds get no options, whatever the source carried;
/// - `yes_no` always gets "Yes" then "No";
/// - supplied options are kept in order with fresh ids;
/// - otherwise two empty placeholders are created.
pub fn build_options(question: &Question, ids: &mut OptionIds) -> Vec<MappedOption> {
    if !map_type(&question.question_type).is_choice() {
        return Vec::new();
    }

    let texts: Vec<String> = if question.question_type == YES_NO {
        vec!["Yes".to_string(), "No".to_string()]
    } else {
        match &question.options {
            Some(options) if !options.is_empty() => options.clone(),
            _ => vec![String::new(), String::new()],
        }
    };

    texts
        .into_iter()
        .map(|text| MappedOption {
            id: ids.next_id(),
            text,
        })
        .collect()
}

/// Translates a single generated question.
pub fn map_question(question: &Question, ids: &mut OptionIds) -> MappedQuestion {
    MappedQuestion {
        id: question.id.clone(),
        ui_type: map_type(&question.question_type),
        title: question.text.clone(),
        saved: false,
        options: build_options(question, ids),
    }
}

/// Translates a full question list, one editor question per source question,
/// in the same order.
pub fn to_mapped_questions(questions: &[Question], ids: &mut OptionIds) -> Vec<MappedQuestion> {
    questions
        .iter()
        .map(|question| map_question(question, ids))
        .collect()
}
