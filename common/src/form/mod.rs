//! Hand-off of a generated survey to the survey-creation form.
//!
//! The form state belongs to whoever implements [`FormStore`]; this module
//! only defines the contract and the order in which a generated survey is
//! written into it.

use std::fmt;

use thiserror::Error;

use crate::model::mapped::MappedQuestion;
use crate::model::survey::Survey;

/// Failure reported by a form store setter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormStoreError {
    /// The store is busy (for example already borrowed) and cannot be written.
    #[error("form store is unavailable")]
    Unavailable,
    /// The value breaks the store's contract.
    #[error("invalid form value: {0}")]
    Invalid(String),
}

/// Mutable survey-creation form state owned outside the generator.
pub trait FormStore {
    fn set_title(&mut self, title: &str) -> Result<(), FormStoreError>;
    fn set_description(&mut self, description: &str) -> Result<(), FormStoreError>;
    fn set_questions(&mut self, questions: Vec<MappedQuestion>) -> Result<(), FormStoreError>;
}

/// The form field a bridge write was targeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Description,
    Questions,
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FormField::Title => "title",
            FormField::Description => "description",
            FormField::Questions => "questions",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("could not set form {field}: {source}")]
pub struct BridgeError {
    pub field: FormField,
    #[source]
    pub source: FormStoreError,
}

/// Writes title, description and questions into `store`, in that order.
///
/// Each write is independent. The first failing setter stops the sequence;
/// fields written before it stay written.
pub fn apply(
    survey: &Survey,
    questions: Vec<MappedQuestion>,
    store: &mut dyn FormStore,
) -> Result<(), BridgeError> {
    store
        .set_title(&survey.title)
        .map_err(|source| BridgeError { field: FormField::Title, source })?;
    store
        .set_description(&survey.description)
        .map_err(|source| BridgeError { field: FormField::Description, source })?;
    store
        .set_questions(questions)
        .map_err(|source| BridgeError { field: FormField::Questions, source })?;
    Ok(())
}

/// Rejects a question list that breaks the editor contract.
pub fn validate_questions(questions: &[MappedQuestion]) -> Result<(), FormStoreError> {
    questions
        .iter()
        .try_for_each(|q| q.validate().map_err(FormStoreError::Invalid))
}

/// In-memory survey-creation form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormDraft {
    pub title: String,
    pub description: String,
    pub questions: Vec<MappedQuestion>,
}

impl FormDraft {
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.description.is_empty() && self.questions.is_empty()
    }
}

impl FormStore for FormDraft {
    fn set_title(&mut self, title: &str) -> Result<(), FormStoreError> {
        self.title = title.to_string();
        Ok(())
    }

    fn set_description(&mut self, description: &str) -> Result<(), FormStoreError> {
        self.description = description.to_string();
        Ok(())
    }

    fn set_questions(&mut self, questions: Vec<MappedQuestion>) -> Result<(), FormStoreError> {
        validate_questions(&questions)?;
        self.questions = questions;
        Ok(())
    }
}
