//! Form store handles passed between components.
//!
//! The survey form lives in [`App`](crate::app::App). The generator gets a
//! [`SharedFormStore`] prop and writes through it; the concrete store behind
//! it, [`CallbackFormStore`], turns each setter into an [`FormUpdate`]
//! message for the owning component.

use std::cell::RefCell;
use std::rc::Rc;

use common::form::{validate_questions, FormStore, FormStoreError};
use common::model::mapped::MappedQuestion;
use yew::Callback;

/// One write into the survey form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormUpdate {
    Title(String),
    Description(String),
    Questions(Vec<MappedQuestion>),
}

/// Forwards setter calls to a Yew callback.
///
/// Question lists are validated before they leave, so the owner only ever
/// receives lists that satisfy the editor contract.
pub struct CallbackFormStore {
    on_update: Callback<FormUpdate>,
}

impl CallbackFormStore {
    pub fn new(on_update: Callback<FormUpdate>) -> Self {
        Self { on_update }
    }
}

impl FormStore for CallbackFormStore {
    fn set_title(&mut self, title: &str) -> Result<(), FormStoreError> {
        self.on_update.emit(FormUpdate::Title(title.to_string()));
        Ok(())
    }

    fn set_description(&mut self, description: &str) -> Result<(), FormStoreError> {
        self.on_update
            .emit(FormUpdate::Description(description.to_string()));
        Ok(())
    }

    fn set_questions(&mut self, questions: Vec<MappedQuestion>) -> Result<(), FormStoreError> {
        validate_questions(&questions)?;
        self.on_update.emit(FormUpdate::Questions(questions));
        Ok(())
    }
}

/// Clonable handle to a form store, usable as a component prop.
///
/// Two handles are equal when they point at the same store. Writing while the
/// store is already borrowed fails with [`FormStoreError::Unavailable`].
#[derive(Clone)]
pub struct SharedFormStore(Rc<RefCell<dyn FormStore>>);

impl SharedFormStore {
    pub fn new(store: impl FormStore + 'static) -> Self {
        Self(Rc::new(RefCell::new(store)))
    }

    fn with_store(
        &self,
        write: impl FnOnce(&mut dyn FormStore) -> Result<(), FormStoreError>,
    ) -> Result<(), FormStoreError> {
        let mut store = self
            .0
            .try_borrow_mut()
            .map_err(|_| FormStoreError::Unavailable)?;
        write(&mut *store)
    }
}

impl PartialEq for SharedFormStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl FormStore for SharedFormStore {
    fn set_title(&mut self, title: &str) -> Result<(), FormStoreError> {
        self.with_store(|store| store.set_title(title))
    }

    fn set_description(&mut self, description: &str) -> Result<(), FormStoreError> {
        self.with_store(|store| store.set_description(description))
    }

    fn set_questions(&mut self, questions: Vec<MappedQuestion>) -> Result<(), FormStoreError> {
        self.with_store(|store| store.set_questions(questions))
    }
}
