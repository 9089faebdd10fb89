//! Shared survey types and the logic that turns a generated survey into
//! editable form state. Used by both the wasm frontend and the backend host.

pub mod form;
pub mod generation;
pub mod mapping;
pub mod model;
pub mod requests;
