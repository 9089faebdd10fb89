pub mod mapped;
pub mod survey;
