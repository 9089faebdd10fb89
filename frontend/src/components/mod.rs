pub mod survey_form;
pub mod survey_generator;
