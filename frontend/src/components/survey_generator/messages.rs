use common::generation::GenerateError;
use common::model::survey::Survey;

#[derive(Clone)]
pub enum Msg {
    UpdateDescription(String),
    Generate,
    Generated(Result<Survey, GenerateError>),
}
