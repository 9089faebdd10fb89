//! HTTP client for the survey generation service.

use common::generation::{parse_survey, GenerateError};
use common::model::survey::Survey;
use common::requests::GenerateSurveyRequest;
use gloo_net::http::Request;

/// Posts `request` to `endpoint` and parses the generated survey.
///
/// A non-2xx status fails with [`GenerateError::Status`] without reading the
/// body. There is no retry and no timeout.
pub async fn generate(
    endpoint: &str,
    request: &GenerateSurveyRequest,
) -> Result<Survey, GenerateError> {
    let response = Request::post(endpoint)
        .json(request)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;

    GenerateError::check_status(response.status())?;

    let body = response.text().await.map_err(transport)?;
    parse_survey(&body)
}

fn transport(err: gloo_net::Error) -> GenerateError {
    GenerateError::Transport(err.to_string())
}
