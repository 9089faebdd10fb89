use serde::{Deserialize, Serialize};

/// Request payload for `POST /api/surveys/generate`.
///
/// The description is sent as typed; the generation service decides whether
/// it is acceptable.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GenerateSurveyRequest {
    pub description: String,
}
