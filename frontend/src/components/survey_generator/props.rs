//! Properties for the `SurveyGeneratorComponent`.

use common::generation::GENERATE_ENDPOINT;
use yew::prelude::*;

use crate::store::SharedFormStore;

#[derive(Properties, PartialEq, Clone)]
pub struct SurveyGeneratorProps {
    /// URL the description is posted to.
    #[prop_or(AttrValue::Static(GENERATE_ENDPOINT))]
    pub endpoint: AttrValue,

    /// Survey-creation form to pre-fill with each generated survey.
    ///
    /// When `None` the generator only shows its read-only preview.
    #[prop_or_default]
    pub form_store: Option<SharedFormStore>,
}
