//! Survey generator: takes a free-text description, asks the generation
//! service for a survey, previews it and pre-fills the survey form.
//!
//! Submodules follow the usual split: `state`, `messages`, `props`,
//! `update` and `view`, plus `api` for the HTTP call and `helpers` for
//! browser utilities.

use yew::prelude::*;

mod api;
mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::SurveyGeneratorProps;
pub use state::SurveyGeneratorComponent;

impl Component for SurveyGeneratorComponent {
    type Message = Msg;
    type Properties = SurveyGeneratorProps;

    fn create(_ctx: &Context<Self>) -> Self {
        SurveyGeneratorComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
