//! Update function for the survey generator component.
//!
//! Elm-style: mutates the component for a `Msg` and returns whether to
//! re-render. The request runs in `spawn_local` and reports back with
//! `Msg::Generated`.

use common::form::FormStore;
use common::generation::Completion;
use common::mapping::OptionIds;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::api;
use super::helpers::{option_id_seed, show_toast};
use super::messages::Msg;
use super::state::SurveyGeneratorComponent;

pub fn update(
    component: &mut SurveyGeneratorComponent,
    ctx: &Context<SurveyGeneratorComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::UpdateDescription(description) => {
            component.generation.set_description(description);
            true
        }
        Msg::Generate => {
            // A request is already in flight.
            let Some(request) = component.generation.begin() else {
                return false;
            };

            let endpoint = ctx.props().endpoint.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api::generate(&endpoint, &request).await;
                link.send_message(Msg::Generated(result));
            });
            true
        }
        Msg::Generated(result) => {
            if let Err(err) = &result {
                gloo_console::error!(format!("Survey generation failed: {err}"));
            }

            let mut store = ctx.props().form_store.clone();
            let mut ids = OptionIds::starting_at(option_id_seed());
            let completion = component.generation.complete(
                result,
                store.as_mut().map(|s| s as &mut dyn FormStore),
                &mut ids,
            );

            match completion {
                Completion::Applied => show_toast("Survey copied into the form."),
                Completion::BridgeFailed(err) => {
                    gloo_console::warn!(format!("Generated survey not copied into the form: {err}"));
                }
                Completion::Detached | Completion::Failed => {}
            }
            true
        }
    }
}
