use common::form::{FormDraft, FormStore};
use yew::{html, Component, Context, Html};

use crate::components::survey_form::SurveyFormPanel;
use crate::components::survey_generator::SurveyGeneratorComponent;
use crate::store::{CallbackFormStore, FormUpdate, SharedFormStore};

pub enum Msg {
    Form(FormUpdate),
}

/// Root component. Owns the survey-creation form and lends it to the
/// generator through a [`SharedFormStore`].
pub struct App {
    draft: FormDraft,
    form_store: SharedFormStore,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            draft: FormDraft::default(),
            form_store: SharedFormStore::new(CallbackFormStore::new(ctx.link().callback(Msg::Form))),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        let Msg::Form(update) = msg;
        let result = match update {
            FormUpdate::Title(title) => self.draft.set_title(&title),
            FormUpdate::Description(description) => self.draft.set_description(&description),
            FormUpdate::Questions(questions) => self.draft.set_questions(questions),
        };
        match result {
            Ok(()) => true,
            Err(err) => {
                gloo_console::warn!(format!("Form update rejected: {err}"));
                false
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="app">
                <SurveyGeneratorComponent form_store={Some(self.form_store.clone())} />
                <SurveyFormPanel draft={self.draft.clone()} />
            </div>
        }
    }
}
