//! Survey-creation form panel.
//!
//! Renders the form state owned by [`App`](crate::app::App): title,
//! description and every editor question with its kind and option slots.
//! Empty option slots show a numbered placeholder so they stay visible.

use common::form::FormDraft;
use common::model::mapped::{MappedOption, MappedQuestion};
use yew::{html, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct SurveyFormProps {
    pub draft: FormDraft,
}

pub struct SurveyFormPanel;

impl Component for SurveyFormPanel {
    type Message = ();
    type Properties = SurveyFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        SurveyFormPanel
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let draft = &ctx.props().draft;

        if draft.is_empty() {
            return html! {
                <div class="survey-form empty">{ "Generate a survey to start editing." }</div>
            };
        }

        html! {
            <div class="survey-form">
                <label>{ "Title" }</label>
                <input class="survey-form-title" readonly={true} value={draft.title.clone()} />
                <label>{ "Description" }</label>
                <textarea class="survey-form-description" readonly={true} value={draft.description.clone()} />
                <ol class="survey-form-questions">
                    { for draft.questions.iter().map(question_item) }
                </ol>
            </div>
        }
    }
}

fn question_item(question: &MappedQuestion) -> Html {
    html! {
        <li key={question.id.to_string()}>
            <span class="question-title">{ question.title.clone() }</span>
            <span class="question-kind">{ question.ui_type.label() }</span>
            if !question.options.is_empty() {
                <ul class="question-options">
                    { for question.options.iter().enumerate().map(|(i, option)| option_item(i, option)) }
                </ul>
            }
        </li>
    }
}

fn option_item(index: usize, option: &MappedOption) -> Html {
    let text = if option.text.is_empty() {
        format!("Option {}", index + 1)
    } else {
        option.text.clone()
    };
    html! { <li key={option.id.to_string()}>{ text }</li> }
}
