//! View rendering for the survey generator component.
//!
//! Layout: description input and submit button on one row, then the error
//! message if any, then a read-only preview of the last generated survey.

use common::model::survey::{Question, Survey};
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::SurveyGeneratorComponent;

pub fn view(
    component: &SurveyGeneratorComponent,
    ctx: &Context<SurveyGeneratorComponent>,
) -> Html {
    let link = ctx.link();
    let generation = &component.generation;

    html! {
        <div class="survey-generator">
            { build_input_row(component, link) }
            {
                match &generation.error {
                    Some(error) => html! { <p class="generator-error">{ error.clone() }</p> },
                    None => html! {},
                }
            }
            {
                match &generation.survey {
                    Some(survey) => build_preview(survey),
                    None => html! {},
                }
            }
        </div>
    }
}

/// Description input plus the submit button, disabled while loading.
fn build_input_row(
    component: &SurveyGeneratorComponent,
    link: &Scope<SurveyGeneratorComponent>,
) -> Html {
    let loading = component.generation.loading;

    html! {
        <div class="generator-input-row">
            <input
                class="generator-input"
                placeholder="Survey description"
                value={component.generation.description.clone()}
                oninput={link.callback(|e: InputEvent| {
                    Msg::UpdateDescription(e.target_unchecked_into::<HtmlInputElement>().value())
                })}
                onkeydown={link.batch_callback(|e: KeyboardEvent| {
                    if e.key() == "Enter" { vec![Msg::Generate] } else { vec![] }
                })}
            />
            <button
                class="generator-submit"
                disabled={loading}
                onclick={link.callback(|_| Msg::Generate)}
            >
                { component.button_label() }
            </button>
        </div>
    }
}

/// Read-only rendering of a generated survey: title, description and prompts.
fn build_preview(survey: &Survey) -> Html {
    html! {
        <div class="generator-preview">
            <h3>{ survey.title.clone() }</h3>
            <p>{ survey.description.clone() }</p>
            <ul>
                { for survey.questions.iter().map(build_question_item) }
            </ul>
        </div>
    }
}

fn build_question_item(question: &Question) -> Html {
    html! {
        <li key={question.id.to_string()}>
            { question.text.clone() }
            if question.required {
                <span class="required-marker" title="Required">{ " *" }</span>
            }
        </li>
    }
}
