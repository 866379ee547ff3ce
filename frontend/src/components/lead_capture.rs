use std::cell::RefCell;
use std::rc::Rc;

use log::info;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::api::HttpClient;
use crate::hooks::use_liveness;
use crate::lead::{
    submit_lead, IndianState, LeadField, LeadForm, ProblemType, Submission, SubmitStatus,
};

fn text_input(
    form: &Rc<RefCell<LeadForm>>,
    rerender: &UseForceUpdateHandle,
    field: LeadField,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
) -> Html {
    let oninput = {
        let form = form.clone();
        let rerender = rerender.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.borrow_mut().set_field(field, &input.value());
            rerender.force_update();
        })
    };
    let value = form.borrow().fields().get(field).to_string();

    html! {
        <label class="lead-field">
            <span>{label}</span>
            <input
                type={input_type}
                name={field.name()}
                placeholder={placeholder}
                value={value}
                oninput={oninput}
            />
        </label>
    }
}

fn select_input(
    form: &Rc<RefCell<LeadForm>>,
    rerender: &UseForceUpdateHandle,
    field: LeadField,
    label: &'static str,
    options: Vec<&'static str>,
) -> Html {
    let onchange = {
        let form = form.clone();
        let rerender = rerender.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form.borrow_mut().set_field(field, &select.value());
            rerender.force_update();
        })
    };
    let current = form.borrow().fields().get(field).to_string();

    html! {
        <label class="lead-field">
            <span>{label}</span>
            <select name={field.name()} onchange={onchange}>
                <option value="" selected={current.is_empty()}>{"Select..."}</option>
                { for options.into_iter().map(|option| html! {
                    <option value={option} selected={current == option}>{option}</option>
                }) }
            </select>
        </label>
    }
}

#[function_component(LeadCaptureForm)]
pub fn lead_capture_form() -> Html {
    let form = use_mut_ref(LeadForm::default);
    let rerender = use_force_update();
    let live = use_liveness();

    let on_submit = {
        let form = form.clone();
        let rerender = rerender.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let form = form.clone();
            let rerender = rerender.clone();
            let live = live.clone();
            spawn_local(async move {
                let client = HttpClient::default();
                let repaint = {
                    let live = live.clone();
                    move || {
                        if live.is_alive() {
                            rerender.force_update();
                        }
                    }
                };
                if submit_lead(&form, &client, &live, repaint).await == Submission::Completed {
                    info!("Lead submission finished: {:?}", form.borrow().status());
                }
            });
        })
    };

    let on_authorization = {
        let form = form.clone();
        let rerender = rerender.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.borrow_mut().set_authorization(input.checked());
            rerender.force_update();
        })
    };

    let on_message = {
        let form = form.clone();
        let rerender = rerender.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            form.borrow_mut().set_field(LeadField::Message, &input.value());
            rerender.force_update();
        })
    };

    let on_reset = {
        let form = form.clone();
        let rerender = rerender.clone();
        Callback::from(move |_: MouseEvent| {
            form.borrow_mut().reset();
            rerender.force_update();
        })
    };

    let status = form.borrow().status().clone();
    let fields = form.borrow().fields().clone();
    let error = form.borrow().error_message().map(str::to_string);

    if status == SubmitStatus::Succeeded {
        return html! {
            <div class="lead-form lead-success">
                <h3>{"Thank you!"}</h3>
                <p>{"A credit expert will call you within one working day."}</p>
                <button class="lead-secondary" onclick={on_reset}>{"Submit another request"}</button>
            </div>
        };
    }

    let submitting = status == SubmitStatus::Submitting;
    let states: Vec<&'static str> = IndianState::ALL.iter().map(|s| s.label()).collect();
    let problems: Vec<&'static str> = ProblemType::ALL.iter().map(|p| p.label()).collect();

    html! {
        <form class="lead-form" onsubmit={on_submit}>
            <h3>{"Get a free credit consultation"}</h3>
            <div class="lead-grid">
                { text_input(&form, &rerender, LeadField::FullName, "Full name", "text", "Amit Verma") }
                { text_input(&form, &rerender, LeadField::MobileNumber, "Mobile number", "tel", "10-digit mobile") }
                { text_input(&form, &rerender, LeadField::Email, "Email", "text", "you@example.com") }
                { text_input(&form, &rerender, LeadField::City, "City", "text", "Your city") }
                { select_input(&form, &rerender, LeadField::State, "State", states) }
                { select_input(&form, &rerender, LeadField::ProblemType, "What's the problem?", problems) }
                { text_input(&form, &rerender, LeadField::CreditScore, "Credit score (optional)", "text", "e.g. 640") }
                { text_input(&form, &rerender, LeadField::Occupation, "Occupation (optional)", "text", "Salaried, business...") }
                { text_input(&form, &rerender, LeadField::Income, "Monthly income (optional)", "text", "In rupees") }
                { text_input(&form, &rerender, LeadField::Language, "Preferred language (optional)", "text", "Hindi, English...") }
            </div>
            <label class="lead-field lead-wide">
                <span>{"Tell us more (optional)"}</span>
                <textarea name={LeadField::Message.name()} value={fields.message.clone()} oninput={on_message} rows="3" />
            </label>
            <label class="lead-consent">
                <input type="checkbox" checked={fields.authorization} onchange={on_authorization} />
                <span>{"I authorize ScoreMend to call, SMS or WhatsApp me about my enquiry."}</span>
            </label>
            if let Some(message) = error {
                <div class="error-message">{message}</div>
            }
            <button type="submit" class="hero-cta" disabled={submitting}>
                { if submitting { "Submitting..." } else { "Request a callback" } }
            </button>
            <style>
                {r#"
                .lead-form {
                    max-width: 760px;
                    margin: 0 auto;
                    padding: 2.5rem;
                    border-radius: 16px;
                    background: #ffffff;
                    box-shadow: 0 8px 32px rgba(15, 23, 42, 0.12);
                }
                .lead-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 1rem 1.5rem;
                }
                .lead-field {
                    display: flex;
                    flex-direction: column;
                    gap: 0.35rem;
                    font-size: 0.9rem;
                    color: #374151;
                }
                .lead-field input,
                .lead-field select,
                .lead-field textarea {
                    padding: 0.7rem 0.8rem;
                    border: 1px solid #d1d5db;
                    border-radius: 8px;
                    font-size: 1rem;
                }
                .lead-wide {
                    margin-top: 1rem;
                }
                .lead-consent {
                    display: flex;
                    gap: 0.6rem;
                    align-items: flex-start;
                    margin: 1.25rem 0;
                    font-size: 0.85rem;
                }
                .error-message {
                    margin-bottom: 1rem;
                    padding: 0.75rem 1rem;
                    border-radius: 8px;
                    background: #fef2f2;
                    color: #b91c1c;
                }
                .lead-success {
                    text-align: center;
                }
                .lead-secondary {
                    padding: 0.7rem 1.6rem;
                    border: 1px solid #1e40af;
                    border-radius: 8px;
                    background: none;
                    color: #1e40af;
                    cursor: pointer;
                }
                @media (max-width: 768px) {
                    .lead-grid {
                        grid-template-columns: 1fr;
                    }
                    .lead-form {
                        padding: 1.5rem;
                    }
                }
                "#}
            </style>
        </form>
    }
}
