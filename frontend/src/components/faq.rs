use yew::prelude::*;
use web_sys::MouseEvent;
use yew::{Children, Properties};

#[derive(Properties, PartialEq)]
pub struct FaqItemProps {
    pub question: String,
    pub children: Children,
}

#[function_component(FaqItem)]
pub fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", if *is_open { "open" } else { "" })}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            if *is_open {
                <div class="faq-answer">
                    { for props.children.iter() }
                </div>
            }
        </div>
    }
}

#[function_component(FaqSection)]
pub fn faq_section() -> Html {
    html! {
        <section class="faq-section">
            <h2>{"Frequently Asked Questions"}</h2>

            <FaqItem question="What does credit repair actually do?">
                <p>
                    {"We go through your credit reports line by line, find entries that are wrong, outdated or unverifiable, and raise disputes with the bureaus and lenders until they are corrected. Accurate negative entries can't be erased, but we show you how to outgrow them."}
                </p>
            </FaqItem>

            <FaqItem question="How long before my score improves?">
                <p>
                    {"Bureaus have 30 days to answer a dispute and lenders often take one or two reporting cycles to update. Most clients see the first corrections within 45 to 90 days."}
                </p>
            </FaqItem>

            <FaqItem question="Will checking my report lower my score?">
                <p>{"No. Pulling your own report is a soft enquiry and has no effect on your score."}</p>
            </FaqItem>

            <FaqItem question="Is my information safe?">
                <p>
                    {"Your details are used only to contact you about your case. We never ask for card numbers, PINs or net banking passwords."}
                </p>
            </FaqItem>

            <FaqItem question="What if my report has no errors?">
                <p>
                    {"Then you get a clear score building plan instead: which dues to clear first, how to bring utilisation down and when it is safe to apply for new credit."}
                </p>
            </FaqItem>

            <style>
                {r#"
                .faq-section {
                    max-width: 800px;
                    margin: 0 auto;
                    padding: 4rem 2rem;
                }
                .faq-item {
                    border-bottom: 1px solid #e5e7eb;
                }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1.25rem 0;
                    background: none;
                    border: none;
                    font-size: 1.05rem;
                    font-weight: 600;
                    text-align: left;
                    cursor: pointer;
                }
                .toggle-icon {
                    font-size: 1.4rem;
                    color: #1e40af;
                }
                .faq-answer {
                    padding-bottom: 1.25rem;
                    color: #4b5563;
                    line-height: 1.6;
                }
                "#}
            </style>
        </section>
    }
}
