use yew::prelude::*;

use crate::components::faq::FaqSection;
use crate::components::hero::Hero;
use crate::components::lead_capture::LeadCaptureForm;
use crate::components::testimonials::TestimonialRotator;

#[function_component(CreditRepair)]
pub fn credit_repair() -> Html {
    html! {
        <div class="credit-repair-page">
            <Hero
                title="Low Credit Score? Loan Rejected?"
                subtitle="Tell us what happened and a credit expert will call you back with a free assessment of your report."
            />
            <section class="lead-section">
                <LeadCaptureForm />
            </section>
            <TestimonialRotator />
            <FaqSection />
            <style>
                {r#"
                .lead-section {
                    padding: 3rem 1rem 4rem;
                    margin-top: -3rem;
                }
                "#}
            </style>
        </div>
    }
}
