use yew::prelude::*;

use crate::components::hero::Hero;
use crate::components::stats::StatsStrip;
use crate::components::testimonials::TestimonialRotator;
use crate::Route;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="about-page">
            <Hero
                title="About ScoreMend"
                subtitle="We started ScoreMend after watching friends get turned away by banks for mistakes they never made."
                cta={Some((AttrValue::from("Get a Free Consultation"), Route::CreditRepair))}
            />
            <section class="about-story">
                <h2>{"Our Story"}</h2>
                <p>
                    {"Credit reports decide who gets a home loan, a car loan or even a job offer, yet most people never read theirs. When they do, they find closed accounts still marked open, payments recorded late, or loans they never took."}
                </p>
                <p>
                    {"Our team of former bank credit officers and consumer law specialists handles the paperwork, the follow-ups and the bureau disputes, so you can focus on building better habits."}
                </p>
                <h2>{"How We Work"}</h2>
                <ol class="about-steps">
                    <li>{"We review your reports from every bureau with you on a call."}</li>
                    <li>{"We file disputes for every inaccurate or unverifiable entry."}</li>
                    <li>{"We track each dispute until the bureau responds and the lender updates."}</li>
                    <li>{"We give you a plan to keep your score growing after we are done."}</li>
                </ol>
            </section>
            <StatsStrip />
            <TestimonialRotator />
            <style>
                {r#"
                .about-story {
                    max-width: 800px;
                    margin: 0 auto;
                    padding: 4rem 2rem;
                    line-height: 1.7;
                    color: #374151;
                }
                .about-steps li {
                    margin-bottom: 0.75rem;
                }
                "#}
            </style>
        </div>
    }
}
