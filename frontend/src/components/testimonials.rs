use yew::prelude::*;

use crate::carousel::{CarouselAction, Paging};
use crate::hooks::use_carousel;

#[derive(Clone, PartialEq)]
pub struct Testimonial {
    pub name: &'static str,
    pub city: &'static str,
    pub quote: &'static str,
    pub score_before: u16,
    pub score_after: u16,
}

fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            name: "Rohit S.",
            city: "Pune",
            quote: "Two old loans were still showing as unpaid. Within three months both were corrected and my home loan went through.",
            score_before: 584,
            score_after: 721,
        },
        Testimonial {
            name: "Neha K.",
            city: "Jaipur",
            quote: "I had no idea a settled credit card was the reason every bank rejected me. They explained everything in plain words.",
            score_before: 612,
            score_after: 748,
        },
        Testimonial {
            name: "Arjun M.",
            city: "Bengaluru",
            quote: "Someone had opened a card in my name. The team handled the disputes and kept me updated every week.",
            score_before: 540,
            score_after: 702,
        },
        Testimonial {
            name: "Fatima R.",
            city: "Lucknow",
            quote: "Clear plan, honest timelines, no false promises. My score crossed 750 for the first time.",
            score_before: 655,
            score_after: 762,
        },
    ]
}

/// Rotates on its own every few seconds until a visitor uses the arrows or dots.
#[function_component(TestimonialRotator)]
pub fn testimonial_rotator() -> Html {
    let carousel = use_carousel(Paging::Wrapping, 2, true, testimonials());

    let on_prev = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Retreat))
    };
    let on_next = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Advance))
    };

    let dots = (0..carousel.len()).map(|index| {
        let on_select = {
            let carousel = carousel.clone();
            Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Select(index)))
        };
        html! {
            <button
                class={classes!("testimonial-dot", (index == carousel.cursor()).then(|| "current"))}
                onclick={on_select}
                aria-label={format!("Show testimonial {}", index + 1)}
            />
        }
    });

    html! {
        <section class="testimonials">
            <h2>{"Real People, Real Scores"}</h2>
            <div class="testimonial-row">
                <button class="slider-arrow" onclick={on_prev}>{"‹"}</button>
                <div class="testimonial-track">
                    { for carousel.visible_window().into_iter().map(|t| html! {
                        <blockquote class="testimonial-card" key={t.name}>
                            <p class="testimonial-quote">{t.quote}</p>
                            <div class="testimonial-score">
                                <span class="score-before">{t.score_before.to_string()}</span>
                                {" → "}
                                <span class="score-after">{t.score_after.to_string()}</span>
                            </div>
                            <footer>{format!("{}, {}", t.name, t.city)}</footer>
                        </blockquote>
                    }) }
                </div>
                <button class="slider-arrow" onclick={on_next}>{"›"}</button>
            </div>
            <div class="testimonial-dots">
                { for dots }
            </div>
            <style>
                {r#"
                .testimonials {
                    padding: 4rem 2rem;
                    text-align: center;
                }
                .testimonial-row {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    max-width: 1000px;
                    margin: 0 auto;
                }
                .testimonial-track {
                    display: flex;
                    gap: 1.5rem;
                    flex: 1;
                }
                .testimonial-card {
                    flex: 1;
                    margin: 0;
                    padding: 2rem;
                    border-radius: 12px;
                    background: #0f172a;
                    color: #f8fafc;
                    text-align: left;
                }
                .testimonial-score {
                    margin: 1rem 0;
                    font-weight: 600;
                }
                .score-before { color: #f87171; }
                .score-after { color: #4ade80; }
                .testimonial-dots {
                    display: flex;
                    justify-content: center;
                    gap: 0.5rem;
                    margin-top: 1.5rem;
                }
                .testimonial-dot {
                    width: 10px;
                    height: 10px;
                    border-radius: 50%;
                    border: none;
                    background: #cbd5e1;
                    cursor: pointer;
                }
                .testimonial-dot.current {
                    background: #1e40af;
                }
                "#}
            </style>
        </section>
    }
}
