use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::blog_slider::BlogSlider;
use crate::components::faq::FaqSection;
use crate::components::hero::Hero;
use crate::components::services::ServicesCarousel;
use crate::components::stats::StatsStrip;
use crate::components::testimonials::TestimonialRotator;
use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="home-page">
            <Hero
                title="Fix Your Credit Score, the Right Way"
                subtitle="Errors on your credit report cost you loans and better rates. Our experts find them, dispute them and help you rebuild."
                cta={Some((AttrValue::from("Check My Options"), Route::CreditRepair))}
            />
            <StatsStrip />
            <ServicesCarousel />
            <TestimonialRotator />
            <BlogSlider />
            <FaqSection />
            <section class="footer-cta">
                <h2>{"Ready to get your score back?"}</h2>
                <p class="subtitle">{"Free consultation. No obligation. No upfront payment."}</p>
                <Link<Route> to={Route::CreditRepair} classes="forward-link">
                    <button class="hero-cta">{"Talk to an Expert"}</button>
                </Link<Route>>
            </section>
            <style>
                {r#"
                .footer-cta {
                    padding: 4rem 2rem;
                    text-align: center;
                    background: #0f172a;
                    color: #f8fafc;
                }
                .footer-cta .subtitle {
                    opacity: 0.8;
                    margin-bottom: 2rem;
                }
                "#}
            </style>
        </div>
    }
}
