use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub title: AttrValue,
    pub subtitle: AttrValue,
    #[prop_or_default]
    pub cta: Option<(AttrValue, Route)>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    html! {
        <header class="hero">
            <div class="hero-content">
                <h1>{props.title.clone()}</h1>
                <p class="hero-subtitle">{props.subtitle.clone()}</p>
                {
                    if let Some((label, route)) = &props.cta {
                        html! {
                            <Link<Route> to={route.clone()} classes="forward-link">
                                <button class="hero-cta">{label.clone()}</button>
                            </Link<Route>>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
            <style>
                {r#"
                .hero {
                    padding: 8rem 2rem 5rem;
                    text-align: center;
                    background: linear-gradient(135deg, #1e3a8a 0%, #2563eb 100%);
                    color: #ffffff;
                }
                .hero h1 {
                    font-size: 2.8rem;
                    margin-bottom: 1rem;
                }
                .hero-subtitle {
                    max-width: 640px;
                    margin: 0 auto 2rem;
                    font-size: 1.15rem;
                    opacity: 0.9;
                }
                .hero-cta {
                    padding: 0.9rem 2.2rem;
                    border: none;
                    border-radius: 8px;
                    background: #facc15;
                    color: #1e293b;
                    font-weight: 700;
                    font-size: 1rem;
                    cursor: pointer;
                }
                @media (max-width: 768px) {
                    .hero h1 {
                        font-size: 2rem;
                    }
                }
                "#}
            </style>
        </header>
    }
}
