use yew::prelude::*;

use crate::carousel::{CarouselAction, Paging};
use crate::hooks::{is_mobile, use_carousel, use_viewport_width};

#[derive(Clone, PartialEq)]
pub struct Service {
    pub title: &'static str,
    pub summary: &'static str,
    pub icon: &'static str,
}

pub fn services() -> Vec<Service> {
    vec![
        Service {
            title: "Credit Report Analysis",
            summary: "We pull your reports from all four bureaus and flag every entry that is dragging your score down.",
            icon: "/assets/icons/report.svg",
        },
        Service {
            title: "Dispute Filing",
            summary: "Wrong late payments, duplicate accounts and closed loans still showing open get disputed on your behalf.",
            icon: "/assets/icons/dispute.svg",
        },
        Service {
            title: "Settlement Cleanup",
            summary: "Settled accounts hurt for years. We negotiate with lenders to have them updated to closed.",
            icon: "/assets/icons/settlement.svg",
        },
        Service {
            title: "Score Building Plan",
            summary: "A month-by-month plan for utilisation, new credit and repayments that fits your income.",
            icon: "/assets/icons/plan.svg",
        },
        Service {
            title: "Loan Readiness",
            summary: "Know which lenders will say yes before you apply, so a rejection never costs you points.",
            icon: "/assets/icons/loan.svg",
        },
    ]
}

#[derive(Properties, PartialEq)]
pub struct ServiceCardProps {
    pub service: Service,
    pub mobile: bool,
}

/// Hover highlights on desktop, tap toggles the highlight on mobile.
#[function_component(ServiceCard)]
pub fn service_card(props: &ServiceCardProps) -> Html {
    let hovered = use_state(|| false);
    let active = use_state(|| false);

    let on_enter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let on_leave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };
    let on_tap = {
        let active = active.clone();
        let mobile = props.mobile;
        Callback::from(move |_: MouseEvent| {
            if mobile {
                active.set(!*active);
            }
        })
    };

    let highlighted = *hovered || *active;

    html! {
        <div
            class={classes!("service-card", highlighted.then(|| "highlighted"))}
            onmouseenter={on_enter}
            onmouseleave={on_leave}
            onclick={on_tap}
        >
            <img src={props.service.icon} alt="" class="service-icon" />
            <h3>{props.service.title}</h3>
            <p>{props.service.summary}</p>
        </div>
    }
}

#[function_component(ServicesCarousel)]
pub fn services_carousel() -> Html {
    let carousel = use_carousel(Paging::Clamped, 3, false, services());
    let mobile = is_mobile(use_viewport_width());

    let on_prev = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Retreat))
    };
    let on_next = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Advance))
    };

    html! {
        <section class="services">
            <h2>{"What We Do"}</h2>
            <div class="services-row">
                <button class="slider-arrow" onclick={on_prev} disabled={!carousel.can_retreat()}>{"‹"}</button>
                <div class="services-track">
                    { for carousel.visible_window().into_iter().map(|service| html! {
                        <ServiceCard key={service.title} service={service.clone()} mobile={mobile} />
                    }) }
                </div>
                <button class="slider-arrow" onclick={on_next} disabled={!carousel.can_advance()}>{"›"}</button>
            </div>
            <style>
                {r#"
                .services {
                    padding: 4rem 2rem;
                    background: #f5f8ff;
                    text-align: center;
                }
                .services-row {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    max-width: 1200px;
                    margin: 0 auto;
                }
                .services-track {
                    display: flex;
                    gap: 1.5rem;
                    flex: 1;
                }
                .service-card {
                    flex: 1;
                    min-width: 0;
                    padding: 2rem 1.5rem;
                    border-radius: 12px;
                    background: #ffffff;
                    border: 1px solid #e5e7eb;
                    transition: transform 0.2s ease, box-shadow 0.2s ease;
                }
                .service-card.highlighted {
                    transform: translateY(-4px);
                    box-shadow: 0 10px 24px rgba(30, 64, 175, 0.15);
                    border-color: #1e40af;
                }
                .service-icon {
                    width: 48px;
                    height: 48px;
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_titles_are_unique() {
        let list = services();
        for (i, a) in list.iter().enumerate() {
            assert!(list.iter().skip(i + 1).all(|b| b.title != a.title));
        }
    }
}
