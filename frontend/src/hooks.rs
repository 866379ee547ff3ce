use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::carousel::{Carousel, CarouselAction, Paging};
use crate::config;

/// Shared "still mounted" flag. Async work checks it before touching state.
#[derive(Clone, Debug)]
pub struct Liveness(Rc<Cell<bool>>);

impl Default for Liveness {
    fn default() -> Self {
        Liveness(Rc::new(Cell::new(true)))
    }
}

impl PartialEq for Liveness {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Liveness {
    pub fn is_alive(&self) -> bool {
        self.0.get()
    }

    pub fn end(&self) {
        self.0.set(false);
    }
}

/// A `Liveness` that ends when the calling component unmounts.
#[hook]
pub fn use_liveness() -> Liveness {
    let live = (*use_state(Liveness::default)).clone();
    {
        let live = live.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    debug!("Component unmounted, ignoring late responses");
                    live.end();
                }
            },
            (),
        );
    }
    live
}

fn current_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|w| w.as_f64())
        .unwrap_or(config::TABLET_MAX_WIDTH)
}

/// Window width, updated on every `resize`.
#[hook]
pub fn use_viewport_width() -> f64 {
    let width = use_state(current_width);
    {
        let width = width.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let resize_callback = Closure::wrap(Box::new(move || {
                    width.set(current_width());
                }) as Box<dyn FnMut()>);

                if let Some(window) = &window {
                    let _ = window.add_event_listener_with_callback(
                        "resize",
                        resize_callback.as_ref().unchecked_ref(),
                    );
                }

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "resize",
                            resize_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }
    *width
}

pub fn is_mobile(width: f64) -> bool {
    width < config::MOBILE_MAX_WIDTH
}

/// How many cards fit side by side at `width`, capped at `max`.
pub fn page_size_for_width(width: f64, max: usize) -> usize {
    let fit = if width < config::MOBILE_MAX_WIDTH {
        1
    } else if width < config::TABLET_MAX_WIDTH {
        2
    } else {
        3
    };
    fit.min(max).max(1)
}

/// A carousel bound to the component, resized with the viewport. With
/// `auto_advance`, an interval ticks it until the user touches a control;
/// the interval is dropped on unmount or as soon as auto-play latches off.
#[hook]
pub fn use_carousel<T>(
    paging: Paging,
    max_page_size: usize,
    auto_advance: bool,
    initial: Vec<T>,
) -> UseReducerHandle<Carousel<T>>
where
    T: Clone + 'static,
{
    let width = use_viewport_width();
    let page_size = page_size_for_width(width, max_page_size);
    let carousel = use_reducer(move || {
        let carousel = Carousel::new(paging, page_size).with_items(initial);
        if auto_advance {
            carousel.with_auto_advance()
        } else {
            carousel
        }
    });

    {
        let carousel = carousel.clone();
        use_effect_with_deps(
            move |page_size| {
                carousel.dispatch(CarouselAction::SetPageSize(*page_size));
                || ()
            },
            page_size,
        );
    }

    {
        let ticker = carousel.clone();
        use_effect_with_deps(
            move |playing| {
                let interval = if *playing {
                    Some(Interval::new(config::AUTO_ADVANCE_MS, move || {
                        ticker.dispatch(CarouselAction::Tick);
                    }))
                } else {
                    None
                };
                move || drop(interval)
            },
            carousel.auto_advance(),
        );
    }

    carousel
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_size_follows_breakpoints() {
        assert_eq!(page_size_for_width(375.0, 3), 1);
        assert_eq!(page_size_for_width(800.0, 3), 2);
        assert_eq!(page_size_for_width(1440.0, 3), 3);
        assert_eq!(page_size_for_width(1440.0, 1), 1);
        assert_eq!(page_size_for_width(1440.0, 0), 1);
    }

    #[test]
    fn mobile_cutoff() {
        assert!(is_mobile(767.0));
        assert!(!is_mobile(768.0));
    }

    #[test]
    fn liveness_is_shared_between_clones() {
        let live = Liveness::default();
        let seen_by_task = live.clone();
        assert!(seen_by_task.is_alive());
        live.end();
        assert!(!seen_by_task.is_alive());
        assert_eq!(live, seen_by_task);
        assert_ne!(live, Liveness::default());
    }
}
