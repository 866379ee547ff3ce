use std::rc::Rc;
use yew::Reducible;

/// What happens when a carousel is pushed past either end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Paging {
    /// Stops at the ends. Used by the blog slider and the services grid.
    Clamped,
    /// Cycles around. Used by the testimonial rotator.
    Wrapping,
}

/// A pageable view over `items`, `page_size` at a time, starting at `cursor`.
///
/// Clamped carousels keep `cursor <= items.len() - page_size` (or 0 when
/// everything fits). Wrapping carousels rotate one item at a time, so their
/// cursor ranges over every item and the window is taken cyclically.
#[derive(Clone, Debug, PartialEq)]
pub struct Carousel<T> {
    items: Vec<T>,
    page_size: usize,
    cursor: usize,
    paging: Paging,
    auto_advance: bool,
}

impl<T> Carousel<T> {
    pub fn new(paging: Paging, page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            page_size: page_size.max(1),
            cursor: 0,
            paging,
            auto_advance: false,
        }
    }

    pub fn with_items(mut self, items: Vec<T>) -> Self {
        self.set_items(items);
        self
    }

    /// Turns on the auto-advance timer. Only wrapping carousels auto-play.
    pub fn with_auto_advance(mut self) -> Self {
        self.auto_advance = self.paging == Paging::Wrapping;
        self
    }

    #[cfg(test)]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[cfg(test)]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn auto_advance(&self) -> bool {
        self.auto_advance
    }

    fn max_cursor(&self) -> usize {
        match self.paging {
            Paging::Clamped => self.items.len().saturating_sub(self.page_size),
            Paging::Wrapping => self.items.len().saturating_sub(1),
        }
    }

    pub fn can_advance(&self) -> bool {
        match self.paging {
            Paging::Clamped => self.cursor < self.max_cursor(),
            Paging::Wrapping => !self.items.is_empty(),
        }
    }

    pub fn can_retreat(&self) -> bool {
        match self.paging {
            Paging::Clamped => self.cursor > 0,
            Paging::Wrapping => !self.items.is_empty(),
        }
    }

    /// User-driven step forward. Stops auto-play for good.
    pub fn advance(&mut self) {
        self.auto_advance = false;
        self.step_forward();
    }

    /// User-driven step back. Stops auto-play for good.
    pub fn retreat(&mut self) {
        self.auto_advance = false;
        self.step_back();
    }

    /// User-driven jump, e.g. from a dot indicator. Stops auto-play for good.
    pub fn select(&mut self, index: usize) {
        self.auto_advance = false;
        self.cursor = index.min(self.max_cursor());
    }

    /// Timer-driven step forward; ignored once auto-play has been latched off.
    pub fn tick(&mut self) {
        if self.auto_advance {
            self.step_forward();
        }
    }

    fn step_forward(&mut self) {
        let len = self.items.len();
        if len == 0 {
            return;
        }
        match self.paging {
            Paging::Clamped => {
                if len > self.page_size {
                    self.cursor = (self.cursor + 1).min(len - self.page_size);
                }
            }
            Paging::Wrapping => self.cursor = (self.cursor + 1) % len,
        }
    }

    fn step_back(&mut self) {
        let len = self.items.len();
        if len == 0 {
            return;
        }
        match self.paging {
            Paging::Clamped => self.cursor = self.cursor.saturating_sub(1),
            Paging::Wrapping => {
                self.cursor = if self.cursor == 0 { len - 1 } else { self.cursor - 1 };
            }
        }
    }

    /// The items currently on screen, never more than `page_size`.
    pub fn visible_window(&self) -> Vec<&T> {
        let len = self.items.len();
        if len == 0 {
            return Vec::new();
        }
        match self.paging {
            Paging::Clamped => {
                let end = (self.cursor + self.page_size).min(len);
                self.items[self.cursor..end].iter().collect()
            }
            Paging::Wrapping => (0..self.page_size.min(len))
                .map(|i| &self.items[(self.cursor + i) % len])
                .collect(),
        }
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        if self.cursor > self.max_cursor() {
            self.cursor = self.max_cursor();
        }
    }

    /// Swaps in a fresh item list, e.g. after a fetch, and rewinds to the start.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.cursor = 0;
    }
}

pub enum CarouselAction<T> {
    Advance,
    Retreat,
    Select(usize),
    Tick,
    SetPageSize(usize),
    SetItems(Vec<T>),
}

impl<T: Clone> Reducible for Carousel<T> {
    type Action = CarouselAction<T>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            CarouselAction::Advance => next.advance(),
            CarouselAction::Retreat => next.retreat(),
            CarouselAction::Select(index) => next.select(index),
            CarouselAction::Tick => next.tick(),
            CarouselAction::SetPageSize(page_size) => next.set_page_size(page_size),
            CarouselAction::SetItems(items) => next.set_items(items),
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clamped(len: usize, page_size: usize) -> Carousel<usize> {
        Carousel::new(Paging::Clamped, page_size).with_items((0..len).collect())
    }

    fn wrapping(len: usize, page_size: usize) -> Carousel<usize> {
        Carousel::new(Paging::Wrapping, page_size).with_items((0..len).collect())
    }

    #[test]
    fn window_length_is_min_of_page_size_and_items() {
        for len in 0..8 {
            for page_size in 1..5 {
                for paging in [Paging::Clamped, Paging::Wrapping] {
                    let mut carousel =
                        Carousel::new(paging, page_size).with_items((0..len).collect::<Vec<_>>());
                    for _ in 0..len + 2 {
                        assert_eq!(carousel.visible_window().len(), page_size.min(len));
                        carousel.advance();
                    }
                }
            }
        }
    }

    #[test]
    fn clamped_advance_stops_at_last_page() {
        let mut carousel = clamped(5, 2);
        for _ in 0..10 {
            carousel.advance();
        }
        assert_eq!(carousel.cursor(), 3);
        assert!(!carousel.can_advance());
        assert!(carousel.can_retreat());
        assert_eq!(carousel.visible_window(), vec![&3, &4]);
    }

    #[test]
    fn clamped_retreat_stops_at_zero() {
        let mut carousel = clamped(5, 2);
        carousel.advance();
        for _ in 0..10 {
            carousel.retreat();
        }
        assert_eq!(carousel.cursor(), 0);
        assert!(!carousel.can_retreat());
    }

    #[test]
    fn clamped_with_everything_visible_never_moves() {
        let mut carousel = clamped(3, 3);
        carousel.advance();
        assert_eq!(carousel.cursor(), 0);
        carousel.retreat();
        assert_eq!(carousel.cursor(), 0);
        assert!(!carousel.can_advance());
        assert!(!carousel.can_retreat());
    }

    #[test]
    fn empty_carousel_is_inert() {
        for paging in [Paging::Clamped, Paging::Wrapping] {
            let mut carousel: Carousel<u8> = Carousel::new(paging, 3);
            carousel.advance();
            carousel.retreat();
            assert_eq!(carousel.cursor(), 0);
            assert!(carousel.visible_window().is_empty());
        }
    }

    #[test]
    fn wrapping_full_lap_returns_to_start() {
        let mut carousel = wrapping(4, 1);
        carousel.advance();
        let start = carousel.cursor();
        for _ in 0..4 {
            carousel.advance();
        }
        assert_eq!(carousel.cursor(), start);
    }

    #[test]
    fn wrapping_retreat_from_zero_goes_to_last() {
        let mut carousel = wrapping(4, 1);
        carousel.retreat();
        assert_eq!(carousel.cursor(), 3);
        carousel.advance();
        assert_eq!(carousel.cursor(), 0);
    }

    #[test]
    fn wrapping_window_is_cyclic() {
        let mut carousel = wrapping(4, 3);
        carousel.retreat();
        assert_eq!(carousel.visible_window(), vec![&3, &0, &1]);
        assert!(carousel.can_advance());
        assert!(carousel.can_retreat());
    }

    #[test]
    fn set_items_rewinds_cursor() {
        let mut carousel = clamped(6, 2);
        carousel.advance();
        carousel.advance();
        carousel.set_items((10..20).collect());
        assert_eq!(carousel.cursor(), 0);

        let mut carousel = wrapping(6, 1);
        carousel.retreat();
        carousel.set_items(vec![1, 2]);
        assert_eq!(carousel.cursor(), 0);
    }

    #[test]
    fn growing_page_size_pulls_cursor_back() {
        let mut carousel = clamped(6, 1);
        for _ in 0..5 {
            carousel.advance();
        }
        assert_eq!(carousel.cursor(), 5);
        carousel.set_page_size(3);
        assert_eq!(carousel.cursor(), 3);
        carousel.set_page_size(10);
        assert_eq!(carousel.cursor(), 0);
    }

    #[test]
    fn page_size_never_drops_below_one() {
        let mut carousel = clamped(3, 0);
        assert_eq!(carousel.page_size(), 1);
        carousel.set_page_size(0);
        assert_eq!(carousel.page_size(), 1);
        assert_eq!(carousel.visible_window().len(), 1);
    }

    #[test]
    fn ticks_advance_until_user_takes_over() {
        let mut carousel = wrapping(3, 1).with_auto_advance();
        carousel.tick();
        carousel.tick();
        assert_eq!(carousel.cursor(), 2);

        carousel.retreat();
        assert!(!carousel.auto_advance());
        assert_eq!(carousel.cursor(), 1);
        for _ in 0..5 {
            carousel.tick();
        }
        assert_eq!(carousel.cursor(), 1);
    }

    #[test]
    fn select_latches_auto_advance_and_clamps() {
        let mut carousel = wrapping(3, 1).with_auto_advance();
        carousel.select(7);
        assert_eq!(carousel.cursor(), 2);
        carousel.tick();
        assert_eq!(carousel.cursor(), 2);
    }

    #[test]
    fn clamped_carousels_do_not_auto_play() {
        let mut carousel = clamped(5, 1).with_auto_advance();
        assert!(!carousel.auto_advance());
        carousel.tick();
        assert_eq!(carousel.cursor(), 0);
    }

    #[test]
    fn reducer_applies_actions() {
        let carousel = Rc::new(wrapping(3, 1).with_auto_advance());
        let carousel = carousel.reduce(CarouselAction::Tick);
        assert_eq!(carousel.cursor(), 1);
        let carousel = carousel.reduce(CarouselAction::Advance);
        assert_eq!(carousel.cursor(), 2);
        assert!(!carousel.auto_advance());
        let carousel = carousel.reduce(CarouselAction::SetItems(vec![9, 8]));
        assert_eq!(carousel.cursor(), 0);
        assert_eq!(carousel.items(), &[9, 8]);
    }
}
