//! Cyclic index navigation for the testimonial carousel.

/// Wraparound cursor over a borrowed, non-empty item slice.
///
/// `next`/`previous` wrap at the ends; `go_to` is for the dot indicators,
/// whose indices are always in range by construction, so an out-of-range
/// jump is a caller bug and fails fast instead of clamping.
#[derive(Debug, Clone, PartialEq)]
pub struct Carousel<'a, T> {
    items: &'a [T],
    index: usize,
}

impl<'a, T> Carousel<'a, T> {
    /// Panics if `items` is empty; the content lists here are static and
    /// never empty.
    pub fn new(items: &'a [T]) -> Self {
        assert!(!items.is_empty(), "carousel requires at least one item");
        Self { items, index: 0 }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &'a T {
        &self.items[self.index]
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.items.len();
    }

    pub fn previous(&mut self) {
        let n = self.items.len();
        self.index = (self.index + n - 1) % n;
    }

    pub fn go_to(&mut self, index: usize) {
        assert!(index < self.items.len(), "carousel index {index} out of range");
        self.index = index;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ITEMS: [&str; 4] = ["a", "b", "c", "d"];

    #[test]
    fn starts_at_first_item() {
        let carousel = Carousel::new(&ITEMS);
        assert_eq!(carousel.index(), 0);
        assert_eq!(*carousel.current(), "a");
    }

    #[test]
    fn next_wraps_past_last() {
        let mut carousel = Carousel::new(&ITEMS);
        carousel.go_to(3);
        carousel.next();
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn previous_wraps_past_first() {
        let mut carousel = Carousel::new(&ITEMS);
        carousel.previous();
        assert_eq!(carousel.index(), 3);
        assert_eq!(*carousel.current(), "d");
    }

    #[test]
    fn full_cycle_returns_to_start() {
        for start in 0..ITEMS.len() {
            let mut carousel = Carousel::new(&ITEMS);
            carousel.go_to(start);
            for _ in 0..ITEMS.len() {
                carousel.next();
            }
            assert_eq!(carousel.index(), start);
        }
    }

    #[test]
    fn go_to_jumps_directly() {
        let mut carousel = Carousel::new(&ITEMS);
        carousel.go_to(2);
        assert_eq!(*carousel.current(), "c");
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn go_to_out_of_range_panics() {
        let mut carousel = Carousel::new(&ITEMS);
        carousel.go_to(4);
    }

    #[test]
    #[should_panic(expected = "at least one item")]
    fn empty_list_rejected() {
        let empty: [&str; 0] = [];
        let _ = Carousel::new(&empty);
    }
}
