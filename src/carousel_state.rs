use tracing::debug;

use crate::types::ImageRef;

/// Position within a fixed gallery
pub struct CarouselState {
    /// Display order, never mutated
    gallery: &'static [ImageRef],

    /// Current index into gallery (0-based)
    current_index: usize,
}

impl CarouselState {
    /// Gallery must be non-empty
    pub fn new(gallery: &'static [ImageRef]) -> Self {
        debug_assert!(!gallery.is_empty(), "carousel gallery is empty");
        Self {
            gallery,
            current_index: 0,
        }
    }

    /// Move forward one image (timer tick or Next button).
    ///
    /// The wrap check compares the incremented index against `len - 2`, so
    /// the last gallery image is never reached going forward.
    pub fn advance(&mut self) -> usize {
        self.current_index += 1;
        if self.current_index > self.gallery.len().saturating_sub(2) {
            self.current_index = 0;
        }

        debug!(
            "Advanced to '{}' (index {})",
            self.current_image(),
            self.current_index
        );
        self.current_index
    }

    /// Move back one image, wrapping from the first to the last
    pub fn retreat(&mut self) -> usize {
        self.current_index = if self.current_index == 0 {
            self.gallery.len() - 1
        } else {
            self.current_index - 1
        };

        debug!(
            "Retreated to '{}' (index {})",
            self.current_image(),
            self.current_index
        );
        self.current_index
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_image(&self) -> ImageRef {
        self.gallery[self.current_index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::GALLERY;

    static PAIR: [ImageRef; 2] = [ImageRef::new("a.jpg"), ImageRef::new("b.jpg")];
    static SINGLE: [ImageRef; 1] = [ImageRef::new("only.jpg")];

    #[test]
    fn test_advance_skips_last_image() {
        let mut state = CarouselState::new(&GALLERY);

        // Start at index 0
        let seen: Vec<usize> = (0..7).map(|_| state.advance()).collect();
        assert_eq!(seen, vec![1, 2, 0, 1, 2, 0, 1]);
    }

    #[test]
    fn test_advance_stays_in_bounds() {
        let mut state = CarouselState::new(&GALLERY);
        for _ in 0..100 {
            let index = state.advance();
            assert!(index < GALLERY.len());
            assert_ne!(index, 3);
        }
    }

    #[test]
    fn test_retreat_wraps_to_last() {
        let mut state = CarouselState::new(&GALLERY);
        assert_eq!(state.retreat(), 3); // ← last image (wrap)
        assert_eq!(state.current_image(), GALLERY[3]);
    }

    #[test]
    fn test_retreat_simple_decrement() {
        let mut state = CarouselState::new(&GALLERY);
        state.advance();
        state.advance();
        assert_eq!(state.current_index(), 2);
        assert_eq!(state.retreat(), 1);
        assert_eq!(state.retreat(), 0);
        assert_eq!(state.retreat(), 3);
        assert_eq!(state.retreat(), 2);
    }

    #[test]
    fn test_last_image_reachable_backwards_only() {
        let mut state = CarouselState::new(&GALLERY);
        state.retreat();
        assert_eq!(state.current_index(), 3);

        // Forward from the last image wraps to the start
        assert_eq!(state.advance(), 0);
    }

    #[test]
    fn test_small_galleries() {
        let mut pair = CarouselState::new(&PAIR);
        assert_eq!(pair.advance(), 0);
        assert_eq!(pair.retreat(), 1);
        assert_eq!(pair.advance(), 0);

        let mut single = CarouselState::new(&SINGLE);
        assert_eq!(single.advance(), 0);
        assert_eq!(single.retreat(), 0);
    }
}
