//! Header and mobile menu state.

/// Whether the header should switch to its compact, scrolled look.
///
/// `true` from `threshold` onwards, so with the default 20px the header is
/// flat for offsets 0-19 and compact at 20 and beyond.
pub fn is_scrolled(offset: f64, threshold: f64) -> bool {
    offset >= threshold
}

/// CSS modifier for the header.
pub fn header_class(scrolled: bool) -> &'static str {
    if scrolled {
        "site-header scrolled"
    } else {
        "site-header"
    }
}

/// Collapsible navigation panel on small screens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    /// Is the panel showing?
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Burger button.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// A link inside the panel was followed.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// CSS class for the panel; the open/close transition keys off `open`.
    pub fn panel_class(self) -> &'static str {
        if self.open {
            "mobile-menu open"
        } else {
            "mobile-menu"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolled_flips_exactly_at_threshold() {
        for offset in 0..20 {
            assert!(!is_scrolled(f64::from(offset), 20.0), "offset {offset}");
        }
        assert!(is_scrolled(20.0, 20.0));
        for offset in [21.0, 250.0, 10_000.0] {
            assert!(is_scrolled(offset, 20.0), "offset {offset}");
        }
    }

    #[test]
    fn fractional_offsets_below_threshold_stay_flat() {
        assert!(!is_scrolled(19.99, 20.0));
    }

    #[test]
    fn header_class_tracks_state() {
        assert_eq!(header_class(false), "site-header");
        assert_eq!(header_class(true), "site-header scrolled");
    }

    #[test]
    fn menu_toggles_and_closes() {
        let mut menu = MenuState::default();
        assert!(!menu.is_open());

        menu.toggle();
        assert!(menu.is_open());
        assert_eq!(menu.panel_class(), "mobile-menu open");

        menu.close();
        assert!(!menu.is_open());

        // closing an already closed menu is harmless
        menu.close();
        assert!(!menu.is_open());

        menu.toggle();
        menu.toggle();
        assert!(!menu.is_open());
    }
}
