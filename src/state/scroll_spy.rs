use crate::config::{NAV_CONDENSE_AT_PX, SCROLL_SPY_OFFSET_PX};

/// Document-space extent of one page section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    fn contains(&self, pos: f64) -> bool {
        pos >= self.top && pos < self.top + self.height
    }
}

/// Picks the nav entry to highlight for the current scroll position, with a
/// fixed look-ahead so a section activates slightly before it reaches the top
/// of the viewport. When overlapping sections both match, the later one in
/// document order wins.
pub fn active_section(sections: &[SectionBounds], scroll_y: f64) -> Option<usize> {
    let pos = scroll_y + SCROLL_SPY_OFFSET_PX;
    let mut active = None;
    for (i, s) in sections.iter().enumerate() {
        if s.contains(pos) {
            active = Some(i);
        }
    }
    active
}

/// Whether the navbar should switch to its condensed "scrolled" style.
pub fn navbar_condensed(scroll_y: f64) -> bool {
    scroll_y > NAV_CONDENSE_AT_PX
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Vec<SectionBounds> {
        vec![
            SectionBounds { top: 0.0, height: 600.0 },
            SectionBounds { top: 600.0, height: 400.0 },
            SectionBounds { top: 1000.0, height: 800.0 },
        ]
    }

    #[test]
    fn picks_section_under_offset_position() {
        let sections = page();
        assert_eq!(active_section(&sections, 0.0), Some(0));
        // 450 + 100 lands inside section 0 still
        assert_eq!(active_section(&sections, 450.0), Some(0));
        // 500 + 100 = 600 is exactly the start of section 1
        assert_eq!(active_section(&sections, 500.0), Some(1));
        assert_eq!(active_section(&sections, 1500.0), Some(2));
    }

    #[test]
    fn end_of_section_is_exclusive() {
        let sections = page();
        // 900 + 100 = 1000: section 1 ends there, section 2 begins
        assert_eq!(active_section(&sections, 900.0), Some(2));
    }

    #[test]
    fn nothing_active_past_the_last_section() {
        let sections = page();
        assert_eq!(active_section(&sections, 2000.0), None);
    }

    #[test]
    fn later_section_wins_on_overlap() {
        let sections = vec![
            SectionBounds { top: 0.0, height: 1000.0 },
            SectionBounds { top: 400.0, height: 300.0 },
        ];
        assert_eq!(active_section(&sections, 400.0), Some(1));
        // past the nested section, the outer one matches again
        assert_eq!(active_section(&sections, 800.0), Some(0));
    }

    #[test]
    fn navbar_condenses_past_threshold() {
        assert!(!navbar_condensed(0.0));
        assert!(!navbar_condensed(50.0));
        assert!(navbar_condensed(50.5));
    }
}
