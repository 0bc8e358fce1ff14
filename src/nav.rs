use crate::scroll::ScrollFrame;

/// Fraction of the viewport height a section's top must pass to become active.
pub const SPY_LINE: f64 = 0.35;
/// Slack in px for deciding the page is scrolled to the very bottom.
const BOTTOM_SLACK: f64 = 1.0;

pub fn anchor_id(href: &str) -> &str {
    href.strip_prefix('#').unwrap_or(href)
}

/// Document top of one navigable section.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionOffset<'a> {
    pub id: &'a str,
    pub top: f64,
}

/// Picks the section a reader is looking at: the last one whose top edge is
/// above the spy line. Before the first section the first item stays active.
///
/// A short last section may never reach the spy line, so it is picked once
/// the page cannot scroll any further.
pub fn active_section<'a>(sections: &[SectionOffset<'a>], frame: ScrollFrame) -> Option<&'a str> {
    let lowest = || sections.iter().max_by(|a, b| a.top.total_cmp(&b.top));

    let at_bottom = frame.document_height > 0.0
        && frame.scroll_y + frame.viewport_height >= frame.document_height - BOTTOM_SLACK;
    if at_bottom {
        return lowest().map(|section| section.id);
    }

    let line = frame.scroll_y + frame.viewport_height * SPY_LINE;
    sections
        .iter()
        .filter(|section| section.top <= line)
        .max_by(|a, b| a.top.total_cmp(&b.top))
        .or_else(|| sections.first())
        .map(|section| section.id)
}

/// Which navigation item is highlighted.
///
/// A clicked item holds the highlight until the scroll reaches its section,
/// so the smooth scroll does not light up every section it passes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollSpy {
    active: Option<String>,
    pending: Option<String>,
}

impl ScrollSpy {
    #[cfg(test)]
    fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Highlights `id` right away and waits for the page to arrive there.
    pub fn select(&mut self, id: &str) {
        self.active = Some(id.to_string());
        self.pending = Some(id.to_string());
    }

    /// Feeds the section currently in view. Returns the id to highlight when
    /// the highlight changes.
    pub fn observe(&mut self, in_view: Option<&str>) -> Option<&str> {
        let in_view = in_view?;
        if let Some(pending) = self.pending.as_deref() {
            if pending != in_view {
                return None;
            }
            self.pending = None;
        }

        if self.active.as_deref() == Some(in_view) {
            return None;
        }
        self.active = Some(in_view.to_string());
        self.active.as_deref()
    }

    /// Drops a click that never arrived, e.g. because the reader scrolled away.
    pub fn release(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Vec<SectionOffset<'static>> {
        vec![
            SectionOffset { id: "home", top: 0.0 },
            SectionOffset { id: "about", top: 900.0 },
            SectionOffset { id: "portfolio", top: 1800.0 },
            SectionOffset { id: "projects", top: 2900.0 },
            SectionOffset { id: "contact", top: 6000.0 },
        ]
    }

    fn frame(scroll_y: f64, viewport_height: f64) -> ScrollFrame {
        ScrollFrame {
            scroll_y,
            viewport_height,
            document_height: 10_000.0,
        }
    }

    #[test]
    fn anchor_strips_hash() {
        assert_eq!(anchor_id("#projects"), "projects");
        assert_eq!(anchor_id("contact"), "contact");
    }

    #[test]
    fn top_of_page_is_home() {
        assert_eq!(active_section(&page(), frame(0.0, 1000.0)), Some("home"));
    }

    #[test]
    fn section_activates_once_past_spy_line() {
        // line = scroll + 350
        assert_eq!(active_section(&page(), frame(540.0, 1000.0)), Some("home"));
        assert_eq!(active_section(&page(), frame(560.0, 1000.0)), Some("about"));
        assert_eq!(active_section(&page(), frame(5700.0, 1000.0)), Some("contact"));
    }

    #[test]
    fn short_last_section_wins_at_page_bottom() {
        // contact is 520px tall, so its top never passes the spy line
        let bottom = ScrollFrame {
            scroll_y: 5520.0,
            viewport_height: 1000.0,
            document_height: 6520.0,
        };
        assert_eq!(active_section(&page(), bottom), Some("contact"));

        let just_above = ScrollFrame {
            scroll_y: 5400.0,
            ..bottom
        };
        assert_eq!(active_section(&page(), just_above), Some("projects"));
    }

    #[test]
    fn unknown_document_height_ignores_the_bottom_rule() {
        let frame = ScrollFrame {
            scroll_y: 5520.0,
            viewport_height: 1000.0,
            document_height: 0.0,
        };
        assert_eq!(active_section(&page(), frame), Some("projects"));
    }

    #[test]
    fn unordered_sections_still_pick_the_lowest_passed() {
        let mut sections = page();
        sections.reverse();
        assert_eq!(active_section(&sections, frame(2600.0, 1000.0)), Some("projects"));
    }

    #[test]
    fn above_every_section_falls_back_to_first() {
        let sections = vec![
            SectionOffset { id: "about", top: 500.0 },
            SectionOffset { id: "contact", top: 900.0 },
        ];
        assert_eq!(active_section(&sections, frame(0.0, 600.0)), Some("about"));
        assert_eq!(active_section(&[], frame(0.0, 600.0)), None);
    }

    #[test]
    fn spy_follows_scroll_and_reports_changes_once() {
        let mut spy = ScrollSpy::default();
        assert_eq!(spy.observe(Some("home")), Some("home"));
        assert_eq!(spy.observe(Some("home")), None);
        assert_eq!(spy.observe(Some("about")), Some("about"));
        assert_eq!(spy.observe(None), None);
        assert_eq!(spy.active(), Some("about"));
    }

    #[test]
    fn click_holds_through_the_smooth_scroll() {
        let mut spy = ScrollSpy::default();
        spy.observe(Some("home"));
        spy.select("contact");

        for passing in ["about", "portfolio", "projects"] {
            assert_eq!(spy.observe(Some(passing)), None);
            assert_eq!(spy.active(), Some("contact"));
        }

        // arriving clears the hold without a redundant change
        assert_eq!(spy.observe(Some("contact")), None);
        assert_eq!(spy.observe(Some("projects")), Some("projects"));
    }

    #[test]
    fn released_click_follows_the_scroll_again() {
        let mut spy = ScrollSpy::default();
        spy.select("contact");
        assert_eq!(spy.observe(Some("about")), None);

        spy.release();
        assert_eq!(spy.observe(Some("about")), Some("about"));
    }
}
