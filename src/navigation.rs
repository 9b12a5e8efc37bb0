//! Active-section tracking and in-page navigation.

/// How far below the scroll offset a section may start and still count as active.
pub const SCROLL_LOOKAHEAD: f64 = 100.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Home,
    Projects,
    Contact,
}

impl Section {
    /// Priority order used when deciding which section is active.
    pub const ALL: [Section; 3] = [Self::Home, Self::Projects, Self::Contact];

    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }
}

/// Vertical extent of a section in page coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionExtent {
    pub top: f64,
    pub height: f64,
}

impl SectionExtent {
    pub fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

/// Extents sampled for every section, indexed like [`Section::ALL`].
pub type SectionExtents = [Option<SectionExtent>; 3];

pub trait SectionHost {
    fn scroll_offset(&self) -> f64;
    /// `None` when the section's element is not in the document.
    fn extent(&self, section: Section) -> Option<SectionExtent>;
    /// Smooth-scrolls to the top of `section`. Returns `false` when the target is missing.
    fn scroll_into_view(&self, section: Section) -> bool;
}

pub fn active_section_at(offset: f64, extents: &SectionExtents) -> Option<Section> {
    let position = offset + SCROLL_LOOKAHEAD;

    Section::ALL
        .into_iter()
        .zip(extents.iter().copied())
        .find_map(|(section, extent)| {
            extent
                .filter(|extent| extent.contains(position))
                .map(|_| section)
        })
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavAction {
    Scrolled {
        offset: f64,
        extents: SectionExtents,
    },
    ToggleMenu,
    Navigated(Section),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub active_section: Section,
    pub is_menu_open: bool,
}

impl NavigationState {
    pub fn apply(self, action: NavAction) -> Self {
        match action {
            NavAction::Scrolled { offset, extents } => Self {
                active_section: active_section_at(offset, &extents).unwrap_or(self.active_section),
                ..self
            },
            NavAction::ToggleMenu => Self {
                is_menu_open: !self.is_menu_open,
                ..self
            },
            NavAction::Navigated(_) => Self {
                is_menu_open: false,
                ..self
            },
        }
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.active_section == section
    }
}

/// Reads the current scroll position and section layout from `host`.
pub fn sample_scroll(host: &impl SectionHost) -> NavAction {
    NavAction::Scrolled {
        offset: host.scroll_offset(),
        extents: Section::ALL.map(|section| host.extent(section)),
    }
}

pub fn navigate_to(host: &impl SectionHost, section: Section) -> NavAction {
    if !host.scroll_into_view(section) {
        tracing::debug!(section = section.id(), "navigation target missing");
    }
    NavAction::Navigated(section)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn extent(top: f64, height: f64) -> Option<SectionExtent> {
        Some(SectionExtent { top, height })
    }

    fn page_layout() -> SectionExtents {
        [extent(0.0, 800.0), extent(800.0, 1200.0), extent(2000.0, 600.0)]
    }

    #[derive(Default)]
    struct FakeHost {
        offset: f64,
        extents: SectionExtents,
        scrolled_to: RefCell<Vec<Section>>,
    }

    impl SectionHost for FakeHost {
        fn scroll_offset(&self) -> f64 {
            self.offset
        }

        fn extent(&self, section: Section) -> Option<SectionExtent> {
            let index = Section::ALL.iter().position(|s| *s == section)?;
            self.extents[index]
        }

        fn scroll_into_view(&self, section: Section) -> bool {
            if self.extent(section).is_none() {
                return false;
            }
            self.scrolled_to.borrow_mut().push(section);
            true
        }
    }

    #[test]
    fn lookahead_is_added_to_the_offset() {
        let layout = page_layout();
        assert_eq!(active_section_at(0.0, &layout), Some(Section::Home));
        assert_eq!(active_section_at(699.0, &layout), Some(Section::Home));
        assert_eq!(active_section_at(700.0, &layout), Some(Section::Projects));
        assert_eq!(active_section_at(1900.0, &layout), Some(Section::Contact));
    }

    #[test]
    fn upper_bound_is_exclusive() {
        let layout = [extent(0.0, 100.0), extent(100.0, 50.0), None];
        assert_eq!(active_section_at(0.0, &layout), Some(Section::Projects));
        assert_eq!(active_section_at(50.0, &layout), None);
    }

    #[test]
    fn first_match_in_priority_order_wins() {
        let overlapping = [extent(0.0, 1000.0), extent(0.0, 1000.0), extent(0.0, 1000.0)];
        assert_eq!(active_section_at(300.0, &overlapping), Some(Section::Home));

        let home_missing = [None, extent(0.0, 1000.0), extent(0.0, 1000.0)];
        assert_eq!(active_section_at(300.0, &home_missing), Some(Section::Projects));
    }

    #[test]
    fn scroll_past_every_section_keeps_previous_active_section() {
        let state = NavigationState {
            active_section: Section::Projects,
            is_menu_open: false,
        };
        let next = state.apply(NavAction::Scrolled {
            offset: 5_000.0,
            extents: page_layout(),
        });
        assert_eq!(next.active_section, Section::Projects);

        let next = state.apply(NavAction::Scrolled {
            offset: 0.0,
            extents: [None; 3],
        });
        assert_eq!(next.active_section, Section::Projects);
    }

    #[test]
    fn scrolling_does_not_touch_the_menu() {
        let state = NavigationState {
            active_section: Section::Home,
            is_menu_open: true,
        };
        let next = state.apply(NavAction::Scrolled {
            offset: 1_950.0,
            extents: page_layout(),
        });
        assert_eq!(next.active_section, Section::Contact);
        assert!(next.is_menu_open);
    }

    #[test]
    fn default_state_starts_at_home_with_menu_closed() {
        let state = NavigationState::default();
        assert!(state.is_active(Section::Home));
        assert!(!state.is_menu_open);
    }

    #[test]
    fn navigation_always_closes_the_menu() {
        let host = FakeHost {
            extents: page_layout(),
            ..FakeHost::default()
        };

        for section in Section::ALL {
            for is_menu_open in [true, false] {
                let state = NavigationState {
                    active_section: Section::Home,
                    is_menu_open,
                };
                let next = state.apply(navigate_to(&host, section));
                assert!(!next.is_menu_open);
            }
        }
        assert_eq!(host.scrolled_to.borrow().len(), 6);
    }

    #[test]
    fn navigation_to_missing_element_closes_menu_without_scrolling() {
        let host = FakeHost::default();
        let state = NavigationState {
            active_section: Section::Home,
            is_menu_open: true,
        };
        let next = state.apply(navigate_to(&host, Section::Contact));
        assert!(!next.is_menu_open);
        assert!(host.scrolled_to.borrow().is_empty());
    }

    #[test]
    fn menu_toggle_flips_open_state() {
        let state = NavigationState::default();
        let opened = state.apply(NavAction::ToggleMenu);
        assert!(opened.is_menu_open);
        assert!(!opened.apply(NavAction::ToggleMenu).is_menu_open);
    }

    #[test]
    fn sample_scroll_reads_host_layout_in_priority_order() {
        let host = FakeHost {
            offset: 42.0,
            extents: [None, extent(10.0, 20.0), None],
            ..FakeHost::default()
        };
        assert_eq!(
            sample_scroll(&host),
            NavAction::Scrolled {
                offset: 42.0,
                extents: [None, extent(10.0, 20.0), None],
            }
        );
    }

    #[test]
    fn section_ids_are_distinct_anchor_names() {
        let ids: Vec<&str> = Section::ALL.iter().map(|section| section.id()).collect();
        assert_eq!(ids, vec!["home", "projects", "contact"]);
    }
}
