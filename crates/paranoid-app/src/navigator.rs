//! Page navigation and the last computed report
//!
//! The [`Navigator`] is the single owner of the active [`Page`] and of the
//! last [`AnalysisResult`]. Every transition is returned to the caller so the
//! component of the page being left can be torn down.

use paranoid_core::AnalysisResult;

/// The three screens of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Landing,
    Analyze,
    Results,
}

impl Page {
    /// Pages in header order
    pub const ALL: [Page; 3] = [Page::Landing, Page::Analyze, Page::Results];

    /// Navigation label shown in the header
    pub fn title(&self) -> &'static str {
        match self {
            Page::Landing => "Home",
            Page::Analyze => "Scanner",
            Page::Results => "Report",
        }
    }
}

/// A page change, `from` the page being left `to` the active one.
///
/// `from == to` when navigating to the page already shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: Page,
    pub to: Page,
}

impl Transition {
    /// Whether `page` was left by this transition
    pub fn leaves(&self, page: Page) -> bool {
        self.from == page && self.to != page
    }
}

/// Active page and last result.
#[derive(Debug, Default)]
pub struct Navigator {
    current: Page,
    last_result: Option<AnalysisResult>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Navigator starting on `page`, without a result
    pub fn starting_at(page: Page) -> Self {
        Self {
            current: page,
            last_result: None,
        }
    }

    pub fn current_page(&self) -> Page {
        self.current
    }

    pub fn last_result(&self) -> Option<&AnalysisResult> {
        self.last_result.as_ref()
    }

    /// Switch to `page`. Total: any page is reachable from any page.
    pub fn go_to(&mut self, page: Page) -> Transition {
        let from = std::mem::replace(&mut self.current, page);
        Transition { from, to: page }
    }

    /// Store `result`, replacing any previous one, and show the report.
    pub fn complete_analysis(&mut self, result: AnalysisResult) -> Transition {
        self.last_result = Some(result);
        self.go_to(Page::Results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paranoid_core::generate;

    #[test]
    fn test_initial_state() {
        let nav = Navigator::new();
        assert_eq!(nav.current_page(), Page::Landing);
        assert!(nav.last_result().is_none());
    }

    #[test]
    fn test_go_to_is_total() {
        let mut nav = Navigator::new();
        for from in Page::ALL {
            for to in Page::ALL {
                nav.go_to(from);
                let transition = nav.go_to(to);
                assert_eq!(transition, Transition { from, to });
                assert_eq!(nav.current_page(), to);
            }
        }
    }

    #[test]
    fn test_go_to_keeps_result() {
        let mut nav = Navigator::new();
        nav.complete_analysis(generate("contract"));
        nav.go_to(Page::Landing);
        assert!(nav.last_result().is_some());
    }

    #[test]
    fn test_complete_analysis_round_trip() {
        let mut nav = Navigator::new();
        nav.go_to(Page::Analyze);

        let result = generate("some contract text");
        let transition = nav.complete_analysis(result.clone());

        assert_eq!(
            transition,
            Transition {
                from: Page::Analyze,
                to: Page::Results
            }
        );
        assert_eq!(nav.current_page(), Page::Results);
        assert_eq!(nav.last_result(), Some(&result));
    }

    #[test]
    fn test_complete_analysis_replaces_previous_result() {
        let mut nav = Navigator::new();
        nav.complete_analysis(generate("first"));
        nav.complete_analysis(generate("second"));

        let stored = nav.last_result().map(|r| r.contract_text.as_str());
        assert_eq!(stored, Some("second"));
    }

    #[test]
    fn test_transition_leaves() {
        let t = Transition {
            from: Page::Analyze,
            to: Page::Landing,
        };
        assert!(t.leaves(Page::Analyze));
        assert!(!t.leaves(Page::Landing));

        let same = Transition {
            from: Page::Analyze,
            to: Page::Analyze,
        };
        assert!(!same.leaves(Page::Analyze));
    }

    #[test]
    fn test_page_titles_follow_header_order() {
        let titles: Vec<_> = Page::ALL.iter().map(Page::title).collect();
        assert_eq!(titles, ["Home", "Scanner", "Report"]);
    }
}
