//! Navigation model of the sidebar: the link tree, active-link matching,
//! and the routing collaborator seam.

use crate::overlay::NavMenu;

/// Routing collaborator of the shell.
///
/// The shell never inspects paths beyond equality checks; the embedding
/// application supplies the current path and performs the actual page
/// transitions.
pub trait Router {
    /// The path currently displayed by the application.
    fn current_path(&self) -> &str;
    /// Navigates the application to the given path.
    fn navigate(&mut self, path: &str);
}

/// An in-memory [`Router`] used by headless runs and tests.
#[derive(Debug, Clone)]
pub struct MemoryRouter {
    current: String,
}

impl MemoryRouter {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            current: initial.into(),
        }
    }
}

impl Default for MemoryRouter {
    fn default() -> Self {
        Self::new("/")
    }
}

impl Router for MemoryRouter {
    fn current_path(&self) -> &str {
        &self.current
    }

    fn navigate(&mut self, path: &str) {
        self.current = path.to_string();
    }
}

/// A sidebar entry that navigates directly to a target path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub target: &'static str,
    /// Optional numeric badge rendered next to the label.
    pub badge: Option<u32>,
}

impl NavLink {
    pub const fn new(label: &'static str, target: &'static str) -> Self {
        Self {
            label,
            target,
            badge: None,
        }
    }

    pub const fn with_badge(label: &'static str, target: &'static str, badge: u32) -> Self {
        Self {
            label,
            target,
            badge: Some(badge),
        }
    }
}

/// One entry of the sidebar: a direct link, or a dropdown menu expanding
/// into sublinks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEntry {
    Link(NavLink),
    Menu {
        menu: NavMenu,
        title: &'static str,
        links: Vec<NavLink>,
    },
}

/// Whether a link counts as active for the given current path.
///
/// Exact string equality only. No prefix or pattern matching: two paths
/// differing by a trailing segment are never both active.
pub fn is_link_active(current_path: &str, target: &str) -> bool {
    current_path == target
}

/// The navigation tree of the administration console sidebar.
pub fn default_nav() -> Vec<NavEntry> {
    vec![
        NavEntry::Link(NavLink::new("Dashboard", "/")),
        NavEntry::Menu {
            menu: NavMenu::Master,
            title: "Master Data",
            links: vec![
                NavLink::new("Master Dashboard", "/master"),
                NavLink::new("Classes & Sections", "/master/classes"),
                NavLink::new("Subjects", "/master/subjects"),
            ],
        },
        NavEntry::Menu {
            menu: NavMenu::Students,
            title: "Students",
            links: vec![
                NavLink::with_badge("Student Directory", "/students", 158),
                NavLink::new("New Admission", "/students/admission"),
                NavLink::new("Attendance", "/students/attendance"),
            ],
        },
        NavEntry::Menu {
            menu: NavMenu::Staff,
            title: "Staff",
            links: vec![
                NavLink::new("Staff Directory", "/staff"),
                NavLink::new("Attendance", "/staff/attendance"),
            ],
        },
        NavEntry::Menu {
            menu: NavMenu::Fees,
            title: "Finance",
            links: vec![
                NavLink::new("Fee Structure", "/fee-structure"),
                NavLink::new("Fee Collection", "/fee-collection"),
                NavLink::new("Accounts", "/accounts"),
            ],
        },
        NavEntry::Menu {
            menu: NavMenu::Examinations,
            title: "Examinations",
            links: vec![
                NavLink::new("Exam Dashboard", "/examination-system"),
                NavLink::new("Exam Schedule", "/examination/schedule"),
                NavLink::new("Results", "/examination/results"),
            ],
        },
        NavEntry::Menu {
            menu: NavMenu::Academics,
            title: "Academics",
            links: vec![
                NavLink::new("Timetable", "/timetable"),
                NavLink::new("Syllabus", "/syllabus"),
            ],
        },
        NavEntry::Link(NavLink::new("Reports", "/reports")),
        NavEntry::Link(NavLink::new("Calendar", "/calendar")),
        NavEntry::Link(NavLink::new("Help & Support", "/help")),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_matching_is_exact() {
        assert!(is_link_active("/students", "/students"));
        assert!(!is_link_active("/students/admission", "/students"));
        assert!(!is_link_active("/students", "/students/admission"));
        assert!(!is_link_active("/", "/reports"));
    }

    #[test]
    fn memory_router_tracks_navigation() {
        let mut router = MemoryRouter::default();
        assert_eq!(router.current_path(), "/");

        router.navigate("/staff/attendance");
        assert_eq!(router.current_path(), "/staff/attendance");
    }

    #[test]
    fn every_dropdown_menu_appears_once_in_the_default_tree() {
        let menus: Vec<NavMenu> = default_nav()
            .iter()
            .filter_map(|entry| match entry {
                NavEntry::Menu { menu, .. } => Some(*menu),
                NavEntry::Link(_) => None,
            })
            .collect();
        assert_eq!(
            menus,
            [
                NavMenu::Master,
                NavMenu::Students,
                NavMenu::Staff,
                NavMenu::Fees,
                NavMenu::Examinations,
                NavMenu::Academics,
            ]
        );
    }
}
