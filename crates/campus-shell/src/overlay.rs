//! Open/close state for every togglable overlay of the shell.
//!
//! Two kinds of overlay exist. The sidebar dropdown menus form an exclusive
//! group where at most one member is expanded, modeled as a single
//! `Option<NavMenu>` so that a "two menus expanded" state is not even
//! representable. The search box, notifications panel, and profile menu are
//! three independent flags; opening one never closes another. That absence
//! of cross-panel suppression is intentional, not an omission.

use crate::geometry::{Point, Rect};

/// Sidebar menus that expand into a submenu of links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavMenu {
    Master,
    Students,
    Staff,
    Fees,
    Examinations,
    Academics,
}

/// Independently togglable panels of the top bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Search,
    Notifications,
    Profile,
}

/// Bound areas of the dismissible overlay regions, supplied by the rendering
/// layer at the moment of an interaction.
///
/// A `None` entry means the region has no registered area right now and any
/// interaction point counts as outside of it. Bounds are read per event and
/// never cached across renders.
#[derive(Debug, Clone, Copy, Default)]
pub struct OverlayBounds {
    /// Area of the expanded dropdown menu, including its trigger.
    pub dropdown: Option<Rect>,
    /// Area of the open notifications panel, including its trigger.
    pub notifications: Option<Rect>,
    /// Area of the open profile menu, including its trigger.
    pub profile: Option<Rect>,
}

/// Owns mutual exclusivity and dismissal rules for the shell's overlays.
///
/// Every transition is synchronous and total: redundant toggles and
/// dismissals are ordinary state changes, never errors.
#[derive(Debug, Clone, Default)]
pub struct OverlayCoordinator {
    active_dropdown: Option<NavMenu>,
    search_open: bool,
    notifications_open: bool,
    profile_open: bool,
}

impl OverlayCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently expanded dropdown menu, if any.
    pub fn active_dropdown(&self) -> Option<NavMenu> {
        self.active_dropdown
    }

    pub fn is_panel_open(&self, panel: Panel) -> bool {
        match panel {
            Panel::Search => self.search_open,
            Panel::Notifications => self.notifications_open,
            Panel::Profile => self.profile_open,
        }
    }

    /// Toggles a dropdown menu within the exclusive group.
    ///
    /// Re-clicking the expanded menu collapses the group; clicking any other
    /// menu makes it the single expanded one in one state transition.
    pub fn toggle_dropdown(&mut self, menu: NavMenu) {
        self.active_dropdown = if self.active_dropdown == Some(menu) {
            None
        } else {
            Some(menu)
        };
    }

    /// Flips a single panel flag, leaving the other panels and the dropdown
    /// group untouched.
    pub fn toggle_panel(&mut self, panel: Panel) {
        let flag = match panel {
            Panel::Search => &mut self.search_open,
            Panel::Notifications => &mut self.notifications_open,
            Panel::Profile => &mut self.profile_open,
        };
        *flag = !*flag;
    }

    /// Processes one "interaction occurred at `point`" event.
    ///
    /// Each currently active dismissible region (dropdown group,
    /// notifications panel, profile menu) is closed when the point falls
    /// outside its registered bound area. The search box is exempt: it is
    /// closed only through its own toggle control.
    pub fn dismiss_outside(&mut self, point: Point, bounds: &OverlayBounds) {
        if self.active_dropdown.is_some() && !inside(bounds.dropdown, point) {
            self.active_dropdown = None;
        }
        if self.notifications_open && !inside(bounds.notifications, point) {
            self.notifications_open = false;
        }
        if self.profile_open && !inside(bounds.profile, point) {
            self.profile_open = false;
        }
    }
}

fn inside(bounds: Option<Rect>, point: Point) -> bool {
    bounds.is_some_and(|rect| rect.contains(point))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds_with_profile(rect: Rect) -> OverlayBounds {
        OverlayBounds {
            profile: Some(rect),
            ..OverlayBounds::default()
        }
    }

    #[test]
    fn switching_menus_leaves_exactly_the_second_active() {
        let mut overlays = OverlayCoordinator::new();
        overlays.toggle_dropdown(NavMenu::Students);
        overlays.toggle_dropdown(NavMenu::Fees);
        assert_eq!(overlays.active_dropdown(), Some(NavMenu::Fees));
    }

    #[test]
    fn reclicking_the_active_menu_collapses_the_group() {
        let mut overlays = OverlayCoordinator::new();
        overlays.toggle_dropdown(NavMenu::Master);
        overlays.toggle_dropdown(NavMenu::Master);
        assert_eq!(overlays.active_dropdown(), None);
    }

    #[test]
    fn panel_toggles_do_not_affect_each_other() {
        let mut overlays = OverlayCoordinator::new();
        overlays.toggle_panel(Panel::Notifications);
        overlays.toggle_panel(Panel::Search);
        overlays.toggle_dropdown(NavMenu::Staff);

        assert!(overlays.is_panel_open(Panel::Notifications));
        assert!(overlays.is_panel_open(Panel::Search));
        assert!(!overlays.is_panel_open(Panel::Profile));
        assert_eq!(overlays.active_dropdown(), Some(NavMenu::Staff));

        overlays.toggle_panel(Panel::Search);
        assert!(overlays.is_panel_open(Panel::Notifications));
        assert!(!overlays.is_panel_open(Panel::Search));
    }

    #[test]
    fn outside_interaction_closes_the_profile_menu() {
        let mut overlays = OverlayCoordinator::new();
        overlays.toggle_panel(Panel::Profile);

        let bounds = bounds_with_profile(Rect::new(100.0, 0.0, 200.0, 300.0));
        overlays.dismiss_outside(Point::new(50.0, 50.0), &bounds);
        assert!(!overlays.is_panel_open(Panel::Profile));
    }

    #[test]
    fn inside_interaction_leaves_the_profile_menu_open() {
        let mut overlays = OverlayCoordinator::new();
        overlays.toggle_panel(Panel::Profile);

        let bounds = bounds_with_profile(Rect::new(100.0, 0.0, 200.0, 300.0));
        overlays.dismiss_outside(Point::new(150.0, 50.0), &bounds);
        assert!(overlays.is_panel_open(Panel::Profile));
    }

    #[test]
    fn outside_interaction_closes_the_dropdown_group() {
        let mut overlays = OverlayCoordinator::new();
        overlays.toggle_dropdown(NavMenu::Academics);

        let bounds = OverlayBounds {
            dropdown: Some(Rect::new(0.0, 0.0, 220.0, 400.0)),
            ..OverlayBounds::default()
        };
        overlays.dismiss_outside(Point::new(500.0, 50.0), &bounds);
        assert_eq!(overlays.active_dropdown(), None);
    }

    #[test]
    fn active_region_without_registered_bounds_is_dismissed() {
        let mut overlays = OverlayCoordinator::new();
        overlays.toggle_panel(Panel::Notifications);

        overlays.dismiss_outside(Point::new(0.0, 0.0), &OverlayBounds::default());
        assert!(!overlays.is_panel_open(Panel::Notifications));
    }

    #[test]
    fn outside_interaction_never_closes_the_search_box() {
        let mut overlays = OverlayCoordinator::new();
        overlays.toggle_panel(Panel::Search);

        overlays.dismiss_outside(Point::new(999.0, 999.0), &OverlayBounds::default());
        assert!(overlays.is_panel_open(Panel::Search));

        overlays.toggle_panel(Panel::Search);
        assert!(!overlays.is_panel_open(Panel::Search));
    }
}
