use campus_bridge::{MessageFromBackend, config::Config};

use crate::geometry::Point;
use crate::navigation::{NavEntry, Router, default_nav, is_link_active};
use crate::notifications::NotificationStore;
use crate::overlay::{NavMenu, OverlayBounds, OverlayCoordinator, Panel};

/// Composition root of the console shell.
///
/// Owns the overlay coordinator, the notification store, the navigation tree
/// and the responsive sidebar flag, and forwards raw interaction events to
/// them. It contains no further decision logic: rendering collaborators read
/// its state and hand it user interactions. One shell instance exclusively
/// owns all of this state, and every transition runs to completion before
/// the next event is processed.
#[derive(Debug)]
pub struct Shell<R: Router> {
    router: R,
    nav: Vec<NavEntry>,
    overlays: OverlayCoordinator,
    notifications: NotificationStore,
    config: Config,
    mobile_sidebar_open: bool,
}

impl<R: Router> Shell<R> {
    /// Creates a shell around the given router with the default navigation
    /// tree, an empty notification feed, and default configuration.
    pub fn new(router: R) -> Self {
        Self {
            router,
            nav: default_nav(),
            overlays: OverlayCoordinator::new(),
            notifications: NotificationStore::default(),
            config: Config::default(),
            mobile_sidebar_open: false,
        }
    }

    pub fn nav(&self) -> &[NavEntry] {
        &self.nav
    }

    pub fn overlays(&self) -> &OverlayCoordinator {
        &self.overlays
    }

    pub fn notifications(&self) -> &NotificationStore {
        &self.notifications
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn is_mobile_sidebar_open(&self) -> bool {
        self.mobile_sidebar_open
    }

    /// Whether the sidebar link pointing at `target` should render as
    /// active, by exact equality with the router-supplied current path.
    pub fn is_link_active(&self, target: &str) -> bool {
        is_link_active(self.router.current_path(), target)
    }

    /// A dropdown menu trigger was clicked.
    pub fn toggle_dropdown(&mut self, menu: NavMenu) {
        self.overlays.toggle_dropdown(menu);
    }

    /// A panel's own toggle control was clicked.
    pub fn toggle_panel(&mut self, panel: Panel) {
        self.overlays.toggle_panel(panel);
    }

    /// An interaction occurred at `point`; dismisses overlays whose
    /// registered bounds do not contain it.
    pub fn pointer_pressed(&mut self, point: Point, bounds: &OverlayBounds) {
        self.overlays.dismiss_outside(point, bounds);
    }

    /// The mobile sidebar's own toggle control was clicked.
    pub fn toggle_mobile_sidebar(&mut self) {
        self.mobile_sidebar_open = !self.mobile_sidebar_open;
    }

    /// The background scrim behind the visible sidebar was pressed.
    pub fn scrim_pressed(&mut self) {
        self.mobile_sidebar_open = false;
    }

    /// A navigation link was activated: delegates to the router and closes
    /// the mobile sidebar.
    pub fn navigate(&mut self, target: &str) {
        self.router.navigate(target);
        self.mobile_sidebar_open = false;
    }

    pub fn mark_notification_read(&mut self, id: u64) {
        self.notifications.mark_read(id);
    }

    pub fn mark_all_notifications_read(&mut self) {
        self.notifications.mark_all_read();
    }

    /// Number of unread notifications for the badge, recomputed on demand.
    pub fn unread_count(&self) -> usize {
        self.notifications.unread_count()
    }

    /// Applies a backend bridge message to the shell state.
    pub fn apply_backend_message(&mut self, message: MessageFromBackend) {
        match message {
            MessageFromBackend::ConfigurationResponse(config) => self.config = config,
            MessageFromBackend::NotificationsSnapshot(items) => {
                self.notifications = NotificationStore::new(items);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::MemoryRouter;
    use campus_bridge::notification::Notification;

    fn shell() -> Shell<MemoryRouter> {
        Shell::new(MemoryRouter::default())
    }

    #[test]
    fn navigating_closes_the_mobile_sidebar() {
        let mut shell = shell();
        shell.toggle_mobile_sidebar();
        assert!(shell.is_mobile_sidebar_open());

        shell.navigate("/students");
        assert!(!shell.is_mobile_sidebar_open());
        assert!(shell.is_link_active("/students"));
        assert!(!shell.is_link_active("/students/admission"));
    }

    #[test]
    fn scrim_press_closes_the_mobile_sidebar() {
        let mut shell = shell();
        shell.toggle_mobile_sidebar();
        shell.scrim_pressed();
        assert!(!shell.is_mobile_sidebar_open());
    }

    #[test]
    fn sidebar_flag_is_independent_of_the_overlays() {
        let mut shell = shell();
        shell.toggle_mobile_sidebar();
        shell.toggle_dropdown(NavMenu::Fees);
        shell.pointer_pressed(Point::new(0.0, 0.0), &OverlayBounds::default());

        assert_eq!(shell.overlays().active_dropdown(), None);
        assert!(shell.is_mobile_sidebar_open());
    }

    #[test]
    fn notification_snapshot_replaces_the_store() {
        let mut shell = shell();
        shell.apply_backend_message(MessageFromBackend::NotificationsSnapshot(vec![
            Notification::unread(1, "New student registration"),
            Notification::read(2, "Staff meeting at 3:00 PM"),
        ]));
        assert_eq!(shell.unread_count(), 1);

        shell.mark_notification_read(1);
        assert_eq!(shell.unread_count(), 0);
    }

    #[test]
    fn configuration_response_updates_the_profile() {
        let mut shell = shell();
        let mut config = Config::default();
        config.profile_config.display_name = "Jane Roe".to_string();

        shell.apply_backend_message(MessageFromBackend::ConfigurationResponse(config));
        assert_eq!(shell.config().profile_config.display_name, "Jane Roe");
    }
}
