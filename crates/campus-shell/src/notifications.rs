use campus_bridge::notification::Notification;

/// Read/unread bookkeeping for the notification feed shown in the top bar.
///
/// The store keeps notifications in insertion order and never reorders,
/// inserts, or removes entries; the set is supplied at construction and the
/// shell rebuilds the store whenever a fresh backend snapshot arrives. The
/// only mutation is flipping read flags.
#[derive(Debug, Clone, Default)]
pub struct NotificationStore {
    items: Vec<Notification>,
}

impl NotificationStore {
    pub fn new(items: Vec<Notification>) -> Self {
        Self { items }
    }

    /// The notifications in insertion order.
    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    /// Marks the notification with the given id as read. Unknown and
    /// already-read ids are silent no-ops.
    pub fn mark_read(&mut self, id: u64) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.is_read = true;
        }
    }

    /// Marks every notification as read.
    pub fn mark_all_read(&mut self) {
        for item in &mut self.items {
            item.is_read = true;
        }
    }

    /// Number of unread notifications, recomputed on every call.
    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|item| !item.is_read).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_store() -> NotificationStore {
        NotificationStore::new(vec![
            Notification::unread(1, "New student registration"),
            Notification::unread(2, "Fee payment reminder"),
            Notification::read(3, "Staff meeting at 3:00 PM"),
        ])
    }

    #[test]
    fn counts_only_unread_notifications() {
        assert_eq!(seeded_store().unread_count(), 2);
        assert_eq!(NotificationStore::default().unread_count(), 0);
    }

    #[test]
    fn marking_read_flips_only_the_matching_entry() {
        let mut store = seeded_store();
        store.mark_read(2);

        assert_eq!(store.unread_count(), 1);
        assert!(!store.items()[0].is_read);
        assert!(store.items()[1].is_read);
    }

    #[test]
    fn marking_an_unknown_id_changes_nothing() {
        let mut store = seeded_store();
        let before = store.items().to_vec();

        store.mark_read(42);
        assert_eq!(store.items(), before.as_slice());
        assert_eq!(store.unread_count(), 2);
    }

    #[test]
    fn marking_all_read_clears_the_unread_count() {
        let mut store = seeded_store();
        store.mark_all_read();
        assert_eq!(store.unread_count(), 0);
    }

    #[test]
    fn preserves_insertion_order() {
        let store = seeded_store();
        let ids: Vec<u64> = store.items().iter().map(|item| item.id).collect();
        assert_eq!(ids, [1, 2, 3]);
    }
}
