//! Change notifications for views that render store state.

use apnaswaad_core::define_id;

define_id!(SubscriptionId, u64);

/// Which collection a mutation changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreEvent {
    CartChanged,
    WishlistChanged,
    RecentlyViewedChanged,
}

impl StoreEvent {
    /// Storage key of the collection behind this event.
    #[must_use]
    pub const fn storage_key(&self) -> &'static str {
        match self {
            Self::CartChanged => crate::storage::keys::CART,
            Self::WishlistChanged => crate::storage::keys::WISHLIST,
            Self::RecentlyViewedChanged => crate::storage::keys::RECENTLY_VIEWED,
        }
    }
}

type Listener = Box<dyn FnMut(&StoreEvent)>;

/// Registered listeners, called in subscription order.
#[derive(Default)]
pub struct Subscribers {
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
}

impl Subscribers {
    /// Register a listener and return its handle.
    pub fn subscribe(&mut self, listener: impl FnMut(&StoreEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId::new(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Drop a listener. Returns `false` if the handle was unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    /// Deliver `event` to every listener.
    pub fn notify(&mut self, event: &StoreEvent) {
        for (_, listener) in &mut self.listeners {
            listener(event);
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl std::fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscribers")
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn test_notify_in_subscription_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut subscribers = Subscribers::default();

        let first = Rc::clone(&log);
        subscribers.subscribe(move |event| first.borrow_mut().push(("first", *event)));
        let second = Rc::clone(&log);
        subscribers.subscribe(move |event| second.borrow_mut().push(("second", *event)));

        subscribers.notify(&StoreEvent::CartChanged);

        assert_eq!(
            *log.borrow(),
            vec![
                ("first", StoreEvent::CartChanged),
                ("second", StoreEvent::CartChanged)
            ]
        );
    }

    #[test]
    fn test_unsubscribe() {
        let hits = Rc::new(RefCell::new(0));
        let mut subscribers = Subscribers::default();
        let counter = Rc::clone(&hits);
        let id = subscribers.subscribe(move |_| *counter.borrow_mut() += 1);

        assert!(subscribers.unsubscribe(id));
        assert!(!subscribers.unsubscribe(id));
        subscribers.notify(&StoreEvent::WishlistChanged);

        assert_eq!(*hits.borrow(), 0);
        assert!(subscribers.is_empty());
    }

    #[test]
    fn test_ids_are_unique() {
        let mut subscribers = Subscribers::default();
        let a = subscribers.subscribe(|_| {});
        let b = subscribers.subscribe(|_| {});
        assert_ne!(a, b);
        assert_eq!(subscribers.len(), 2);
    }

    #[test]
    fn test_events_map_to_storage_keys() {
        assert_eq!(StoreEvent::CartChanged.storage_key(), "apnaswaad_cart");
        assert_eq!(
            StoreEvent::RecentlyViewedChanged.storage_key(),
            "apnaswaad_recently_viewed"
        );
    }
}
