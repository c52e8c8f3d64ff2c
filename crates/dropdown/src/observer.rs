//! Document-level click routing with scoped subscriptions.
//!
//! Open menus close when the user clicks anywhere outside the widget's
//! subtree, which requires one process-wide observer rather than per-widget
//! handlers. The [`ClickRouter`] is that observer's registry: every mounted
//! widget subscribes with its id and holds the returned
//! [`ClickSubscription`] guard. Dropping the guard deregisters the widget
//! deterministically; a leaked registration would keep routing
//! outside-clicks to a dead id, which can close an unrelated widget if the
//! id is ever reused.
//!
//! The router never mutates widgets. [`ClickRouter::route`] turns one
//! document-level click into the list of subscriber ids that should receive
//! [`SelectEvent::OutsideClicked`](crate::event::SelectEvent::OutsideClicked);
//! the host delivers those events.

use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use tracing::{debug, trace};

/// Identifies one mounted widget instance.
pub type WidgetId = usize;

/// Registry of mounted widgets interested in document-level clicks.
///
/// Cloning is cheap and every clone shares the same registry.
#[derive(Debug, Clone, Default)]
pub struct ClickRouter {
    mounted: Arc<Mutex<Vec<WidgetId>>>,
}

impl ClickRouter {
    /// Creates an empty router.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a widget and returns the guard that keeps it registered.
    #[must_use]
    pub fn subscribe(&self, id: WidgetId) -> ClickSubscription {
        debug!(id, "click observer registered");
        self.mounted.lock().push(id);
        ClickSubscription {
            id,
            mounted: Arc::downgrade(&self.mounted),
        }
    }

    /// Maps a document-level click to the widgets that must treat it as an
    /// outside click.
    ///
    /// `origin` is the id of the widget whose subtree contained the click,
    /// or `None` when the click landed outside every widget. Every
    /// subscriber except the origin is returned.
    #[must_use]
    pub fn route(&self, origin: Option<WidgetId>) -> Vec<WidgetId> {
        let targets: Vec<WidgetId> = self
            .mounted
            .lock()
            .iter()
            .copied()
            .filter(|&id| Some(id) != origin)
            .collect();
        trace!(?origin, outside = targets.len(), "document click routed");
        targets
    }

    /// Returns the number of currently registered widgets.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.mounted.lock().len()
    }
}

/// Guard for one widget's registration with a [`ClickRouter`].
///
/// Dropping the guard removes the registration. The guard holds only a weak
/// reference, so it never keeps a discarded router alive.
#[derive(Debug)]
pub struct ClickSubscription {
    id: WidgetId,
    mounted: Weak<Mutex<Vec<WidgetId>>>,
}

impl ClickSubscription {
    /// The id this subscription registered.
    #[must_use]
    pub fn id(&self) -> WidgetId {
        self.id
    }
}

impl Drop for ClickSubscription {
    fn drop(&mut self) {
        if let Some(mounted) = self.mounted.upgrade() {
            mounted.lock().retain(|&id| id != self.id);
            debug!(id = self.id, "click observer released");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_excludes_origin() {
        let router = ClickRouter::new();
        let _a = router.subscribe(1);
        let _b = router.subscribe(2);

        assert_eq!(router.route(Some(1)), vec![2]);
        assert_eq!(router.route(None), vec![1, 2]);
    }

    #[test]
    fn test_drop_deregisters() {
        let router = ClickRouter::new();
        let a = router.subscribe(1);
        let _b = router.subscribe(2);
        assert_eq!(router.subscriber_count(), 2);

        drop(a);
        assert_eq!(router.subscriber_count(), 1);
        assert_eq!(router.route(None), vec![2]);
    }

    #[test]
    fn test_guard_outliving_router_is_harmless() {
        let router = ClickRouter::new();
        let guard = router.subscribe(7);
        drop(router);
        drop(guard);
    }

    #[test]
    fn test_clones_share_one_registry() {
        let router = ClickRouter::new();
        let other = router.clone();
        let _sub = other.subscribe(3);
        assert_eq!(router.subscriber_count(), 1);
    }
}
