//! Global input subscriptions held by the mounted background.
//!
//! The host routes pointer-move and resize events to the background only
//! while a matching [`ListenerGuard`] is alive. Dropping the guard is the
//! deregistration.

use std::cell::RefCell;
use std::rc::Rc;

/// The global signals the background subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    PointerMove,
    Resize,
}

impl ListenerKind {
    pub fn label(self) -> &'static str {
        match self {
            ListenerKind::PointerMove => "pointer-move",
            ListenerKind::Resize => "resize",
        }
    }
}

/// Shared, single-threaded table of live subscriptions.
///
/// Cloning yields another handle to the same table.
#[derive(Debug, Clone, Default)]
pub struct ListenerRegistry {
    active: Rc<RefCell<Vec<ListenerKind>>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, kind: ListenerKind) -> ListenerGuard {
        self.active.borrow_mut().push(kind);
        tracing::debug!(listener = kind.label(), "listener registered");
        ListenerGuard {
            registry: self.clone(),
            kind,
        }
    }

    pub fn is_listening(&self, kind: ListenerKind) -> bool {
        self.active.borrow().contains(&kind)
    }

    /// Number of live subscriptions across all kinds.
    pub fn len(&self) -> usize {
        self.active.borrow().len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn release(&self, kind: ListenerKind) {
        let mut active = self.active.borrow_mut();
        if let Some(pos) = active.iter().position(|k| *k == kind) {
            active.swap_remove(pos);
            tracing::debug!(listener = kind.label(), "listener removed");
        }
    }
}

/// One live subscription; deregisters on drop.
#[derive(Debug)]
pub struct ListenerGuard {
    registry: ListenerRegistry,
    kind: ListenerKind,
}

impl ListenerGuard {
    #[cfg(test)]
    pub fn kind(&self) -> ListenerKind {
        self.kind
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.registry.release(self.kind);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_registers_and_releases() {
        let registry = ListenerRegistry::new();
        assert!(registry.is_empty());

        let guard = registry.register(ListenerKind::Resize);
        assert_eq!(guard.kind(), ListenerKind::Resize);
        assert!(registry.is_listening(ListenerKind::Resize));
        assert!(!registry.is_listening(ListenerKind::PointerMove));

        drop(guard);
        assert!(registry.is_empty());
        assert!(!registry.is_listening(ListenerKind::Resize));
    }

    #[test]
    fn duplicate_kinds_release_one_at_a_time() {
        let registry = ListenerRegistry::new();
        let a = registry.register(ListenerKind::PointerMove);
        let b = registry.register(ListenerKind::PointerMove);
        assert_eq!(registry.len(), 2);

        drop(a);
        assert!(registry.is_listening(ListenerKind::PointerMove));
        drop(b);
        assert!(!registry.is_listening(ListenerKind::PointerMove));
    }

    #[test]
    fn clones_share_one_table() {
        let registry = ListenerRegistry::new();
        let other = registry.clone();
        let _guard = registry.register(ListenerKind::PointerMove);
        assert_eq!(other.len(), 1);
    }
}
