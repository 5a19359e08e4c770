//! Keyboard listener registry.
//!
//! The carousel listens for arrow keys only while mounted. `subscribe` hands
//! out a `KeySubscription` guard; dropping the guard detaches the listener,
//! so release is tied to the owner's lifetime rather than to a remembered
//! unsubscribe call.

use super::adapter::NavKey;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

type Listener = Rc<RefCell<dyn FnMut(NavKey)>>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// Window-wide key event source. Cloning shares the same registry.
#[derive(Clone, Default)]
pub struct KeyboardHub {
    registry: Rc<RefCell<Registry>>,
}

impl KeyboardHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, listener: impl FnMut(NavKey) + 'static) -> KeySubscription {
        let mut registry = self.registry.borrow_mut();
        registry.next_id += 1;
        let id = registry.next_id;
        let listener: Listener = Rc::new(RefCell::new(listener));
        registry.listeners.push((id, listener));
        tracing::trace!(id, "Key listener attached");
        KeySubscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Deliver a key press to every listener. Returns how many were called.
    ///
    /// Keys the carousel does not handle are not delivered. Listeners may
    /// drop their own or other subscriptions while being called.
    pub fn dispatch(&self, key_name: &str) -> usize {
        let key = NavKey::from_key_name(key_name);
        if key == NavKey::Other {
            return 0;
        }
        let listeners: Vec<Listener> = self
            .registry
            .borrow()
            .listeners
            .iter()
            .map(|(_, l)| Rc::clone(l))
            .collect();
        for listener in &listeners {
            (&mut *listener.borrow_mut())(key);
        }
        listeners.len()
    }

    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }
}

impl fmt::Debug for KeyboardHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyboardHub")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// Live key listener. Detaches on drop.
#[must_use = "dropping the subscription detaches the listener immediately"]
#[derive(Debug)]
pub struct KeySubscription {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl KeySubscription {
    /// Detach now. Same as dropping.
    pub fn detach(self) {}
}

impl Drop for KeySubscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry
                .borrow_mut()
                .listeners
                .retain(|(id, _)| *id != self.id);
            tracing::trace!(id = self.id, "Key listener detached");
        }
    }
}
