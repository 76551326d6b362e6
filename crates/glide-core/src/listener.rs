//! Scoped listeners for host events.
//!
//! A [`ListenerRegistry`] fans a host event (for example a window resize) out
//! to every registered listener. Registering returns a
//! [`ListenerRegistration`]; the listener stays installed exactly as long as
//! that handle lives.

use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

pub type ListenerId = u64;

type Listener<E> = Rc<dyn Fn(&E)>;

struct RegistryInner<E: 'static> {
    next_id: ListenerId,
    listeners: SmallVec<[(ListenerId, Listener<E>); 2]>,
}

pub struct ListenerRegistry<E: 'static> {
    inner: Rc<RefCell<RegistryInner<E>>>,
}

impl<E: 'static> ListenerRegistry<E> {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(RegistryInner {
                next_id: 1,
                listeners: SmallVec::new(),
            })),
        }
    }

    pub fn register(&self, listener: impl Fn(&E) + 'static) -> ListenerRegistration {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.listeners.push((id, Rc::new(listener)));
            id
        };
        let registry: Weak<RefCell<RegistryInner<E>>> = Rc::downgrade(&self.inner);
        ListenerRegistration {
            id,
            unregister: Some(Box::new(move || {
                if let Some(registry) = registry.upgrade() {
                    registry
                        .borrow_mut()
                        .listeners
                        .retain(|(listener_id, _)| *listener_id != id);
                }
            })),
        }
    }

    /// Notify every listener registered at the time of the call.
    ///
    /// The listener list is snapshotted first, so listeners may register,
    /// unregister or tear down their owner while being dispatched.
    pub fn dispatch(&self, event: &E) -> usize {
        let snapshot: SmallVec<[Listener<E>; 2]> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in &snapshot {
            listener(event);
        }
        snapshot.len()
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<E: 'static> Clone for ListenerRegistry<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<E: 'static> Default for ListenerRegistry<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Keeps a listener installed; dropping it removes the listener.
pub struct ListenerRegistration {
    id: ListenerId,
    unregister: Option<Box<dyn FnOnce()>>,
}

impl ListenerRegistration {
    pub fn id(&self) -> ListenerId {
        self.id
    }

    pub fn cancel(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(unregister) = self.unregister.take() {
            unregister();
        }
    }
}

impl Drop for ListenerRegistration {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for ListenerRegistration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerRegistration")
            .field("id", &self.id)
            .field("active", &self.unregister.is_some())
            .finish()
    }
}
