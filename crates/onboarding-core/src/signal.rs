use std::cell::RefCell;
use std::rc::{Rc, Weak};

use slotmap::{SlotMap, new_key_type};

use crate::Dispose;

new_key_type! {
    pub struct SubId;
}

type Subscriber<T> = Rc<dyn Fn(&T)>;

/// Observable value. Hosts subscribe to re-render when flow state moves.
#[derive(Clone)]
pub struct Signal<T: Clone + 'static>(Rc<RefCell<Inner<T>>>);

struct Inner<T> {
    value: T,
    subs: SlotMap<SubId, Subscriber<T>>,
}

impl<T: Clone + 'static> Signal<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(Inner {
            value,
            subs: SlotMap::with_key(),
        })))
    }

    pub fn get(&self) -> T {
        self.0.borrow().value.clone()
    }

    pub fn set(&self, v: T) {
        self.0.borrow_mut().value = v;
        self.notify();
    }

    /// Sets and notifies only when the value actually changes.
    pub fn set_if_changed(&self, v: T) -> bool
    where
        T: PartialEq,
    {
        if self.0.borrow().value == v {
            return false;
        }
        self.set(v);
        true
    }

    pub fn update<F: FnOnce(&mut T)>(&self, f: F) {
        f(&mut self.0.borrow_mut().value);
        self.notify();
    }

    /// Subscribers may read the signal; the borrow is released before they run.
    fn notify(&self) {
        let (value, subs) = {
            let inner = self.0.borrow();
            if inner.subs.is_empty() {
                return;
            }
            let subs: Vec<Subscriber<T>> = inner.subs.values().cloned().collect();
            (inner.value.clone(), subs)
        };
        for s in subs {
            s(&value);
        }
    }

    /// Returns a guard that unsubscribes when run.
    pub fn subscribe(&self, f: impl Fn(&T) + 'static) -> Dispose {
        let id = self.0.borrow_mut().subs.insert(Rc::new(f));
        let weak: Weak<RefCell<Inner<T>>> = Rc::downgrade(&self.0);
        Dispose::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().subs.remove(id);
            }
        })
    }

    pub fn subscriber_count(&self) -> usize {
        self.0.borrow().subs.len()
    }
}

impl<T: Clone + std::fmt::Debug + 'static> std::fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Signal").field(&self.0.borrow().value).finish()
    }
}

pub fn signal<T: Clone + 'static>(t: T) -> Signal<T> {
    Signal::new(t)
}
