//! Synchronous property-change notification
//!
//! Observers are kept in an ordered list and invoked in registration order.
//! Removal requires the handle returned at registration (or, for plain
//! functions, the same function). An equivalent closure built later is a
//! different registration and cannot remove an earlier one.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, trace};

use crate::domain::{HelpAttribute, Introspect, MemberInfo, Property, Shape, TypeDescriptor};

/// One property change, alive only for the duration of a dispatch.
#[derive(Debug, Clone, Copy)]
pub struct ChangeEvent<'a> {
    pub source: &'a Shape,
    pub property: Property,
}

impl<'a> ChangeEvent<'a> {
    pub fn new(source: &'a Shape, property: Property) -> Self {
        Self { source, property }
    }
}

/// Plain function observer; removable by passing the same function again.
pub type ObserverFn = fn(&ChangeEvent<'_>);

/// Identity of one registration. Unique across all notifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverHandle(u64);

static NEXT_HANDLE: AtomicU64 = AtomicU64::new(1);

impl ObserverHandle {
    fn next() -> Self {
        Self(NEXT_HANDLE.fetch_add(1, Ordering::Relaxed))
    }
}

enum Callback {
    Named(ObserverFn),
    Closure(Box<dyn Fn(&ChangeEvent<'_>)>),
}

impl Callback {
    fn call(&self, event: &ChangeEvent<'_>) {
        match self {
            Callback::Named(f) => f(event),
            Callback::Closure(f) => f(event),
        }
    }

    fn is_fn(&self, target: ObserverFn) -> bool {
        match self {
            Callback::Named(f) => *f as usize == target as usize,
            Callback::Closure(_) => false,
        }
    }
}

struct Registration {
    handle: ObserverHandle,
    callback: Callback,
}

/// Ordered list of change observers.
#[derive(Default)]
pub struct ChangeNotifier {
    observers: Vec<Registration>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a closure. Every call yields a fresh handle.
    pub fn subscribe<F>(&mut self, callback: F) -> ObserverHandle
    where
        F: Fn(&ChangeEvent<'_>) + 'static,
    {
        self.push(Callback::Closure(Box::new(callback)))
    }

    /// Register a plain function. The same function may be registered more
    /// than once; each registration fires.
    pub fn subscribe_fn(&mut self, callback: ObserverFn) -> ObserverHandle {
        self.push(Callback::Named(callback))
    }

    fn push(&mut self, callback: Callback) -> ObserverHandle {
        let handle = ObserverHandle::next();
        self.observers.push(Registration { handle, callback });
        debug!(?handle, observers = self.observers.len(), "observer subscribed");
        handle
    }

    /// Remove the registration behind `handle`. Unknown handles are a no-op.
    pub fn unsubscribe(&mut self, handle: ObserverHandle) -> bool {
        match self.observers.iter().position(|r| r.handle == handle) {
            Some(idx) => {
                self.observers.remove(idx);
                debug!(?handle, "observer unsubscribed");
                true
            }
            None => {
                trace!(?handle, "unsubscribe: handle not registered");
                false
            }
        }
    }

    /// Remove the most recent registration of `callback`. No-op if absent.
    ///
    /// Functions are matched by address, which is best-effort: the compiler
    /// may merge identical function bodies into one address, or give one
    /// function several addresses across codegen units. Use the handle from
    /// [`subscribe_fn`](Self::subscribe_fn) with [`unsubscribe`](Self::unsubscribe)
    /// when exact identity matters.
    pub fn unsubscribe_fn(&mut self, callback: ObserverFn) -> bool {
        match self.observers.iter().rposition(|r| r.callback.is_fn(callback)) {
            Some(idx) => {
                let removed = self.observers.remove(idx);
                debug!(handle = ?removed.handle, "function observer unsubscribed");
                true
            }
            None => false,
        }
    }

    /// Invoke every observer in registration order.
    pub fn notify(&self, event: &ChangeEvent<'_>) {
        trace!(
            property = %event.property,
            observers = self.observers.len(),
            "notify"
        );
        for registration in &self.observers {
            registration.callback.call(event);
        }
    }

    pub fn contains(&self, handle: ObserverHandle) -> bool {
        self.observers.iter().any(|r| r.handle == handle)
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    pub fn clear(&mut self) {
        self.observers.clear();
    }
}

impl fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field(
                "observers",
                &self.observers.iter().map(|r| r.handle).collect::<Vec<_>>(),
            )
            .finish()
    }
}

static NOTIFIER_DESCRIPTOR: TypeDescriptor = TypeDescriptor {
    name: "ChangeNotifier",
    help: Some(HelpAttribute::new(
        "Synchronous observers invoked in registration order",
    )),
    members: &[
        MemberInfo::method(
            "subscribe",
            Some(HelpAttribute::new("Register a closure, returns its handle")),
        ),
        MemberInfo::method("subscribe_fn", None),
        MemberInfo::method(
            "unsubscribe",
            Some(HelpAttribute::new(
                "Remove by original handle; unknown handles are ignored",
            )),
        ),
        MemberInfo::method("unsubscribe_fn", None),
        MemberInfo::method("notify", None),
        MemberInfo::property("len", None),
    ],
};

impl Introspect for ChangeNotifier {
    fn descriptor() -> &'static TypeDescriptor {
        &NOTIFIER_DESCRIPTOR
    }
}
