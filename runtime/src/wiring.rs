//! Wiring - Type-Safe Collaborator Injection
//!
//! Collaborators are wired by type, not by string key: a missing wire is a
//! typed lookup miss, never a stringly-typed runtime surprise. Each form
//! instance gets its collaborators from one `Wiring` value, which makes
//! every external effect substitutable in tests.

use crate::notify::NotificationSink;
use crate::session::{ProfileCache, SessionHandle};
use crate::transport::Transport;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

/// Type-keyed collaborator container (TypeMap pattern).
///
/// The four well-known collaborators get builder methods and typed
/// accessors; arbitrary extra resources can ride along via `insert`/`get`.
#[derive(Default)]
pub struct Wiring {
    resources: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl Wiring {
    /// Create an empty container.
    pub fn new() -> Self {
        Self {
            resources: HashMap::new(),
        }
    }

    /// Insert a resource. A resource of the same type is replaced.
    pub fn insert<T: Send + Sync + 'static>(&mut self, resource: T) {
        self.resources.insert(TypeId::of::<T>(), Box::new(resource));
    }

    /// Get a reference to a resource, if present.
    pub fn get<T: 'static>(&self) -> Option<&T> {
        self.resources
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_ref())
    }

    /// Check if a resource type is wired.
    pub fn contains<T: 'static>(&self) -> bool {
        self.resources.contains_key(&TypeId::of::<T>())
    }

    /// Remove a resource, returning it if present.
    pub fn remove<T: 'static>(&mut self) -> Option<T> {
        self.resources
            .remove(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast().ok())
            .map(|boxed| *boxed)
    }

    // --- Well-known collaborator slots ---

    /// Wire the request/response transport.
    pub fn with_transport(mut self, transport: impl Transport + 'static) -> Self {
        self.insert::<Arc<dyn Transport>>(Arc::new(transport));
        self
    }

    /// Wire the session-state handle.
    pub fn with_session(mut self, session: impl SessionHandle + 'static) -> Self {
        self.insert::<Arc<dyn SessionHandle>>(Arc::new(session));
        self
    }

    /// Wire the user-visible notification sink.
    pub fn with_notifications(mut self, sink: impl NotificationSink + 'static) -> Self {
        self.insert::<Arc<dyn NotificationSink>>(Arc::new(sink));
        self
    }

    /// Wire the durable profile cache.
    pub fn with_cache(mut self, cache: impl ProfileCache + 'static) -> Self {
        self.insert::<Arc<dyn ProfileCache>>(Arc::new(cache));
        self
    }

    pub fn transport(&self) -> Option<Arc<dyn Transport>> {
        self.get::<Arc<dyn Transport>>().cloned()
    }

    pub fn session(&self) -> Option<Arc<dyn SessionHandle>> {
        self.get::<Arc<dyn SessionHandle>>().cloned()
    }

    pub fn notifications(&self) -> Option<Arc<dyn NotificationSink>> {
        self.get::<Arc<dyn NotificationSink>>().cloned()
    }

    pub fn cache(&self) -> Option<Arc<dyn ProfileCache>> {
        self.get::<Arc<dyn ProfileCache>>().cloned()
    }
}

impl std::fmt::Debug for Wiring {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wiring")
            .field("resource_count", &self.resources.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::RecordingSink;
    use crate::session::InMemorySession;

    #[test]
    fn insert_and_get() {
        let mut wiring = Wiring::new();
        wiring.insert(42i32);
        wiring.insert("hello".to_string());

        assert_eq!(wiring.get::<i32>(), Some(&42));
        assert_eq!(wiring.get::<String>(), Some(&"hello".to_string()));
        assert_eq!(wiring.get::<f64>(), None);
    }

    #[test]
    fn remove_returns_resource() {
        let mut wiring = Wiring::new();
        wiring.insert(vec![1, 2, 3]);

        assert_eq!(wiring.remove::<Vec<i32>>(), Some(vec![1, 2, 3]));
        assert!(!wiring.contains::<Vec<i32>>());
    }

    #[test]
    fn collaborator_slots_are_typed() {
        let wiring = Wiring::new()
            .with_session(InMemorySession::new())
            .with_notifications(RecordingSink::new());

        assert!(wiring.session().is_some());
        assert!(wiring.notifications().is_some());
        assert!(wiring.transport().is_none());
        assert!(wiring.cache().is_none());
    }
}
