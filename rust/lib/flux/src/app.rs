use std::any::Any;
use std::future::Future;
use std::sync::Arc;

use crate::router::{Payload, Router};
use crate::store::StateStore;
use crate::value::{StateValue, SubscriptionId};

/// Flux: the path-addressed state engine.
///
/// Three primitives:
/// - `get(path)`: read state at a path (Arc, zero-copy)
/// - `emit(path, payload)`: send a request to the matching handler(s)
/// - `subscribe(pattern)`: observe state changes
///
/// ```ignore
/// let flux = Flux::new();
///
/// flux.on("auth/login", |_, payload, store| async move {
///     store.set("app/route", "/dashboard".to_string());
/// });
/// flux.subscribe("app/#", |path, _| println!("{} changed", path));
///
/// flux.emit("auth/login", LoginSubmitReq).await;
/// let route = flux.get_cloned::<String>("app/route");
/// ```
pub struct Flux {
    store: Arc<StateStore>,
    router: Router,
}

impl Flux {
    pub fn new() -> Self {
        Self {
            store: Arc::new(StateStore::new()),
            router: Router::new(),
        }
    }

    // ====================================================================
    // State: read
    // ====================================================================

    pub fn get(&self, path: &str) -> Option<StateValue> {
        self.store.get(path)
    }

    /// Read and clone the state at `path` as `T`.
    pub fn get_cloned<T: Any + Clone>(&self, path: &str) -> Option<T> {
        self.store.get_cloned(path)
    }

    /// Children of `prefix`, ordered by path.
    pub fn scan(&self, prefix: &str) -> Vec<(String, StateValue)> {
        self.store.scan(prefix)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.store.contains(path)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    // ====================================================================
    // Requests
    // ====================================================================

    /// Emit a request and wait for every matching handler to finish.
    ///
    /// Unmatched paths are a silent no-op.
    pub async fn emit<T: Any + Send + Sync>(&self, path: &str, payload: T) {
        self.router
            .dispatch(path, Arc::new(payload), Arc::clone(&self.store))
            .await;
    }

    /// Register an async request handler for a path pattern.
    ///
    /// The handler gets the concrete request path, the type-erased payload
    /// (downcast inside) and the state store.
    pub fn on<F, Fut>(&self, pattern: &str, handler: F)
    where
        F: Fn(String, Payload, Arc<StateStore>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.router.on(pattern, handler);
    }

    // ====================================================================
    // Subscriptions
    // ====================================================================

    /// Subscribe to state changes; the handler runs synchronously on `set`.
    pub fn subscribe<F>(&self, pattern: &str, handler: F) -> SubscriptionId
    where
        F: Fn(&str, &StateValue) + Send + Sync + 'static,
    {
        self.store.subscribe(pattern, handler)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }

    /// Direct store access, for handlers and tests.
    pub fn store(&self) -> &Arc<StateStore> {
        &self.store
    }
}

impl Default for Flux {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn new_is_empty() {
        let flux = Flux::default();
        assert!(flux.is_empty());
        assert!(flux.get("anything").is_none());
    }

    #[tokio::test]
    async fn emit_typed_request_updates_state() {
        #[derive(Debug)]
        struct NavigateReq {
            module: &'static str,
        }

        let flux = Flux::new();
        flux.on("shell/navigate", |_, payload, store: Arc<StateStore>| async move {
            if let Some(req) = payload.downcast_ref::<NavigateReq>() {
                store.set("shell/current", req.module.to_string());
            }
        });

        flux.emit("shell/navigate", NavigateReq { module: "billing" }).await;
        assert_eq!(flux.get_cloned::<String>("shell/current"), Some("billing".into()));
    }

    #[tokio::test]
    async fn handler_reads_then_writes() {
        let flux = Flux::new();
        flux.store().set("counter", 0u32);
        flux.on("increment", |_, _, store: Arc<StateStore>| async move {
            let n = store.get_cloned::<u32>("counter").unwrap_or(0);
            store.set("counter", n + 1);
        });

        for _ in 0..3 {
            flux.emit("increment", ()).await;
        }
        assert_eq!(flux.get_cloned::<u32>("counter"), Some(3));
    }

    #[tokio::test]
    async fn emit_without_handler_is_silent() {
        let flux = Flux::new();
        flux.emit("nothing/here", ()).await;
        assert!(flux.is_empty());
    }

    #[tokio::test]
    async fn subscriber_sees_handler_writes() {
        let flux = Flux::new();
        let seen = Arc::new(Mutex::new(Vec::<String>::new()));
        let s = seen.clone();
        flux.subscribe("#", move |path, _| s.lock().unwrap().push(path.to_string()));

        flux.on("app/initialize", |_, _, store: Arc<StateStore>| async move {
            store.set("auth/state", "unauthenticated".to_string());
            store.set("app/route", "/login".to_string());
        });
        flux.emit("app/initialize", ()).await;

        assert_eq!(*seen.lock().unwrap(), vec!["auth/state", "app/route"]);
    }

    #[tokio::test]
    async fn unsubscribe_via_facade() {
        let flux = Flux::new();
        let hits = Arc::new(Mutex::new(0u32));
        let h = hits.clone();
        let id = flux.subscribe("a", move |_, _| *h.lock().unwrap() += 1);

        flux.store().set("a", 1u32);
        assert!(flux.unsubscribe(id));
        flux.store().set("a", 2u32);
        assert_eq!(*hits.lock().unwrap(), 1);
    }

    #[tokio::test]
    async fn wildcard_handler_sees_concrete_path() {
        let flux = Flux::new();
        flux.on("patients/#", |path, _, store: Arc<StateStore>| async move {
            store.set("last", path);
        });
        flux.emit("patients/dialog/save", ()).await;
        flux.emit("auth/login", ()).await;
        assert_eq!(flux.get_cloned::<String>("last"), Some("patients/dialog/save".into()));
    }

    #[test]
    fn scan_and_contains() {
        let flux = Flux::new();
        flux.store().set("shell/nav", 1u32);
        flux.store().set("shell/panel", 2u32);
        assert!(flux.contains("shell/nav"));
        assert_eq!(flux.scan("shell").len(), 2);
        assert_eq!(flux.len(), 2);
    }

    fn _assert_flux_send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}
        assert_send::<Flux>();
        assert_sync::<Flux>();
    }
}
