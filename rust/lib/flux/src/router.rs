use std::any::Any;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::pattern::Pattern;
use crate::store::StateStore;

/// A boxed, `Send`-able future returned by request handlers.
pub type BoxFuture = Pin<Box<dyn Future<Output = ()> + Send>>;

/// Type-erased request payload.
pub type Payload = Arc<dyn Any + Send + Sync>;

/// Handlers take owned values so the returned future can be `'static`.
type ErasedHandler = Arc<dyn Fn(String, Payload, Arc<StateStore>) -> BoxFuture + Send + Sync>;

struct Route {
    pattern: Pattern,
    handler: ErasedHandler,
}

/// Request router: maps path patterns to async handlers.
///
/// Several handlers may match one path; they run one after another in
/// registration order, each awaited before the next starts.
pub struct Router {
    routes: RwLock<Vec<Route>>,
}

impl Router {
    pub fn new() -> Self {
        Self {
            routes: RwLock::new(Vec::new()),
        }
    }

    /// Register an async handler for a path pattern (`+` and `#` allowed).
    pub fn on<F, Fut>(&self, pattern: &str, handler: F)
    where
        F: Fn(String, Payload, Arc<StateStore>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let handler: ErasedHandler = Arc::new(
            move |path: String, payload: Payload, store: Arc<StateStore>| -> BoxFuture {
                Box::pin(handler(path, payload, store))
            },
        );
        self.routes.write().push(Route {
            pattern: Pattern::parse(pattern),
            handler,
        });
    }

    /// Dispatch a request to every matching handler.
    ///
    /// No match is a no-op. The route table is not locked while handlers
    /// run, so a handler may register further routes.
    pub async fn dispatch(&self, path: &str, payload: Payload, store: Arc<StateStore>) {
        let handlers: Vec<ErasedHandler> = self
            .routes
            .read()
            .iter()
            .filter(|r| r.pattern.matches(path))
            .map(|r| Arc::clone(&r.handler))
            .collect();

        if handlers.is_empty() {
            tracing::debug!(path, "no handler for request");
            return;
        }

        tracing::debug!(path, handlers = handlers.len(), "dispatch");
        for handler in handlers {
            handler(path.to_string(), Arc::clone(&payload), Arc::clone(&store)).await;
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn test_store() -> Arc<StateStore> {
        Arc::new(StateStore::new())
    }

    #[tokio::test]
    async fn dispatch_exact_match() {
        let router = Router::new();
        router.on("shell/navigate", |_, _, store: Arc<StateStore>| async move {
            store.set("shell/panel", "appointments".to_string());
        });

        let store = test_store();
        router.dispatch("shell/navigate", Arc::new(()), store.clone()).await;

        assert_eq!(store.get_cloned::<String>("shell/panel"), Some("appointments".into()));
    }

    #[tokio::test]
    async fn dispatch_without_match_is_noop() {
        let router = Router::new();
        router.on("auth/login", |_, _, store: Arc<StateStore>| async move {
            store.set("auth/state", 1u32);
        });

        let store = test_store();
        router.dispatch("auth/logout", Arc::new(()), store.clone()).await;
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn handler_receives_path_and_payload() {
        #[derive(Debug)]
        struct SearchReq {
            query: String,
        }

        let router = Router::new();
        let got = Arc::new(Mutex::new(Vec::<(String, String)>::new()));
        let g = got.clone();
        router.on("patients/+", move |path, payload, _| {
            let g = g.clone();
            async move {
                if let Some(req) = payload.downcast_ref::<SearchReq>() {
                    g.lock().unwrap().push((path, req.query.clone()));
                }
            }
        });

        router
            .dispatch(
                "patients/search",
                Arc::new(SearchReq { query: "ann".into() }),
                test_store(),
            )
            .await;

        assert_eq!(
            *got.lock().unwrap(),
            vec![("patients/search".to_string(), "ann".to_string())]
        );
    }

    #[tokio::test]
    async fn handlers_run_in_registration_order() {
        let router = Router::new();
        let order = Arc::new(Mutex::new(Vec::<&'static str>::new()));

        for (pattern, tag) in [("#", "all"), ("auth/+", "auth"), ("auth/login", "login")] {
            let o = order.clone();
            router.on(pattern, move |_, _, _| {
                let o = o.clone();
                async move {
                    o.lock().unwrap().push(tag);
                }
            });
        }

        router.dispatch("auth/login", Arc::new(()), test_store()).await;
        assert_eq!(*order.lock().unwrap(), vec!["all", "auth", "login"]);
    }
}
