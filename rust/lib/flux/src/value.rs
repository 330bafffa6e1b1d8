use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// A type-erased, reference-counted state value.
///
/// Clone is cheap (an atomic increment); readers share the same data.
#[derive(Clone)]
pub struct StateValue {
    inner: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl StateValue {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            inner: Arc::new(value),
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Borrow as `T`, or `None` if the stored type differs.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    /// Clone out as `T`, or `None` if the stored type differs.
    pub fn cloned<T: Any + Clone>(&self) -> Option<T> {
        self.downcast_ref::<T>().cloned()
    }

    /// Name of the stored type, for logs.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl fmt::Debug for StateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateValue")
            .field("type", &self.type_name)
            .finish()
    }
}

/// Handle returned by `subscribe`, used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(crate) u64);

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Route(String);

    #[test]
    fn downcast_to_stored_type() {
        let v = StateValue::new(Route("/login".into()));
        assert_eq!(v.downcast_ref::<Route>(), Some(&Route("/login".into())));
    }

    #[test]
    fn downcast_to_other_type_is_none() {
        let v = StateValue::new(Route("/login".into()));
        assert!(v.downcast_ref::<String>().is_none());
        assert!(v.cloned::<u32>().is_none());
    }

    #[test]
    fn cloned_option_state() {
        let v = StateValue::new(None::<Route>);
        assert_eq!(v.cloned::<Option<Route>>(), Some(None));

        let v = StateValue::new(Some(Route("/dashboard".into())));
        assert_eq!(v.cloned::<Option<Route>>().flatten(), Some(Route("/dashboard".into())));
    }

    #[test]
    fn clone_shares_data() {
        let v1 = StateValue::new(vec![1u32, 2, 3]);
        let v2 = v1.clone();

        let p1 = v1.downcast_ref::<Vec<u32>>().unwrap().as_ptr();
        let p2 = v2.downcast_ref::<Vec<u32>>().unwrap().as_ptr();
        assert_eq!(p1, p2);
    }

    #[test]
    fn debug_shows_type_name() {
        let v = StateValue::new(Route("/login".into()));
        let debug = format!("{:?}", v);
        assert!(debug.contains("StateValue"));
        assert!(debug.contains("Route"));
    }

    fn _assert_send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}
        assert_send::<StateValue>();
        assert_sync::<StateValue>();
    }
}
