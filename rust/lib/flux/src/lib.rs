//! Flux: path-addressed state engine for the clinic shell.
//!
//! Rust owns all state and logic; a renderer (the terminal console, or
//! any other front end) reads state paths and emits requests.
//!
//! # Path addressing
//!
//! State and requests share one flat namespace with `/` as separator:
//! `auth/state`, `app/route`, `patients/table`, `patients/dialog/save`.
//!
//! # Patterns
//!
//! Request handlers and subscriptions use MQTT-style wildcards:
//! - Exact: `auth/state`
//! - Single level: `shell/+` matches `shell/nav`, `shell/panel`
//! - Multi level: `patients/#` matches everything under `patients/`
//! - All: `#`

pub mod app;
pub mod pattern;
pub mod router;
pub mod store;
pub mod value;

pub use app::Flux;
pub use pattern::Pattern;
pub use router::{BoxFuture, Payload, Router};
pub use store::{ChangeHandler, StateStore};
pub use value::{StateValue, SubscriptionId};
