//! Clinic BFF: the state the renderer reads, the requests it emits, and
//! the handlers that connect them to the domain crates through flux.
//!
//! ```ignore
//! let flux = Flux::new();
//! register_handlers(&flux, Arc::new(ClinicContext::new(accounts, config)));
//!
//! flux.emit(InitializeReq::PATH, InitializeReq).await;
//! let route = flux.get_cloned::<AppRoute>(AppRoute::PATH);
//! ```

pub mod handlers;
pub mod request;
pub mod state;

pub use handlers::{ClinicContext, Session, register_handlers};
