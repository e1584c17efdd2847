//! # nova-core
//!
//! Everything behind the Nova Vista Education site that is not a view:
//! the content model, the mock catalog, the simulated data service and the
//! small pieces of UI state (routing, header chrome, task scopes) that the
//! Leptos front end drives.
//!
//! Nothing in here touches the DOM, so the whole crate is tested natively.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nova_core::{DataService, TokioTimer, config::ServiceConfig};
//!
//! # async fn demo() -> Result<(), nova_core::ServiceError> {
//! let service = DataService::new(TokioTimer, ServiceConfig::default());
//! let articles = service.fetch_articles().await?;
//! assert_eq!(articles[0].id, "1");
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`types`] - content records (`MetaData`, `Article`, ...)
//! - [`catalog`] - the fixed reference payloads
//! - [`service`] - `DataService` and fault injection
//! - [`timer`] - the sleep seam the service waits through
//! - [`routing`] - fragment-routed locations and nav items
//! - [`chrome`] - header scroll state and the mobile menu
//! - [`scope`] - cancellation of in-flight fetches
//! - [`load`] - per-slice loading state for views
//! - [`config`] - `SiteConfig` (TOML)
//! - [`error`] - error types

#![warn(missing_docs)]

pub mod catalog;
pub mod chrome;
pub mod config;
pub mod error;
pub mod load;
pub mod routing;
pub mod scope;
pub mod service;
pub mod timer;
pub mod token;
pub mod types;

pub use error::{ConfigError, ServiceError};
pub use service::{DataService, FaultInjector, Operation};
#[cfg(not(target_arch = "wasm32"))]
pub use timer::TokioTimer;
pub use timer::Timer;
