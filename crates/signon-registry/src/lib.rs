//! # signon-registry
//!
//! Turns OAuth2 client property blocks into resolved
//! [`ClientRegistration`](signon_oauth::ClientRegistration) records.
//!
//! Configuration arrives as two maps — named providers and named
//! registrations — typically bound from files or the environment by an outer
//! configuration layer. Each registration references a provider either
//! declared explicitly in the properties or drawn from the built-in
//! [`CommonProvider`] catalog of well-known services (Google, GitHub,
//! Facebook, Okta), which also supplies default flow parameters so common
//! setups only need a client id and secret.
//!
//! # Quick start
//!
//! ```
//! use signon_registry::{OAuth2ClientProperties, client_registrations};
//!
//! let properties = OAuth2ClientProperties::from_json_str(
//!     r#"{
//!         "registration": {
//!             "login": {
//!                 "provider": "google",
//!                 "client-id": "my-client",
//!                 "client-secret": "my-secret"
//!             }
//!         }
//!     }"#,
//! )?;
//!
//! let registrations = client_registrations(&properties)?;
//! let login = &registrations["login"];
//! assert_eq!(login.client_name(), Some("Google"));
//! # Ok::<(), signon_registry::Error>(())
//! ```

pub mod common;
pub mod error;
pub mod properties;
pub mod registrations;

pub use common::CommonProvider;
pub use error::Error;
pub use properties::{OAuth2ClientProperties, Provider, Registration};
pub use registrations::client_registrations;
