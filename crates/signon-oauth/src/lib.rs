//! # signon-oauth
//!
//! Core OAuth2 client types for the signon workspace.
//!
//! The central type is [`ClientRegistration`]: a fully resolved, immutable
//! description of one OAuth2 client — its credentials, flow parameters, and
//! the endpoint details of the provider it authenticates against. Instances
//! are produced through [`ClientRegistration::builder`], which refuses to
//! build a registration that is missing an authorization URI, a token URI,
//! or a client authentication method.

pub mod error;
pub mod method;
pub mod registration;

pub use error::Error;
pub use method::{AuthorizationGrantType, ClientAuthenticationMethod};
pub use registration::{
    ClientRegistration, ClientRegistrationBuilder, ProviderDetails, UserInfoEndpoint,
};
