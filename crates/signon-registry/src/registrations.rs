//! The property-to-registration adapter.
//!
//! Resolution is a pure, single-pass computation: each registration entry is
//! resolved independently against the explicit provider map first, then the
//! built-in catalog, and fails fast on the first unresolvable reference.

use std::collections::HashMap;

use signon_oauth::{ClientRegistration, ClientRegistrationBuilder};
use tracing::debug;

use crate::common::CommonProvider;
use crate::error::Error;
use crate::properties::{OAuth2ClientProperties, Provider, Registration};

/// Resolve all configured registrations into [`ClientRegistration`] records,
/// keyed by registration id.
///
/// Fails with [`Error::UnknownProvider`] when a registration's provider
/// reference matches neither an explicit provider entry nor a built-in
/// catalog name, and with [`Error::Incomplete`] when the merged result lacks
/// an authorization URI, token URI, or client authentication method. No
/// partial map is returned on failure.
pub fn client_registrations(
    properties: &OAuth2ClientProperties,
) -> Result<HashMap<String, ClientRegistration>, Error> {
    properties
        .registration
        .iter()
        .map(|(id, registration)| {
            let resolved = client_registration(id, registration, &properties.provider)?;
            Ok((id.clone(), resolved))
        })
        .collect()
}

fn client_registration(
    registration_id: &str,
    registration: &Registration,
    providers: &HashMap<String, Provider>,
) -> Result<ClientRegistration, Error> {
    // An unset reference resolves through the registration's own id, so a
    // registration named "google" needs no explicit provider line.
    let provider_id = registration.provider.as_deref().unwrap_or(registration_id);

    let builder = if let Some(provider) = providers.get(provider_id) {
        debug!(registration_id, provider_id, "using explicitly declared provider");
        explicit_provider_builder(registration_id, provider)
    } else if let Some(common) = CommonProvider::from_id(provider_id) {
        debug!(registration_id, provider_id, "using built-in provider defaults");
        common_provider_builder(registration_id, common)
    } else {
        return Err(Error::UnknownProvider(provider_id.to_string()));
    };

    let registration = apply_registration(builder, registration).build()?;
    Ok(registration)
}

/// Base builder from an explicitly declared provider. Explicit providers
/// supply endpoint details only and contribute no registration-field
/// defaults, even when their id also matches a built-in name.
fn explicit_provider_builder(
    registration_id: &str,
    provider: &Provider,
) -> ClientRegistrationBuilder {
    let mut builder = ClientRegistration::builder(registration_id);
    if let Some(uri) = &provider.authorization_uri {
        builder = builder.authorization_uri(uri);
    }
    if let Some(uri) = &provider.token_uri {
        builder = builder.token_uri(uri);
    }
    if let Some(uri) = &provider.user_info_uri {
        builder = builder.user_info_uri(uri);
    }
    if let Some(uri) = &provider.jwk_set_uri {
        builder = builder.jwk_set_uri(uri);
    }
    if let Some(uri) = &provider.issuer_uri {
        builder = builder.issuer_uri(uri);
    }
    if let Some(attribute) = &provider.user_name_attribute {
        builder = builder.user_name_attribute(attribute);
    }
    builder
}

/// Base builder from a built-in catalog entry: endpoint details plus default
/// registration fields.
fn common_provider_builder(
    registration_id: &str,
    common: CommonProvider,
) -> ClientRegistrationBuilder {
    let mut builder = ClientRegistration::builder(registration_id)
        .client_authentication_method(common.client_authentication_method())
        .authorization_grant_type(common.authorization_grant_type())
        .redirect_uri(common.redirect_uri_template())
        .scope(common.scopes().iter().copied())
        .client_name(common.client_name());

    if let Some(uri) = common.authorization_uri() {
        builder = builder.authorization_uri(uri);
    }
    if let Some(uri) = common.token_uri() {
        builder = builder.token_uri(uri);
    }
    if let Some(uri) = common.user_info_uri() {
        builder = builder.user_info_uri(uri);
    }
    if let Some(uri) = common.jwk_set_uri() {
        builder = builder.jwk_set_uri(uri);
    }
    if let Some(attribute) = common.user_name_attribute() {
        builder = builder.user_name_attribute(attribute);
    }
    builder
}

/// Layer explicitly configured registration fields over the base. Overrides
/// are per-field and all-or-nothing: a configured scope list replaces the
/// default set entirely.
fn apply_registration(
    mut builder: ClientRegistrationBuilder,
    registration: &Registration,
) -> ClientRegistrationBuilder {
    if let Some(client_id) = &registration.client_id {
        builder = builder.client_id(client_id);
    }
    if let Some(client_secret) = &registration.client_secret {
        builder = builder.client_secret(client_secret);
    }
    if let Some(method) = registration.client_authentication_method {
        builder = builder.client_authentication_method(method);
    }
    if let Some(grant_type) = registration.authorization_grant_type {
        builder = builder.authorization_grant_type(grant_type);
    }
    if let Some(redirect_uri) = &registration.redirect_uri {
        builder = builder.redirect_uri(redirect_uri);
    }
    if let Some(scope) = &registration.scope {
        builder = builder.scope(scope.iter().cloned());
    }
    if let Some(client_name) = &registration.client_name {
        builder = builder.client_name(client_name);
    }
    builder
}
