//! OAuth2 client property structs, as bound from configuration sources.
//!
//! Field names follow the kebab-case convention of property files
//! (`client-id`, `authorization-uri`, ...). Every field is optional; absence
//! means "fall back to the built-in provider default when one applies".

use std::collections::HashMap;

use serde::Deserialize;
use signon_oauth::{AuthorizationGrantType, ClientAuthenticationMethod};

use crate::error::Error;

/// Top-level OAuth2 client properties: named providers and named
/// registrations.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OAuth2ClientProperties {
    /// Explicitly declared providers, keyed by provider id.
    pub provider: HashMap<String, Provider>,
    /// Client registrations to produce, keyed by registration id.
    pub registration: HashMap<String, Registration>,
}

impl OAuth2ClientProperties {
    /// Parse properties from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }
}

/// An explicitly configured provider: endpoint URIs only.
///
/// An explicit provider is used as-is; it is never combined with built-in
/// defaults, even when its id matches a built-in name.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Provider {
    pub authorization_uri: Option<String>,
    pub token_uri: Option<String>,
    pub user_info_uri: Option<String>,
    pub jwk_set_uri: Option<String>,
    pub issuer_uri: Option<String>,
    pub user_name_attribute: Option<String>,
}

/// A named client registration referencing a provider.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Registration {
    /// Provider reference. When unset, the registration's own id is used as
    /// the provider id.
    pub provider: Option<String>,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub client_authentication_method: Option<ClientAuthenticationMethod>,
    pub authorization_grant_type: Option<AuthorizationGrantType>,
    pub redirect_uri: Option<String>,
    pub scope: Option<Vec<String>>,
    pub client_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::OAuth2ClientProperties;
    use signon_oauth::{AuthorizationGrantType, ClientAuthenticationMethod};

    #[test]
    fn binds_kebab_case_json() {
        let properties = OAuth2ClientProperties::from_json_str(
            r#"{
                "provider": {
                    "corp": {
                        "authorization-uri": "https://sso.corp.test/auth",
                        "token-uri": "https://sso.corp.test/token",
                        "user-name-attribute": "sub"
                    }
                },
                "registration": {
                    "corp-login": {
                        "provider": "corp",
                        "client-id": "abc",
                        "client-authentication-method": "post",
                        "authorization-grant-type": "authorization_code",
                        "scope": ["openid"]
                    }
                }
            }"#,
        )
        .unwrap();

        let provider = &properties.provider["corp"];
        assert_eq!(
            provider.authorization_uri.as_deref(),
            Some("https://sso.corp.test/auth")
        );
        assert_eq!(provider.user_name_attribute.as_deref(), Some("sub"));
        assert!(provider.jwk_set_uri.is_none());

        let registration = &properties.registration["corp-login"];
        assert_eq!(registration.provider.as_deref(), Some("corp"));
        assert_eq!(
            registration.client_authentication_method,
            Some(ClientAuthenticationMethod::Post)
        );
        assert_eq!(
            registration.authorization_grant_type,
            Some(AuthorizationGrantType::AuthorizationCode)
        );
        assert_eq!(registration.scope.as_deref(), Some(&["openid".to_string()][..]));
    }

    #[test]
    fn empty_document_yields_empty_maps() {
        let properties = OAuth2ClientProperties::from_json_str("{}").unwrap();
        assert!(properties.provider.is_empty());
        assert!(properties.registration.is_empty());
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let err = OAuth2ClientProperties::from_json_str("{").unwrap_err();
        assert!(err.to_string().contains("failed to parse"));
    }
}
