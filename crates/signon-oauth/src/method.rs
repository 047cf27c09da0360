//! Client authentication methods and authorization grant types.

use serde::{Deserialize, Serialize};

/// How the client authenticates against the provider's token endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientAuthenticationMethod {
    /// HTTP Basic authentication with client id and secret.
    Basic,
    /// Client id and secret in the request body.
    Post,
    /// Public client, no authentication.
    None,
}

impl ClientAuthenticationMethod {
    /// Stable identifier as it appears in property sources (e.g. `"basic"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            ClientAuthenticationMethod::Basic => "basic",
            ClientAuthenticationMethod::Post => "post",
            ClientAuthenticationMethod::None => "none",
        }
    }
}

/// The OAuth2 authorization flow variant used by a registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthorizationGrantType {
    AuthorizationCode,
    Implicit,
    ClientCredentials,
    RefreshToken,
}

impl AuthorizationGrantType {
    /// Stable identifier as it appears in property sources
    /// (e.g. `"authorization_code"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthorizationGrantType::AuthorizationCode => "authorization_code",
            AuthorizationGrantType::Implicit => "implicit",
            AuthorizationGrantType::ClientCredentials => "client_credentials",
            AuthorizationGrantType::RefreshToken => "refresh_token",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AuthorizationGrantType, ClientAuthenticationMethod};

    #[test]
    fn methods_deserialize_from_property_values() {
        let method: ClientAuthenticationMethod = serde_json::from_str("\"post\"").unwrap();
        assert_eq!(method, ClientAuthenticationMethod::Post);

        let grant: AuthorizationGrantType =
            serde_json::from_str("\"authorization_code\"").unwrap();
        assert_eq!(grant, AuthorizationGrantType::AuthorizationCode);
    }

    #[test]
    fn as_str_round_trips_serde_names() {
        for method in [
            ClientAuthenticationMethod::Basic,
            ClientAuthenticationMethod::Post,
            ClientAuthenticationMethod::None,
        ] {
            let json = format!("\"{}\"", method.as_str());
            let parsed: ClientAuthenticationMethod = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, method);
        }
    }
}
