//! Resolved client registration records.

use crate::error::Error;
use crate::method::{AuthorizationGrantType, ClientAuthenticationMethod};

/// A fully resolved OAuth2 client registration.
///
/// Immutable once built. Construct through [`ClientRegistration::builder`],
/// which validates that the authorization URI, token URI, and client
/// authentication method are present before producing a record.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientRegistration {
    registration_id: String,
    client_id: Option<String>,
    client_secret: Option<String>,
    client_authentication_method: ClientAuthenticationMethod,
    authorization_grant_type: Option<AuthorizationGrantType>,
    redirect_uri: Option<String>,
    scope: Vec<String>,
    client_name: Option<String>,
    provider_details: ProviderDetails,
}

/// Endpoint details of the provider a registration authenticates against.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderDetails {
    authorization_uri: String,
    token_uri: String,
    user_info_endpoint: UserInfoEndpoint,
    jwk_set_uri: Option<String>,
    issuer_uri: Option<String>,
}

/// The provider's user-info endpoint and how to identify the end user in its
/// response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserInfoEndpoint {
    uri: Option<String>,
    user_name_attribute: Option<String>,
}

impl ClientRegistration {
    /// Start building a registration with the given id.
    pub fn builder(registration_id: impl Into<String>) -> ClientRegistrationBuilder {
        ClientRegistrationBuilder::new(registration_id)
    }

    /// The id this registration was configured under.
    pub fn registration_id(&self) -> &str {
        &self.registration_id
    }

    pub fn client_id(&self) -> Option<&str> {
        self.client_id.as_deref()
    }

    pub fn client_secret(&self) -> Option<&str> {
        self.client_secret.as_deref()
    }

    pub fn client_authentication_method(&self) -> ClientAuthenticationMethod {
        self.client_authentication_method
    }

    pub fn authorization_grant_type(&self) -> Option<AuthorizationGrantType> {
        self.authorization_grant_type
    }

    /// Redirect URI, possibly a template with `{placeholder}` segments that
    /// the consuming security layer expands per request.
    pub fn redirect_uri(&self) -> Option<&str> {
        self.redirect_uri.as_deref()
    }

    pub fn scope(&self) -> &[String] {
        &self.scope
    }

    pub fn client_name(&self) -> Option<&str> {
        self.client_name.as_deref()
    }

    pub fn provider_details(&self) -> &ProviderDetails {
        &self.provider_details
    }
}

impl ProviderDetails {
    pub fn authorization_uri(&self) -> &str {
        &self.authorization_uri
    }

    pub fn token_uri(&self) -> &str {
        &self.token_uri
    }

    pub fn user_info_endpoint(&self) -> &UserInfoEndpoint {
        &self.user_info_endpoint
    }

    pub fn jwk_set_uri(&self) -> Option<&str> {
        self.jwk_set_uri.as_deref()
    }

    pub fn issuer_uri(&self) -> Option<&str> {
        self.issuer_uri.as_deref()
    }
}

impl UserInfoEndpoint {
    pub fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }

    pub fn user_name_attribute(&self) -> Option<&str> {
        self.user_name_attribute.as_deref()
    }
}

/// Builder for [`ClientRegistration`].
///
/// Every setter overwrites the previous value, so defaults can be applied
/// first and explicit configuration layered on top.
#[derive(Debug, Clone)]
pub struct ClientRegistrationBuilder {
    registration_id: String,
    client_id: Option<String>,
    client_secret: Option<String>,
    client_authentication_method: Option<ClientAuthenticationMethod>,
    authorization_grant_type: Option<AuthorizationGrantType>,
    redirect_uri: Option<String>,
    scope: Vec<String>,
    client_name: Option<String>,
    authorization_uri: Option<String>,
    token_uri: Option<String>,
    user_info_uri: Option<String>,
    user_name_attribute: Option<String>,
    jwk_set_uri: Option<String>,
    issuer_uri: Option<String>,
}

impl ClientRegistrationBuilder {
    fn new(registration_id: impl Into<String>) -> Self {
        Self {
            registration_id: registration_id.into(),
            client_id: None,
            client_secret: None,
            client_authentication_method: None,
            authorization_grant_type: None,
            redirect_uri: None,
            scope: Vec::new(),
            client_name: None,
            authorization_uri: None,
            token_uri: None,
            user_info_uri: None,
            user_name_attribute: None,
            jwk_set_uri: None,
            issuer_uri: None,
        }
    }

    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    pub fn client_secret(mut self, client_secret: impl Into<String>) -> Self {
        self.client_secret = Some(client_secret.into());
        self
    }

    pub fn client_authentication_method(mut self, method: ClientAuthenticationMethod) -> Self {
        self.client_authentication_method = Some(method);
        self
    }

    pub fn authorization_grant_type(mut self, grant_type: AuthorizationGrantType) -> Self {
        self.authorization_grant_type = Some(grant_type);
        self
    }

    pub fn redirect_uri(mut self, redirect_uri: impl Into<String>) -> Self {
        self.redirect_uri = Some(redirect_uri.into());
        self
    }

    /// Replace the scope set wholesale. Overrides are all-or-nothing; scopes
    /// from an earlier call are discarded, never merged.
    pub fn scope<I, S>(mut self, scope: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scope = scope.into_iter().map(Into::into).collect();
        self
    }

    pub fn client_name(mut self, client_name: impl Into<String>) -> Self {
        self.client_name = Some(client_name.into());
        self
    }

    pub fn authorization_uri(mut self, uri: impl Into<String>) -> Self {
        self.authorization_uri = Some(uri.into());
        self
    }

    pub fn token_uri(mut self, uri: impl Into<String>) -> Self {
        self.token_uri = Some(uri.into());
        self
    }

    pub fn user_info_uri(mut self, uri: impl Into<String>) -> Self {
        self.user_info_uri = Some(uri.into());
        self
    }

    pub fn user_name_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.user_name_attribute = Some(attribute.into());
        self
    }

    pub fn jwk_set_uri(mut self, uri: impl Into<String>) -> Self {
        self.jwk_set_uri = Some(uri.into());
        self
    }

    pub fn issuer_uri(mut self, uri: impl Into<String>) -> Self {
        self.issuer_uri = Some(uri.into());
        self
    }

    /// Validate required fields and produce the immutable registration.
    pub fn build(self) -> Result<ClientRegistration, Error> {
        let authorization_uri = self.require(self.authorization_uri.clone(), "authorization_uri")?;
        let token_uri = self.require(self.token_uri.clone(), "token_uri")?;
        let client_authentication_method = self.require(
            self.client_authentication_method,
            "client_authentication_method",
        )?;

        Ok(ClientRegistration {
            registration_id: self.registration_id,
            client_id: self.client_id,
            client_secret: self.client_secret,
            client_authentication_method,
            authorization_grant_type: self.authorization_grant_type,
            redirect_uri: self.redirect_uri,
            scope: self.scope,
            client_name: self.client_name,
            provider_details: ProviderDetails {
                authorization_uri,
                token_uri,
                user_info_endpoint: UserInfoEndpoint {
                    uri: self.user_info_uri,
                    user_name_attribute: self.user_name_attribute,
                },
                jwk_set_uri: self.jwk_set_uri,
                issuer_uri: self.issuer_uri,
            },
        })
    }

    fn require<T>(&self, value: Option<T>, field: &'static str) -> Result<T, Error> {
        value.ok_or_else(|| Error::MissingField {
            registration_id: self.registration_id.clone(),
            field,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::ClientRegistration;
    use crate::error::Error;
    use crate::method::{AuthorizationGrantType, ClientAuthenticationMethod};

    #[test]
    fn builder_produces_complete_registration() {
        let registration = ClientRegistration::builder("login")
            .client_id("client")
            .client_secret("secret")
            .client_authentication_method(ClientAuthenticationMethod::Basic)
            .authorization_grant_type(AuthorizationGrantType::AuthorizationCode)
            .redirect_uri("https://example.com/callback")
            .scope(["openid", "profile"])
            .client_name("Example")
            .authorization_uri("https://example.com/auth")
            .token_uri("https://example.com/token")
            .user_info_uri("https://example.com/info")
            .jwk_set_uri("https://example.com/jwks")
            .build()
            .unwrap();

        assert_eq!(registration.registration_id(), "login");
        assert_eq!(registration.client_id(), Some("client"));
        assert_eq!(registration.scope(), ["openid", "profile"]);
        let details = registration.provider_details();
        assert_eq!(details.authorization_uri(), "https://example.com/auth");
        assert_eq!(details.token_uri(), "https://example.com/token");
        assert_eq!(
            details.user_info_endpoint().uri(),
            Some("https://example.com/info")
        );
        assert_eq!(details.jwk_set_uri(), Some("https://example.com/jwks"));
    }

    #[test]
    fn build_fails_without_token_uri() {
        let err = ClientRegistration::builder("login")
            .client_authentication_method(ClientAuthenticationMethod::Basic)
            .authorization_uri("https://example.com/auth")
            .build()
            .unwrap_err();

        let Error::MissingField {
            registration_id,
            field,
        } = err;
        assert_eq!(registration_id, "login");
        assert_eq!(field, "token_uri");
    }

    #[test]
    fn build_fails_without_authentication_method() {
        let err = ClientRegistration::builder("login")
            .authorization_uri("https://example.com/auth")
            .token_uri("https://example.com/token")
            .build()
            .unwrap_err();

        assert!(
            err.to_string()
                .contains("missing required field 'client_authentication_method'")
        );
    }

    #[test]
    fn later_scope_call_replaces_earlier_one() {
        let registration = ClientRegistration::builder("login")
            .scope(["openid", "profile", "email"])
            .scope(["custom"])
            .client_authentication_method(ClientAuthenticationMethod::Post)
            .authorization_uri("https://example.com/auth")
            .token_uri("https://example.com/token")
            .build()
            .unwrap();

        assert_eq!(registration.scope(), ["custom"]);
    }
}
