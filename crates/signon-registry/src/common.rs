//! Built-in catalog of well-known OAuth2 providers.
//!
//! Each entry carries the provider's published endpoints plus default
//! registration parameters (auth method, grant type, redirect URI template,
//! scopes, display name). The table is constant data; lookups never allocate.

use signon_oauth::{AuthorizationGrantType, ClientAuthenticationMethod};

/// Redirect URI template shared by all catalog entries. Placeholders are
/// expanded by the consuming security layer per request.
pub const DEFAULT_REDIRECT_URI_TEMPLATE: &str =
    "{scheme}://{serverName}:{serverPort}{contextPath}/oauth2/authorize/code/{clientAlias}";

/// A well-known provider with pre-filled defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommonProvider {
    Google,
    Github,
    Facebook,
    /// Okta publishes no fixed endpoints (they are tenant-specific), so this
    /// entry contributes registration defaults only.
    Okta,
}

impl CommonProvider {
    /// Look up a catalog entry by id. Matching is exact and case-sensitive.
    pub fn from_id(id: &str) -> Option<CommonProvider> {
        match id {
            "google" => Some(CommonProvider::Google),
            "github" => Some(CommonProvider::Github),
            "facebook" => Some(CommonProvider::Facebook),
            "okta" => Some(CommonProvider::Okta),
            _ => None,
        }
    }

    /// Catalog id (e.g. `"google"`).
    pub const fn id(&self) -> &'static str {
        match self {
            CommonProvider::Google => "google",
            CommonProvider::Github => "github",
            CommonProvider::Facebook => "facebook",
            CommonProvider::Okta => "okta",
        }
    }

    pub fn authorization_uri(&self) -> Option<&'static str> {
        match self {
            CommonProvider::Google => Some("https://accounts.google.com/o/oauth2/v2/auth"),
            CommonProvider::Github => Some("https://github.com/login/oauth/authorize"),
            CommonProvider::Facebook => Some("https://www.facebook.com/v2.8/dialog/oauth"),
            CommonProvider::Okta => None,
        }
    }

    pub fn token_uri(&self) -> Option<&'static str> {
        match self {
            CommonProvider::Google => Some("https://www.googleapis.com/oauth2/v4/token"),
            CommonProvider::Github => Some("https://github.com/login/oauth/access_token"),
            CommonProvider::Facebook => Some("https://graph.facebook.com/v2.8/oauth/access_token"),
            CommonProvider::Okta => None,
        }
    }

    pub fn user_info_uri(&self) -> Option<&'static str> {
        match self {
            CommonProvider::Google => Some("https://www.googleapis.com/oauth2/v3/userinfo"),
            CommonProvider::Github => Some("https://api.github.com/user"),
            CommonProvider::Facebook => Some("https://graph.facebook.com/me"),
            CommonProvider::Okta => None,
        }
    }

    pub fn jwk_set_uri(&self) -> Option<&'static str> {
        match self {
            CommonProvider::Google => Some("https://www.googleapis.com/oauth2/v3/certs"),
            _ => None,
        }
    }

    pub fn user_name_attribute(&self) -> Option<&'static str> {
        match self {
            CommonProvider::Google | CommonProvider::Okta => Some("sub"),
            CommonProvider::Github | CommonProvider::Facebook => Some("id"),
        }
    }

    pub fn client_authentication_method(&self) -> ClientAuthenticationMethod {
        match self {
            CommonProvider::Facebook => ClientAuthenticationMethod::Post,
            _ => ClientAuthenticationMethod::Basic,
        }
    }

    pub fn authorization_grant_type(&self) -> AuthorizationGrantType {
        AuthorizationGrantType::AuthorizationCode
    }

    pub fn redirect_uri_template(&self) -> &'static str {
        DEFAULT_REDIRECT_URI_TEMPLATE
    }

    pub fn scopes(&self) -> &'static [&'static str] {
        match self {
            CommonProvider::Google | CommonProvider::Okta => {
                &["openid", "profile", "email", "address", "phone"]
            }
            CommonProvider::Github => &["read:user"],
            CommonProvider::Facebook => &["public_profile", "email"],
        }
    }

    pub fn client_name(&self) -> &'static str {
        match self {
            CommonProvider::Google => "Google",
            CommonProvider::Github => "GitHub",
            CommonProvider::Facebook => "Facebook",
            CommonProvider::Okta => "Okta",
        }
    }
}
