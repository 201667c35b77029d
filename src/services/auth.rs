//! Authentication service: credential exchange, role decoding, logout

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

use crate::{
    config::{AuthConfig, RoutesConfig},
    error::{body_excerpt, ApiError, ApiErrorKind, AppResult},
    http::{decode_json, HttpClient, TransportError},
    models::auth::{LoginResponse, Role, TokenClaims},
    routes::guards::Redirect,
    services::session::SessionStore,
};

/// Reads the role claim out of a bearer token.
///
/// Without a secret the payload is decoded without checking signature or
/// expiry: the role then only gates client-side navigation, the API still
/// authorizes every call. With a secret, tokens that fail HS256 verification
/// or are expired yield no role.
#[derive(Clone)]
pub struct TokenDecoder {
    secret: Option<String>,
}

impl TokenDecoder {
    pub fn new(secret: Option<String>) -> Self {
        Self {
            secret: secret.filter(|s| !s.is_empty()),
        }
    }

    pub fn is_verifying(&self) -> bool {
        self.secret.is_some()
    }

    pub fn claims(&self, token: &str) -> Result<TokenClaims, jsonwebtoken::errors::Error> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.required_spec_claims.clear();

        let key = match &self.secret {
            Some(secret) => DecodingKey::from_secret(secret.as_bytes()),
            None => {
                validation.insecure_disable_signature_validation();
                validation.validate_exp = false;
                DecodingKey::from_secret(&[])
            }
        };

        Ok(decode::<TokenClaims>(token, &key, &validation)?.claims)
    }

    pub fn role(&self, token: &str) -> Option<Role> {
        match self.claims(token) {
            Ok(claims) => {
                let role = claims.role();
                if role.is_none() {
                    tracing::warn!(user_id = ?claims.user_id, "Token carries no usable role claim");
                }
                role
            }
            Err(e) => {
                tracing::warn!("Could not decode role claim: {}", e);
                None
            }
        }
    }
}

/// Result of a successful login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    pub token: String,
    pub role: Option<Role>,
    pub display_name: String,
}

#[derive(Clone)]
pub struct AuthService {
    http: HttpClient,
    session: SessionStore,
    decoder: TokenDecoder,
    routes: RoutesConfig,
}

impl AuthService {
    pub fn new(http: HttpClient, session: SessionStore, config: AuthConfig, routes: RoutesConfig) -> Self {
        Self {
            http,
            session,
            decoder: TokenDecoder::new(config.jwt_secret),
            routes,
        }
    }

    pub fn decoder(&self) -> &TokenDecoder {
        &self.decoder
    }

    /// Exchange credentials for a bearer token and store the new session
    pub async fn login(&self, username: &str, password: &str) -> AppResult<LoginOutcome> {
        let response = self
            .http
            .send_form("/login", &[("username", username), ("password", password)])
            .await
            .map_err(|e| {
                let message = match e {
                    TransportError::Connect(url) => format!("cannot connect to {}", url),
                    TransportError::Timeout(url) => format!("request to {} timed out", url),
                    TransportError::Other(msg) => msg,
                };
                ApiError::network(format!("Network error during login: {}", message))
            })?;

        if !response.is_json() {
            return Err(ApiError::protocol(
                response.status,
                format!("Unexpected non-JSON response: {}", body_excerpt(&response.body)),
            )
            .into());
        }

        let status = response.status;
        let body: LoginResponse = decode_json(response).map_err(|e| match e.kind {
            ApiErrorKind::Protocol => {
                ApiError::protocol(status, "Failed to parse JSON response")
            }
            _ => e,
        })?;

        let token = body
            .bearer()
            .ok_or_else(|| ApiError::protocol(status, "Login response did not include an access token"))?
            .to_string();

        let role = self.decoder.role(&token);
        self.session.set_session(token.clone(), role, body.full_name())?;

        tracing::info!(role = ?role, "Logged in");

        Ok(LoginOutcome {
            token,
            role,
            display_name: self.session.display_name(),
        })
    }

    /// Drop the session; the caller navigates to the returned login entry point
    pub fn logout(&self) -> AppResult<Redirect> {
        self.session.clear_session()?;
        tracing::info!("Logged out");
        Ok(Redirect::to(&self.routes.login_path))
    }

    /// Where to go after login: the preserved location, or the default page
    pub fn post_login_target(&self, from: Option<&str>) -> String {
        from.filter(|path| !path.is_empty() && *path != self.routes.login_path)
            .map(str::to_string)
            .unwrap_or_else(|| self.routes.post_login_default.clone())
    }
}
