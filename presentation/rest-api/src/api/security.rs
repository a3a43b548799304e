use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use poem::Request;
use poem_openapi::SecurityScheme;
use serde::Deserialize;

use crate::config::auth_config::AuthConfig;

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct Claims {
    sub: String,
    email: Option<String>,
    exp: u64,
    iat: u64,
}

/// The identity carried by a validated token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: String,
    pub email: Option<String>,
}

fn validate_token(token: &str, secret: &str) -> Result<AuthenticatedUser, String> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| format!("auth.token_validation_failed: {e}"))?;

    Ok(AuthenticatedUser {
        user_id: token_data.claims.sub,
        email: token_data.claims.email,
    })
}

/// Bearer token authentication (HS256)
#[derive(SecurityScheme)]
#[oai(ty = "bearer", bearer_format = "JWT", checker = "bearer_checker")]
pub struct ApiBearer(pub AuthenticatedUser);

/// Bearer token authentication that falls back to guest access when no
/// valid token is present (poem-openapi's way of expressing optional auth).
#[derive(SecurityScheme)]
pub enum OptionalApiBearer {
    Bearer(ApiBearer),
    #[oai(fallback)]
    Guest,
}

async fn bearer_checker(
    _req: &Request,
    bearer: poem_openapi::auth::Bearer,
) -> Option<AuthenticatedUser> {
    let config = AuthConfig::from_env();

    match validate_token(&bearer.token, &config.jwt_secret) {
        Ok(user) => Some(user),
        Err(e) => {
            tracing::warn!("Bearer auth failed: {e}");
            None
        }
    }
}
