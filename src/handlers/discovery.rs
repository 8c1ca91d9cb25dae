//! JWKS 및 OpenID Connect Discovery 엔드포인트

use actix_web::{HttpResponse, get, web};
use serde_json::json;

use crate::errors::AppError;
use crate::state::AppState;

/// RSA 공개키 JWKS
///
/// # Endpoint
/// `GET /jwks`
#[get("/jwks")]
pub async fn jwks(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let jwks = state.signer.publish_jwks()?;

    Ok(HttpResponse::Ok()
        .insert_header(("Cache-Control", "public, max-age=3600"))
        .json(jwks))
}

/// OpenID Provider Metadata
///
/// # Endpoint
/// `GET /.well-known/openid-configuration`
#[get("/.well-known/openid-configuration")]
pub async fn openid_configuration(state: web::Data<AppState>) -> HttpResponse {
    let base = state.base_url();

    HttpResponse::Ok().json(json!({
        "issuer": base,
        "authorization_endpoint": format!("{}/authorize", base),
        "token_endpoint": format!("{}/token", base),
        "userinfo_endpoint": format!("{}/userinfo", base),
        "jwks_uri": format!("{}/jwks", base),
        "response_types_supported": ["code"],
        "subject_types_supported": ["public"],
        "id_token_signing_alg_values_supported": ["RS256"],
        "scopes_supported": ["openid", "email", "profile"],
        "token_endpoint_auth_methods_supported": ["client_secret_post", "client_secret_basic"],
        "claims_supported": [
            "sub", "iss", "name", "given_name", "family_name",
            "email", "email_verified", "picture"
        ]
    }))
}
