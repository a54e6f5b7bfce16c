//! Middleware de autenticación JWT
//!
//! Exige un Bearer token válido e inyecta la identidad que transporta.
//! El claim de rol se acepta tal cual viene en el token: aquí no se
//! consulta el store.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::{extract_token_from_header, verify_token};

/// Usuario autenticado que se inyecta en las requests protegidas
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: i64,
    pub username: String,
    pub role: String,
}

pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Authorization token required".to_string()))?;

    let token = extract_token_from_header(auth_header)?;
    let claims = verify_token(token, &state.config)?;

    let user_id: i64 = claims
        .sub
        .parse()
        .map_err(|_| AppError::Unauthorized("Invalid or expired token".to_string()))?;

    request.extensions_mut().insert(AuthenticatedUser {
        user_id,
        username: claims.username,
        role: claims.role,
    });

    Ok(next.run(request).await)
}
