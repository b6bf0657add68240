//! Middleware de autenticação JWT
//!
//! Ativo apenas com `REQUIRE_AUTH=true`. Leituras e o login continuam
//! públicos; escritas exigem um Bearer token válido e, conforme o recurso,
//! um perfil específico.

use axum::{
    extract::{Request, State},
    http::{header, Method},
    middleware::Next,
    response::Response,
};

use crate::{
    models::user::UserRole,
    state::AppState,
    utils::{
        errors::AppError,
        jwt::{extract_token_from_header, verify_token, JwtConfig},
    },
};

const MANAGERS: &[UserRole] = &[UserRole::Gestor];
const MAINTENANCE: &[UserRole] = &[UserRole::Mecanico, UserRole::Gestor];
const DRIVING: &[UserRole] = &[UserRole::Motorista, UserRole::Gestor];

/// Usuário autenticado injetado nas extensions da request
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: i64,
    pub username: String,
    pub tipo: UserRole,
}

/// Nível de acesso exigido por uma operação
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Authenticated,
    Roles(&'static [UserRole]),
}

impl Access {
    pub fn allows(&self, role: UserRole) -> bool {
        match self {
            Access::Public | Access::Authenticated => true,
            Access::Roles(roles) => roles.contains(&role),
        }
    }
}

/// Regra de acesso para um método e um caminho relativo à base da API
pub fn required_access(method: &Method, path: &str) -> Access {
    if matches!(method, &Method::GET | &Method::HEAD | &Method::OPTIONS) {
        return Access::Public;
    }

    let resource = path.trim_start_matches('/').split('/').next().unwrap_or_default();
    match (method, resource) {
        (&Method::POST, "login") => Access::Public,
        (_, "avisos") => Access::Roles(MANAGERS),
        (&Method::POST, "escalas") | (&Method::PUT, "escalas") => Access::Roles(MANAGERS),
        (&Method::DELETE, "chamados") => Access::Roles(MANAGERS),
        (&Method::PUT, "chamados") | (&Method::POST, "checklist") => Access::Roles(MAINTENANCE),
        (&Method::POST, "chamados") | (&Method::POST, "inicio-linha") => Access::Roles(DRIVING),
        _ => Access::Authenticated,
    }
}

/// Middleware de autenticação e autorização das escritas
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if !state.config.require_auth {
        return Ok(next.run(request).await);
    }

    let access = required_access(request.method(), request.uri().path());
    if access == Access::Public {
        return Ok(next.run(request).await);
    }

    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Token de autorização requerido".to_string()))?;

    let token = extract_token_from_header(auth_header)?;
    let claims = verify_token(token, &JwtConfig::from(&state.config))?;

    let user = AuthenticatedUser {
        user_id: claims.user_id()?,
        username: claims.username,
        tipo: claims.tipo,
    };

    if !access.allows(user.tipo) {
        tracing::warn!(
            "🚫 {} ({}) sem permissão para {} {}",
            user.username,
            user.tipo,
            request.method(),
            request.uri().path()
        );
        return Err(AppError::Forbidden(
            "Permissão insuficiente para esta operação".to_string(),
        ));
    }

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_and_login_are_public() {
        assert_eq!(required_access(&Method::GET, "/dashboard"), Access::Public);
        assert_eq!(required_access(&Method::GET, "/chamados"), Access::Public);
        assert_eq!(required_access(&Method::POST, "/login"), Access::Public);
    }

    #[test]
    fn test_manager_only_writes() {
        for (method, path) in [
            (Method::POST, "/avisos"),
            (Method::PUT, "/avisos/4"),
            (Method::DELETE, "/avisos/4"),
            (Method::POST, "/escalas"),
            (Method::PUT, "/escalas/9"),
        ] {
            let access = required_access(&method, path);
            assert!(access.allows(UserRole::Gestor), "{} {}", method, path);
            assert!(!access.allows(UserRole::Motorista), "{} {}", method, path);
        }
    }

    #[test]
    fn test_ticket_rules() {
        let create = required_access(&Method::POST, "/chamados");
        assert!(create.allows(UserRole::Motorista));
        assert!(!create.allows(UserRole::Mecanico));

        let update = required_access(&Method::PUT, "/chamados/12");
        assert!(update.allows(UserRole::Mecanico));
        assert!(!update.allows(UserRole::Passageiro));

        let checklist = required_access(&Method::POST, "/checklist");
        assert!(checklist.allows(UserRole::Mecanico));
        assert!(!checklist.allows(UserRole::Motorista));
    }

    #[test]
    fn test_chat_needs_only_a_session() {
        assert_eq!(required_access(&Method::POST, "/mensagens"), Access::Authenticated);
        assert!(required_access(&Method::PUT, "/mensagens/2").allows(UserRole::Passageiro));
    }
}
