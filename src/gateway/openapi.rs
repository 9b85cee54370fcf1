//! OpenAPI / Swagger UI Documentation
//!
//! - Swagger UI: `http://localhost:8080/docs`
//! - OpenAPI JSON: `http://localhost:8080/api-docs/openapi.json`

use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::gateway::handlers::HealthResponse;
use crate::gateway::types::{AccountProfile, BalanceData, TransferData};
use crate::user_auth::handlers::RegisterRequest;

/// HTTP Basic authentication security scheme
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "basic_auth",
                SecurityScheme::Http(Http::new(HttpAuthScheme::Basic)),
            );
        }
    }
}

/// Main API Documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Balance Service API",
        version = "1.0.0",
        description = "Account balances and atomic transfers between accounts. \
            Authenticate with HTTP Basic credentials obtained at registration.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:8080", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::health::health_check,
        crate::user_auth::handlers::register,
        crate::user_auth::handlers::me,
        crate::gateway::handlers::balance::get_balance,
        crate::gateway::handlers::balance::deposit,
        crate::gateway::handlers::balance::withdraw,
        crate::gateway::handlers::transfer::create_transfer,
        crate::gateway::handlers::transfer::list_transfers,
        crate::gateway::handlers::transfer::get_transfer,
    ),
    components(
        schemas(
            HealthResponse,
            RegisterRequest,
            AccountProfile,
            BalanceData,
            TransferData,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Account registration"),
        (name = "User", description = "Account profile (auth required)"),
        (name = "Balance", description = "Balance queries, deposits and withdrawals (auth required)"),
        (name = "Transfers", description = "Atomic transfers between accounts (auth required)"),
        (name = "System", description = "Health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::OpenApi;

    #[test]
    fn test_openapi_spec_generates() {
        let spec = ApiDoc::openapi();
        assert_eq!(spec.info.title, "Balance Service API");
        assert_eq!(spec.info.version, "1.0.0");
    }

    #[test]
    fn test_endpoints_registered() {
        let spec = ApiDoc::openapi();
        let paths = spec.paths;
        assert!(paths.paths.contains_key("/api/v1/health"));
        assert!(paths.paths.contains_key("/api/v1/auth/register"));
        assert!(paths.paths.contains_key("/api/v1/balance"));
        assert!(paths.paths.contains_key("/api/v1/transfers"));
        assert!(paths.paths.contains_key("/api/v1/transfers/{transfer_id}"));
    }

    #[test]
    fn test_security_scheme_registered() {
        let spec = ApiDoc::openapi();
        let components = spec.components.expect("should have components");
        assert!(components.security_schemes.contains_key("basic_auth"));
    }
}
