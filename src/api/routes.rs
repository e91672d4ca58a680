//! Application route configuration.

use axum::{
    extract::{Request, State},
    http::{StatusCode, Uri},
    middleware,
    response::Json,
    routing::get,
    Router,
};
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{catalog_routes, user_routes};
use super::openapi::ApiDoc;
use super::AppState;
use crate::config::{HEALTH_STATUS_HEALTHY, HEALTH_STATUS_UNHEALTHY};
use crate::domain::Catalog;

const SWAGGER_UI_PATH: &str = "/swagger-ui";

/// Create the application router with all routes configured.
///
/// `/users/` and `/users` reach the same handler. The path is rewritten
/// before the inner router matches it, so the rewrite sits on an outer
/// router whose only route is the fallback.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .fallback_service(api_router(state))
        .layer(middleware::map_request(trim_trailing_slash))
}

fn api_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        // OpenAPI Swagger UI documentation
        .merge(SwaggerUi::new(SWAGGER_UI_PATH).url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/users", user_routes());

    for kind in Catalog::ALL {
        router = router.nest(&format!("/{}", kind.collection()), catalog_routes(kind));
    }

    router
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Drop trailing slashes from the request path.
///
/// Swagger UI serves its index at `/swagger-ui/` and redirects the bare path
/// there, so its paths are left alone.
async fn trim_trailing_slash(mut request: Request) -> Request {
    let path = request.uri().path();
    if path == "/" || !path.ends_with('/') || path.starts_with(SWAGGER_UI_PATH) {
        return request;
    }

    if let Some(uri) = without_trailing_slash(request.uri()) {
        *request.uri_mut() = uri;
    }
    request
}

fn without_trailing_slash(uri: &Uri) -> Option<Uri> {
    let trimmed = match uri.path().trim_end_matches('/') {
        "" => "/",
        path => path,
    };
    let path_and_query = match uri.query() {
        Some(query) => format!("{}?{}", trimmed, query),
        None => trimmed.to_string(),
    };

    let mut parts = uri.clone().into_parts();
    parts.path_and_query = Some(path_and_query.parse().ok()?);
    Uri::from_parts(parts).ok()
}

/// Sitemap response
#[derive(Serialize)]
struct SitemapResponse {
    message: &'static str,
    endpoints: Vec<String>,
}

/// Every public route, in the order they are documented
fn endpoints() -> Vec<String> {
    let mut endpoints = vec![
        "/".to_string(),
        "/health".to_string(),
        "/swagger-ui".to_string(),
        "/users".to_string(),
        "/users/{id}".to_string(),
        "/users/{id}/favourites".to_string(),
    ];
    for kind in Catalog::ALL {
        endpoints.push(format!("/users/{{id}}/favourites/{}", kind));
        endpoints.push(format!("/users/{{id}}/favourites/{}/{{target_id}}", kind));
    }
    for kind in Catalog::ALL {
        endpoints.push(format!("/{}", kind));
        endpoints.push(format!("/{}/{{id}}", kind));
    }
    endpoints
}

/// Root endpoint listing the available routes
async fn root() -> Json<SitemapResponse> {
    Json(SitemapResponse {
        message: "Star Wars API",
        endpoints: endpoints(),
    })
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

/// Health check endpoint with database connectivity check
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    match state.database.ping().await {
        Ok(_) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: HEALTH_STATUS_HEALTHY,
            }),
        ),
        Err(e) => {
            tracing::error!("Health check failed: {:?}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: HEALTH_STATUS_UNHEALTHY,
                }),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_trimmed_keeping_the_query() {
        let uri: Uri = "/users/1/favourites/?x=1".parse().unwrap();
        assert_eq!(
            without_trailing_slash(&uri).unwrap().to_string(),
            "/users/1/favourites?x=1"
        );

        let uri: Uri = "/films//".parse().unwrap();
        assert_eq!(without_trailing_slash(&uri).unwrap().to_string(), "/films");
    }

    #[test]
    fn sitemap_lists_every_collection() {
        let endpoints = endpoints();
        for kind in Catalog::ALL {
            assert!(endpoints.contains(&format!("/{}", kind)));
            assert!(endpoints.contains(&format!("/users/{{id}}/favourites/{}", kind)));
        }
        assert!(endpoints.contains(&"/users/{id}".to_string()));
    }
}
