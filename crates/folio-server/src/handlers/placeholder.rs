//! Placeholder image endpoint.
//!
//! `/api/placeholder/{name}` redirects to a stock photo when `name` is a
//! known key. Anything else renders a gray SVG sized from
//! `/api/placeholder/{width}/{height}`, with configured defaults filling in
//! missing or non-numeric segments.

use std::fmt::Write as _;
use std::sync::Arc;

use axum::extract::State;
use axum::http::{StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use folio_config::PlaceholderConfig;

use crate::state::AppState;

/// Stock images addressable by name.
pub const IMAGE_TABLE: &[(&str, &str)] = &[
    (
        "finance",
        "https://images.unsplash.com/photo-1579621970563-ebec7560ff3e?q=80&w=600&auto=format&fit=crop",
    ),
    (
        "nyc",
        "https://images.unsplash.com/photo-1496442226666-8d4d0e62e6e9?q=80&w=600&auto=format&fit=crop",
    ),
    (
        "weather",
        "https://images.unsplash.com/photo-1592210454359-9043f067919b?q=80&w=600&auto=format&fit=crop",
    ),
    (
        "coming-soon",
        "https://images.unsplash.com/photo-1586892477838-2b96e85e0f96?q=80&w=600&auto=format&fit=crop",
    ),
];

/// Index of the name-or-width segment in `"/api/placeholder/{w}/{h}".split('/')`.
const NAME_SEGMENT: usize = 3;
/// Index of the height segment.
const HEIGHT_SEGMENT: usize = 4;

/// Look up a stock image URL by name.
#[must_use]
pub fn image_url(name: &str) -> Option<&'static str> {
    IMAGE_TABLE
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, url)| *url)
}

/// Parameters extracted from a placeholder request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderRequest {
    /// Non-empty name-or-width segment, if any.
    pub image_name: Option<String>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl PlaceholderRequest {
    /// Parse a request path such as `/api/placeholder/150/100`.
    ///
    /// The path is split on `/`; segment 3 is the name or width and segment 4
    /// the height. Segments that are absent, empty or not an unsigned
    /// integer fall back to the configured defaults.
    #[must_use]
    pub fn from_path(path: &str, defaults: &PlaceholderConfig) -> Self {
        let segments: Vec<&str> = path.split('/').collect();
        let segment = |index: usize| segments.get(index).copied().filter(|s| !s.is_empty());
        let dimension = |index: usize, default: u32| {
            segment(index)
                .and_then(|s| s.parse().ok())
                .unwrap_or(default)
        };

        Self {
            image_name: segment(NAME_SEGMENT).map(str::to_owned),
            width: dimension(NAME_SEGMENT, defaults.default_width),
            height: dimension(HEIGHT_SEGMENT, defaults.default_height),
        }
    }

    /// Stock image URL when the name segment matches a known image.
    #[must_use]
    pub fn redirect_target(&self) -> Option<&'static str> {
        self.image_name.as_deref().and_then(image_url)
    }
}

/// Render a `width x height` placeholder SVG with a centered dimension label.
#[must_use]
pub fn render_svg(width: u32, height: u32) -> String {
    let mut svg = String::with_capacity(320);
    let _ = writeln!(
        svg,
        r#"<svg width="{width}" height="{height}" xmlns="http://www.w3.org/2000/svg">"#
    );
    svg.push_str("  <rect width=\"100%\" height=\"100%\" fill=\"#f3f4f6\"/>\n");
    let _ = writeln!(
        svg,
        r##"  <text x="50%" y="50%" font-family="Arial" font-size="14" fill="#6b7280" text-anchor="middle" dominant-baseline="middle">{width}x{height}</text>"##
    );
    svg.push_str("</svg>\n");
    svg
}

/// Handle /api/placeholder and everything below it (all methods).
pub(crate) async fn serve(State(state): State<Arc<AppState>>, uri: Uri) -> Response {
    let request = PlaceholderRequest::from_path(uri.path(), &state.placeholder);

    if let Some(target) = request.redirect_target() {
        tracing::debug!(name = ?request.image_name, %target, "Redirecting to stock image");
        return (StatusCode::FOUND, [(header::LOCATION, target)]).into_response();
    }

    let cache_control = format!("public, max-age={}", state.placeholder.max_age);
    (
        [
            (header::CONTENT_TYPE, "image/svg+xml".to_owned()),
            (header::CACHE_CONTROL, cache_control),
        ],
        render_svg(request.width, request.height),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Method, Request};
    use pretty_assertions::assert_eq;
    use tower::ServiceExt;

    use super::*;
    use crate::app::create_router;

    fn defaults() -> PlaceholderConfig {
        PlaceholderConfig::default()
    }

    async fn get(uri: &str) -> Response {
        create_router(Arc::new(AppState::default()))
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn test_image_table_has_four_entries() {
        let keys: Vec<&str> = IMAGE_TABLE.iter().map(|(key, _)| *key).collect();

        assert_eq!(keys, vec!["finance", "nyc", "weather", "coming-soon"]);
    }

    #[test]
    fn test_image_url_lookup() {
        assert!(image_url("nyc").unwrap().contains("photo-1496442226666"));
        assert!(image_url("NYC").is_none());
        assert!(image_url("").is_none());
    }

    #[test]
    fn test_from_path_known_name() {
        let request = PlaceholderRequest::from_path("/a/b/finance", &defaults());

        assert_eq!(request.image_name.as_deref(), Some("finance"));
        assert_eq!(request.redirect_target(), image_url("finance"));
    }

    #[test]
    fn test_from_path_unknown_name_uses_defaults() {
        let request = PlaceholderRequest::from_path("/a/b/unknownname", &defaults());

        assert_eq!(
            request,
            PlaceholderRequest {
                image_name: Some("unknownname".to_owned()),
                width: 300,
                height: 200,
            }
        );
        assert!(request.redirect_target().is_none());
    }

    #[test]
    fn test_from_path_dimensions() {
        let request = PlaceholderRequest::from_path("/a/b/150/100", &defaults());

        assert_eq!(request.width, 150);
        assert_eq!(request.height, 100);
    }

    #[test]
    fn test_from_path_width_only() {
        let request = PlaceholderRequest::from_path("/a/b/640", &defaults());

        assert_eq!((request.width, request.height), (640, 200));
    }

    #[test]
    fn test_from_path_short_and_empty_segments() {
        for path in ["", "/", "/a/b", "/a/b/", "/a/b//"] {
            let request = PlaceholderRequest::from_path(path, &defaults());

            assert_eq!(request.image_name, None, "{path}");
            assert_eq!((request.width, request.height), (300, 200), "{path}");
        }
    }

    #[test]
    fn test_from_path_non_numeric_height() {
        let request = PlaceholderRequest::from_path("/a/b/120/tall", &defaults());

        assert_eq!((request.width, request.height), (120, 200));
    }

    #[test]
    fn test_from_path_custom_defaults() {
        let config = PlaceholderConfig {
            default_width: 64,
            default_height: 48,
            ..PlaceholderConfig::default()
        };

        let request = PlaceholderRequest::from_path("/a/b", &config);

        assert_eq!((request.width, request.height), (64, 48));
    }

    #[test]
    fn test_render_svg() {
        let svg = render_svg(150, 100);

        assert!(svg.starts_with(r#"<svg width="150" height="100" "#));
        assert!(svg.contains(r##"fill="#f3f4f6""##));
        assert!(svg.contains(">150x100</text>"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[tokio::test]
    async fn test_known_name_redirects() {
        let response = get("/api/placeholder/finance").await;

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(
            response.headers()[header::LOCATION],
            image_url("finance").unwrap()
        );
    }

    #[tokio::test]
    async fn test_every_table_entry_redirects() {
        for (name, url) in IMAGE_TABLE {
            let response = get(&format!("/api/placeholder/{name}")).await;

            assert_eq!(response.status(), StatusCode::FOUND, "{name}");
            assert_eq!(response.headers()[header::LOCATION], *url);
        }
    }

    #[tokio::test]
    async fn test_unknown_name_renders_default_svg() {
        let response = get("/api/placeholder/unknownname").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "image/svg+xml");
        assert_eq!(
            response.headers()[header::CACHE_CONTROL],
            "public, max-age=31536000"
        );
        assert!(body_text(response).await.contains("300x200"));
    }

    #[tokio::test]
    async fn test_dimensions_render_sized_svg() {
        let response = get("/api/placeholder/150/100").await;

        assert_eq!(response.status(), StatusCode::OK);
        let svg = body_text(response).await;
        assert!(svg.contains(r#"width="150""#));
        assert!(svg.contains(r#"height="100""#));
        assert!(svg.contains("150x100"));
    }

    #[tokio::test]
    async fn test_bare_route_renders_default_svg() {
        let response = get("/api/placeholder").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("300x200"));
    }

    #[tokio::test]
    async fn test_any_method_is_served() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/placeholder/nyc")
            .body(Body::empty())
            .unwrap();

        let response = create_router(Arc::new(AppState::default()))
            .oneshot(request)
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FOUND);
    }

    #[tokio::test]
    async fn test_cache_max_age_from_config() {
        let state = AppState {
            placeholder: PlaceholderConfig {
                max_age: 60,
                ..PlaceholderConfig::default()
            },
            verbose: false,
        };
        let request = Request::builder()
            .uri("/api/placeholder/10/10")
            .body(Body::empty())
            .unwrap();

        let response = create_router(Arc::new(state))
            .oneshot(request)
            .await
            .unwrap();

        assert_eq!(response.headers()[header::CACHE_CONTROL], "public, max-age=60");
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let response = get("/api/unknown").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
