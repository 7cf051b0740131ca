use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::{
    cmp::Ordering,
    path::PathBuf,
    sync::atomic::{AtomicU64, Ordering as AtomicOrdering},
    sync::Arc,
    time::{Instant, SystemTime, UNIX_EPOCH},
};
use tower_http::services::{ServeDir, ServeFile};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_STATIC_DIR: &str = "dist";
const DEFAULT_STATIC_CACHE_MAX_AGE_SECONDS: u64 = 3_600;
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

const STATIC_CACHE_MAX_AGE_SECONDS_BOUNDS: (u64, u64) = (0, 365 * 24 * 60 * 60);
const REQUEST_ID_HEADER: &str = "x-request-id";
const HEALTH_PATH: &str = "/healthz";

static REQUEST_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LogLevel {
    Debug,
    Info,
}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        fn rank(level: LogLevel) -> u8 {
            match level {
                LogLevel::Debug => 0,
                LogLevel::Info => 1,
            }
        }

        rank(*self).cmp(&rank(*other))
    }
}

impl LogLevel {
    fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
struct ServerConfig {
    port: u16,
    static_dir: PathBuf,
    static_cache_max_age_seconds: u64,
    log_level: LogLevel,
}

impl ServerConfig {
    fn from_env() -> Self {
        Self {
            port: parse_port(env_value("PORT"), DEFAULT_PORT),
            static_dir: parse_non_empty_string(env_value("STATIC_DIR"))
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR)),
            static_cache_max_age_seconds: parse_u64_with_bounds(
                env_value("STATIC_CACHE_MAX_AGE_SECONDS"),
                DEFAULT_STATIC_CACHE_MAX_AGE_SECONDS,
                STATIC_CACHE_MAX_AGE_SECONDS_BOUNDS,
            ),
            log_level: parse_log_level(env_value("LOG_LEVEL"), DEFAULT_LOG_LEVEL),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    config: Arc<ServerConfig>,
}

#[derive(Serialize)]
struct HealthPayload {
    ok: bool,
    version: &'static str,
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env();
    let bind_address = format!("0.0.0.0:{}", config.port);

    log_event(
        &config,
        LogLevel::Info,
        "server_config",
        serde_json::json!({
            "static_dir": config.static_dir.display().to_string(),
            "static_cache_max_age_seconds": config.static_cache_max_age_seconds,
            "log_level": config.log_level.as_str(),
        }),
    );

    let state = AppState {
        config: Arc::new(config),
    };
    let app = router(state.clone());

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    log_event(
        &state.config,
        LogLevel::Info,
        "server_listening",
        serde_json::json!({ "address": format!("http://127.0.0.1:{}", state.config.port) }),
    );
    axum::serve(listener, app).await?;
    Ok(())
}

fn router(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();
    let static_service =
        ServeDir::new(&static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .route(HEALTH_PATH, get(healthz))
        .fallback_service(static_service)
        .layer(middleware::from_fn_with_state(state.clone(), request_context))
        .with_state(state)
}

async fn healthz() -> impl IntoResponse {
    let mut headers = HeaderMap::new();
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    (
        StatusCode::OK,
        headers,
        Json(HealthPayload {
            ok: true,
            version: env!("CARGO_PKG_VERSION"),
        }),
    )
}

/// Tags every response with a request id and a cache policy, then logs it.
async fn request_context(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let started_at = Instant::now();
    let request_id = resolve_request_id(request.headers());
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    log_event(
        &state.config,
        LogLevel::Debug,
        "request_start",
        serde_json::json!({
            "request_id": request_id.as_str(),
            "method": method.as_str(),
            "path": path.as_str(),
        }),
    );

    let mut response = next.run(request).await;
    let status = response.status();
    let headers = response.headers_mut();

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        headers.insert(REQUEST_ID_HEADER, value);
    }
    if !headers.contains_key(header::CACHE_CONTROL) {
        headers.insert(
            header::CACHE_CONTROL,
            static_cache_control(&path, state.config.static_cache_max_age_seconds),
        );
    }

    log_event(
        &state.config,
        if path == HEALTH_PATH {
            LogLevel::Debug
        } else {
            LogLevel::Info
        },
        "request_complete",
        serde_json::json!({
            "request_id": request_id.as_str(),
            "method": method.as_str(),
            "path": path.as_str(),
            "status": status.as_u16(),
            "status_class": http_status_class(status),
            "duration_ms": started_at.elapsed().as_millis(),
        }),
    );

    response
}

/// HTML documents and extensionless SPA routes revalidate; other assets are
/// cacheable for `max_age_seconds`.
fn static_cache_control(path: &str, max_age_seconds: u64) -> HeaderValue {
    let last_segment = path.rsplit('/').next().unwrap_or_default();
    let is_document = last_segment.is_empty()
        || last_segment.ends_with(".html")
        || !last_segment.contains('.');

    if is_document || max_age_seconds == 0 {
        return HeaderValue::from_static("no-cache");
    }
    cache_control(&format!("public, max-age={max_age_seconds}"))
}

fn cache_control(value: &str) -> HeaderValue {
    HeaderValue::from_str(value).unwrap_or_else(|_| HeaderValue::from_static("no-store"))
}

fn http_status_class(status: StatusCode) -> &'static str {
    if status.is_success() {
        "2xx"
    } else if status.is_redirection() {
        "3xx"
    } else if status.is_client_error() {
        "4xx"
    } else if status.is_server_error() {
        "5xx"
    } else {
        "other"
    }
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

fn parse_port(value: Option<String>, default: u16) -> u16 {
    value
        .and_then(|value| value.trim().parse::<u16>().ok())
        .unwrap_or(default)
}

fn parse_u64_with_bounds(value: Option<String>, default: u64, bounds: (u64, u64)) -> u64 {
    value
        .and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_non_empty_string(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_log_level(value: Option<String>, default: LogLevel) -> LogLevel {
    match parse_non_empty_string(value)
        .unwrap_or_else(|| default.as_str().to_string())
        .to_ascii_lowercase()
        .as_str()
    {
        "debug" => LogLevel::Debug,
        "info" => LogLevel::Info,
        _ => default,
    }
}

fn now_unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis())
        .unwrap_or(0)
}

fn now_unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_secs())
        .unwrap_or(0)
}

fn generate_request_id() -> String {
    let counter = REQUEST_ID_COUNTER.fetch_add(1, AtomicOrdering::Relaxed);
    format!("req-{}-{counter}", now_unix_millis())
}

fn resolve_request_id(headers: &HeaderMap) -> String {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|raw| raw.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string)
        .unwrap_or_else(generate_request_id)
}

fn log_record(
    level: LogLevel,
    event: &str,
    fields: serde_json::Value,
) -> serde_json::Map<String, serde_json::Value> {
    let mut payload = serde_json::Map::new();
    payload.insert(
        "ts".to_string(),
        serde_json::Value::Number(serde_json::Number::from(now_unix_seconds())),
    );
    payload.insert("level".to_string(), serde_json::Value::String(level.as_str().to_string()));
    payload.insert("event".to_string(), serde_json::Value::String(event.to_string()));

    if let serde_json::Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }
    payload
}

fn log_event(config: &ServerConfig, level: LogLevel, event: &str, fields: serde_json::Value) {
    if level < config.log_level {
        return;
    }
    println!("{}", serde_json::Value::Object(log_record(level, event, fields)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request as HttpRequest;
    use tower::ServiceExt;

    fn test_config(static_dir: PathBuf) -> ServerConfig {
        ServerConfig {
            port: DEFAULT_PORT,
            static_dir,
            static_cache_max_age_seconds: DEFAULT_STATIC_CACHE_MAX_AGE_SECONDS,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }

    fn test_site(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "islamic-portfolio-{name}-{}",
            REQUEST_ID_COUNTER.fetch_add(1, AtomicOrdering::Relaxed)
        ));
        std::fs::create_dir_all(&dir).expect("temp site dir is writable");
        std::fs::write(dir.join("index.html"), "<div id=\"app\"></div>").expect("write index");
        std::fs::write(dir.join("app.js"), "console.log(1)").expect("write asset");
        dir
    }

    fn test_router(name: &str) -> Router {
        router(AppState {
            config: Arc::new(test_config(test_site(name))),
        })
    }

    fn get_request(path: &str) -> Request {
        HttpRequest::builder()
            .uri(path)
            .body(Body::empty())
            .expect("valid request")
    }

    #[test]
    fn bounded_values_fall_back_to_default() {
        assert_eq!(parse_u64_with_bounds(Some(" 120 ".to_string()), 3_600, (0, 600)), 120);
        assert_eq!(parse_u64_with_bounds(Some("601".to_string()), 3_600, (0, 600)), 3_600);
        assert_eq!(parse_u64_with_bounds(Some("soon".to_string()), 3_600, (0, 600)), 3_600);
        assert_eq!(parse_u64_with_bounds(None, 3_600, (0, 600)), 3_600);
    }

    #[test]
    fn port_and_log_level_parse_with_defaults() {
        assert_eq!(parse_port(Some("9000".to_string()), DEFAULT_PORT), 9000);
        assert_eq!(parse_port(Some("70000".to_string()), DEFAULT_PORT), DEFAULT_PORT);
        assert_eq!(parse_log_level(Some("DEBUG".to_string()), LogLevel::Info), LogLevel::Debug);
        assert_eq!(parse_log_level(Some("trace".to_string()), LogLevel::Info), LogLevel::Info);
        assert_eq!(parse_non_empty_string(Some("   ".to_string())), None);
    }

    #[test]
    fn debug_sorts_below_info() {
        assert!(LogLevel::Debug < LogLevel::Info);
    }

    #[test]
    fn log_record_merges_fields_after_envelope() {
        let record = log_record(
            LogLevel::Info,
            "request_complete",
            serde_json::json!({ "status": 200 }),
        );
        assert_eq!(record["level"], "info");
        assert_eq!(record["event"], "request_complete");
        assert_eq!(record["status"], 200);
        assert!(record.contains_key("ts"));
    }

    #[test]
    fn incoming_request_id_is_echoed() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("  abc-123 "));
        assert_eq!(resolve_request_id(&headers), "abc-123");

        let generated = resolve_request_id(&HeaderMap::new());
        assert!(generated.starts_with("req-"));
    }

    #[test]
    fn documents_revalidate_and_assets_are_cached() {
        assert_eq!(static_cache_control("/", 3_600), "no-cache");
        assert_eq!(static_cache_control("/index.html", 3_600), "no-cache");
        assert_eq!(static_cache_control("/projects", 3_600), "no-cache");
        assert_eq!(static_cache_control("/app-1a2b.wasm", 3_600), "public, max-age=3600");
        assert_eq!(static_cache_control("/app-1a2b.wasm", 0), "no-cache");
    }

    #[tokio::test]
    async fn healthz_reports_ok_with_request_id() {
        let response = test_router("health")
            .oneshot(get_request(HEALTH_PATH))
            .await
            .expect("router is infallible");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CACHE_CONTROL], "no-store");
        assert!(response.headers().contains_key(REQUEST_ID_HEADER));

        let body = to_bytes(response.into_body(), 1024).await.expect("body reads");
        let payload: serde_json::Value = serde_json::from_slice(&body).expect("json body");
        assert_eq!(payload["ok"], true);
    }

    #[tokio::test]
    async fn static_asset_gets_long_cache_and_echoed_id() {
        let request = HttpRequest::builder()
            .uri("/app.js")
            .header(REQUEST_ID_HEADER, "trace-7")
            .body(Body::empty())
            .expect("valid request");
        let response = test_router("asset")
            .oneshot(request)
            .await
            .expect("router is infallible");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[REQUEST_ID_HEADER], "trace-7");
        assert_eq!(response.headers()[header::CACHE_CONTROL], "public, max-age=3600");
    }

    #[tokio::test]
    async fn unknown_route_falls_back_to_index() {
        let response = test_router("fallback")
            .oneshot(get_request("/projects"))
            .await
            .expect("router is infallible");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CACHE_CONTROL], "no-cache");
        let body = to_bytes(response.into_body(), 1024).await.expect("body reads");
        assert!(String::from_utf8_lossy(&body).contains("id=\"app\""));
    }
}
