use axum::{
    body::Body,
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tracing::info;

/// String values longer than this are cut in log previews.
const PREVIEW_MAX_CHARS: usize = 200;

/// Log one line per request: method, path, and a truncated body preview.
/// The body is buffered here and reinjected so downstream extractors still
/// see it.
pub async fn log_request(req: Request, next: Next) -> Result<Response, StatusCode> {
    let method = req.method().clone();
    let path = req
        .uri()
        .path_and_query()
        .map(|pq| pq.to_string())
        .unwrap_or_else(|| req.uri().path().to_string());

    let (parts, body) = req.into_parts();
    let bytes = body
        .collect()
        .await
        .map_err(|_| StatusCode::BAD_REQUEST)?
        .to_bytes();

    let preview = body_preview(&bytes);
    if preview.is_empty() {
        info!("{} {}", method, path);
    } else {
        info!("{} {} {}", method, path, preview);
    }

    let req = Request::from_parts(parts, Body::from(bytes));
    Ok(next.run(req).await)
}

/// Compact JSON preview of the request body with long string values
/// truncated. Non-JSON and empty bodies yield no preview; a preview that
/// fails to serialize is replaced with a placeholder so logging can never
/// fail the request.
fn body_preview(bytes: &[u8]) -> String {
    if bytes.is_empty() {
        return String::new();
    }
    let Ok(mut value) = serde_json::from_slice::<Value>(bytes) else {
        return String::new();
    };
    let Some(map) = value.as_object_mut() else {
        return String::new();
    };
    if map.is_empty() {
        return String::new();
    }

    for field in map.values_mut() {
        if let Value::String(s) = field {
            if s.chars().count() > PREVIEW_MAX_CHARS {
                let cut: String = s.chars().take(PREVIEW_MAX_CHARS).collect();
                *field = Value::String(format!("{cut}...<truncated>"));
            }
        }
    }

    serde_json::to_string(map).unwrap_or_else(|_| "[unserializable]".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_body_has_no_preview() {
        assert_eq!(body_preview(b""), "");
    }

    #[test]
    fn non_json_body_has_no_preview() {
        assert_eq!(body_preview(b"not json at all"), "");
    }

    #[test]
    fn short_fields_pass_through() {
        let body = json!({"name": "Alice", "message": "Hi"}).to_string();
        let preview = body_preview(body.as_bytes());
        assert!(preview.contains("Alice"));
        assert!(!preview.contains("<truncated>"));
    }

    #[test]
    fn long_string_values_are_cut_with_marker() {
        let body = json!({"message": "x".repeat(500)}).to_string();
        let preview = body_preview(body.as_bytes());
        assert!(preview.contains(&format!("{}...<truncated>", "x".repeat(200))));
        assert!(!preview.contains(&"x".repeat(201)));
    }

    #[test]
    fn non_string_values_are_left_alone() {
        let body = json!({"count": 7, "flag": true}).to_string();
        let preview = body_preview(body.as_bytes());
        assert!(preview.contains("7"));
        assert!(preview.contains("true"));
    }
}
