use axum::{extract::Request, http::header, middleware::Next, response::Response};
use base64::{engine::general_purpose, Engine as _};
use serde::Deserialize;

/// Viewer identity for the current request. `user_id` is `None` for
/// anonymous visitors; the detail page is public, so the middleware never
/// rejects a request.
#[derive(Clone, Debug, Default)]
pub struct Viewer {
    pub user_id: Option<String>,
}

#[derive(Deserialize)]
struct JwtPayload {
    sub: String,
}

pub async fn resolve_viewer(mut request: Request, next: Next) -> Response {
    let user_id = request
        .headers()
        .get(header::COOKIE)
        .and_then(|hv| hv.to_str().ok())
        .and_then(extract_access_token)
        .and_then(decode_subject);

    request.extensions_mut().insert(Viewer { user_id });
    next.run(request).await
}

fn extract_access_token(cookies: &str) -> Option<&str> {
    cookies
        .split("; ")
        .find(|c| c.starts_with("access_token="))
        .and_then(|c| c.strip_prefix("access_token="))
}

// Parse the JWT payload (middle part) for the subject. Signature checks
// happen at the auth service that issued the cookie.
fn decode_subject(token: &str) -> Option<String> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return None;
    }
    let payload_bytes = general_purpose::URL_SAFE_NO_PAD.decode(parts[1]).ok()?;
    let payload: JwtPayload = serde_json::from_slice(&payload_bytes).ok()?;
    Some(payload.sub)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_for(payload: &str) -> String {
        format!(
            "header.{}.signature",
            general_purpose::URL_SAFE_NO_PAD.encode(payload.as_bytes())
        )
    }

    #[test]
    fn access_token_is_found_among_cookies() {
        let cookies = "theme=dark; access_token=abc.def.ghi; lang=fr";
        assert_eq!(extract_access_token(cookies), Some("abc.def.ghi"));
    }

    #[test]
    fn missing_access_token_yields_none() {
        assert_eq!(extract_access_token("theme=dark; lang=fr"), None);
        assert_eq!(extract_access_token(""), None);
    }

    #[test]
    fn subject_is_decoded_from_payload() {
        let token = token_for(r#"{"sub":"user-1"}"#);
        assert_eq!(decode_subject(&token), Some("user-1".to_string()));
    }

    #[test]
    fn malformed_tokens_yield_no_viewer() {
        assert_eq!(decode_subject("only-one-part"), None);
        assert_eq!(decode_subject("a.b"), None);
        assert_eq!(decode_subject("a.!!!not-base64!!!.c"), None);

        let token = token_for(r#"{"role":"admin"}"#);
        assert_eq!(decode_subject(&token), None);
    }
}
