//! Request logging, CORS and response headers for the SuiLaughs server.

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::middleware::{DefaultHeaders, Logger};

/// Access log line: client, request line, status, bytes and latency in ms.
const ACCESS_LOG_FORMAT: &str = r#"%a "%r" %s %b %Dms"#;

pub fn request_logger() -> Logger {
    // wallet addresses never appear in URLs, so the request line is safe to log
    Logger::new(ACCESS_LOG_FORMAT)
}

/// Cross-origin reads of the share payloads and JSON views are limited to
/// the public origin the share links point at. Mutations stay same-origin.
pub fn cors_policy(public_url: &str) -> Cors {
    Cors::default()
        .allowed_origin(public_url.trim_end_matches('/'))
        .allowed_methods(vec!["GET"])
        .allowed_header(header::ACCEPT)
        .max_age(3600)
}

pub fn security_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add((header::X_CONTENT_TYPE_OPTIONS, "nosniff"))
        .add((header::REFERRER_POLICY, "strict-origin-when-cross-origin"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, web, App, HttpResponse};

    #[actix_web::test]
    async fn responses_carry_security_headers() {
        let app = test::init_service(
            App::new()
                .wrap(security_headers())
                .route("/", web::get().to(HttpResponse::Ok)),
        )
        .await;
        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(resp.headers().get(header::X_CONTENT_TYPE_OPTIONS).unwrap(), "nosniff");
    }

    #[actix_web::test]
    async fn public_origin_may_read_share_links() {
        let app = test::init_service(
            App::new()
                .wrap(cors_policy("http://localhost:8080/"))
                .route("/", web::get().to(HttpResponse::Ok)),
        )
        .await;
        let req = test::TestRequest::get()
            .uri("/")
            .insert_header((header::ORIGIN, "http://localhost:8080"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(
            resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "http://localhost:8080"
        );
    }
}
