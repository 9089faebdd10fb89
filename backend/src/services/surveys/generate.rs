//! # Survey Generation Relay
//!
//! Backend logic for `POST /api/surveys/generate`. The frontend posts the
//! description here, on its own origin, and this handler passes it on to the
//! configured generation service.
//!
//! ## Workflow
//!
//! 1.  **HTTP Request**: `process` receives a `GenerateSurveyRequest` JSON body.
//!     Bodies that are not valid JSON are rejected by actix with `400`.
//!
//! 2.  **Forwarding**: `forward` posts the same payload to
//!     `Config::generate_url`, attaching `Authorization: Bearer <token>` when
//!     a token is configured.
//!
//! 3.  **HTTP Response**: the upstream status and body are relayed along with
//!     `Content-Type` and `X-Cache-Hit`. Transport failures become
//!     `502 Bad Gateway`.

use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use common::requests::GenerateSurveyRequest;
use log::{info, warn};

use crate::config::Config;

/// Upstream headers copied onto the relayed response.
const RELAYED_HEADERS: [&str; 2] = ["content-type", "x-cache-hit"];

pub async fn process(
    payload: web::Json<GenerateSurveyRequest>,
    client: web::Data<reqwest::Client>,
    config: web::Data<Config>,
) -> HttpResponse {
    match forward(&client, &config, &payload).await {
        Ok(response) => response,
        Err(e) => {
            warn!("Survey generator unreachable at {}: {}", config.generate_url(), e);
            HttpResponse::BadGateway().body(format!("Error contacting survey generator: {}", e))
        }
    }
}

/// Sends `payload` upstream and converts the answer into an actix response.
async fn forward(
    client: &reqwest::Client,
    config: &Config,
    payload: &GenerateSurveyRequest,
) -> Result<HttpResponse, reqwest::Error> {
    let mut request = client.post(config.generate_url()).json(payload);
    if let Some(token) = &config.api_token {
        request = request.bearer_auth(token);
    }

    let upstream = request.send().await?;
    let status =
        StatusCode::from_u16(upstream.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);

    let mut response = HttpResponse::build(status);
    for name in RELAYED_HEADERS {
        if let Some(value) = upstream.headers().get(name).and_then(|v| v.to_str().ok()) {
            response.insert_header((name, value.to_string()));
        }
    }

    let body = upstream.bytes().await?;
    info!("Survey generation relayed with status {}", status);
    Ok(response.body(body.to_vec()))
}

#[cfg(test)]
mod tests {
    use super::super::configure_routes;
    use super::*;
    use actix_web::dev::ServerHandle;
    use actix_web::http::header::ContentType;
    use actix_web::{test, App, HttpRequest, HttpServer};
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    fn config(generator_url: String, api_token: Option<&str>) -> Config {
        Config {
            host: "127.0.0.1".to_string(),
            port: 0,
            generator_url,
            api_token: api_token.map(str::to_string),
            open_browser: false,
        }
    }

    /// Starts a fake generation service that echoes the request.
    fn start_upstream() -> (String, ServerHandle) {
        let server = HttpServer::new(|| {
            App::new().route(
                "/api/surveys/generate",
                web::post().to(|req: HttpRequest, body: web::Json<Value>| async move {
                    let auth = req
                        .headers()
                        .get("authorization")
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or_default()
                        .to_string();
                    HttpResponse::Created()
                        .insert_header(("X-Cache-Hit", "0"))
                        .json(json!({ "echo": body.into_inner(), "auth": auth }))
                }),
            )
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .unwrap();

        let addr = server.addrs()[0];
        let server = server.run();
        let handle = server.handle();
        actix_web::rt::spawn(server);
        (format!("http://{}", addr), handle)
    }

    /// A local URL nothing is listening on.
    fn closed_url() -> String {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);
        format!("http://127.0.0.1:{}", port)
    }

    macro_rules! relay_app {
        ($config:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(reqwest::Client::new()))
                    .app_data(web::Data::new($config))
                    .service(configure_routes()),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn relays_upstream_answer() {
        let (url, upstream) = start_upstream();
        let app = relay_app!(config(url, Some("secret")));

        let req = test::TestRequest::post()
            .uri("/api/surveys/generate")
            .set_json(json!({ "description": "customer feedback" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CREATED);
        assert_eq!(
            resp.headers().get("x-cache-hit").and_then(|v| v.to_str().ok()),
            Some("0")
        );
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({
                "echo": { "description": "customer feedback" },
                "auth": "Bearer secret"
            })
        );

        upstream.stop(true).await;
    }

    #[actix_web::test]
    async fn unreachable_generator_is_bad_gateway() {
        let app = relay_app!(config(closed_url(), None));

        let req = test::TestRequest::post()
            .uri("/api/surveys/generate")
            .set_json(json!({ "description": "customer feedback" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    }

    #[actix_web::test]
    async fn malformed_body_is_rejected_locally() {
        let app = relay_app!(config(closed_url(), None));

        let req = test::TestRequest::post()
            .uri("/api/surveys/generate")
            .insert_header(ContentType::json())
            .set_payload("not json")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
