//! # Survey Service Module
//!
//! Routes under `/api/surveys`. The host does not generate surveys itself; it
//! relays requests to the generation service named in
//! [`Config`](crate::config::Config).
//!
//! ## Registered Routes:
//!
//! *   **`POST /generate`**:
//!     - **Handler**: `generate::process`
//!     - **Description**: Expects `{"description": string}` and forwards it to
//!       the upstream generator. Upstream status, body, `Content-Type` and
//!       `X-Cache-Hit` are relayed unchanged. If the generator cannot be
//!       reached the handler answers `502 Bad Gateway`.

mod generate;

use actix_web::web::{post, scope};
use actix_web::Scope;

/// The base path for all survey endpoints.
const API_PATH: &str = "/api/surveys";

pub fn configure_routes() -> Scope {
    scope(API_PATH).route("/generate", post().to(generate::process))
}
