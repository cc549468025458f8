//! Response envelope types for API handlers.
//!
//! Every response carries an `ok` flag so the site's form script can branch
//! on it without inspecting the status code.

use serde::Serialize;

/// `{ "ok": true }`, the whole body of a successful intake.
#[derive(Debug, Serialize)]
pub struct Ack {
    pub ok: bool,
}

impl Ack {
    pub const OK: Ack = Ack { ok: true };
}

/// `{ "ok": false, "error": "..." }`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub ok: bool,
    pub error: String,
}

/// Successful draft: subject and body for the on-page preview, plus the
/// `mailto:` link and the clipboard text.
#[derive(Debug, Serialize)]
pub struct DraftResponse {
    pub ok: bool,
    pub subject: String,
    pub body: String,
    pub mailto: String,
    pub clipboard: String,
}
