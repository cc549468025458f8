//! Handlers for the readiness-score intake form.
//!
//! Provides the endpoint that validates a submission and notifies the owner
//! and the prospect, and the endpoint that builds a `mailto:` draft for
//! visitors who prefer their own mail client.

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;

use cbprep_core::draft::build_draft;
use cbprep_core::error::CoreError;
use cbprep_core::intake::{self, IntakeForm, INVALID_SUBMISSION_MESSAGE};
use cbprep_core::render;
use cbprep_notify::OutboundEmail;

use crate::error::{AppError, AppResult};
use crate::response::{Ack, DraftResponse};
use crate::state::AppState;

/// Parse the raw body as JSON. Anything that is not JSON is a server error,
/// matching how the site's form script reports it.
fn parse_json(body: &[u8]) -> AppResult<serde_json::Value> {
    serde_json::from_slice(body).map_err(|e| AppError::MalformedBody(e.to_string()))
}

/// POST /api/readiness
///
/// Validate the intake form and send the owner notification followed by the
/// prospect confirmation. A filled honeypot returns the same success body
/// without sending anything. Configuration is checked before the first
/// send so a misconfigured deployment never sends only one of the two.
pub async fn submit(State(state): State<AppState>, body: Bytes) -> AppResult<Json<Ack>> {
    let submission = intake::parse_submission(parse_json(&body)?)?;

    if submission.is_spam() {
        tracing::info!("Honeypot field filled, skipping notifications");
        return Ok(Json(Ack::OK));
    }

    let mailer = state
        .mailer
        .as_ref()
        .ok_or(CoreError::Configuration("RESEND_API_KEY"))?;
    let from = state.notify.from_address()?;
    let owner = state.notify.owner_address()?;

    let owner_msg = render::owner_message(&submission);
    let prospect_msg = render::prospect_message();

    mailer
        .send(&OutboundEmail {
            from: from.to_string(),
            to: owner.to_string(),
            subject: owner_msg.subject,
            html: owner_msg.html,
            text: Some(owner_msg.text),
            reply_to: Some(submission.email.clone()),
        })
        .await?;

    mailer
        .send(&OutboundEmail {
            from: from.to_string(),
            to: submission.email.clone(),
            subject: prospect_msg.subject,
            html: prospect_msg.html,
            text: Some(prospect_msg.text),
            reply_to: None,
        })
        .await?;

    tracing::debug!(email = %submission.email, platform = %submission.platform, "Readiness request delivered");
    Ok(Json(Ack::OK))
}

/// POST /api/readiness/draft
///
/// Build the prefilled email draft addressed to the owner. Fields are used
/// as typed; nothing is validated or sent.
pub async fn draft(State(state): State<AppState>, body: Bytes) -> AppResult<Json<DraftResponse>> {
    let form: IntakeForm = serde_json::from_value(parse_json(&body)?)
        .map_err(|_| CoreError::Validation(INVALID_SUBMISSION_MESSAGE.to_string()))?;
    let owner = state.notify.owner_address()?;

    let draft = build_draft(&form, owner);

    Ok(Json(DraftResponse {
        ok: true,
        subject: draft.subject,
        body: draft.body,
        mailto: draft.mailto,
        clipboard: draft.clipboard,
    }))
}
