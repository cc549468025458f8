//! Intake submission schema, normalization and validation.
//!
//! A request body goes through three steps:
//!
//! 1. deserialize into [`IntakeForm`] (the wire shape, every key optional),
//! 2. normalize into [`IntakeSubmission`] (trimmed strings, policy link
//!    synonyms collapsed to empty),
//! 3. validate the normalized value against the field constraints.
//!
//! [`parse_submission`] runs all three and reports the first failing field
//! in form order.

use std::borrow::Cow;

use serde::Deserialize;
use validator::{Validate, ValidateEmail, ValidateUrl, ValidationError, ValidationErrors};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Policy link values that mean "I don't have one" (compared case-insensitively).
pub const POLICY_LINK_NONE_SYNONYMS: &[&str] = &["none", "n/a", "na"];

/// Message returned when the body does not even have the form's shape.
pub const INVALID_SUBMISSION_MESSAGE: &str = "Invalid submission.";

/// Fields in the order the form presents them. The first one with a
/// validation error decides the message returned to the client.
const FIELD_ORDER: &[&str] = &[
    "name",
    "email",
    "offer_type",
    "platform",
    "processor",
    "policy_link",
    "support_channel",
    "notes",
];

// ---------------------------------------------------------------------------
// Wire shape
// ---------------------------------------------------------------------------

/// Raw lead-capture form as posted by the website.
///
/// Unknown keys are ignored; absent keys and `null` are both `None`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntakeForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub offer_type: Option<String>,
    pub platform: Option<String>,
    pub processor: Option<String>,
    pub policy_link: Option<String>,
    pub support_channel: Option<String>,
    pub notes: Option<String>,
    /// Honeypot. Hidden from humans, so any value marks a bot.
    pub company: Option<String>,
}

// ---------------------------------------------------------------------------
// Normalized submission
// ---------------------------------------------------------------------------

/// A trimmed, normalized intake submission.
///
/// Optional fields that were absent are empty strings. Only values that
/// passed [`Validate::validate`] should be rendered or sent anywhere; use
/// [`parse_submission`] to get one.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct IntakeSubmission {
    #[validate(length(max = 100, message = "Name must be 100 characters or fewer."))]
    pub name: String,

    #[validate(custom(function = "validate_email_address"))]
    pub email: String,

    #[validate(length(
        min = 1,
        max = 30,
        message = "Choose what you sell (30 characters max)."
    ))]
    pub offer_type: String,

    #[validate(length(
        min = 1,
        max = 120,
        message = "Platform is required (120 characters max)."
    ))]
    pub platform: String,

    #[validate(length(
        min = 1,
        max = 120,
        message = "Payment processor is required (120 characters max)."
    ))]
    pub processor: String,

    #[validate(custom(function = "validate_policy_link"))]
    pub policy_link: String,

    #[validate(length(
        max = 200,
        message = "Support channel must be 200 characters or fewer."
    ))]
    pub support_channel: String,

    #[validate(length(
        max = 2000,
        message = "Notes must be 2000 characters or fewer."
    ))]
    pub notes: String,

    pub company: String,
}

impl IntakeSubmission {
    /// Trim every field and normalize the policy link. Does not validate.
    pub fn from_form(form: IntakeForm) -> Self {
        Self {
            name: trimmed(form.name),
            email: trimmed(form.email),
            offer_type: trimmed(form.offer_type),
            platform: trimmed(form.platform),
            processor: trimmed(form.processor),
            policy_link: normalize_policy_link(form.policy_link.as_deref().unwrap_or("")),
            support_channel: trimmed(form.support_channel),
            notes: trimmed(form.notes),
            company: trimmed(form.company),
        }
    }

    /// True when the honeypot field was filled in.
    pub fn is_spam(&self) -> bool {
        !self.company.is_empty()
    }
}

fn trimmed(value: Option<String>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}

/// Trim a policy link and collapse the "none" synonyms to an empty string.
///
/// Anything else is returned trimmed but otherwise unchanged; whether it is
/// a usable URL is decided during validation.
pub fn normalize_policy_link(raw: &str) -> String {
    let trimmed = raw.trim();
    if POLICY_LINK_NONE_SYNONYMS
        .iter()
        .any(|synonym| trimmed.eq_ignore_ascii_case(synonym))
    {
        return String::new();
    }
    trimmed.to_string()
}

/// Link schemes the owner email is willing to render as a live `href`.
const POLICY_LINK_SCHEMES: &[&str] = &["http", "https"];

/// Syntactically valid address whose domain ends in a dotted TLD of at
/// least two characters (`a@b` and `a@localhost` are rejected).
fn validate_email_address(value: &str) -> Result<(), ValidationError> {
    let has_tld = value
        .rsplit_once('@')
        .and_then(|(_, domain)| domain.rsplit_once('.'))
        .is_some_and(|(host, tld)| !host.is_empty() && tld.chars().count() >= 2);

    if has_tld && value.validate_email() {
        return Ok(());
    }
    Err(ValidationError::new("email")
        .with_message(Cow::Borrowed("Enter a valid email address.")))
}

/// An empty policy link is fine; a non-empty one must be an absolute
/// `http`/`https` URL.
fn validate_policy_link(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Ok(());
    }
    let web_scheme = value.split_once(':').is_some_and(|(scheme, _)| {
        POLICY_LINK_SCHEMES
            .iter()
            .any(|allowed| scheme.eq_ignore_ascii_case(allowed))
    });
    if web_scheme && value.validate_url() {
        return Ok(());
    }
    Err(ValidationError::new("policy_link").with_message(Cow::Borrowed(
        "Refund policy link must be a full URL (or \"none\").",
    )))
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Deserialize, normalize and validate a JSON request body.
///
/// The body must already be valid JSON; a value that is not an object, or
/// that carries a non-string field, fails with
/// [`INVALID_SUBMISSION_MESSAGE`]. Constraint failures report the message
/// of the first failing field in form order.
pub fn parse_submission(body: serde_json::Value) -> Result<IntakeSubmission, CoreError> {
    let form: IntakeForm = serde_json::from_value(body)
        .map_err(|_| CoreError::Validation(INVALID_SUBMISSION_MESSAGE.to_string()))?;

    let submission = IntakeSubmission::from_form(form);
    submission
        .validate()
        .map_err(|errors| CoreError::Validation(first_error_message(&errors)))?;

    Ok(submission)
}

/// Pick the message of the first failing field, in form order.
fn first_error_message(errors: &ValidationErrors) -> String {
    let field_errors = errors.field_errors();
    FIELD_ORDER
        .iter()
        .filter_map(|field| field_errors.get(*field))
        .filter_map(|errs| errs.first())
        .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| INVALID_SUBMISSION_MESSAGE.to_string())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
