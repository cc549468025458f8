//! Prefilled `mailto:` draft for visitors who would rather send the
//! readiness request from their own mail client.

use serde::Serialize;

use crate::intake::IntakeForm;
use crate::render::{NOT_PROVIDED, NO_NOTES};

pub const DRAFT_SUBJECT: &str = "Chargeback Prep - readiness score";

/// A ready-to-open email draft addressed to the owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailDraft {
    pub subject: String,
    pub body: String,
    /// `mailto:` URL with percent-encoded subject and body.
    pub mailto: String,
    /// Plain text for the copy-to-clipboard button.
    pub clipboard: String,
}

/// Build the draft from whatever the visitor has typed so far.
///
/// Nothing is validated; empty optional fields get the same placeholders
/// the owner notification uses.
pub fn build_draft(form: &IntakeForm, to: &str) -> EmailDraft {
    let field = |value: &Option<String>| value.as_deref().unwrap_or("").trim().to_string();
    let with_placeholder = |value: &Option<String>, placeholder: &str| {
        let v = field(value);
        if v.is_empty() {
            placeholder.to_string()
        } else {
            v
        }
    };

    let body = format!(
        "Quick readiness score request

Name: {name}

1) What do you sell? {offer_type}
2) Platform(s): {platform}
3) Payment processor: {processor}
4) Refund policy link: {policy_link}
5) Support channel: {support}

Extra notes:
{notes}
",
        name = with_placeholder(&form.name, NOT_PROVIDED),
        offer_type = field(&form.offer_type),
        platform = field(&form.platform),
        processor = field(&form.processor),
        policy_link = field(&form.policy_link),
        support = with_placeholder(&form.support_channel, NOT_PROVIDED),
        notes = with_placeholder(&form.notes, NO_NOTES),
    );

    let mailto = format!(
        "mailto:{to}?subject={}&body={}",
        urlencoding::encode(DRAFT_SUBJECT),
        urlencoding::encode(&body)
    );
    let clipboard = format!("To: {to}\nSubject: {DRAFT_SUBJECT}\n\n{body}");

    EmailDraft {
        subject: DRAFT_SUBJECT.to_string(),
        body,
        mailto,
        clipboard,
    }
}
