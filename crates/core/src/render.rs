//! Rendering of the two notification emails.
//!
//! Both messages share one table-based layout (preheader, brand header,
//! content card, disclaimer footer) so they look the same in every mail
//! client. Rendering is pure: the same submission always produces the same
//! bytes.

use crate::intake::IntakeSubmission;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const SITE_URL: &str = "https://chargebackprep.com";
pub const BRAND_NAME: &str = "Chargeback Prep";

pub const NOT_PROVIDED: &str = "(not provided)";
pub const NO_POLICY: &str = "none";
pub const NO_NOTES: &str = "(none)";

pub const PROSPECT_SUBJECT: &str = "We got your readiness request";

const FONT: &str = "font-family:ui-sans-serif,system-ui,-apple-system,Segoe UI,Roboto,Arial;";
const MUTED: &str = "color:#6b7280;";
const LINK: &str = "color:#0ea5a5;text-decoration:underline;";

// ---------------------------------------------------------------------------
// Output type
// ---------------------------------------------------------------------------

/// Subject plus HTML and plain-text bodies of one email. Addressing is left
/// to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMessage {
    pub subject: String,
    pub html: String,
    pub text: String,
}

// ---------------------------------------------------------------------------
// Escaping
// ---------------------------------------------------------------------------

/// Escape the five HTML-significant characters.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape, then turn newlines into `<br/>`. `\r\n` counts as one break.
pub fn nl2br(s: &str) -> String {
    escape_html(&s.replace("\r\n", "\n")).replace('\n', "<br/>")
}

fn muted(text: &str) -> String {
    format!(r#"<span style="{MUTED}">{}</span>"#, escape_html(text))
}

fn link(href: &str, label: &str) -> String {
    format!(
        r#"<a href="{}" target="_blank" rel="noreferrer" style="{LINK}">{}</a>"#,
        escape_html(href),
        escape_html(label)
    )
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

/// Wrap a body fragment in the shared email chrome.
///
/// `title` and `preheader` are escaped here; `body_html` must already be safe.
fn wrap_email(title: &str, preheader: &str, body_html: &str) -> String {
    let title = escape_html(title);
    let preheader = escape_html(preheader);
    let logo_url = format!("{SITE_URL}/cp-mark.png");

    format!(
        r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <meta name="x-apple-disable-message-reformatting" />
    <title>{title}</title>
  </head>
  <body style="margin:0;padding:0;background:#f6f7fb;">
    <div style="display:none;max-height:0;overflow:hidden;opacity:0;color:transparent;">
      {preheader}
    </div>
    <table role="presentation" width="100%" cellpadding="0" cellspacing="0" style="border-collapse:collapse;background:#f6f7fb;">
      <tr>
        <td align="center" style="padding:28px 14px;">
          <table role="presentation" width="600" cellpadding="0" cellspacing="0" style="width:100%;max-width:600px;border-collapse:separate;">
            <tr>
              <td style="padding:0 0 14px 0;">
                <table role="presentation" width="100%" cellpadding="0" cellspacing="0" style="border-collapse:collapse;">
                  <tr>
                    <td style="vertical-align:middle;">
                      <a href="{SITE_URL}" target="_blank" rel="noreferrer" style="text-decoration:none;">
                        <img src="{logo_url}" width="28" height="28" alt="{BRAND_NAME}" style="display:inline-block;border-radius:10px;vertical-align:middle;" />
                        <span style="{FONT} font-size:14px; font-weight:700; color:#111827; vertical-align:middle;">{BRAND_NAME}</span>
                      </a>
                    </td>
                    <td align="right" style="vertical-align:middle;">
                      <span style="{FONT} font-size:12px; {MUTED}">{title}</span>
                    </td>
                  </tr>
                </table>
              </td>
            </tr>
            <tr>
              <td style="background:#ffffff;border:1px solid rgba(17,24,39,.10);border-radius:16px;box-shadow:0 10px 30px rgba(17,24,39,.08);padding:22px;">
{body_html}
              </td>
            </tr>
            <tr>
              <td style="padding:16px 4px 0 4px;">
                <p style="margin:0;{FONT} font-size:12px; line-height:1.5; {MUTED}">
                  Not legal advice. No chargeback win guarantees. We only use real info you already have.
                </p>
              </td>
            </tr>
          </table>
        </td>
      </tr>
    </table>
  </body>
</html>
"#
    )
}

/// One label/value row of the owner's field table. `value_html` must already be safe.
fn row(label: &str, value_html: &str) -> String {
    format!(
        r#"                <tr>
                  <td style="padding:6px 0;width:160px;{FONT} font-size:12px; {MUTED} vertical-align:top;">{}</td>
                  <td style="padding:6px 0;{FONT} font-size:13px; color:#111827; vertical-align:top;">{value_html}</td>
                </tr>
"#,
        escape_html(label)
    )
}

// ---------------------------------------------------------------------------
// Owner notification
// ---------------------------------------------------------------------------

/// The message sent to the service owner for a genuine submission.
pub fn owner_message(data: &IntakeSubmission) -> RenderedMessage {
    RenderedMessage {
        subject: format!("New readiness request: {}", data.email),
        html: owner_html(data),
        text: owner_text(data),
    }
}

fn owner_html(data: &IntakeSubmission) -> String {
    let name = if data.name.is_empty() {
        muted(NOT_PROVIDED)
    } else {
        escape_html(&data.name)
    };
    let email = format!(
        r#"<a href="mailto:{0}" style="{LINK}">{0}</a>"#,
        escape_html(&data.email)
    );
    let policy = if data.policy_link.is_empty() {
        muted(NO_POLICY)
    } else {
        link(&data.policy_link, &data.policy_link)
    };
    let support = if data.support_channel.is_empty() {
        muted(NOT_PROVIDED)
    } else {
        escape_html(&data.support_channel)
    };
    let notes = if data.notes.is_empty() {
        muted(NO_NOTES)
    } else {
        nl2br(&data.notes)
    };

    let rows = [
        row("Name", &name),
        row("Email", &email),
        row("Offer type", &escape_html(&data.offer_type)),
        row("Platform(s)", &escape_html(&data.platform)),
        row("Processor", &escape_html(&data.processor)),
        row("Refund policy", &policy),
        row("Support channel", &support),
    ]
    .concat();

    let body = format!(
        r#"                <h1 style="margin:0 0 10px 0;{FONT} font-size:20px; line-height:1.25; color:#111827;">New readiness request</h1>
                <p style="margin:0 0 16px 0;{FONT} font-size:14px; line-height:1.6; color:#374151;">Reply to this email to respond to the prospect.</p>
                <table role="presentation" width="100%" cellpadding="0" cellspacing="0" style="border-collapse:collapse;border:1px solid rgba(17,24,39,.10);background:#fafafa;">
{rows}                </table>
                <h2 style="margin:18px 0 8px 0;{FONT} font-size:14px; color:#111827;">Notes</h2>
                <div style="padding:12px 14px;border:1px solid rgba(17,24,39,.10);border-radius:14px;background:#ffffff;{FONT} font-size:13px; line-height:1.6; color:#374151;">{notes}</div>
                <div style="margin-top:18px;padding:12px 14px;border-radius:14px;background:rgba(14,165,165,.08);border:1px solid rgba(14,165,165,.20);">
                  <p style="margin:0;{FONT} font-size:13px; color:#0f766e; line-height:1.6;"><b>Fast triage reminder:</b> check (1) policy acceptance proof and (2) access proof. Then send top gaps in order.</p>
                </div>
                <p style="margin:16px 0 0 0;{FONT} font-size:12px; {MUTED}">Site: {site}</p>"#,
        site = link(SITE_URL, SITE_URL),
    );

    wrap_email(
        "New readiness request",
        &format!("New readiness request from {}", data.email),
        &body,
    )
}

fn owner_text(data: &IntakeSubmission) -> String {
    format!(
        "New readiness request

Name: {name}
Email: {email}
Offer type: {offer_type}
Platform(s): {platform}
Processor: {processor}
Refund policy: {policy}
Support channel: {support}

Notes:
{notes}
",
        name = or_placeholder(&data.name, NOT_PROVIDED),
        email = data.email,
        offer_type = data.offer_type,
        platform = data.platform,
        processor = data.processor,
        policy = or_placeholder(&data.policy_link, NO_POLICY),
        support = or_placeholder(&data.support_channel, NOT_PROVIDED),
        notes = or_placeholder(&data.notes, NO_NOTES),
    )
}

// ---------------------------------------------------------------------------
// Prospect confirmation
// ---------------------------------------------------------------------------

const NEXT_STEPS: [&str; 3] = [
    "We check your policy acceptance + access proof basics.",
    "You get the top gaps (in order) and what to fix first.",
    "No call required. Optional quick triage if you want it.",
];

/// The confirmation sent back to the submitter. Not personalized.
pub fn prospect_message() -> RenderedMessage {
    RenderedMessage {
        subject: PROSPECT_SUBJECT.to_string(),
        html: prospect_html(),
        text: prospect_text(),
    }
}

fn prospect_html() -> String {
    let pricing_url = format!("{SITE_URL}/#pricing");
    let steps: String = NEXT_STEPS
        .iter()
        .map(|step| format!("                    <li>{}</li>\n", escape_html(step)))
        .collect();

    let body = format!(
        r#"                <h1 style="margin:0 0 10px 0;{FONT} font-size:20px; line-height:1.25; color:#111827;">Request received ✅</h1>
                <p style="margin:0 0 14px 0;{FONT} font-size:14px; line-height:1.6; color:#374151;">We got your readiness request. You’ll get your score by email soon.</p>
                <div style="padding:14px;border:1px solid rgba(17,24,39,.10);border-radius:14px;background:#fafafa;">
                  <p style="margin:0 0 10px 0;{FONT} font-size:13px; font-weight:700; color:#111827;">What happens next</p>
                  <ul style="margin:0;padding-left:18px;{FONT} font-size:13px; line-height:1.7; color:#374151;">
{steps}                  </ul>
                </div>
                <table role="presentation" cellpadding="0" cellspacing="0" style="margin-top:16px;border-collapse:collapse;">
                  <tr>
                    <td><a href="{pricing_url}" target="_blank" rel="noreferrer" style="display:inline-block;background:#111827;color:#ffffff;text-decoration:none;{FONT} font-size:13px;font-weight:700;padding:10px 14px;border-radius:12px;">See pricing</a></td>
                    <td style="width:10px;"></td>
                    <td><a href="{SITE_URL}" target="_blank" rel="noreferrer" style="display:inline-block;background:#ffffff;color:#111827;text-decoration:none;{FONT} font-size:13px;font-weight:700;padding:10px 14px;border-radius:12px;border:1px solid rgba(17,24,39,.12);">Back to site</a></td>
                  </tr>
                </table>
                <p style="margin:14px 0 0 0;{FONT} font-size:12px; {MUTED} line-height:1.6;">If you want to add context, just reply to this email.</p>"#
    );

    wrap_email(
        "Request received",
        "We got your readiness request. Next steps inside.",
        &body,
    )
}

fn prospect_text() -> String {
    let steps: String = NEXT_STEPS.iter().map(|step| format!("- {step}\n")).collect();
    format!(
        "Request received ✅

We got your readiness request. You’ll get your score by email soon.

What happens next:
{steps}
If you want to add context, reply to this email.
"
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
