//! Chargeback Prep domain logic.
//!
//! Everything here is pure: the intake schema and its normalization rules,
//! the HTML/plain-text rendering of the two notification emails, and the
//! `mailto:` draft offered as a send-it-yourself fallback. No I/O lives in
//! this crate; delivery is handled by `cbprep-notify` and HTTP by
//! `cbprep-api`.

pub mod draft;
pub mod error;
pub mod intake;
pub mod render;
