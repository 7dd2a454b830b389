//! Sharing a result through the host platform.
//!
//! The host may or may not offer a share target. When it does not, the
//! share control is simply not offered. When sharing fails, the failure
//! is logged and the game carries on.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::Value;

/// Title used for shared results.
pub const SHARE_TITLE: &str = "Number Balance Game";

/// What gets handed to the share target.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: Option<String>,
}

impl SharePayload {
    /// The standard brag message for a pair of totals.
    #[must_use]
    pub fn for_totals(left: Value, right: Value, url: Option<String>) -> Self {
        Self {
            title: SHARE_TITLE.to_string(),
            text: format!("I balanced the numbers! Left total: {left}, Right total: {right}"),
            url,
        }
    }
}

/// Why a share did not go through.
#[derive(Debug, Error)]
pub enum ShareError {
    /// The player backed out of the share sheet.
    #[error("share cancelled")]
    Cancelled,

    #[error("share target unavailable: {0}")]
    Unavailable(String),

    #[error("share failed: {0}")]
    Io(#[from] std::io::Error),
}

/// A platform share capability.
pub trait ShareTarget {
    fn share(&self, payload: &SharePayload) -> Result<(), ShareError>;
}

/// Share through `target` if there is one.
///
/// Returns whether the payload was delivered. Failures are logged and
/// swallowed.
pub fn share_or_log(target: Option<&dyn ShareTarget>, payload: &SharePayload) -> bool {
    let Some(target) = target else {
        tracing::debug!("no share target, skipping share");
        return false;
    };

    match target.share(payload) {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(%err, "error sharing");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        shared: RefCell<Vec<SharePayload>>,
    }

    impl ShareTarget for Recorder {
        fn share(&self, payload: &SharePayload) -> Result<(), ShareError> {
            self.shared.borrow_mut().push(payload.clone());
            Ok(())
        }
    }

    struct Failing;

    impl ShareTarget for Failing {
        fn share(&self, _payload: &SharePayload) -> Result<(), ShareError> {
            Err(ShareError::Cancelled)
        }
    }

    #[test]
    fn test_payload_text() {
        let payload = SharePayload::for_totals(Value::integer(12), Value::integer(12), None);
        assert_eq!(payload.title, "Number Balance Game");
        assert_eq!(payload.text, "I balanced the numbers! Left total: 12, Right total: 12");
        assert_eq!(payload.url, None);
    }

    #[test]
    fn test_share_delivered() {
        let recorder = Recorder::default();
        let payload = SharePayload::for_totals(Value::integer(1), Value::integer(2), None);

        assert!(share_or_log(Some(&recorder), &payload));
        assert_eq!(recorder.shared.borrow().as_slice(), &[payload]);
    }

    #[test]
    fn test_share_without_target() {
        let payload = SharePayload::for_totals(Value::ZERO, Value::ZERO, None);
        assert!(!share_or_log(None, &payload));
    }

    #[test]
    fn test_share_failure_is_swallowed() {
        let payload = SharePayload::for_totals(Value::ZERO, Value::ZERO, None);
        assert!(!share_or_log(Some(&Failing), &payload));
    }
}
