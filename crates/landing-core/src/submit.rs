//! Submission Handling
//!
//! Applies the page-level side effects of an accepted submission. The
//! browser is reached only through [`PageHost`].

use std::time::Duration;

use async_trait::async_trait;

use crate::config::TrackerConfig;
use crate::error::Result;
use crate::form::Submission;
use crate::query;

/// How an accepted submission is delivered
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitMode {
    /// Rewrite the query string in place; optionally poke the call tracker
    QueryString { notify_tracker: bool },
    /// Wait a fixed delay, then succeed
    Simulated { delay_ms: u32 },
}

/// Browser-side effects needed by submission (Strategy pattern)
///
/// Not `Send`: DOM handles live on the single UI thread.
#[async_trait(?Send)]
pub trait PageHost {
    /// Current `location.pathname`
    fn pathname(&self) -> String;

    /// Replace the current history entry without navigating
    fn replace_url(&self, url: &str) -> Result<()>;

    /// Dispatch a bubbling `change` event on the element with `id`
    ///
    /// Returns `Ok(false)` when no such element exists.
    fn dispatch_change(&self, id: &str) -> Result<bool>;

    /// Suspend for `duration`
    async fn pause(&self, duration: Duration);
}

/// Delivers submissions according to a [`SubmitMode`]
#[derive(Clone, Debug)]
pub struct SubmissionHandler {
    mode: SubmitMode,
    tracker: TrackerConfig,
}

impl SubmissionHandler {
    pub const fn new(mode: SubmitMode, tracker: TrackerConfig) -> Self {
        Self { mode, tracker }
    }

    pub const fn mode(&self) -> SubmitMode {
        self.mode
    }

    /// Run the side effects for `submission`
    ///
    /// Host failures are returned; callers treat them as non-fatal.
    pub async fn deliver<H: PageHost + ?Sized>(&self, submission: &Submission, host: &H) -> Result<()> {
        match self.mode {
            SubmitMode::QueryString { notify_tracker } => {
                let url = query::with_query(&host.pathname(), &submission.query);
                host.replace_url(&url)?;
                tracing::debug!(%url, "query string updated");

                if notify_tracker {
                    let id = &self.tracker.caller_number_id;
                    if host.dispatch_change(id)? {
                        tracing::debug!(%id, "call tracker notified");
                    } else {
                        tracing::debug!(%id, "call tracker element missing");
                    }
                }
            }
            SubmitMode::Simulated { delay_ms } => {
                host.pause(Duration::from_millis(u64::from(delay_ms))).await;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use futures::executor::block_on;

    use super::*;
    use crate::error::LeadError;
    use crate::field::Field;
    use crate::form::LeadForm;
    use crate::tracking::TrackingParams;

    #[derive(Default)]
    struct RecordingHost {
        urls: RefCell<Vec<String>>,
        changes: RefCell<Vec<String>>,
        pauses: RefCell<Vec<Duration>>,
        has_caller_input: bool,
        fail_replace: bool,
    }

    #[async_trait(?Send)]
    impl PageHost for RecordingHost {
        fn pathname(&self) -> String {
            "/".into()
        }

        fn replace_url(&self, url: &str) -> Result<()> {
            if self.fail_replace {
                return Err(LeadError::Host("SecurityError".into()));
            }
            self.urls.borrow_mut().push(url.to_string());
            Ok(())
        }

        fn dispatch_change(&self, id: &str) -> Result<bool> {
            if self.has_caller_input {
                self.changes.borrow_mut().push(id.to_string());
            }
            Ok(self.has_caller_input)
        }

        async fn pause(&self, duration: Duration) {
            self.pauses.borrow_mut().push(duration);
        }
    }

    fn accepted_submission(search: &str) -> Submission {
        let mut form = LeadForm::new(TrackingParams::from_query(search));
        form.set_field(Field::FirstName, "Ada");
        form.set_field(Field::LastName, "Lovelace");
        form.set_field(Field::Email, "a@b.com");
        form.set_field(Field::Zip, "12345");
        form.submit().unwrap()
    }

    #[test]
    fn test_query_string_mode_replaces_url_and_notifies() {
        let host = RecordingHost {
            has_caller_input: true,
            ..Default::default()
        };
        let handler = SubmissionHandler::new(
            SubmitMode::QueryString { notify_tracker: true },
            TrackerConfig::default(),
        );
        let submission = accepted_submission("?utm_source=ads");

        block_on(handler.deliver(&submission, &host)).unwrap();

        let urls = host.urls.borrow();
        assert_eq!(urls.len(), 1);
        assert_eq!(urls[0], format!("/?{}", submission.query));
        assert!(urls[0].starts_with("/?utm_source=ads&first_name=Ada"));
        assert_eq!(*host.changes.borrow(), vec!["caller_number".to_string()]);
        assert!(host.pauses.borrow().is_empty());
    }

    #[test]
    fn test_tracker_not_notified_when_disabled() {
        let host = RecordingHost {
            has_caller_input: true,
            ..Default::default()
        };
        let handler = SubmissionHandler::new(
            SubmitMode::QueryString { notify_tracker: false },
            TrackerConfig::default(),
        );

        block_on(handler.deliver(&accepted_submission(""), &host)).unwrap();
        assert_eq!(host.urls.borrow().len(), 1);
        assert!(host.changes.borrow().is_empty());
    }

    #[test]
    fn test_missing_caller_input_is_tolerated() {
        let host = RecordingHost::default();
        let handler = SubmissionHandler::new(
            SubmitMode::QueryString { notify_tracker: true },
            TrackerConfig::default(),
        );

        assert!(block_on(handler.deliver(&accepted_submission(""), &host)).is_ok());
    }

    #[test]
    fn test_host_failure_is_reported() {
        let host = RecordingHost {
            fail_replace: true,
            ..Default::default()
        };
        let handler = SubmissionHandler::new(
            SubmitMode::QueryString { notify_tracker: true },
            TrackerConfig::default(),
        );

        let err = block_on(handler.deliver(&accepted_submission(""), &host)).unwrap_err();
        assert!(matches!(err, LeadError::Host(_)));
    }

    #[test]
    fn test_simulated_mode_only_waits() {
        let host = RecordingHost::default();
        let handler = SubmissionHandler::new(SubmitMode::Simulated { delay_ms: 1500 }, TrackerConfig::default());

        block_on(handler.deliver(&accepted_submission("?gclid=x"), &host)).unwrap();
        assert_eq!(*host.pauses.borrow(), vec![Duration::from_millis(1500)]);
        assert!(host.urls.borrow().is_empty());
    }
}
