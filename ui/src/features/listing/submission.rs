//! Submit lifecycle: validate, send once, report.
//!
//! The lifecycle is split around the network call so the component never
//! holds a borrow of its state across an await point.

use serde_json::Value;

use super::form_validation::validate_form;
use super::types::{FieldErrors, ListingState, ToastBody, ToastKind};
use crate::services::client::{DonationListingRequest, ListingSubmitter, SubmitResult};
use crate::utils::pretty_json;
use crate::{console_error, console_info, console_warn};

pub const SUCCESS_TITLE: &str = "Submission Successful";
pub const FAILURE_TITLE: &str = "Submission Failed";
pub const FAILURE_MESSAGE: &str = "There was an error submitting your data.";

/// Why a submit did not reach the network
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitBlocked {
    /// Another submission from this form is still in flight
    Pending,
    Invalid(FieldErrors),
}

/// Validates the whole form and marks it as submitting.
///
/// On success the returned snapshot is what must be sent; the state keeps
/// `is_submitting` set until [`finish_submission`] runs.
pub fn begin_submission(state: &mut ListingState) -> Result<DonationListingRequest, SubmitBlocked> {
    if state.is_submitting {
        console_warn!("[Listing] Submit ignored, a submission is already pending");
        return Err(SubmitBlocked::Pending);
    }

    match validate_form(&state.form) {
        Ok(request) => {
            state.errors = FieldErrors::new();
            state.is_submitting = true;
            Ok(request)
        }
        Err(errors) => {
            state.errors = errors.clone();
            Err(SubmitBlocked::Invalid(errors))
        }
    }
}

/// Performs the single network call of a submit
pub async fn send_listing<S>(submitter: &S, request: &DonationListingRequest) -> SubmitResult<Value>
where
    S: ListingSubmitter + ?Sized,
{
    console_info!(
        "[Listing] Submitting listing for {} on {}",
        request.address,
        request.donation_date
    );
    submitter.submit_listing(request).await
}

/// Clears the pending flag and queues the outcome notification.
///
/// Returns the id of the queued toast.
pub fn finish_submission(state: &mut ListingState, result: SubmitResult<Value>) -> u64 {
    state.is_submitting = false;

    let rendered = result.and_then(|payload| pretty_json(&payload).map_err(Into::into));
    match rendered {
        Ok(payload) => {
            console_info!("[Listing] Donation listing created");
            state.push_toast(
                ToastKind::Success,
                SUCCESS_TITLE.to_string(),
                ToastBody::Code(payload),
            )
        }
        Err(e) => {
            console_error!("Error saving donation: {}", e);
            state.push_toast(
                ToastKind::Failure,
                FAILURE_TITLE.to_string(),
                ToastBody::Text(FAILURE_MESSAGE.to_string()),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::listing::types::{ListingAction, ListingField};
    use crate::services::client::SubmitError;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use serde_json::json;
    use std::cell::RefCell;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    /// Collects formatted log lines so tests can inspect them
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLogs {
        type Writer = CapturedLogs;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    /// Records every request and answers with a canned response
    struct RecordingSubmitter {
        requests: RefCell<Vec<DonationListingRequest>>,
        respond: fn() -> SubmitResult<Value>,
    }

    impl RecordingSubmitter {
        fn new(respond: fn() -> SubmitResult<Value>) -> Self {
            Self {
                requests: RefCell::new(Vec::new()),
                respond,
            }
        }

        fn calls(&self) -> usize {
            self.requests.borrow().len()
        }
    }

    #[async_trait(?Send)]
    impl ListingSubmitter for RecordingSubmitter {
        async fn submit_listing(&self, request: &DonationListingRequest) -> SubmitResult<Value> {
            self.requests.borrow_mut().push(request.clone());
            (self.respond)()
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
    }

    fn tomorrow() -> NaiveDate {
        today().succ_opt().unwrap()
    }

    fn filled_state() -> ListingState {
        let mut state = ListingState::new(today());
        state.reduce_in_place(ListingAction::SetAddress("123 Main St".to_string()));
        state.reduce_in_place(ListingAction::SetDonationDate(Some(tomorrow())));
        state.reduce_in_place(ListingAction::SetTotalParticipants("50".to_string()));
        state.reduce_in_place(ListingAction::SetBountyAmount("12".to_string()));
        state
    }

    /// Same sequence the form component runs on submit
    async fn submit(state: &mut ListingState, submitter: &RecordingSubmitter) -> Option<u64> {
        let request = begin_submission(state).ok()?;
        let result = send_listing(submitter, &request).await;
        Some(finish_submission(state, result))
    }

    #[tokio::test]
    async fn test_valid_form_posts_once_and_shows_response() {
        let submitter = RecordingSubmitter::new(|| Ok(json!({ "id": 42, "status": "listed" })));
        let mut state = filled_state();

        submit(&mut state, &submitter).await.unwrap();

        assert_eq!(submitter.calls(), 1);
        let sent = &submitter.requests.borrow()[0];
        assert_eq!(
            serde_json::to_value(sent).unwrap(),
            json!({
                "address": "123 Main St",
                "donationDate": tomorrow().format("%Y-%m-%d").to_string(),
                "totalParticipants": "50",
                "bountyAmount": "12",
            })
        );

        assert!(!state.is_submitting);
        assert_eq!(state.toasts.len(), 1);
        let toast = &state.toasts[0];
        assert_eq!(toast.kind, ToastKind::Success);
        assert_eq!(toast.title, SUCCESS_TITLE);
        assert_eq!(
            toast.body,
            ToastBody::Code("{\n  \"id\": 42,\n  \"status\": \"listed\"\n}".to_string())
        );
    }

    #[tokio::test]
    async fn test_empty_address_blocks_network_call() {
        let submitter = RecordingSubmitter::new(|| Ok(json!({})));
        let mut state = filled_state();
        state.reduce_in_place(ListingAction::SetAddress(String::new()));

        assert!(submit(&mut state, &submitter).await.is_none());

        assert_eq!(submitter.calls(), 0);
        assert_eq!(state.error(ListingField::Address), Some("Address is required."));
        assert!(state.toasts.is_empty());
        assert!(!state.is_submitting);
    }

    #[tokio::test]
    async fn test_each_missing_field_blocks_submission() {
        for field in ListingField::ALL {
            let submitter = RecordingSubmitter::new(|| Ok(json!({})));
            let mut state = filled_state();
            let clear = match field {
                ListingField::Address => ListingAction::SetAddress(String::new()),
                ListingField::DonationDate => ListingAction::SetDonationDate(None),
                ListingField::TotalParticipants => {
                    ListingAction::SetTotalParticipants(String::new())
                }
                ListingField::BountyAmount => ListingAction::SetBountyAmount(String::new()),
            };
            state.reduce_in_place(clear);

            assert!(submit(&mut state, &submitter).await.is_none());
            assert_eq!(submitter.calls(), 0, "{:?} should block submission", field);
            assert_eq!(state.error(field), Some(field.required_message()));
        }
    }

    #[tokio::test]
    async fn test_server_rejection_shows_generic_failure() {
        let submitter = RecordingSubmitter::new(|| Err(SubmitError::Status { status: 500 }));
        let mut state = filled_state();

        submit(&mut state, &submitter).await.unwrap();

        assert_eq!(submitter.calls(), 1);
        assert_eq!(state.toasts.len(), 1);
        assert_eq!(state.toasts[0].kind, ToastKind::Failure);
        assert_eq!(state.toasts[0].title, FAILURE_TITLE);
        assert_eq!(
            state.toasts[0].body,
            ToastBody::Text(FAILURE_MESSAGE.to_string())
        );
    }

    #[tokio::test]
    async fn test_network_error_leaves_form_usable() {
        let submitter = RecordingSubmitter::new(|| {
            Err(SubmitError::Network {
                message: "connection refused".to_string(),
            })
        });
        let mut state = filled_state();

        submit(&mut state, &submitter).await.unwrap();
        assert!(!state.is_submitting);
        assert_eq!(state.toasts[0].kind, ToastKind::Failure);

        // Resubmitting is a fresh attempt, not a retry
        submit(&mut state, &submitter).await.unwrap();
        assert_eq!(submitter.calls(), 2);
        assert_eq!(state.form.address, "123 Main St");
    }

    #[test]
    fn test_submit_while_pending_is_ignored() {
        let mut state = filled_state();

        let first = begin_submission(&mut state);
        assert!(first.is_ok());
        assert!(state.is_submitting);

        assert_eq!(
            begin_submission(&mut state),
            Err(SubmitBlocked::Pending)
        );

        finish_submission(&mut state, Ok(json!({ "ok": true })));
        assert!(begin_submission(&mut state).is_ok());
    }

    #[test]
    fn test_submit_clears_stale_errors() {
        let mut state = filled_state();
        state.reduce_in_place(ListingAction::SetBountyAmount(String::new()));
        assert!(begin_submission(&mut state).is_err());

        state.reduce_in_place(ListingAction::SetBountyAmount("12".to_string()));
        assert!(begin_submission(&mut state).is_ok());
        assert!(state.errors.is_empty());
    }

    #[tokio::test]
    async fn test_form_kept_open_past_midnight_still_submits() {
        let submitter = RecordingSubmitter::new(|| Ok(json!({ "id": 1 })));

        // Created on the 17th with the default date, submitted on the 18th
        let mut state = ListingState::new(today());
        state.reduce_in_place(ListingAction::SetAddress("123 Main St".to_string()));
        state.reduce_in_place(ListingAction::SetTotalParticipants("50".to_string()));
        state.reduce_in_place(ListingAction::SetBountyAmount("12".to_string()));

        submit(&mut state, &submitter).await.unwrap();

        assert_eq!(submitter.calls(), 1);
        assert_eq!(submitter.requests.borrow()[0].donation_date, today());
        assert!(state.errors.is_empty());
        assert_eq!(state.toasts[0].kind, ToastKind::Success);
    }

    #[test]
    fn test_failed_submission_is_logged_as_error() {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let mut state = filled_state();
        begin_submission(&mut state).unwrap();
        finish_submission(
            &mut state,
            Err(SubmitError::Network {
                message: "connection refused".to_string(),
            }),
        );

        let output = logs.contents();
        let line = output
            .lines()
            .find(|line| line.contains("Error saving donation"))
            .expect("failure should be logged");
        assert!(line.contains("ERROR"));
        assert!(line.contains("connection refused"));
        assert_eq!(state.toasts[0].kind, ToastKind::Failure);
    }
}
