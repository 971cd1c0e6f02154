use gloo_timers::future::TimeoutFuture;
use log::info;

use super::errors::LeadFormError;
use super::validation::{FormErrors, FormValues};
use crate::config;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Editing,
    Submitting,
    Acknowledged,
    Failed(String),
}

impl SubmissionStatus {
    /// Starts a submission if the form is editable and validation came back clean.
    pub fn begin(&self, errors: &FormErrors) -> Result<SubmissionStatus, LeadFormError> {
        match self {
            SubmissionStatus::Submitting | SubmissionStatus::Acknowledged => {
                Err(LeadFormError::SubmissionInProgress)
            }
            SubmissionStatus::Editing | SubmissionStatus::Failed(_) => {
                if errors.is_empty() {
                    Ok(SubmissionStatus::Submitting)
                } else {
                    Err(LeadFormError::SubmitBlocked(errors.len()))
                }
            }
        }
    }

    /// Only meaningful while submitting; any other state is returned unchanged.
    pub fn complete(&self, outcome: Result<(), LeadFormError>) -> SubmissionStatus {
        match (self, outcome) {
            (SubmissionStatus::Submitting, Ok(())) => SubmissionStatus::Acknowledged,
            (SubmissionStatus::Submitting, Err(err)) => SubmissionStatus::Failed(err.to_string()),
            (other, _) => other.clone(),
        }
    }

    /// End of the acknowledgment window.
    pub fn reset(&self) -> SubmissionStatus {
        match self {
            SubmissionStatus::Acknowledged => SubmissionStatus::Editing,
            other => other.clone(),
        }
    }

    pub fn is_busy(&self) -> bool {
        matches!(self, SubmissionStatus::Submitting)
    }

    pub fn is_acknowledged(&self) -> bool {
        matches!(self, SubmissionStatus::Acknowledged)
    }
}

/// Stand-in for a real lead endpoint: logs the payload and waits.
pub async fn submit_lead(values: &FormValues) -> Result<(), LeadFormError> {
    let payload = serde_json::to_string(values)
        .map_err(|e| LeadFormError::SubmissionFailed(e.to_string()))?;
    info!("Submitting lead: {}", payload);
    TimeoutFuture::new(config::SIMULATED_SUBMIT_MS).await;
    info!("Lead submission completed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lead_form::errors::FieldError;
    use crate::lead_form::validation::Field;

    fn blocked() -> FormErrors {
        let mut errors = FormErrors::new();
        errors.update(Field::Name, Some(FieldError::NameTooShort));
        errors.update(Field::Phone, Some(FieldError::PhoneInvalid));
        errors
    }

    #[test]
    fn happy_path_loops_back_to_editing() {
        let status = SubmissionStatus::default();
        let status = status.begin(&FormErrors::new()).unwrap();
        assert!(status.is_busy());
        let status = status.complete(Ok(()));
        assert!(status.is_acknowledged());
        assert_eq!(status.reset(), SubmissionStatus::Editing);
    }

    #[test]
    fn validation_errors_block_submission() {
        let result = SubmissionStatus::Editing.begin(&blocked());
        assert_eq!(result, Err(LeadFormError::SubmitBlocked(2)));
    }

    #[test]
    fn no_concurrent_submissions() {
        assert_eq!(
            SubmissionStatus::Submitting.begin(&FormErrors::new()),
            Err(LeadFormError::SubmissionInProgress)
        );
        assert_eq!(
            SubmissionStatus::Acknowledged.begin(&FormErrors::new()),
            Err(LeadFormError::SubmissionInProgress)
        );
    }

    #[test]
    fn failure_is_recorded_and_retryable() {
        let failed = SubmissionStatus::Submitting
            .complete(Err(LeadFormError::SubmissionFailed("offline".to_string())));
        match &failed {
            SubmissionStatus::Failed(reason) => assert!(reason.contains("offline")),
            other => panic!("expected Failed, got {other:?}"),
        }
        assert!(!failed.is_busy());
        assert_eq!(failed.reset(), failed);
        assert_eq!(failed.begin(&FormErrors::new()), Ok(SubmissionStatus::Submitting));
    }

    #[test]
    fn completion_outside_submitting_is_ignored() {
        assert_eq!(SubmissionStatus::Editing.complete(Ok(())), SubmissionStatus::Editing);
        assert_eq!(SubmissionStatus::Editing.reset(), SubmissionStatus::Editing);
    }
}
