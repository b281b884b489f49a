use crate::domain::model::{BookingRequest, SubmissionOutcome};
use crate::domain::ports::SubmissionStrategy;
use crate::utils::error::{Result, SiteError};
use crate::utils::validation;

/// The sub-view an open modal shows, selected deterministically by whether a
/// booking URL is configured. With a calendar embed no local form exists and
/// no strategy is ever invoked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingView {
    Calendar { url: String },
    Form,
}

#[derive(Debug)]
enum ModalState {
    Closed,
    Open {
        outcome: Option<SubmissionOutcome>,
        in_flight: bool,
    },
}

/// What the form surface should do after a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionFeedback {
    pub outcome: SubmissionOutcome,
    /// Both success paths clear the form; a failed relay keeps the input so
    /// the user can retry or copy it.
    pub clear_form: bool,
    /// Blocking message for the user; names the contact email as the
    /// fallback channel on failure.
    pub user_message: Option<String>,
}

/// Booking modal state machine. Owns modal visibility and the result of the
/// current submission cycle; the outcome is cleared whenever the modal
/// closes.
pub struct BookingController {
    state: ModalState,
    booking_url: String,
    contact_email: String,
    strategy: Box<dyn SubmissionStrategy>,
}

impl BookingController {
    pub fn new(
        booking_url: impl Into<String>,
        contact_email: impl Into<String>,
        strategy: Box<dyn SubmissionStrategy>,
    ) -> Self {
        Self {
            state: ModalState::Closed,
            booking_url: booking_url.into(),
            contact_email: contact_email.into(),
            strategy,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ModalState::Open { .. })
    }

    /// Closed → Open. Reached from any booking call-to-action; opening an
    /// already-open modal is a no-op.
    pub fn request_open(&mut self) {
        if let ModalState::Closed = self.state {
            self.state = ModalState::Open {
                outcome: None,
                in_flight: false,
            };
        }
    }

    /// Open → Closed. Resets the submission outcome for the next cycle.
    pub fn request_close(&mut self) {
        self.state = ModalState::Closed;
    }

    /// The sub-view shown while open; `None` while closed.
    pub fn view(&self) -> Option<BookingView> {
        if !self.is_open() {
            return None;
        }
        if self.booking_url.trim().is_empty() {
            Some(BookingView::Form)
        } else {
            Some(BookingView::Calendar {
                url: self.booking_url.clone(),
            })
        }
    }

    /// Outcome of the current open cycle; `None` before the first submit and
    /// always `None` while closed.
    pub fn outcome(&self) -> Option<&SubmissionOutcome> {
        match &self.state {
            ModalState::Open { outcome, .. } => outcome.as_ref(),
            ModalState::Closed => None,
        }
    }

    /// Drives the disabled state of the submit control.
    pub fn submission_in_flight(&self) -> bool {
        matches!(
            self.state,
            ModalState::Open {
                in_flight: true,
                ..
            }
        )
    }

    /// Whether a success acknowledgment banner is currently shown. It appears
    /// in addition to the form and stays until the modal closes.
    pub fn acknowledged(&self) -> bool {
        matches!(self.outcome(), Some(SubmissionOutcome::Success))
    }

    /// Submits the booking request through the configured strategy.
    ///
    /// Guards, in order: the modal must be open on the form view, no other
    /// submission may be in flight, and the required-field gate must pass.
    /// A guard failure returns an error without invoking the strategy or
    /// issuing any network call. The request is dropped once the outcome is
    /// resolved.
    pub async fn submit(&mut self, request: BookingRequest) -> Result<SubmissionFeedback> {
        match self.view() {
            Some(BookingView::Form) => {}
            Some(BookingView::Calendar { .. }) => {
                return Err(SiteError::StateError {
                    message: "Booking goes through the calendar embed".to_string(),
                });
            }
            None => {
                return Err(SiteError::StateError {
                    message: "Booking modal is not open".to_string(),
                });
            }
        }

        if self.submission_in_flight() {
            return Err(SiteError::StateError {
                message: "A submission is already in flight".to_string(),
            });
        }

        validation::validate_booking_request(&request)?;

        self.set_flight(true, Some(SubmissionOutcome::Pending));
        let outcome = self.strategy.submit(&request).await;
        self.set_flight(false, Some(outcome.clone()));

        let feedback = match &outcome {
            SubmissionOutcome::Success => SubmissionFeedback {
                outcome,
                clear_form: true,
                user_message: None,
            },
            SubmissionOutcome::Failed(_) => SubmissionFeedback {
                outcome,
                clear_form: false,
                user_message: Some(format!(
                    "Your request could not be sent. Please try again or email {}.",
                    self.contact_email
                )),
            },
            SubmissionOutcome::Pending => SubmissionFeedback {
                outcome,
                clear_form: false,
                user_message: None,
            },
        };

        Ok(feedback)
    }

    fn set_flight(&mut self, in_flight: bool, new_outcome: Option<SubmissionOutcome>) {
        if let ModalState::Open { outcome, in_flight: flight } = &mut self.state {
            *flight = in_flight;
            if new_outcome.is_some() {
                *outcome = new_outcome;
            }
        }
    }
}
