mod controller;
mod form;
mod mailer;
mod timer;

pub use controller::ContactFormController;
pub use form::{ContactForm, Feedback, FeedbackTicket, Field, FormFields, SubmissionPayload};
pub use mailer::{HttpMailer, Mailer, CONTACT_ENDPOINT};
#[cfg(feature = "hydrate")]
pub use timer::BrowserTimer;
pub use timer::Timer;

use std::time::Duration;

use http::StatusCode;
use thiserror::Error;

/// How long a Success or Error feedback stays visible before reverting to Idle.
pub const FEEDBACK_TIMEOUT: Duration = Duration::from_secs(3);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("missing required fields: {missing:?}")]
    Validation { missing: Vec<Field> },
    #[error("couldn't reach the mail relay: {0}")]
    Transport(String),
    #[error("mail relay rejected the message: {0}")]
    Rejected(StatusCode),
}
