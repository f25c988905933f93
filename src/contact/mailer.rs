use super::{ContactError, SubmissionPayload};

/// Mail relay used when `CONTACT_ENDPOINT` isn't set at build time.
const DEFAULT_ENDPOINT: &str = "https://portbackend-phi.vercel.app/send-email";

pub const CONTACT_ENDPOINT: &str = match option_env!("CONTACT_ENDPOINT") {
    Some(endpoint) => endpoint,
    None => DEFAULT_ENDPOINT,
};

/// Delivers a contact submission somewhere that sends the email.
#[allow(async_fn_in_trait)]
pub trait Mailer {
    async fn send(&self, payload: &SubmissionPayload) -> Result<(), ContactError>;
}

/// Posts submissions as JSON to an external mail relay.
#[derive(Debug, Clone)]
pub struct HttpMailer {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpMailer {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(CONTACT_ENDPOINT)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Mailer for HttpMailer {
    async fn send(&self, payload: &SubmissionPayload) -> Result<(), ContactError> {
        let resp = self
            .client
            .post(&self.endpoint)
            .json(payload)
            .send()
            .await
            .map_err(|e| ContactError::Transport(e.to_string()))?;

        let status = resp.status();
        log::debug!("mail relay responded with {status}");
        if !status.is_success() {
            return Err(ContactError::Rejected(status));
        }

        // the relay's reply is informational only
        let body = resp
            .text()
            .await
            .map_err(|e| ContactError::Transport(e.to_string()))?;
        log::debug!("mail relay said: {body}");
        Ok(())
    }
}
