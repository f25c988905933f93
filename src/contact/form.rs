use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::ContactError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// The `name` attribute of the matching form control.
    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, Field::Subject)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl FormFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        };
        *slot = value;
    }

    /// Required fields holding an empty string. Whitespace counts as a value.
    pub fn missing(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| f.is_required() && self.get(*f).is_empty())
            .collect()
    }
}

/// Body posted to the mail relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    #[serde(flatten)]
    pub fields: FormFields,
    pub submission_time: String,
}

impl SubmissionPayload {
    pub fn new(fields: FormFields, at: DateTime<Utc>) -> Self {
        Self {
            fields,
            submission_time: at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Feedback {
    #[default]
    Idle,
    Success,
    Error,
}

/// Identifies one feedback transition so a late revert can't clear a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackTicket(u64);

/// Form fields plus the feedback they produced. Holds no I/O; see
/// [`ContactFormController`](super::ContactFormController) for the async flow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    fields: FormFields,
    feedback: Feedback,
    generation: u64,
    submitting: bool,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn feedback(&self) -> Feedback {
        self.feedback
    }

    /// Whether a request for this form is waiting on the mail relay.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn set_submitting(&mut self, submitting: bool) {
        self.submitting = submitting;
    }

    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        self.fields.set(field, value.into());
    }

    pub fn prepare(&self, now: DateTime<Utc>) -> Result<SubmissionPayload, ContactError> {
        let missing = self.fields.missing();
        if !missing.is_empty() {
            return Err(ContactError::Validation { missing });
        }
        Ok(SubmissionPayload::new(self.fields.clone(), now))
    }

    /// Applies the outcome of a submit attempt. Success clears the fields.
    pub fn resolve(&mut self, outcome: &Result<(), ContactError>) -> FeedbackTicket {
        match outcome {
            Ok(()) => {
                self.feedback = Feedback::Success;
                self.fields = FormFields::default();
            }
            Err(_) => self.feedback = Feedback::Error,
        }
        self.generation += 1;
        FeedbackTicket(self.generation)
    }

    /// Reverts to Idle if `ticket` belongs to the latest transition.
    pub fn expire(&mut self, ticket: FeedbackTicket) -> bool {
        if ticket.0 != self.generation || self.feedback == Feedback::Idle {
            return false;
        }
        self.feedback = Feedback::Idle;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.update_field(Field::Name, "Ada");
        form.update_field(Field::Email, "ada@example.com");
        form.update_field(Field::Message, "Hi");
        form
    }

    #[test]
    fn test_update_field() {
        let mut form = ContactForm::new();
        for field in Field::ALL {
            assert_eq!(form.fields().get(field), "");
        }
        form.update_field(Field::Subject, "Hello");
        form.update_field(Field::Name, "Grace");
        assert_eq!(form.fields().subject, "Hello");
        assert_eq!(form.fields().name, "Grace");
        assert_eq!(form.feedback(), Feedback::Idle);
    }

    #[test]
    fn test_required_fields() {
        let form = ContactForm::new();
        assert_eq!(
            form.fields().missing(),
            vec![Field::Name, Field::Email, Field::Message]
        );

        let mut form = filled();
        assert!(form.fields().missing().is_empty());

        // no trimming, whitespace is a value
        form.update_field(Field::Email, " ");
        assert!(form.fields().missing().is_empty());

        form.update_field(Field::Email, "");
        assert_eq!(form.fields().missing(), vec![Field::Email]);
    }

    #[test]
    fn test_prepare() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
        let payload = filled().prepare(at).expect("form should be valid");
        assert_eq!(payload.submission_time, "2024-05-01T12:30:00.000Z");
        assert_eq!(payload.fields.name, "Ada");
        assert_eq!(payload.fields.subject, "");

        let mut form = filled();
        form.update_field(Field::Message, "");
        assert_eq!(
            form.prepare(at),
            Err(ContactError::Validation {
                missing: vec![Field::Message]
            })
        );
    }

    #[test]
    fn test_payload_json() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
        let payload = filled().prepare(at).unwrap();
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Ada",
                "email": "ada@example.com",
                "subject": "",
                "message": "Hi",
                "submissionTime": "2024-05-01T12:30:00.000Z",
            })
        );
    }

    #[test]
    fn test_resolve() {
        let mut form = filled();
        form.resolve(&Err(ContactError::Transport("timed out".to_string())));
        assert_eq!(form.feedback(), Feedback::Error);
        assert_eq!(form.fields().name, "Ada");

        form.resolve(&Ok(()));
        assert_eq!(form.feedback(), Feedback::Success);
        assert_eq!(form.fields(), &FormFields::default());
    }

    #[test]
    fn test_expire_stale_ticket() {
        let mut form = filled();
        let first = form.resolve(&Err(ContactError::Validation { missing: vec![] }));
        let second = form.resolve(&Ok(()));

        assert!(!form.expire(first));
        assert_eq!(form.feedback(), Feedback::Success);

        assert!(form.expire(second));
        assert_eq!(form.feedback(), Feedback::Idle);

        // already idle
        assert!(!form.expire(second));
    }
}
