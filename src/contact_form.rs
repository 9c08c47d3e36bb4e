//! Contact form submissions
//!
//! A visitor's submission is validated against the contact form schema, turned
//! into the JSON payload the mail relay expects, and POSTed. The visitor only
//! ever learns whether the message was sent or not.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::ContactConfig;
use crate::schema::{formats, Issue, IssuePath, Issues, ObjectSchema, StringSchema};

/// Shortest message the form accepts
pub const MIN_MESSAGE_LEN: usize = 10;

#[derive(Error, Debug)]
pub enum ContactError {
    #[error("Contact form is invalid:\n{0}")]
    Invalid(Issues),

    #[error("No mail relay access key configured")]
    MissingAccessKey,

    #[error("Could not build relay client: {0}")]
    Client(String),
}

/// Why a relay attempt did not go through
#[derive(Error, Debug)]
pub enum RelayError {
    #[error("relay request failed: {0}")]
    Transport(String),

    #[error("relay rejected submission with HTTP {status}")]
    Rejected { status: u16 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitStatus {
    Sent,
    NotSent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactFormInput {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

pub fn contact_form_schema() -> ObjectSchema {
    ObjectSchema::new()
        .field("name", StringSchema::required("Name is required"))
        .field(
            "email",
            StringSchema::new().email("Please enter a valid email address"),
        )
        .optional(
            "phone",
            StringSchema::new().pattern(
                formats::phone(),
                "Phone number can only contain digits, spaces, parentheses, plus, and hyphen",
            ),
        )
        .field("subject", StringSchema::required("Subject is required"))
        .field(
            "message",
            StringSchema::new().min_len(
                MIN_MESSAGE_LEN,
                format!("Message must be at least {} characters", MIN_MESSAGE_LEN),
            ),
        )
}

impl ContactFormInput {
    pub fn parse(value: &Value) -> Result<Self, ContactError> {
        contact_form_schema()
            .validate(value)
            .map_err(ContactError::Invalid)?;

        serde_json::from_value(value.clone()).map_err(|e| {
            ContactError::Invalid(vec![Issue::new(IssuePath::root(), e.to_string())].into())
        })
    }
}

/// JSON body the mail relay receives
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelayPayload {
    pub access_key: String,
    pub from_name: String,
    pub subject: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl RelayPayload {
    pub fn new(input: &ContactFormInput, config: &ContactConfig) -> Result<Self, ContactError> {
        let access_key = config
            .access_key
            .clone()
            .filter(|k| !k.is_empty())
            .ok_or(ContactError::MissingAccessKey)?;

        Ok(Self {
            access_key,
            from_name: input.name.clone(),
            subject: format!("{}{}", config.subject_prefix, input.subject),
            name: input.name.clone(),
            email: input.email.clone(),
            phone: input.phone.clone().unwrap_or_default(),
            message: input.message.clone(),
        })
    }
}

/// Something that can deliver a payload to the club's inbox
pub trait MailRelay {
    fn deliver(&self, payload: &RelayPayload) -> Result<(), RelayError>;
}

/// The hosted form relay, reached over HTTPS
#[derive(Debug)]
pub struct HttpMailRelay {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl HttpMailRelay {
    pub fn new(config: &ContactConfig) -> Result<Self, ContactError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ContactError::Client(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }
}

impl MailRelay for HttpMailRelay {
    fn deliver(&self, payload: &RelayPayload) -> Result<(), RelayError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(payload)
            .send()
            .map_err(|e| RelayError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(RelayError::Rejected {
                status: status.as_u16(),
            })
        }
    }
}

/// Validate a raw submission and hand it to the relay.
///
/// Invalid input is an error the form shows next to its fields; a relay
/// failure is only ever reported as [`SubmitStatus::NotSent`].
pub fn submit(
    value: &Value,
    config: &ContactConfig,
    relay: &dyn MailRelay,
) -> Result<SubmitStatus, ContactError> {
    let input = ContactFormInput::parse(value)?;
    let payload = RelayPayload::new(&input, config)?;

    debug!(subject = %payload.subject, "Relaying contact form submission");
    match relay.deliver(&payload) {
        Ok(()) => {
            info!("Contact form submission sent");
            Ok(SubmitStatus::Sent)
        }
        Err(e) => {
            warn!(error = %e, "Contact form submission not sent");
            Ok(SubmitStatus::NotSent)
        }
    }
}
