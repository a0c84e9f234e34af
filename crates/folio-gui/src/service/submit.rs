//! Contact form submission service.
//!
//! With a configured endpoint the form is POSTed as form-encoded data, the
//! convention of hosted form services (Formspree and friends). Without one,
//! delivery is simulated with a fixed delay so the send button still walks
//! through its sending state during local development.

use iced::Task;
use serde::Serialize;

use crate::constants::{MIN_SUBMIT_DURATION, SIMULATED_SUBMIT_DELAY};
use crate::error::GuiError;
use crate::message::{ContactMessage, Message};

/// A validated contact form submission.
#[derive(Debug, Clone, Serialize)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Deliver a submission, producing a `Contact(Finished)` message.
pub fn send(endpoint: Option<String>, submission: Submission) -> Task<Message> {
    Task::perform(deliver(endpoint, submission), |result| {
        Message::Contact(ContactMessage::Finished(result))
    })
}

/// Deliver a submission, taking at least [`MIN_SUBMIT_DURATION`].
///
/// The floor applies to the real POST too: an endpoint that answers (or
/// refuses) within a frame would otherwise flip the sending state off before
/// it ever rendered.
async fn deliver(endpoint: Option<String>, submission: Submission) -> Result<(), String> {
    match endpoint {
        Some(url) => {
            let (result, ()) = tokio::join!(
                post(&url, &submission),
                tokio::time::sleep(MIN_SUBMIT_DURATION),
            );
            result
        }
        None => {
            tracing::info!("No contact endpoint configured, simulating delivery");
            tokio::time::sleep(SIMULATED_SUBMIT_DELAY).await;
            Ok(())
        }
    }
}

async fn post(url: &str, submission: &Submission) -> Result<(), String> {
    let client = reqwest::Client::new();
    client
        .post(url)
        .header(reqwest::header::ACCEPT, "application/json")
        .form(submission)
        .send()
        .await
        .and_then(reqwest::Response::error_for_status)
        .map_err(|e| GuiError::submit(e.to_string()).to_string())?;

    tracing::info!("Contact form delivered to {url}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    fn submission() -> Submission {
        Submission {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            message: "I have a project for you.".to_string(),
        }
    }

    #[tokio::test]
    async fn delivery_holds_the_floor_even_when_the_endpoint_fails_fast() {
        // Nothing listens on the discard port, so the POST errors within
        // milliseconds; the result must still not arrive before the floor.
        let started = Instant::now();
        let result = deliver(Some("http://127.0.0.1:9".to_string()), submission()).await;

        assert!(result.is_err());
        assert!(started.elapsed() >= MIN_SUBMIT_DURATION);
    }
}
