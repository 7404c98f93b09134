use std::rc::Rc;

use async_trait::async_trait;
use gloo_net::http::Request;
use log::debug;
use thiserror::Error;

use super::form::FormSnapshot;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("failed to encode contact request: {0}")]
    Encode(String),
    #[error("contact request failed: {0}")]
    Network(String),
    #[error("contact endpoint answered with status {0}")]
    Status(u16),
}

/// Delivers a validated contact form somewhere.
#[cfg_attr(test, mockall::automock)]
#[async_trait(?Send)]
pub trait ContactTransport {
    async fn send(&self, snapshot: &FormSnapshot) -> Result<(), SubmitError>;
}

/// Accepts everything without leaving the page.
#[derive(Clone, Debug, Default)]
pub struct SimulatedTransport;

#[async_trait(?Send)]
impl ContactTransport for SimulatedTransport {
    async fn send(&self, snapshot: &FormSnapshot) -> Result<(), SubmitError> {
        debug!("Simulated contact submission from {}", snapshot.email);
        Ok(())
    }
}

/// Posts the snapshot as JSON to the backend.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait(?Send)]
impl ContactTransport for HttpTransport {
    async fn send(&self, snapshot: &FormSnapshot) -> Result<(), SubmitError> {
        let response = Request::post(&self.endpoint)
            .json(snapshot)
            .map_err(|e| SubmitError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;

        if response.ok() {
            Ok(())
        } else {
            Err(SubmitError::Status(response.status()))
        }
    }
}

#[cfg(not(feature = "backend-submit"))]
pub fn default_transport() -> Rc<dyn ContactTransport> {
    Rc::new(SimulatedTransport)
}

#[cfg(feature = "backend-submit")]
pub fn default_transport() -> Rc<dyn ContactTransport> {
    Rc::new(HttpTransport::new(crate::config::contact_endpoint()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::form::{BannerKind, ContactForm, SubmitOutcome};
    use crate::contact::validator::FieldKind;
    use pretty_assertions::assert_eq;

    fn snapshot() -> FormSnapshot {
        FormSnapshot {
            name: "Jo".to_string(),
            email: "jo@x.com".to_string(),
            message: "Hello there!".to_string(),
        }
    }

    fn accepted(form: &mut ContactForm) -> FormSnapshot {
        match form.submit() {
            SubmitOutcome::Accepted(snapshot) => snapshot,
            other => panic!("expected accepted submission, got {:?}", other),
        }
    }

    #[test]
    fn simulated_transport_always_succeeds() {
        let result = tokio_test::block_on(SimulatedTransport.send(&snapshot()));
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn request_body_has_the_three_fields() {
        let body = serde_json::to_value(snapshot()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "name": "Jo",
                "email": "jo@x.com",
                "message": "Hello there!",
            })
        );
    }

    #[test]
    fn transport_receives_snapshot_and_success_resets_form() {
        let mut transport = MockContactTransport::new();
        transport
            .expect_send()
            .withf(|s| s.name == "Jo" && s.email == "jo@x.com")
            .times(1)
            .returning(|_| Ok(()));

        let mut form = ContactForm::new();
        form.set_value(FieldKind::Name, "Jo");
        form.set_value(FieldKind::Email, "jo@x.com");
        form.set_value(FieldKind::Message, "Hello there!");

        let snapshot = accepted(&mut form);
        let result = tokio_test::block_on(transport.send(&snapshot));
        form.finish(result);

        assert_eq!(form.banner().map(|b| b.kind), Some(BannerKind::Success));
        assert_eq!(form.value(FieldKind::Name), "");
    }

    #[test]
    fn transport_error_shows_failure_banner() {
        let mut transport = MockContactTransport::new();
        transport
            .expect_send()
            .returning(|_| Err(SubmitError::Network("offline".to_string())));

        let mut form = ContactForm::new();
        form.set_value(FieldKind::Name, "Jo");
        form.set_value(FieldKind::Email, "jo@x.com");
        form.set_value(FieldKind::Message, "Hello there!");

        let snapshot = accepted(&mut form);
        let result = tokio_test::block_on(transport.send(&snapshot));
        assert_eq!(
            result.clone().unwrap_err().to_string(),
            "contact request failed: offline"
        );
        form.finish(result);

        assert_eq!(form.banner().map(|b| b.kind), Some(BannerKind::Failure));
        assert_eq!(form.value(FieldKind::Email), "jo@x.com");
    }

    #[test]
    fn rejected_form_never_reaches_transport() {
        let mut transport = MockContactTransport::new();
        transport.expect_send().never();

        let mut form = ContactForm::new();
        form.set_value(FieldKind::Name, "J");
        assert_eq!(form.submit(), SubmitOutcome::Rejected { focus: FieldKind::Name });
    }
}
