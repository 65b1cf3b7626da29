//! Email dispatcher — sends the full reading through the SendGrid v3 API.
//!
//! Dispatch failures are absorbed: every error path logs and returns `false`,
//! never a propagated error, so a broken mail provider cannot corrupt record
//! state upstream.

pub mod template;

use reqwest::{Client, StatusCode};
use serde::Serialize;
use tracing::{info, warn};

use crate::chart::ChartData;
use crate::report::generator::FullReport;

const SENDGRID_API_URL: &str = "https://api.sendgrid.com/v3/mail/send";

#[derive(Debug, Serialize)]
struct MailRequest<'a> {
    personalizations: Vec<Personalization<'a>>,
    from: Address<'a>,
    subject: &'a str,
    content: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Personalization<'a> {
    to: Vec<Address<'a>>,
}

#[derive(Debug, Serialize)]
struct Address<'a> {
    email: &'a str,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(rename = "type")]
    content_type: &'a str,
    value: &'a str,
}

/// Transactional email client for report delivery.
#[derive(Clone)]
pub struct EmailClient {
    client: Client,
    api_key: String,
    from_email: String,
}

impl EmailClient {
    pub fn new(api_key: String, from_email: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            from_email,
        }
    }

    /// Renders and sends the full report. Returns true iff SendGrid accepted
    /// the message (202). Chart data is accepted for future template use.
    pub async fn send_full_report(
        &self,
        to_email: &str,
        name: &str,
        report: &FullReport,
        _chart: &ChartData,
    ) -> bool {
        let subject = format!("✨ {name}, Your Soulmate Reading is Ready!");
        let html = template::build_email_html(name, report);

        let request_body = MailRequest {
            personalizations: vec![Personalization {
                to: vec![Address { email: to_email }],
            }],
            from: Address {
                email: &self.from_email,
            },
            subject: &subject,
            content: vec![Content {
                content_type: "text/html",
                value: &html,
            }],
        };

        let response = self
            .client
            .post(SENDGRID_API_URL)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await;

        match response {
            Ok(response) => {
                let status = response.status();
                if status == StatusCode::ACCEPTED {
                    info!("Email sent to {to_email}, status: {status}");
                    true
                } else {
                    let body = response.text().await.unwrap_or_default();
                    warn!("Email sending failed ({status}): {body}");
                    false
                }
            }
            Err(e) => {
                warn!("Email sending failed: {e}");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mail_request_serializes_to_sendgrid_shape() {
        let request = MailRequest {
            personalizations: vec![Personalization {
                to: vec![Address {
                    email: "user@example.com",
                }],
            }],
            from: Address {
                email: "noreply@soulmate.app",
            },
            subject: "✨ Ada, Your Soulmate Reading is Ready!",
            content: vec![Content {
                content_type: "text/html",
                value: "<html></html>",
            }],
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["personalizations"][0]["to"][0]["email"], "user@example.com");
        assert_eq!(value["from"]["email"], "noreply@soulmate.app");
        assert_eq!(value["content"][0]["type"], "text/html");
        assert_eq!(value["content"][0]["value"], "<html></html>");
    }
}
