//! Lead capture. Every valid inquiry is stored locally first; the copy sent
//! to the external relay is a separate, best-effort task whose outcome never
//! changes whether the inquiry was accepted.

use crate::clock::{Clock, LocalClock};
use crate::config;
use crate::config::keys;
use crate::error::{FormField, IntakeError, ValidationError};
use crate::http::{FetchClient, HttpClient, HttpRequest};
use crate::models::Inquiry;
use crate::storage::{load_json, save_json, BrowserStorage, KeyValueStore};
use log::{info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use uuid::Uuid;

static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InquiryForm {
    pub name: String,
    pub contact: String,
    pub email: String,
    pub message: String,
}

impl InquiryForm {
    /// Client-side checks only; this is not a security boundary.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let fields = [
            (FormField::Name, &self.name),
            (FormField::Contact, &self.contact),
            (FormField::Email, &self.email),
            (FormField::Message, &self.message),
        ];
        if let Some((field, _)) = fields.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(ValidationError::Missing(*field));
        }
        if !EMAIL_SHAPE.is_match(self.email.trim()) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }

    fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            contact: self.contact.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayOutcome {
    Delivered,
    Rejected(u16),
    Unreachable(String),
    Disabled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub inquiry: Inquiry,
    pub relay: RelayOutcome,
}

pub struct Intake<H, S, C> {
    http: H,
    store: S,
    clock: C,
    relay_url: Option<String>,
}

impl<H, S, C> Intake<H, S, C>
where
    H: HttpClient,
    S: KeyValueStore,
    C: Clock,
{
    pub fn new(http: H, store: S, clock: C) -> Self {
        Self {
            http,
            store,
            clock,
            relay_url: Some(config::RELAY_ENDPOINT.to_string()),
        }
    }

    pub fn with_relay(mut self, relay_url: Option<String>) -> Self {
        self.relay_url = relay_url;
        self
    }

    /// Stored inquiries, newest first.
    pub fn load_all(&self) -> Vec<Inquiry> {
        load_json(&self.store, keys::INQUIRIES).unwrap_or_default()
    }

    /// The stored list for appending to. An unreadable value is copied to
    /// `<key>_unreadable_<id>` first so no earlier lead is overwritten; if
    /// that copy fails the append is refused.
    fn stored_for_append(&self, id: &str) -> Result<Vec<Inquiry>, IntakeError> {
        let Some(raw) = self.store.get(keys::INQUIRIES) else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&raw) {
            Ok(inquiries) => Ok(inquiries),
            Err(e) => {
                let aside = format!("{}_unreadable_{}", keys::INQUIRIES, id);
                self.store.set(&aside, &raw)?;
                warn!("Moved unreadable inquiry list to `{}`: {}", aside, e);
                Ok(Vec::new())
            }
        }
    }

    /// Durable local append.
    pub fn record(&self, form: &InquiryForm) -> Result<Inquiry, IntakeError> {
        form.validate()?;
        let form = form.trimmed();
        let inquiry = Inquiry {
            id: Uuid::new_v4().simple().to_string()[..9].to_string(),
            name: form.name,
            contact: form.contact,
            email: form.email,
            message: form.message,
            submitted_at: self.clock.timestamp(),
        };

        let mut inquiries = self.stored_for_append(&inquiry.id)?;
        inquiries.insert(0, inquiry.clone());
        save_json(&self.store, keys::INQUIRIES, &inquiries)?;
        info!("Stored inquiry {} ({} total)", inquiry.id, inquiries.len());
        Ok(inquiry)
    }

    /// Best-effort copy to the relay. Failures are logged, never raised.
    pub async fn notify(&self, form: &InquiryForm) -> RelayOutcome {
        let Some(url) = self.relay_url.as_deref() else {
            return RelayOutcome::Disabled;
        };
        let request = match HttpRequest::post(url)
            .header("Accept", "application/json")
            .json(&form.trimmed())
        {
            Ok(request) => request,
            Err(e) => return RelayOutcome::Unreachable(e.to_string()),
        };

        match self.http.send(request).await {
            Ok(response) if response.ok() => RelayOutcome::Delivered,
            Ok(response) => {
                warn!("Lead relay rejected inquiry with status {}", response.status);
                RelayOutcome::Rejected(response.status)
            }
            Err(e) => {
                warn!("Lead relay unreachable: {}", e);
                RelayOutcome::Unreachable(e.to_string())
            }
        }
    }

    pub async fn submit(&self, form: &InquiryForm) -> Result<Submission, IntakeError> {
        let inquiry = self.record(form)?;
        let relay = self.notify(form).await;
        Ok(Submission { inquiry, relay })
    }
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Spreadsheet export of the leads. Starts with a BOM so Excel reads the
/// Korean text as UTF-8.
pub fn inquiries_to_csv(inquiries: &[Inquiry]) -> String {
    let mut out = String::from("\u{feff}접수일,요청자,연락처,이메일,문의상세\r\n");
    for inquiry in inquiries {
        let row = [
            &inquiry.submitted_at,
            &inquiry.name,
            &inquiry.contact,
            &inquiry.email,
            &inquiry.message,
        ]
        .iter()
        .map(|value| csv_field(value))
        .collect::<Vec<_>>()
        .join(",");
        out.push_str(&row);
        out.push_str("\r\n");
    }
    out
}

impl Intake<FetchClient, BrowserStorage, LocalClock> {
    pub fn browser() -> Self {
        Intake::new(FetchClient::default(), BrowserStorage::local(), LocalClock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::testing::FixedClock;
    use crate::error::TransportError;
    use crate::http::testing::ScriptedClient;
    use crate::storage::testing::MemoryStore;
    use futures::executor::block_on;
    use std::rc::Rc;

    type TestIntake = Intake<Rc<ScriptedClient>, MemoryStore, Rc<FixedClock>>;

    fn form() -> InquiryForm {
        InquiryForm {
            name: "홍길동 팀장".to_string(),
            contact: "010-1234-5678".to_string(),
            email: "hong@example.com".to_string(),
            message: "숏폼 광고 이벤트 문의드립니다.".to_string(),
        }
    }

    fn intake(http: Rc<ScriptedClient>, store: MemoryStore) -> TestIntake {
        Intake::new(http, store, FixedClock::new(2026, 10, 18))
    }

    #[test]
    fn test_each_empty_field_is_reported() {
        let mut blank_name = form();
        blank_name.name = "  ".to_string();
        assert_eq!(blank_name.validate(), Err(ValidationError::Missing(FormField::Name)));

        let mut blank_message = form();
        blank_message.message.clear();
        assert_eq!(blank_message.validate(), Err(ValidationError::Missing(FormField::Message)));

        assert_eq!(InquiryForm::default().validate(), Err(ValidationError::Missing(FormField::Name)));
    }

    #[test]
    fn test_email_shape() {
        for bad in ["hong", "hong@", "hong@example", "ho ng@example.com", "@example.com"] {
            let mut f = form();
            f.email = bad.to_string();
            assert_eq!(f.validate(), Err(ValidationError::InvalidEmail), "{}", bad);
        }
        let mut f = form();
        f.email = " hong.gil+ad@mail.co.kr ".to_string();
        assert!(f.validate().is_ok());
    }

    #[test]
    fn test_relay_error_still_accepts() {
        let http = ScriptedClient::new();
        http.reply(500, "upstream down");
        let store = MemoryStore::new();
        let intake = intake(http.clone(), store.clone());

        let submission = block_on(intake.submit(&form())).unwrap();
        assert_eq!(submission.relay, RelayOutcome::Rejected(500));
        assert_eq!(intake.load_all(), vec![submission.inquiry]);
    }

    #[test]
    fn test_relay_timeout_still_accepts() {
        let http = ScriptedClient::new();
        http.fail(TransportError::Timeout(20_000));
        let store = MemoryStore::new();
        let intake = intake(http.clone(), store);

        let submission = block_on(intake.submit(&form())).unwrap();
        assert!(matches!(submission.relay, RelayOutcome::Unreachable(_)));
        assert_eq!(intake.load_all().len(), 1);
        assert_eq!(http.calls(), 1);
    }

    #[test]
    fn test_invalid_form_sends_and_stores_nothing() {
        let http = ScriptedClient::new();
        let store = MemoryStore::new();
        let intake = intake(http.clone(), store.clone());
        let mut bad = form();
        bad.email = "nope".to_string();

        assert_eq!(
            block_on(intake.submit(&bad)),
            Err(IntakeError::Validation(ValidationError::InvalidEmail))
        );
        assert_eq!(http.calls(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_newest_first_and_relay_payload() {
        let http = ScriptedClient::new();
        http.reply(200, "{\"ok\":true}");
        http.reply(200, "{\"ok\":true}");
        let intake = intake(http.clone(), MemoryStore::new());

        let first = block_on(intake.submit(&form())).unwrap();
        let mut second_form = form();
        second_form.name = "  김영희 ".to_string();
        let second = block_on(intake.submit(&second_form)).unwrap();
        assert_eq!(second.relay, RelayOutcome::Delivered);

        let stored = intake.load_all();
        assert_eq!(stored[0].id, second.inquiry.id);
        assert_eq!(stored[0].name, "김영희");
        assert_eq!(stored[1].id, first.inquiry.id);
        assert_ne!(first.inquiry.id, second.inquiry.id);
        assert_eq!(stored[0].submitted_at, "2026. 10. 18. 12:00:00");

        let requests = http.requests.borrow();
        let payload: serde_json::Value = serde_json::from_str(requests[1].body.as_deref().unwrap()).unwrap();
        assert_eq!(
            payload,
            serde_json::json!({
                "name": "김영희",
                "contact": "010-1234-5678",
                "email": "hong@example.com",
                "message": "숏폼 광고 이벤트 문의드립니다."
            })
        );
        assert_eq!(requests[1].url, config::RELAY_ENDPOINT);
    }

    #[test]
    fn test_unreadable_list_is_kept_aside() {
        let store = MemoryStore::new();
        store.set(keys::INQUIRIES, "[{\"id\": truncated").unwrap();
        let intake = intake(ScriptedClient::new(), store.clone());

        let inquiry = intake.record(&form()).unwrap();
        assert_eq!(intake.load_all(), vec![inquiry.clone()]);
        assert_eq!(
            store.get(&format!("{}_unreadable_{}", keys::INQUIRIES, inquiry.id)).as_deref(),
            Some("[{\"id\": truncated")
        );
    }

    #[test]
    fn test_disabled_relay_makes_no_request() {
        let http = ScriptedClient::new();
        let intake = intake(http.clone(), MemoryStore::new()).with_relay(None);
        let submission = block_on(intake.submit(&form())).unwrap();
        assert_eq!(submission.relay, RelayOutcome::Disabled);
        assert_eq!(http.calls(), 0);
    }

    #[test]
    fn test_csv_quotes_awkward_fields() {
        let inquiry = Inquiry {
            id: "abc".to_string(),
            name: "홍길동, 팀장".to_string(),
            contact: "010".to_string(),
            email: "a@b.co".to_string(),
            message: "첫 줄\n\"인용\"".to_string(),
            submitted_at: "2026. 10. 18. 12:00:00".to_string(),
        };
        let csv = inquiries_to_csv(&[inquiry]);
        assert!(csv.starts_with('\u{feff}'));
        assert_eq!(
            csv.lines().nth(1).unwrap(),
            "2026. 10. 18. 12:00:00,\"홍길동, 팀장\",010,a@b.co,\"첫 줄"
        );
        assert!(csv.ends_with("\"\"인용\"\"\"\r\n"));
    }
}
