//! Agent profile and customer policy record structures

use crate::error::{PortalError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Event a customer record is due for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    Birthday,
    WeddingAnniversary,
    PaymentReminder,
}

impl EventType {
    /// All event types in the order the dashboard offers them
    pub const ALL: [EventType; 3] = [
        EventType::Birthday,
        EventType::WeddingAnniversary,
        EventType::PaymentReminder,
    ];

    /// Display label as shown in the event selector
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Birthday => "Birthday",
            EventType::WeddingAnniversary => "Wedding Anniversary",
            EventType::PaymentReminder => "Payment Reminder",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for EventType {
    type Err = PortalError;

    /// Accepts the display label or the variant spelling, ignoring case
    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "birthday" => Ok(EventType::Birthday),
            "weddinganniversary" => Ok(EventType::WeddingAnniversary),
            "paymentreminder" => Ok(EventType::PaymentReminder),
            _ => Err(PortalError::validation(
                "event_type",
                format!("unknown event type '{}'", s),
            )),
        }
    }
}

/// The agent's own profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentProfile {
    /// Agent name, unique key
    pub name: String,

    pub email: String,

    pub phone: String,

    /// Free text list of awards, rankings, club memberships
    pub achievements: String,

    /// Reference to an uploaded picture (path or upload id); never inspected
    #[serde(default)]
    pub profile_picture: Option<String>,
}

impl AgentProfile {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        achievements: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            achievements: achievements.into(),
            profile_picture: None,
        }
    }

    /// Attach a picture reference
    pub fn with_picture(mut self, reference: impl Into<String>) -> Self {
        self.profile_picture = Some(reference.into());
        self
    }

    /// Check the key is usable
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(PortalError::validation("name", "must not be empty"));
        }
        Ok(())
    }
}

/// A customer and the single policy the agent tracks for them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRecord {
    /// Customer name, unique key within the store
    pub customer_name: String,

    pub policy_number: String,

    /// Sum assured / premium amount, strictly positive
    pub policy_amount: f64,

    /// Date the event falls due
    pub due_date: NaiveDate,

    pub event_type: EventType,
}

impl CustomerRecord {
    pub fn new(
        customer_name: impl Into<String>,
        policy_number: impl Into<String>,
        policy_amount: f64,
        due_date: NaiveDate,
        event_type: EventType,
    ) -> Self {
        Self {
            customer_name: customer_name.into(),
            policy_number: policy_number.into(),
            policy_amount,
            due_date,
            event_type,
        }
    }

    /// Check key and amount rules
    pub fn validate(&self) -> Result<()> {
        if self.customer_name.trim().is_empty() {
            return Err(PortalError::validation("customer_name", "must not be empty"));
        }
        if !(self.policy_amount.is_finite() && self.policy_amount > 0.0) {
            return Err(PortalError::validation(
                "policy_amount",
                format!("must be a finite amount greater than zero, got {}", self.policy_amount),
            ));
        }
        Ok(())
    }

    /// Whether the event falls exactly on `date`
    pub fn is_due_on(&self, date: NaiveDate) -> bool {
        self.due_date == date
    }
}
