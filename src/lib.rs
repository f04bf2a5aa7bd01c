//! Agent Portal - back office for an insurance agent
//!
//! This library provides:
//! - Keyed, insertion-ordered storage of the agent profile and customer policy records
//! - Compound-interest maturity projections for policy amounts
//! - Due-date notification eligibility with idempotent "notified" tracking
//! - CSV customer tables and JSON session snapshots

pub mod error;
pub mod config;
pub mod records;
pub mod projection;
pub mod schedule;

// Re-export commonly used types
pub use error::{PortalError, Result};
pub use config::PortalConfig;
pub use records::{AgentProfile, CustomerRecord, EventType, RecordStore};
pub use projection::{CalculatorConfig, MaturityCalculator, MaturityProjection, ProjectionPoint};
pub use schedule::{DueNotification, EventScheduler, NotificationStatus};
