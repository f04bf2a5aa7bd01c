//! Notification eligibility for customer events
//!
//! Eligibility is an exact match between a record's due date and the date
//! being checked; there is no recurrence and no early/late window. Whether a
//! notification has gone out is tracked per `(customer, date)` and only moves
//! from `Pending` to `Notified`. Delivery itself happens outside this crate.

use crate::records::{CustomerRecord, EventType, RecordStore};
use chrono::NaiveDate;
use log::{debug, info};
use std::collections::HashSet;
use std::fmt;

/// Notification status of one customer on one due date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationStatus {
    Pending,
    Notified,
}

/// A customer whose event falls on the queried date
#[derive(Debug, Clone, PartialEq)]
pub struct DueNotification<'a> {
    pub record: &'a CustomerRecord,
    pub event_type: EventType,
}

impl<'a> DueNotification<'a> {
    pub fn customer_name(&self) -> &'a str {
        &self.record.customer_name
    }

    /// Label for the action that sends this notification
    pub fn action_label(&self) -> String {
        format!("Send {} Message to {}", self.event_type, self.record.customer_name)
    }

    /// Confirmation text once the notification has been sent
    pub fn confirmation(&self) -> String {
        format!("{} message sent to {}!", self.event_type, self.record.customer_name)
    }
}

impl fmt::Display for DueNotification<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} for {} (policy {}, due {})",
            self.event_type, self.record.customer_name, self.record.policy_number, self.record.due_date
        )
    }
}

/// Tracks which due notifications have been triggered
#[derive(Debug, Clone, Default)]
pub struct EventScheduler {
    notified: HashSet<(String, NaiveDate)>,
}

impl EventScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every customer whose due date is exactly `as_of`, in store order
    pub fn due_on<'a>(&self, store: &'a RecordStore, as_of: NaiveDate) -> Vec<DueNotification<'a>> {
        let due: Vec<DueNotification<'a>> = store
            .customers()
            .filter(|record| record.is_due_on(as_of))
            .map(|record| DueNotification {
                record,
                event_type: record.event_type,
            })
            .collect();
        debug!("{} of {} customers due on {}", due.len(), store.customer_count(), as_of);
        due
    }

    /// Due notifications on `as_of` not yet marked notified
    pub fn pending_on<'a>(&self, store: &'a RecordStore, as_of: NaiveDate) -> Vec<DueNotification<'a>> {
        self.due_on(store, as_of)
            .into_iter()
            .filter(|due| self.status(due.customer_name(), as_of) == NotificationStatus::Pending)
            .collect()
    }

    /// Record that `customer_name` was notified for `as_of`.
    ///
    /// Idempotent: returns `true` the first time, `false` on repeats.
    pub fn mark_notified(&mut self, customer_name: &str, as_of: NaiveDate) -> bool {
        let newly = self.notified.insert((customer_name.to_string(), as_of));
        if newly {
            info!("notification recorded for {} on {}", customer_name, as_of);
        } else {
            debug!("{} already notified on {}", customer_name, as_of);
        }
        newly
    }

    pub fn status(&self, customer_name: &str, as_of: NaiveDate) -> NotificationStatus {
        if self.notified.contains(&(customer_name.to_string(), as_of)) {
            NotificationStatus::Notified
        } else {
            NotificationStatus::Pending
        }
    }

    /// Number of `(customer, date)` pairs marked notified
    pub fn notified_count(&self) -> usize {
        self.notified.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn store_with_two() -> RecordStore {
        let mut store = RecordStore::new();
        store
            .upsert_customer(CustomerRecord::new("Asha", "LIC-1", 1_000.0, date(2024, 3, 1), EventType::Birthday))
            .unwrap();
        store
            .upsert_customer(CustomerRecord::new(
                "Bharat",
                "LIC-2",
                2_000.0,
                date(2024, 3, 2),
                EventType::WeddingAnniversary,
            ))
            .unwrap();
        store
    }

    #[test]
    fn test_due_on_exact_date() {
        let store = store_with_two();
        let scheduler = EventScheduler::new();

        let due = scheduler.due_on(&store, date(2024, 3, 1));
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].customer_name(), "Asha");
        assert_eq!(due[0].event_type, EventType::Birthday);

        // Same day a year later is not a match
        assert!(scheduler.due_on(&store, date(2025, 3, 1)).is_empty());
        assert!(scheduler.due_on(&store, date(2024, 2, 29)).is_empty());
    }

    #[test]
    fn test_due_on_preserves_store_order() {
        let mut store = RecordStore::new();
        for name in ["Zoya", "Arjun", "Mohan"] {
            store
                .upsert_customer(CustomerRecord::new(name, "P", 10.0, date(2024, 5, 5), EventType::PaymentReminder))
                .unwrap();
        }
        let scheduler = EventScheduler::new();
        let names: Vec<&str> = scheduler
            .due_on(&store, date(2024, 5, 5))
            .iter()
            .map(|d| d.customer_name())
            .collect();
        assert_eq!(names, vec!["Zoya", "Arjun", "Mohan"]);
    }

    #[test]
    fn test_mark_notified_is_idempotent() {
        let mut scheduler = EventScheduler::new();
        let day = date(2024, 3, 1);

        assert_eq!(scheduler.status("Asha", day), NotificationStatus::Pending);
        assert!(scheduler.mark_notified("Asha", day));
        assert!(!scheduler.mark_notified("Asha", day));
        assert_eq!(scheduler.notified_count(), 1);
        assert_eq!(scheduler.status("Asha", day), NotificationStatus::Notified);

        // A different date starts fresh
        assert_eq!(scheduler.status("Asha", date(2025, 3, 1)), NotificationStatus::Pending);
    }

    #[test]
    fn test_pending_excludes_notified() {
        let mut store = store_with_two();
        store
            .upsert_customer(CustomerRecord::new("Chitra", "LIC-3", 300.0, date(2024, 3, 1), EventType::PaymentReminder))
            .unwrap();
        let mut scheduler = EventScheduler::new();
        let day = date(2024, 3, 1);

        assert_eq!(scheduler.pending_on(&store, day).len(), 2);
        scheduler.mark_notified("Asha", day);

        let pending = scheduler.pending_on(&store, day);
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].customer_name(), "Chitra");

        // Still due, just not pending
        assert_eq!(scheduler.due_on(&store, day).len(), 2);
    }

    #[test]
    fn test_messages() {
        let store = store_with_two();
        let scheduler = EventScheduler::new();
        let due = scheduler.due_on(&store, date(2024, 3, 2));

        assert_eq!(due[0].action_label(), "Send Wedding Anniversary Message to Bharat");
        assert_eq!(due[0].confirmation(), "Wedding Anniversary message sent to Bharat!");
        assert_eq!(
            due[0].to_string(),
            "Wedding Anniversary for Bharat (policy LIC-2, due 2024-03-02)"
        );
    }
}
