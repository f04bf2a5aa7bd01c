//! In-memory keyed storage for agent profiles and customer records
//!
//! Both collections are insertion ordered. Replacing an existing key keeps
//! the entry at its original position, so the customer table does not jump
//! around when a record is edited.

use super::{AgentProfile, CustomerRecord};
use crate::error::{PortalError, Result};
use indexmap::IndexMap;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Owner of every profile and customer record for the session
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    profiles: IndexMap<String, AgentProfile>,
    customers: IndexMap<String, CustomerRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or fully replace the profile keyed by `profile.name`
    pub fn upsert_profile(&mut self, profile: AgentProfile) -> Result<()> {
        profile.validate()?;
        let replaced = self.profiles.insert(profile.name.clone(), profile).is_some();
        debug!("profile saved (replaced: {})", replaced);
        Ok(())
    }

    /// Insert or fully replace the customer keyed by `record.customer_name`
    pub fn upsert_customer(&mut self, record: CustomerRecord) -> Result<()> {
        record.validate()?;
        let key = record.customer_name.clone();
        let replaced = self.customers.insert(key, record).is_some();
        debug!(
            "customer saved, {} on file (replaced: {})",
            self.customers.len(),
            replaced
        );
        Ok(())
    }

    pub fn get_profile(&self, name: &str) -> Result<&AgentProfile> {
        self.profiles
            .get(name)
            .ok_or_else(|| PortalError::not_found("profile", name))
    }

    pub fn get_customer(&self, customer_name: &str) -> Result<&CustomerRecord> {
        self.customers
            .get(customer_name)
            .ok_or_else(|| PortalError::not_found("customer", customer_name))
    }

    /// Profiles in first-insertion order
    pub fn list_profiles(&self) -> Vec<&AgentProfile> {
        self.profiles.values().collect()
    }

    /// Customers in first-insertion order
    pub fn list_customers(&self) -> Vec<&CustomerRecord> {
        self.customers.values().collect()
    }

    /// Iterate customers without collecting
    pub fn customers(&self) -> impl Iterator<Item = &CustomerRecord> {
        self.customers.values()
    }

    pub fn customer_count(&self) -> usize {
        self.customers.len()
    }

    pub fn profile_count(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty() && self.customers.is_empty()
    }

    /// Owned copy of the store contents, in order
    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            profiles: self.profiles.values().cloned().collect(),
            customers: self.customers.values().cloned().collect(),
        }
    }

    /// Rebuild a store from a snapshot, validating every record.
    ///
    /// Duplicate keys in the snapshot collapse the same way repeated saves do.
    pub fn from_snapshot(snapshot: StoreSnapshot) -> Result<Self> {
        let mut store = Self::new();
        for profile in snapshot.profiles {
            store.upsert_profile(profile)?;
        }
        for customer in snapshot.customers {
            store.upsert_customer(customer)?;
        }
        Ok(store)
    }

    /// Write the store to a JSON snapshot file
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(writer, &self.snapshot())?;
        info!(
            "saved {} profiles and {} customers to {}",
            self.profiles.len(),
            self.customers.len(),
            path.display()
        );
        Ok(())
    }

    /// Restore a store from a JSON snapshot file
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);
        let snapshot: StoreSnapshot = serde_json::from_reader(reader)?;
        let store = Self::from_snapshot(snapshot)?;
        info!(
            "restored {} profiles and {} customers from {}",
            store.profile_count(),
            store.customer_count(),
            path.display()
        );
        Ok(store)
    }
}

/// Serializable image of a [`RecordStore`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    #[serde(default)]
    pub profiles: Vec<AgentProfile>,
    #[serde(default)]
    pub customers: Vec<CustomerRecord>,
}
