//! Agent profile and customer record storage

mod data;
mod store;
pub mod loader;

pub use data::{AgentProfile, CustomerRecord, EventType};
pub use store::{RecordStore, StoreSnapshot};
pub use loader::{load_customers, load_customers_from_reader, save_customers, write_customers};
