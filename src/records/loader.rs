//! Load and save the customer table as CSV
//!
//! Columns: `customer_name,policy_number,policy_amount,due_date,event_type`,
//! dates in ISO format (`2024-03-01`), event types by display label.

use super::{CustomerRecord, EventType, RecordStore};
use crate::error::Result;
use chrono::NaiveDate;
use csv::{Reader, Writer};
use log::info;
use std::io::{Read, Write};
use std::path::Path;

/// Raw CSV row matching the customer table columns
#[derive(Debug, serde::Deserialize, serde::Serialize)]
struct CsvRow {
    customer_name: String,
    policy_number: String,
    policy_amount: f64,
    due_date: NaiveDate,
    event_type: String,
}

impl CsvRow {
    fn to_record(self) -> Result<CustomerRecord> {
        let event_type: EventType = self.event_type.parse()?;
        Ok(CustomerRecord {
            customer_name: self.customer_name,
            policy_number: self.policy_number,
            policy_amount: self.policy_amount,
            due_date: self.due_date,
            event_type,
        })
    }

    fn from_record(record: &CustomerRecord) -> Self {
        Self {
            customer_name: record.customer_name.clone(),
            policy_number: record.policy_number.clone(),
            policy_amount: record.policy_amount,
            due_date: record.due_date,
            event_type: record.event_type.as_str().to_string(),
        }
    }
}

/// Upsert every row of a customer CSV file into `store`.
///
/// Returns the number of rows read. Every row is parsed and validated before
/// any is saved, so a bad row leaves `store` untouched.
pub fn load_customers<P: AsRef<Path>>(store: &mut RecordStore, path: P) -> Result<usize> {
    let path = path.as_ref();
    let reader = Reader::from_path(path)?;
    let count = load_rows(store, reader)?;
    info!("loaded {} customer rows from {}", count, path.display());
    Ok(count)
}

/// Upsert customers from any reader (e.g., string buffer, upload stream)
pub fn load_customers_from_reader<R: Read>(store: &mut RecordStore, reader: R) -> Result<usize> {
    load_rows(store, Reader::from_reader(reader))
}

fn load_rows<R: Read>(store: &mut RecordStore, mut reader: Reader<R>) -> Result<usize> {
    let mut records = Vec::new();
    for result in reader.deserialize() {
        let row: CsvRow = result?;
        let record = row.to_record()?;
        record.validate()?;
        records.push(record);
    }

    let count = records.len();
    for record in records {
        store.upsert_customer(record)?;
    }
    Ok(count)
}

/// Write the customer table in store order
pub fn write_customers<W: Write>(store: &RecordStore, writer: W) -> Result<()> {
    let mut csv_writer = Writer::from_writer(writer);
    for record in store.customers() {
        csv_writer.serialize(CsvRow::from_record(record))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write the customer table to a file
pub fn save_customers<P: AsRef<Path>>(store: &RecordStore, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = std::fs::File::create(path)?;
    write_customers(store, file)?;
    info!("wrote {} customers to {}", store.customer_count(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = "\
customer_name,policy_number,policy_amount,due_date,event_type
Ravi,LIC-1001,10000,2024-03-01,Birthday
Sunita,LIC-1002,250000.5,2024-03-02,Wedding Anniversary
Ravi,LIC-1001,12000,2024-04-01,Payment Reminder
";

    #[test]
    fn test_load_from_reader() {
        let mut store = RecordStore::new();
        let rows = load_customers_from_reader(&mut store, TABLE.as_bytes()).unwrap();
        assert_eq!(rows, 3);

        // Third row replaced Ravi in place
        let customers = store.list_customers();
        assert_eq!(customers.len(), 2);
        assert_eq!(customers[0].customer_name, "Ravi");
        assert_eq!(customers[0].event_type, EventType::PaymentReminder);
        assert_eq!(customers[0].policy_amount, 12_000.0);
        assert_eq!(customers[1].event_type, EventType::WeddingAnniversary);
    }

    #[test]
    fn test_bad_rows_are_rejected() {
        let bad_event = "\
customer_name,policy_number,policy_amount,due_date,event_type
Ravi,LIC-1001,10000,2024-03-01,Graduation
";
        let mut store = RecordStore::new();
        let err = load_customers_from_reader(&mut store, bad_event.as_bytes()).unwrap_err();
        assert!(err.is_validation());

        let zero_amount = "\
customer_name,policy_number,policy_amount,due_date,event_type
Ravi,LIC-1001,0,2024-03-01,Birthday
";
        let err = load_customers_from_reader(&mut store, zero_amount.as_bytes()).unwrap_err();
        assert!(err.is_validation());

        let bad_date = "\
customer_name,policy_number,policy_amount,due_date,event_type
Ravi,LIC-1001,100,01/03/2024,Birthday
";
        assert!(load_customers_from_reader(&mut store, bad_date.as_bytes()).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn test_bad_row_after_good_rows_saves_nothing() {
        let mut store = RecordStore::new();
        store
            .upsert_customer(CustomerRecord::new(
                "Existing",
                "LIC-0001",
                500.0,
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                EventType::Birthday,
            ))
            .unwrap();
        let before = store.snapshot();

        let table = "\
customer_name,policy_number,policy_amount,due_date,event_type
Good,P-1,100,2024-03-01,Birthday
Existing,LIC-0001,900,2024-02-01,Payment Reminder
Bad,P-2,0,2024-03-02,Birthday
";
        let err = load_customers_from_reader(&mut store, table.as_bytes()).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(store.customer_count(), 1);
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn test_names_keep_their_spacing() {
        let table = "\
customer_name,policy_number,policy_amount,due_date,event_type
 Ravi,LIC-1001,100,2024-03-01,Birthday
";
        let mut store = RecordStore::new();
        load_customers_from_reader(&mut store, table.as_bytes()).unwrap();

        // Same key as saving the record directly
        store
            .upsert_customer(CustomerRecord::new(
                " Ravi",
                "LIC-1001",
                200.0,
                NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                EventType::Birthday,
            ))
            .unwrap();
        assert_eq!(store.customer_count(), 1);
        assert_eq!(store.get_customer(" Ravi").unwrap().policy_amount, 200.0);
        assert!(store.get_customer("Ravi").unwrap_err().is_not_found());
    }

    #[test]
    fn test_save_and_reload_file() {
        let mut store = RecordStore::new();
        load_customers_from_reader(&mut store, TABLE.as_bytes()).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("customers.csv");
        save_customers(&store, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("Wedding Anniversary"));

        let mut reloaded = RecordStore::new();
        assert_eq!(load_customers(&mut reloaded, &path).unwrap(), 2);
        assert_eq!(reloaded.snapshot(), store.snapshot());
    }
}
