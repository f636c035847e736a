use super::{NoisyField, TransactionRecord, TransactionStatus, TransactionType};

use std::cmp::Ordering;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;

use crate::types::{MerchantId, TerminalId};

fn create_record(day: u32, amount: &str) -> Result<TransactionRecord> {
    Ok(TransactionRecord {
        merchant_id: MerchantId::new(4821)?,
        terminal_id: TerminalId::new(537)?,
        timestamp: Some(Utc.with_ymd_and_hms(2026, 10, day, 12, 30, 0).unwrap()),
        transaction_type: TransactionType::Payment,
        amount: Some(Decimal::from_str(amount)?),
        status: Some(TransactionStatus::Successful)
    })
}

fn write_records(records: &[TransactionRecord]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new().from_writer(vec![]);

    for record in records {
        writer.serialize(record)?;
    }

    let bytes = writer.into_inner().map_err(|error| anyhow!("{error}"))?;

    Ok(String::from_utf8(bytes)?)
}

#[test]
fn test_record_serializes_fields_in_column_order() -> Result<()> {
    let written = write_records(&[create_record(3, "125.50")?])?;
    let mut lines = written.lines();

    assert_eq!(lines.next(), Some(TransactionRecord::HEADER.join(",").as_str()));
    assert_eq!(lines.next(), Some("M4821,T537,2026-10-03 12:30:00.000000,payment,125.50,successful"));
    assert_eq!(lines.next(), None);

    Ok(())
}

#[test]
fn test_missing_fields_serialize_as_empty_cells() -> Result<()> {
    let mut without_amount = create_record(3, "10.00")?;
    without_amount.clear(NoisyField::Amount);
    let mut without_status = create_record(4, "10.00")?;
    without_status.clear(NoisyField::Status);
    let mut without_timestamp = create_record(5, "10.00")?;
    without_timestamp.clear(NoisyField::Timestamp);

    let written = write_records(&[without_amount, without_status, without_timestamp])?;
    let rows: Vec<&str> = written.lines().skip(1).collect();

    assert_eq!(rows, vec![
        "M4821,T537,2026-10-03 12:30:00.000000,payment,,successful",
        "M4821,T537,2026-10-04 12:30:00.000000,payment,10.00,",
        "M4821,T537,,payment,10.00,successful",
    ]);

    Ok(())
}

#[test]
fn test_record_reads_back_from_written_csv() -> Result<()> {
    let mut record = create_record(7, "4999.99")?;
    record.clear(NoisyField::Status);

    let written = write_records(&[record.clone()])?;
    let mut reader = csv::ReaderBuilder::new().from_reader(written.as_bytes());
    let parsed: Vec<TransactionRecord> = reader.deserialize().collect::<Result<_, _>>()?;

    assert_eq!(parsed, vec![record]);

    Ok(())
}

#[test]
fn test_clear_marks_exactly_one_field_missing() -> Result<()> {
    for field in NoisyField::ALL {
        let mut record = create_record(3, "42.00")?;

        assert!(record.missing_fields().is_empty());

        record.clear(field);

        assert_eq!(record.missing_fields(), vec![field]);
        assert_eq!(record.merchant_id.to_string(), "M4821");
        assert_eq!(record.transaction_type, TransactionType::Payment);
    }

    Ok(())
}

#[test]
fn test_missing_timestamps_sort_after_real_ones() -> Result<()> {
    let early = create_record(1, "10.00")?;
    let late = create_record(20, "10.00")?;
    let mut missing = create_record(10, "10.00")?;
    missing.clear(NoisyField::Timestamp);

    assert_eq!(early.cmp_by_timestamp(&late), Ordering::Less);
    assert_eq!(late.cmp_by_timestamp(&missing), Ordering::Less);
    assert_eq!(missing.cmp_by_timestamp(&early), Ordering::Greater);
    assert_eq!(missing.cmp_by_timestamp(&missing.clone()), Ordering::Equal);

    let mut records = vec![missing.clone(), late.clone(), early.clone()];
    records.sort_by(TransactionRecord::cmp_by_timestamp);

    assert_eq!(records, vec![early, late, missing]);

    Ok(())
}
