use std::collections::HashMap;
use std::io::Read;

use tracing::debug;

/// One raw row from the tabular source: field name to value.
pub type RawRecord = HashMap<String, String>;

#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("Failed to read catalog file {0}: {1}")]
    Open(String, std::io::Error),
    #[error("Failed to parse catalog file {0}: {1}")]
    Parse(String, csv::Error),
}

/// Read up to `max_records` rows from a CSV file with a header line.
///
/// The cap is the caller-side truncation policy for very large inputs; the
/// normalizer itself never bounds its input.
pub fn read_records(path: &str, max_records: usize) -> Result<Vec<RawRecord>, ReadError> {
    let file = std::fs::File::open(path).map_err(|e| ReadError::Open(path.to_string(), e))?;
    let records = records_from_reader(file, max_records)
        .map_err(|e| ReadError::Parse(path.to_string(), e))?;

    debug!("Read {} records from {}", records.len(), path);
    Ok(records)
}

fn records_from_reader<R: Read>(input: R, max_records: usize) -> Result<Vec<RawRecord>, csv::Error> {
    let mut reader = csv::Reader::from_reader(input);
    let mut records = Vec::new();

    for result in reader.deserialize() {
        if records.len() >= max_records {
            break;
        }
        let record: RawRecord = result?;
        records.push(record);
    }

    Ok(records)
}
