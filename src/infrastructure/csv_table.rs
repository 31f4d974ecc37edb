// CSV body → Dataset
use crate::domain::dataset::Dataset;
use anyhow::{Context, Result};
use std::collections::HashSet;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Parse a CSV export. The first record names the columns; blank lines are
/// skipped and short rows are padded with empty values.
pub fn parse_csv(data: &[u8]) -> Result<Dataset> {
    let data = data.strip_prefix(UTF8_BOM).unwrap_or(data);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(data);
    let mut records = reader.records();

    let header = match records.next() {
        Some(record) => record.context("Failed to parse CSV header")?,
        None => anyhow::bail!("No columns to parse from file"),
    };
    let mut dataset = Dataset::new(column_names(&header));
    let width = dataset.columns().len();

    for record in records {
        let record = record.context("Failed to parse CSV row")?;
        if record.len() > width {
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            anyhow::bail!(
                "Error tokenizing data. Expected {} fields in line {}, saw {}",
                width,
                line,
                record.len()
            );
        }
        dataset.push_row(record.iter().map(str::to_string).collect());
    }

    Ok(dataset)
}

/// Unique column names: blanks become `Unnamed: {index}` and repeats get a
/// `.1`, `.2`, ... suffix.
fn column_names(header: &csv::StringRecord) -> Vec<String> {
    let mut used = HashSet::new();
    header
        .iter()
        .enumerate()
        .map(|(i, raw)| {
            let base = if raw.is_empty() {
                format!("Unnamed: {}", i)
            } else {
                raw.to_string()
            };
            let mut name = base.clone();
            let mut n = 0;
            while used.contains(&name) {
                n += 1;
                name = format!("{}.{}", base, n);
            }
            used.insert(name.clone());
            name
        })
        .collect()
}
