use std::sync::OnceLock;

use time::OffsetDateTime;
use time::format_description::FormatItem;

pub(super) const FIELD_DELIMITER: char = '\t';

#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) struct PoolRow {
    pub(super) name: String,
    pub(super) health: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) struct DatasetRow {
    pub(super) name: String,
    pub(super) used: String,
    pub(super) available: String,
    pub(super) mountpoint: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) struct SnapshotRow {
    pub(super) name: String,
    pub(super) size: String,
    pub(super) creation: String,
}

/// Splits listing output into rows with at least `min_fields` fields.
/// Shorter lines (including blank ones) are dropped.
fn rows(output: &str, min_fields: usize) -> impl Iterator<Item = Vec<&str>> {
    output.trim().split('\n').filter_map(move |line| {
        let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
        if fields.len() >= min_fields {
            Some(fields)
        } else {
            tracing::trace!(line, min_fields, "skip short line");
            None
        }
    })
}

pub(super) fn pool_rows(output: &str) -> Vec<PoolRow> {
    rows(output, 2)
        .map(|f| PoolRow {
            name: f[0].to_string(),
            health: f[1].to_string(),
        })
        .collect()
}

pub(super) fn dataset_rows(output: &str) -> Vec<DatasetRow> {
    rows(output, 4)
        .map(|f| DatasetRow {
            name: f[0].to_string(),
            used: f[1].to_string(),
            available: f[2].to_string(),
            mountpoint: f[3].to_string(),
        })
        .collect()
}

pub(super) fn snapshot_rows(output: &str) -> Vec<SnapshotRow> {
    rows(output, 3)
        .map(|f| SnapshotRow {
            name: f[0].to_string(),
            size: f[1].to_string(),
            creation: f[2].to_string(),
        })
        .collect()
}

fn date_format() -> Option<&'static [FormatItem<'static>]> {
    static FMT: OnceLock<Option<Vec<FormatItem<'static>>>> = OnceLock::new();
    FMT.get_or_init(|| {
        time::format_description::parse(
            "[day padding:zero]-[month repr:numerical padding:zero]-[year]",
        )
        .ok()
    })
    .as_deref()
}

/// Renders a creation epoch as `DD-MM-YYYY` (UTC). Anything that is not a
/// base-10 second count comes back unchanged.
pub fn format_creation(raw: &str) -> String {
    let formatted = raw
        .parse::<i64>()
        .ok()
        .and_then(|secs| OffsetDateTime::from_unix_timestamp(secs).ok())
        .and_then(|dt| dt.format(date_format()?).ok());
    formatted.unwrap_or_else(|| raw.to_string())
}

#[cfg(test)]
#[path = "../tests/inventory/parse_tests.rs"]
mod tests;
