//! CSV fixture loading and validation.

use std::path::Path;

use anyhow::{bail, Context, Result};

use recog_common::RowCase;

/// The fixture table, cells kept verbatim so the output artifact can
/// reproduce the input columns unchanged.
#[derive(Debug)]
pub struct Fixture {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    user_phrase_idx: usize,
    intent_name_idx: usize,
    entities_idx: Option<usize>,
}

impl Fixture {
    /// Load and validate a fixture. Missing file or missing required
    /// column is fatal; no request is issued for a bad fixture.
    pub fn load(path: &Path) -> Result<Self> {
        let mut reader = csv::Reader::from_path(path)
            .with_context(|| format!("Failed to open fixture {}", path.display()))?;

        let headers: Vec<String> = reader
            .headers()
            .context("Fixture has no header row")?
            .iter()
            .map(str::to_string)
            .collect();
        let user_phrase_idx = required_column(&headers, "user_phrase")?;
        let intent_name_idx = required_column(&headers, "intent_name")?;
        let entities_idx = headers.iter().position(|h| h == "entities");

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.context("Failed to read fixture row")?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(Self {
            headers,
            rows,
            user_phrase_idx,
            intent_name_idx,
            entities_idx,
        })
    }

    pub fn has_entities_column(&self) -> bool {
        self.entities_idx.is_some()
    }

    /// The rows as evaluation cases. An empty `entities` cell means
    /// "no expectation" for that row, not "expect the empty set".
    pub fn cases(&self) -> Vec<RowCase> {
        self.rows
            .iter()
            .map(|row| RowCase {
                user_phrase: cell(row, self.user_phrase_idx),
                intent_name: cell(row, self.intent_name_idx),
                entities: self
                    .entities_idx
                    .and_then(|idx| row.get(idx))
                    .filter(|text| !text.is_empty())
                    .cloned(),
            })
            .collect()
    }
}

fn cell(row: &[String], idx: usize) -> String {
    row.get(idx).cloned().unwrap_or_default()
}

fn required_column(headers: &[String], name: &str) -> Result<usize> {
    match headers.iter().position(|h| h == name) {
        Some(idx) => Ok(idx),
        None => bail!("Fixture is missing required column `{}`", name),
    }
}
