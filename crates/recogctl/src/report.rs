//! Result artifact writer: the input fixture with verdict columns
//! appended, flushed once after the full run.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;

use recog_common::RowVerdict;

use crate::config::RunConfig;
use crate::fixture::Fixture;

const OUTPUT_DIR: &str = "test_results";
const NA: &str = "n/a";

/// Write the annotated fixture to a timestamped CSV under
/// `test_results/`, prefixed with the bot name when one was given.
/// Returns the path written.
pub fn write_results(
    config: &RunConfig,
    fixture: &Fixture,
    verdicts: &[RowVerdict],
) -> Result<PathBuf> {
    let mut filename = format!(
        "entity_accuracy_results_{}.csv",
        Local::now().format("%Y-%m-%d_%H-%M-%S")
    );
    if let Some(bot_name) = &config.bot_name {
        filename = format!("{}_{}", bot_name, filename);
    }

    fs::create_dir_all(OUTPUT_DIR)
        .with_context(|| format!("Failed to create output directory {}", OUTPUT_DIR))?;
    let path = Path::new(OUTPUT_DIR).join(filename);
    write_to(&path, fixture, verdicts)?;
    Ok(path)
}

fn write_to(path: &Path, fixture: &Fixture, verdicts: &[RowVerdict]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create results file {}", path.display()))?;

    let mut headers = fixture.headers.clone();
    headers.push("correct".to_string());
    if fixture.has_entities_column() {
        headers.push("recognized_entities".to_string());
    }
    headers.push("recognized_intent_name".to_string());
    writer.write_record(&headers).context("Failed to write header row")?;

    for (row, verdict) in fixture.rows.iter().zip(verdicts) {
        let mut record: Vec<String> = row
            .iter()
            .map(|value| {
                if value.is_empty() {
                    NA.to_string()
                } else {
                    value.clone()
                }
            })
            .collect();
        record.push(verdict.correct_cell());
        if fixture.has_entities_column() {
            record.push(
                verdict
                    .recognized_entities_text
                    .clone()
                    .unwrap_or_else(|| NA.to_string()),
            );
        }
        record.push(verdict.recognized_intent_name.clone());
        writer.write_record(&record).context("Failed to write result row")?;
    }

    writer.flush().context("Failed to flush results file")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use tempfile::{tempdir, NamedTempFile};

    fn fixture_from(content: &str) -> Fixture {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        Fixture::load(file.path()).unwrap()
    }

    fn verdict(correct: bool, entities: Option<&str>) -> RowVerdict {
        RowVerdict {
            intent_match: correct,
            entity_match: entities.map(|_| correct),
            format_error: false,
            recognized_intent_name: "book_flight".to_string(),
            recognized_entities_text: entities.map(str::to_string),
        }
    }

    fn read_rows(path: &Path) -> Vec<Vec<String>> {
        let mut reader = csv::Reader::from_path(path).unwrap();
        let mut rows: Vec<Vec<String>> =
            vec![reader.headers().unwrap().iter().map(str::to_string).collect()];
        for record in reader.records() {
            rows.push(record.unwrap().iter().map(str::to_string).collect());
        }
        rows
    }

    #[test]
    fn appends_verdict_columns_after_fixture_columns() {
        let fixture = fixture_from(
            "user_phrase,intent_name,entities\n\
             fly me to paris,book_flight,destination==Paris=>PAR\n",
        );
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_to(
            &path,
            &fixture,
            &[verdict(true, Some("destination==Paris=>PAR"))],
        )
        .unwrap();

        let rows = read_rows(&path);
        assert_eq!(
            rows[0],
            vec![
                "user_phrase",
                "intent_name",
                "entities",
                "correct",
                "recognized_entities",
                "recognized_intent_name",
            ]
        );
        assert_eq!(
            rows[1],
            vec![
                "fly me to paris",
                "book_flight",
                "destination==Paris=>PAR",
                "true",
                "destination==Paris=>PAR",
                "book_flight",
            ]
        );
    }

    #[test]
    fn empty_cells_are_written_as_na() {
        let fixture = fixture_from(
            "user_phrase,intent_name,entities\n\
             hello,greeting,\n",
        );
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_to(&path, &fixture, &[verdict(true, None)]).unwrap();

        let rows = read_rows(&path);
        assert_eq!(rows[1][2], "n/a");
        assert_eq!(rows[1][4], "n/a");
    }

    #[test]
    fn intent_only_fixture_omits_recognized_entities_column() {
        let fixture = fixture_from("user_phrase,intent_name\nhello,greeting\n");
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_to(&path, &fixture, &[verdict(false, None)]).unwrap();

        let rows = read_rows(&path);
        assert_eq!(
            rows[0],
            vec!["user_phrase", "intent_name", "correct", "recognized_intent_name"]
        );
        assert_eq!(rows[1], vec!["hello", "greeting", "false", "book_flight"]);
    }
}
