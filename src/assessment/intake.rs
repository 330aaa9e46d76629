use super::domain::AnswerSet;
use serde::{Deserialize, Deserializer};
use std::fs::File;
use std::io::Read;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum AnswerImportError {
    #[error("failed to open answers file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to read answers CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Hydrates an answer set from a CSV export of quiz responses
/// (`Question ID`, `Selected Option` columns). Structural CSV problems
/// are errors; rows with missing or non-numeric values are skipped, the
/// same stance the answer mapper takes toward unresolvable entries.
pub struct AnswerCsvImporter;

impl AnswerCsvImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<AnswerSet, AnswerImportError> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<AnswerSet, AnswerImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut answers = AnswerSet::new();
        for record in csv_reader.deserialize::<AnswerRow>() {
            let row = record?;
            let (Some(question_id), Some(ordinal)) = (row.question_id(), row.ordinal()) else {
                continue;
            };
            answers.record(question_id, ordinal);
        }

        Ok(answers)
    }
}

#[derive(Debug, Deserialize)]
struct AnswerRow {
    #[serde(
        rename = "Question ID",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    question_id: Option<String>,
    #[serde(
        rename = "Selected Option",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    selected_option: Option<String>,
}

impl AnswerRow {
    fn question_id(&self) -> Option<u16> {
        self.question_id.as_deref().and_then(|raw| raw.parse().ok())
    }

    fn ordinal(&self) -> Option<u8> {
        self.selected_option
            .as_deref()
            .and_then(|raw| raw.parse().ok())
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn imports_well_formed_rows() {
        let csv = "Question ID,Selected Option\n1,2\n5,1\n";
        let answers = AnswerCsvImporter::from_reader(Cursor::new(csv)).expect("import succeeds");
        assert_eq!(answers.len(), 2);
        let entries: Vec<(u16, u8)> = answers.entries().collect();
        assert_eq!(entries, vec![(1, 2), (5, 1)]);
    }

    #[test]
    fn skips_rows_with_missing_or_garbled_values() {
        let csv = "Question ID,Selected Option\n1,2\n,3\nseven,1\n4,\n9,two\n";
        let answers = AnswerCsvImporter::from_reader(Cursor::new(csv)).expect("import succeeds");
        assert_eq!(answers.len(), 1);
        assert_eq!(answers.entries().next(), Some((1, 2)));
    }

    #[test]
    fn later_rows_replace_earlier_answers_to_the_same_question() {
        let csv = "Question ID,Selected Option\n3,1\n3,4\n";
        let answers = AnswerCsvImporter::from_reader(Cursor::new(csv)).expect("import succeeds");
        assert_eq!(answers.entries().next(), Some((3, 4)));
    }
}
