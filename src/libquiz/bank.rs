use crate::libquiz::error::Error;
use crate::libquiz::question::Question;
use log::{debug, info};
use std::path::Path;
use std::time::Instant;

pub(crate) const BUNDLED_QUESTIONS: &str = include_str!("../../data/questions.json");

pub(crate) fn load(source: &str) -> Result<Vec<Question>, Error> {
    let now = Instant::now();
    let questions: Vec<Question> = serde_json::from_str(source)?;
    debug!(
        "[Bank] Parsed {} questions in {} ms.",
        questions.len(),
        now.elapsed().as_millis()
    );
    Ok(questions)
}

pub(crate) fn load_file(path: &Path) -> Result<Vec<Question>, Error> {
    info!("[Bank] Reading questions from {:?}", path);
    let json = std::fs::read_to_string(path)?;
    load(json.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::io::Write;

    #[test]
    fn loads_records() {
        let bank = load(
            r#"[
                {"image_name": "a", "hint": "h1", "answer": "cat"},
                {"image_name": "b", "hint": "h2", "answer": "dog"}
            ]"#,
        )
        .unwrap();

        assert_eq!(bank.len(), 2);
        assert_eq!(bank[0].image_tag, "a");
        assert_eq!(bank[1].hint, "h2");
        assert_eq!(bank[1].answer, "dog");
    }

    #[test]
    fn missing_field_is_malformed() {
        let result = load(r#"[{"image_name": "a", "hint": "h1"}]"#);
        assert!(matches!(result, Err(Error::MalformedData(_))));
    }

    #[test]
    fn wrong_type_is_malformed() {
        let result = load(r#"[{"image_name": "a", "hint": "h1", "answer": 3}]"#);
        assert!(matches!(result, Err(Error::MalformedData(_))));
    }

    #[test]
    fn non_array_is_malformed() {
        let result = load(r#"{"image_name": "a", "hint": "h1", "answer": "cat"}"#);
        assert!(matches!(result, Err(Error::MalformedData(_))));
        assert!(matches!(load("not json"), Err(Error::MalformedData(_))));
    }

    #[test]
    fn bundled_bank_fills_a_default_deck() {
        let bank = load(BUNDLED_QUESTIONS).unwrap();
        let distinct: HashSet<&Question> = bank.iter().collect();
        assert!(distinct.len() >= 10);
        assert!(bank.iter().all(|q| !q.answer.trim().is_empty()));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"image_name": "tower", "hint": "tall", "answer": "Pisa"}}]"#
        )
        .unwrap();

        let bank = load_file(file.path()).unwrap();
        assert_eq!(bank.len(), 1);
        assert_eq!(bank[0].answer, "Pisa");
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_file(&dir.path().join("nope.json"));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
