// ============================================================
// Layer 4 — Question Loader
// ============================================================
// Loads question .xml files from a directory using quick-xml.
//
// The document structure looks like:
//   <questions>
//     <question id="Q1">
//       <text>What is X?</text>
//       <related id="Q2" relevance="Relevant">
//         <text>What is Y?</text>
//       </related>
//     </question>
//   </questions>
//
// We walk the event stream collecting <question> and <related>
// elements, one level deep — a <related> element's own linkage
// is never descended into.
//
// Reference: quick-xml crate documentation
//            Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::{fs, path::Path};

use crate::domain::question::{Question, QuestionMap};
use crate::domain::traits::QuestionSource;

/// Loads all .xml question files from a given directory.
/// Implements the QuestionSource trait from Layer 3.
pub struct XmlQuestionLoader {
    /// Path to the directory containing .xml files
    dir: String,
}

impl XmlQuestionLoader {
    /// Create a new XmlQuestionLoader pointed at a directory
    pub fn new(dir: impl Into<String>) -> Self {
        Self { dir: dir.into() }
    }
}

/// Implement the QuestionSource trait so the application layer
/// can call load_all() without knowing about XML internals
impl QuestionSource for XmlQuestionLoader {
    fn load_all(&self) -> Result<QuestionMap> {
        let dir = Path::new(&self.dir);

        // If the directory doesn't exist, return empty rather than crashing.
        // This allows the system to run even without data (demo mode).
        if !dir.exists() {
            tracing::warn!(
                "Question directory '{}' does not exist — returning empty corpus",
                self.dir
            );
            return Ok(QuestionMap::new());
        }

        let mut corpus = QuestionMap::new();

        // Walk every entry in the directory
        for entry in fs::read_dir(dir)
            .with_context(|| format!("Cannot read directory '{}'", self.dir))?
        {
            let entry = entry?;
            let path  = entry.path();

            // Only process files with the .xml extension
            if path.extension().and_then(|e| e.to_str()) == Some("xml") {
                match load_single_file(&path) {
                    Ok(parsed) => {
                        tracing::debug!(
                            "Loaded: {} ({} questions)",
                            path.display(),
                            parsed.len()
                        );
                        for (id, question) in parsed {
                            // Later files win on duplicate ids
                            if corpus.insert(id.clone(), question).is_some() {
                                tracing::debug!(
                                    "Duplicate question id '{}' — keeping the later record",
                                    id
                                );
                            }
                        }
                    }
                    // Log a warning but continue — don't fail on one bad file
                    Err(e) => {
                        tracing::warn!("Skipping '{}': {}", path.display(), e);
                    }
                }
            }
        }

        tracing::info!("Successfully loaded {} questions", corpus.len());
        Ok(corpus)
    }
}

/// Parse a single .xml file and return its question mapping
fn load_single_file(path: &Path) -> Result<QuestionMap> {
    let xml = fs::read_to_string(path)
        .with_context(|| format!("Cannot read '{}'", path.display()))?;
    parse_questions(&xml)
}

/// Parse one XML document into Question records.
///
/// Tracks at most one open <question> and one open <related> at a
/// time, since linkage is only ever one level deep.
fn parse_questions(xml: &str) -> Result<QuestionMap> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut corpus            = QuestionMap::new();
    let mut question: Option<Question> = None;
    let mut related:  Option<Question> = None;
    let mut in_text           = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"question" => {
                    let id = required_attr(&e, "id")
                        .context("<question> element is missing its id attribute")?;
                    question = Some(Question::new(id, ""));
                }
                b"related" => {
                    let id = required_attr(&e, "id")
                        .context("<related> element is missing its id attribute")?;
                    let mut record = Question::new(id, "");
                    // The relevance label rides on the linkage, not the text
                    record.relevance = attr(&e, "relevance")?;
                    related = Some(record);
                }
                b"text" => in_text = true,
                _ => {}
            },
            Ok(Event::Text(t)) if in_text => {
                let text = t.unescape()?;
                // Text inside an open <related> belongs to it,
                // otherwise to the enclosing <question>
                if let Some(r) = related.as_mut() {
                    r.question.push_str(&text);
                } else if let Some(q) = question.as_mut() {
                    q.question.push_str(&text);
                }
            }
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"text" => in_text = false,
                b"related" => {
                    if let (Some(q), Some(r)) = (question.as_mut(), related.take()) {
                        q.related.insert(r.id.clone(), r);
                    }
                }
                b"question" => {
                    if let Some(q) = question.take() {
                        corpus.insert(q.id.clone(), q);
                    }
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(anyhow::anyhow!(
                    "XML parse error at byte {}: {}",
                    reader.buffer_position(),
                    e
                ));
            }
        }
    }

    Ok(corpus)
}

/// Read one attribute value from a start tag, unescaped
fn attr(e: &BytesStart<'_>, name: &str) -> Result<Option<String>> {
    for attribute in e.attributes() {
        let attribute = attribute?;
        if attribute.key.as_ref() == name.as_bytes() {
            return Ok(Some(attribute.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

/// Like attr(), but the attribute must be present
fn required_attr(e: &BytesStart<'_>, name: &str) -> Result<String> {
    attr(e, name)?.with_context(|| format!("missing '{}' attribute", name))
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<questions>
  <question id="Q1">
    <text>What is X?</text>
    <related id="Q2" relevance="Relevant">
      <text>What is Y?</text>
    </related>
    <related id="Q3" relevance="Irrelevant">
      <text>Where is Z?</text>
    </related>
  </question>
  <question id="Q4">
    <text>How does W work?</text>
  </question>
</questions>"#;

    #[test]
    fn test_parses_questions_and_related() {
        let corpus = parse_questions(SAMPLE).unwrap();

        assert_eq!(corpus.len(), 2);
        let q1 = &corpus["Q1"];
        assert_eq!(q1.question, "What is X?");
        assert_eq!(q1.related.len(), 2);
        assert_eq!(q1.related["Q2"].question, "What is Y?");
        assert_eq!(corpus["Q4"].question, "How does W work?");
    }

    #[test]
    fn test_relevance_lands_on_related_record() {
        let corpus = parse_questions(SAMPLE).unwrap();
        let q1     = &corpus["Q1"];

        assert_eq!(q1.related["Q2"].relevance.as_deref(), Some("Relevant"));
        assert_eq!(q1.related["Q3"].relevance.as_deref(), Some("Irrelevant"));
        // Top-level questions carry no relevance of their own
        assert!(q1.relevance.is_none());
    }

    #[test]
    fn test_vectors_start_empty() {
        let corpus = parse_questions(SAMPLE).unwrap();
        assert!(corpus["Q1"].feature_vector.is_empty());
        assert!(corpus["Q1"].related["Q2"].feature_vector.is_empty());
    }

    #[test]
    fn test_escaped_text_is_unescaped() {
        let xml = r#"<questions><question id="Q1"><text>Is 1 &lt; 2?</text></question></questions>"#;
        let corpus = parse_questions(xml).unwrap();
        assert_eq!(corpus["Q1"].question, "Is 1 < 2?");
    }

    #[test]
    fn test_missing_id_is_an_error() {
        let xml = r#"<questions><question><text>No id here</text></question></questions>"#;
        assert!(parse_questions(xml).is_err());
    }

    #[test]
    fn test_malformed_xml_is_an_error() {
        assert!(parse_questions("<questions><question id=\"Q1\">").is_err());
    }

    #[test]
    fn test_missing_directory_gives_empty_corpus() {
        let loader = XmlQuestionLoader::new("does/not/exist");
        let corpus = loader.load_all().unwrap();
        assert!(corpus.is_empty());
    }

    #[test]
    fn test_load_all_skips_bad_files() {
        let dir = tempfile::tempdir().unwrap();

        let mut good = std::fs::File::create(dir.path().join("good.xml")).unwrap();
        good.write_all(SAMPLE.as_bytes()).unwrap();

        let mut bad = std::fs::File::create(dir.path().join("bad.xml")).unwrap();
        bad.write_all(b"<questions><question id=").unwrap();

        let loader = XmlQuestionLoader::new(dir.path().to_str().unwrap());
        let corpus = loader.load_all().unwrap();

        // The good file still loads; the bad one is skipped
        assert_eq!(corpus.len(), 2);
        assert!(corpus.contains_key("Q1"));
    }
}
