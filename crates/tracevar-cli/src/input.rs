//! Input adapters turning log files into ordered cases
//!
//! Two on-disk shapes are supported:
//!
//! - **JSON case files**: `{"cases": [...]}` or a bare array, each case
//!   `{"id": "...", "events": [{"concept:name": "...", ...}]}`
//! - **JSONL event rows**: one `{"case_id": ..., "concept:name": "..."}` object
//!   per line, grouped into cases in first-seen order
//!
//! Events without a usable `concept:name` are rejected here.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};
use tracevar_core::{EventRecord, InputError};
use tracing::debug;

/// XES attribute key holding the event-type name
pub const EVENT_NAME_KEY: &str = "concept:name";

/// Supported input file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// JSON document of cases
    Json,
    /// JSON lines, one event row per line
    Jsonl,
}

impl LogFormat {
    /// Guess the format from the file extension
    pub fn from_path(path: &Path) -> Result<Self, InputError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("json") => Ok(LogFormat::Json),
            Some("jsonl") | Some("ndjson") => Ok(LogFormat::Jsonl),
            Some(other) => Err(InputError::UnsupportedFormat(other.to_string())),
            None => Err(InputError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// One raw event record
#[derive(Debug, Clone, PartialEq)]
pub struct RawEvent {
    /// Event-type name
    pub name: String,
    /// Remaining attributes, kept for callers that need them
    pub attributes: Map<String, Value>,
}

impl EventRecord for RawEvent {
    fn event_name(&self) -> &str {
        &self.name
    }
}

/// One case: an ordered sequence of raw events
#[derive(Debug, Clone, PartialEq)]
pub struct RawCase {
    /// Case identifier
    pub id: String,
    /// Events in execution order
    pub events: Vec<RawEvent>,
}

impl<'a> IntoIterator for &'a RawCase {
    type Item = &'a RawEvent;
    type IntoIter = std::slice::Iter<'a, RawEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

#[derive(Deserialize)]
struct CaseEntry {
    #[serde(default)]
    id: Option<Value>,
    events: Vec<Value>,
}

#[derive(Deserialize)]
struct EventEntry {
    #[serde(rename = "concept:name", default)]
    name: Option<String>,
    #[serde(flatten)]
    attributes: Map<String, Value>,
}

#[derive(Deserialize)]
struct EventRow {
    #[serde(default)]
    case_id: Option<Value>,
    #[serde(rename = "concept:name", default)]
    name: Option<String>,
    #[serde(flatten)]
    attributes: Map<String, Value>,
}

/// Case ids may be strings or numbers
fn id_string(value: Option<Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn checked_name(name: Option<String>, case: &str, position: usize) -> Result<String, InputError> {
    match name {
        Some(name) if !name.is_empty() => Ok(name),
        _ => Err(InputError::MissingEventName {
            case: case.to_string(),
            position,
        }),
    }
}

/// Read cases from a file, detecting the format from the extension if needed
pub fn read_cases(path: &Path, format: Option<LogFormat>) -> Result<Vec<RawCase>, InputError> {
    let format = match format {
        Some(format) => format,
        None => LogFormat::from_path(path)?,
    };
    let file = File::open(path)?;

    let cases = match format {
        LogFormat::Json => parse_json_cases(BufReader::new(file))?,
        LogFormat::Jsonl => parse_jsonl_rows(BufReader::new(file))?,
    };
    debug!(path = %path.display(), ?format, cases = cases.len(), "Read cases");
    Ok(cases)
}

/// The case array of a document: the document itself or its `cases` member
fn case_entries(doc: Value) -> Result<Vec<Value>, InputError> {
    match doc {
        Value::Array(entries) => Ok(entries),
        Value::Object(mut map) => match map.remove("cases") {
            Some(Value::Array(entries)) => Ok(entries),
            Some(_) => Err(InputError::InvalidDocument(
                "`cases` must be an array".to_string(),
            )),
            None => Err(InputError::InvalidDocument(
                "object has no `cases` array".to_string(),
            )),
        },
        _ => Err(InputError::InvalidDocument(
            "expected an array of cases or an object with a `cases` array".to_string(),
        )),
    }
}

fn parse_case(index: usize, value: Value) -> Result<RawCase, InputError> {
    let malformed = |message: String| InputError::MalformedCase { index, message };

    let entry: CaseEntry = serde_json::from_value(value).map_err(|e| malformed(e.to_string()))?;
    let id = id_string(entry.id).unwrap_or_else(|| format!("#{}", index));

    let events = entry
        .events
        .into_iter()
        .enumerate()
        .map(|(position, event)| {
            let event: EventEntry = serde_json::from_value(event)
                .map_err(|e| malformed(format!("event {}: {}", position, e)))?;
            Ok(RawEvent {
                name: checked_name(event.name, &id, position)?,
                attributes: event.attributes,
            })
        })
        .collect::<Result<Vec<_>, InputError>>()?;
    Ok(RawCase { id, events })
}

/// Parse a JSON case document
///
/// Syntax errors carry the line; malformed cases and events carry their
/// position in the document.
pub fn parse_json_cases<R: Read>(reader: R) -> Result<Vec<RawCase>, InputError> {
    let doc: Value = serde_json::from_reader(reader).map_err(|e| InputError::Parse {
        line: e.line(),
        message: e.to_string(),
    })?;

    case_entries(doc)?
        .into_iter()
        .enumerate()
        .map(|(index, entry)| parse_case(index, entry))
        .collect()
}

/// Parse JSON lines of event rows, grouping rows into cases
pub fn parse_jsonl_rows<R: BufRead>(reader: R) -> Result<Vec<RawCase>, InputError> {
    let mut cases: Vec<RawCase> = Vec::new();
    let mut by_id: HashMap<String, usize> = HashMap::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = index + 1;
        if line.trim().is_empty() {
            continue;
        }

        let row: EventRow = serde_json::from_str(&line).map_err(|e| InputError::Parse {
            line: line_no,
            message: e.to_string(),
        })?;
        let case_id = id_string(row.case_id).ok_or(InputError::MissingCaseId { line: line_no })?;

        let slot = *by_id.entry(case_id.clone()).or_insert_with(|| {
            cases.push(RawCase {
                id: case_id.clone(),
                events: Vec::new(),
            });
            cases.len() - 1
        });
        let case = &mut cases[slot];
        let name = checked_name(row.name, &case.id, case.events.len())?;
        case.events.push(RawEvent {
            name,
            attributes: row.attributes,
        });
    }

    Ok(cases)
}
