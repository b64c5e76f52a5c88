use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::pool::InvalidDataError;

/// A card of reference study material shown on the explanation screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyNote {
    #[serde(default)]
    pub icon: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub sections: Vec<NoteSection>,
}

/// A headed list of key points. Points may use `**bold**` emphasis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteSection {
    pub heading: String,
    #[serde(default)]
    pub points: Vec<String>,
}

/// Read the optional `notes` array from the data record.
///
/// A record without `notes` (or with `null`) simply has no notes.
///
/// # Errors
///
/// Returns `InvalidDataError::MalformedNotes` if `notes` is present but does not
/// match the expected shape.
pub fn parse_notes(data: &Value) -> Result<Vec<StudyNote>, InvalidDataError> {
    match data.get("notes") {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(raw) => Vec::<StudyNote>::deserialize(raw).map_err(|err| {
            InvalidDataError::MalformedNotes {
                reason: err.to_string(),
            }
        }),
    }
}
