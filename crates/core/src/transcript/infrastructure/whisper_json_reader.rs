use serde_json::Value;

use crate::transcript::domain::segment::Segment;
use crate::transcript::domain::transcript::Transcript;
use crate::transcript::domain::transcript_reader::TranscriptReader;

/// Reads the JSON document written by whisper.cpp (`-oj`).
///
/// ```json
/// {"transcription": [
///   {"timestamps": {"from": "00:00:00,000", "to": "00:00:02,500"},
///    "offsets": {"from": 0, "to": 2500},
///    "text": " hello there"}
/// ]}
/// ```
///
/// A document with a `transcription` array is segmented. Every other input,
/// including text that is not JSON at all, is returned unstructured so the
/// caller can still search the raw text.
pub struct WhisperJsonReader;

impl TranscriptReader for WhisperJsonReader {
    fn read(&self, raw: &str) -> Transcript {
        let doc = serde_json::from_str::<Value>(raw).ok();
        let entries = doc
            .as_ref()
            .and_then(|d| d.get("transcription"))
            .and_then(Value::as_array);

        match entries {
            Some(entries) => Transcript::Segmented(entries.iter().map(Self::segment).collect()),
            None => Transcript::Unstructured(raw.to_string()),
        }
    }
}

impl WhisperJsonReader {
    fn segment(entry: &Value) -> Segment {
        let text = entry
            .get("text")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        Segment {
            text,
            start: Self::timestamp(entry, "from"),
            end: Self::timestamp(entry, "to"),
        }
    }

    /// Prefer the formatted timestamp; fall back to the millisecond offset.
    fn timestamp(entry: &Value, key: &str) -> Option<String> {
        if let Some(ts) = entry
            .get("timestamps")
            .and_then(|t| t.get(key))
            .and_then(Value::as_str)
        {
            return Some(ts.to_string());
        }
        entry
            .get("offsets")
            .and_then(|o| o.get(key))
            .and_then(Value::as_u64)
            .map(|ms| format!("{:.3}", ms as f64 / 1000.0))
    }
}
