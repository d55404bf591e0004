//! Score serialization.
//!
//! Scores printed to stdout use the compact JSON form. Scores written to a
//! file are pretty-printed with 4-space indentation, matching what the
//! downstream upload pipeline parses.

use crate::scoring::ScoreMap;
use anyhow::Result;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::io::Write;
use std::path::Path;

pub trait ScoreWriter {
    fn write_scores(&mut self, scores: &ScoreMap) -> Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
    pretty: bool,
}

impl<W: Write> JsonWriter<W> {
    pub fn compact(writer: W) -> Self {
        Self {
            writer,
            pretty: false,
        }
    }

    pub fn pretty(writer: W) -> Self {
        Self {
            writer,
            pretty: true,
        }
    }
}

impl<W: Write> ScoreWriter for JsonWriter<W> {
    fn write_scores(&mut self, scores: &ScoreMap) -> Result<()> {
        let json = if self.pretty {
            to_pretty_json(scores)?
        } else {
            serde_json::to_string(scores)?
        };
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

/// Serialize with 4-space indentation.
pub fn to_pretty_json(scores: &ScoreMap) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    scores.serialize(&mut serializer)?;
    Ok(String::from_utf8(buf)?)
}

/// Write scores to `path` as pretty-printed JSON, creating parent
/// directories as needed.
pub fn write_score_file(scores: &ScoreMap, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        super::ensure_dir(parent)?;
    }
    let file = fs::File::create(path)?;
    let mut writer = JsonWriter::pretty(file);
    writer.write_scores(scores)
}
