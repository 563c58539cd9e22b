//! JSON output writer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::Message;
use crate::error::Result;

/// Writes messages to a file as a pretty-printed JSON array.
///
/// # Format
/// ```json
/// [
///   {"author": "Alice", "date": "2023-02-01T14:05:00", "content": "Hello", ...},
///   {"author": "Bob", "date": "2023-02-01T14:06:00", "content": null, "media": "image", ...}
/// ]
/// ```
pub fn write_json(messages: &[Message], output_path: impl AsRef<Path>) -> Result<()> {
    let json = to_json(messages)?;
    let mut writer = BufWriter::new(File::create(output_path)?);
    writer.write_all(json.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Converts messages to a pretty-printed JSON array.
pub fn to_json(messages: &[Message]) -> Result<String> {
    Ok(serde_json::to_string_pretty(messages)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Parser;
    use tempfile::NamedTempFile;

    fn sample() -> Vec<Message> {
        Parser::for_group("Family")
            .unwrap()
            .parse_str(
                "[01.02.23, 14:05:00] Alice: Hello\n\
                 [01.02.23, 14:06:00] Bob: video note omitted",
            )
            .unwrap()
    }

    #[test]
    fn test_to_json_basic() {
        let json = to_json(&sample()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert!(parsed.is_array());
        assert_eq!(parsed[0]["author"], "Alice");
        assert_eq!(parsed[0]["content"], "Hello");
        assert_eq!(parsed[0]["date"], "2023-02-01T14:05:00");
        assert_eq!(parsed[1]["media"], "video note");
        assert!(parsed[1]["content"].is_null());
    }

    #[test]
    fn test_to_json_empty() {
        assert_eq!(to_json(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_write_json_roundtrip() {
        let messages = sample();
        let temp_file = NamedTempFile::new().unwrap();

        write_json(&messages, temp_file.path()).unwrap();

        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        let parsed: Vec<Message> = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, messages);
    }
}
