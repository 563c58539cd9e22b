//! JSON Lines (JSONL) output writer.
//!
//! One message per line, handy for streaming consumers and line-oriented
//! tools like `jq -c` or `grep`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::Message;
use crate::error::Result;

/// Writes messages to a file in JSONL format.
///
/// Each line is a complete JSON object:
/// ```jsonl
/// {"author":"Alice","date":"2023-02-01T14:05:00","content":"Hello",...}
/// {"author":"Bob","date":"2023-02-01T14:06:00","content":null,...}
/// ```
pub fn write_jsonl(messages: &[Message], output_path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);

    for msg in messages {
        serde_json::to_writer(&mut writer, msg)?;
        writer.write_all(b"\n")?;
    }

    writer.flush()?;
    Ok(())
}

/// Converts messages to a JSONL string.
pub fn to_jsonl(messages: &[Message]) -> Result<String> {
    let mut output = String::new();
    for msg in messages {
        output.push_str(&serde_json::to_string(msg)?);
        output.push('\n');
    }
    Ok(output)
}
