//! CSV output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::Message;
use crate::error::Result;

const HEADER: [&str; 8] = [
    "Date", "Author", "Content", "Edited", "Deleted", "Media", "Call", "Poll",
];

/// Writes messages to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Date`, `Author`, `Content`, `Edited`, `Deleted`, `Media`, `Call`, `Poll`
/// - `Date` is `YYYY-MM-DD HH:MM:SS`; absent values are empty cells
/// - `Poll` lists `option=votes` pairs joined with ` | `
/// - Encoding: UTF-8
pub fn write_csv(messages: &[Message], output_path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(output_path)?;
    write_records(messages, file)
}

/// Converts messages to a CSV string.
pub fn to_csv(messages: &[Message]) -> Result<String> {
    let mut buffer = Vec::new();
    write_records(messages, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_records<W: Write>(messages: &[Message], sink: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(sink);

    writer.write_record(HEADER)?;
    for msg in messages {
        writer.write_record(build_record(msg))?;
    }

    writer.flush()?;
    Ok(())
}

/// Build CSV record for a single message.
fn build_record(msg: &Message) -> [String; 8] {
    [
        msg.date.format("%Y-%m-%d %H:%M:%S").to_string(),
        msg.author.clone(),
        msg.content.clone().unwrap_or_default(),
        msg.edited.to_string(),
        msg.deleted.to_string(),
        msg.media.map(|m| m.to_string()).unwrap_or_default(),
        msg.call.map(|c| c.to_string()).unwrap_or_default(),
        msg.poll
            .as_ref()
            .map(|options| {
                options
                    .iter()
                    .map(|o| format!("{}={}", o.option, o.votes))
                    .collect::<Vec<_>>()
                    .join(" | ")
            })
            .unwrap_or_default(),
    ]
}
