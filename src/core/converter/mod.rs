pub mod formatter;
pub mod input;

use std::io::Write;
use std::num::ParseIntError;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use formatter::SpacedAsciiFormatter;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogRecord {
    pub file: String,
    pub line: i64,
    pub content: String,
}

#[derive(Debug, thiserror::Error)]
pub enum LineError {
    #[error("expected `file:line:content`, found fewer than two `:` separators")]
    MissingSeparator,
    #[error("line number {value:?} is not an integer: {source}")]
    InvalidLineNumber {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("read failed: {0}")]
    Read(#[source] std::io::Error),
    #[error("write failed: {0}")]
    Write(#[source] std::io::Error),
    #[error("record could not be serialized: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("input line {number}: {source}")]
    Line {
        number: usize,
        #[source]
        source: LineError,
    },
}

pub fn parse_line(text: &str) -> Result<LogRecord, LineError> {
    let mut parts = text.splitn(3, ':');
    let file = parts.next().unwrap_or_default();
    let (Some(number), Some(content)) = (parts.next(), parts.next()) else {
        return Err(LineError::MissingSeparator);
    };
    let number = number.trim();
    let line = number
        .parse::<i64>()
        .map_err(|source| LineError::InvalidLineNumber {
            value: number.to_string(),
            source,
        })?;

    Ok(LogRecord {
        file: file.to_string(),
        line,
        content: content.to_string(),
    })
}

pub fn write_record<W: Write>(writer: &mut W, record: &LogRecord) -> Result<(), ConvertError> {
    let mut serializer = serde_json::Serializer::with_formatter(&mut *writer, SpacedAsciiFormatter);
    record.serialize(&mut serializer)?;
    writer.write_all(b"\n").map_err(ConvertError::Write)?;
    writer.flush().map_err(ConvertError::Write)
}

pub fn convert_lines<I, W>(lines: I, writer: &mut W) -> Result<usize, ConvertError>
where
    I: IntoIterator<Item = Result<String, ConvertError>>,
    W: Write,
{
    let mut written = 0_usize;
    for (index, line) in lines.into_iter().enumerate() {
        let record = parse_line(&line?).map_err(|source| ConvertError::Line {
            number: index + 1,
            source,
        })?;
        write_record(writer, &record)?;
        written += 1;
    }
    tracing::debug!(records = written, "conversion finished");
    Ok(written)
}
