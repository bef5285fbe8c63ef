use crate::cli::logs::color::Colorizer;
use crate::cli::logs::constants::{
    ELLIPSIS, MAX_MESSAGE_WIDTH, SHORT_TIMESTAMP_WIDTH, YAML_INDENT,
};
use crate::cli::logs::types::LogRecord;
use std::borrow::Cow;
use std::io::{self, Write};

/// Width of the longest level name, `WARNING`.
const LEVEL_WIDTH: usize = 7;

pub fn render_pretty<W: Write>(
    writer: &mut W,
    record: &LogRecord,
    verbosity: u8,
    colors: &Colorizer,
) -> io::Result<()> {
    let ts = if verbosity == 0 {
        shorten_timestamp(&record.ts)
    } else {
        record.ts.as_str()
    };

    let message = if verbosity == 0 {
        shorten_message(&record.msg)
    } else {
        Cow::Borrowed(record.msg.as_str())
    };

    let level = format!(
        "{:<width$}",
        record.level.as_upper_str(),
        width = LEVEL_WIDTH
    );

    writeln!(
        writer,
        "{} {} {} {} {}",
        colors.timestamp(ts),
        colors.level(record.level, &level),
        colors.pod(&record.logging_pod),
        colors.logger(&record.logger),
        message
    )?;

    if verbosity >= 2 && !record.additional_fields.is_empty() {
        let yaml = serde_yaml::to_string(&record.additional_fields).map_err(io::Error::other)?;
        for line in yaml.lines() {
            writeln!(writer, "{YAML_INDENT}{line}")?;
        }
    }

    Ok(())
}

fn shorten_timestamp(ts: &str) -> &str {
    ts.get(..SHORT_TIMESTAMP_WIDTH).unwrap_or(ts)
}

/// First line of the message, capped at [`MAX_MESSAGE_WIDTH`] characters.
fn shorten_message(msg: &str) -> Cow<'_, str> {
    let (first_line, rest) = match msg.split_once('\n') {
        Some((first, rest)) => (first.trim_end_matches('\r'), Some(rest)),
        None => (msg, None),
    };

    let truncated = match first_line.char_indices().nth(MAX_MESSAGE_WIDTH) {
        Some((cut, _)) => &first_line[..cut],
        None => first_line,
    };

    if truncated.len() == msg.len() {
        return Cow::Borrowed(msg);
    }

    if truncated.len() < first_line.len() || rest.is_some() {
        Cow::Owned(format!("{truncated}{ELLIPSIS}"))
    } else {
        Cow::Borrowed(truncated)
    }
}
