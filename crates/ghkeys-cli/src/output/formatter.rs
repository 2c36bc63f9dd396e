use crate::{CliError, CliResult, OutputConfig, OutputMode, UserKeyResult};

use serde::Serialize;

/// Marks a failed user in plain output. A `#` line is a comment to every
/// authorized_keys consumer, so it can never be read as a key.
pub const ERROR_LINE_PREFIX: &str = "# error: ";

#[derive(Serialize)]
struct JsonRecord<'a> {
    user: &'a str,
    keys: &'a [String],
    error: Option<String>,
}

/// Render aggregated results as text. Pure: no I/O, same input gives the same bytes.
pub fn format(results: &[UserKeyResult], config: &OutputConfig) -> CliResult<String> {
    match OutputMode::from_config(config) {
        OutputMode::Json { pretty } => format_json(results, pretty),
        OutputMode::Inline => Ok(format_inline(results)),
        OutputMode::Plain => Ok(format_plain(results)),
    }
}

fn format_json(results: &[UserKeyResult], pretty: bool) -> CliResult<String> {
    let records: Vec<JsonRecord<'_>> = results
        .iter()
        .map(|result| JsonRecord {
            user: result.user(),
            keys: result.keys(),
            error: result.error().map(ToString::to_string),
        })
        .collect();

    let rendered = if pretty {
        serde_json::to_string_pretty(&records)
    } else {
        serde_json::to_string(&records)
    };

    rendered.map_err(CliError::from_json)
}

fn format_inline(results: &[UserKeyResult]) -> String {
    let mut out = String::new();

    for result in results.iter().filter(|r| !r.is_failure()) {
        for key in result.keys() {
            out.push_str(key);
            out.push(' ');
            out.push_str(&single_line(result.user()));
            out.push('\n');
        }
    }

    out
}

fn format_plain(results: &[UserKeyResult]) -> String {
    let mut out = String::new();

    for result in results {
        out.push_str("# ");
        out.push_str(&single_line(result.user()));
        out.push('\n');

        match result.error() {
            Some(error) => {
                out.push_str(ERROR_LINE_PREFIX);
                out.push_str(&single_line(&error.to_string()));
                out.push('\n');
            }
            None => {
                for key in result.keys() {
                    out.push_str(key);
                    out.push('\n');
                }
            }
        }

        out.push('\n');
    }

    out
}

/// Usernames and messages are arbitrary text; a line break inside one would
/// start a new line of output that a consumer could read as a key.
fn single_line(text: &str) -> String {
    text.replace(['\r', '\n'], " ")
}
