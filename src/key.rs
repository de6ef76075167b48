use std::io::{self, BufRead, Write};

use crate::error::CliError;

/// Environment variable consulted when `--app-id` is absent.
pub const APP_ID_ENV: &str = "DUMMYAPI_APP_ID";

const PROMPT: &str = "Enter your api key: ";

/// Resolve the API key: flag, then environment (including `.env`), then an
/// interactive prompt on stdin.
pub fn resolve_app_id(flag: Option<String>) -> Result<String, CliError> {
    if let Some(key) = flag {
        return Ok(key);
    }
    if let Ok(key) = std::env::var(APP_ID_ENV) {
        return Ok(key);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    prompt_app_id(&mut stdin.lock(), &mut stdout.lock())
}

/// Ask for the key on `output` and read one line from `input`.
///
/// An empty line is accepted as an (invalid) key; only end of input fails.
pub fn prompt_app_id<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<String, CliError> {
    output.write_all(PROMPT.as_bytes())?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(CliError::MissingKey);
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
