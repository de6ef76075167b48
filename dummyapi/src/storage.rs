use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, warn};

use crate::error::{DummyApiError, Result};

/// Whether a JSON value counts as "nothing to save".
///
/// Null, empty containers, empty strings, `false` and zero are all empty.
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

/// Write `data` as JSON to `path`, overwriting any existing file.
///
/// Empty data is rejected with [`DummyApiError::EmptyInput`] and no file is
/// created. The write is not atomic; a crash mid-write leaves a partial file.
pub fn save_to_file<T: Serialize + ?Sized>(data: &T, path: &Path) -> Result<()> {
    let value = serde_json::to_value(data)?;
    if is_empty_value(&value) {
        warn!(path = %path.display(), "no data to save");
        return Err(DummyApiError::EmptyInput {
            path: path.to_path_buf(),
        });
    }

    write_json(&value, path).map_err(|e| {
        error!(path = %path.display(), error = %e, "failed to write file");
        e
    })?;

    debug!(path = %path.display(), "saved");
    Ok(())
}

fn write_json(value: &Value, path: &Path) -> Result<()> {
    let write_failed = |source: std::io::Error| DummyApiError::WriteFailed {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_failed)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, value).map_err(|e| write_failed(e.into()))?;
    writer.flush().map_err(write_failed)?;
    Ok(())
}
