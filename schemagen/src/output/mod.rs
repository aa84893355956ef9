//! Write the generated document next to the input CSV.
//!
//! `models.csv` becomes `models_schema.yml` in the same directory. The file
//! is written to a temporary sibling first and renamed into place, so a
//! failed run never leaves a truncated `_schema.yml` behind.

pub mod yaml;

use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::{WriteError, WriteResult};
use crate::models::Document;

pub use yaml::{render_document, render_value, IndentStyle};

/// Appended to the input file stem to name the output.
pub const OUTPUT_SUFFIX: &str = "_schema.yml";

/// Output path for `input`.
///
/// The extension, if any, is replaced by [`OUTPUT_SUFFIX`]; otherwise the
/// suffix is appended to the file name.
///
/// # Example
/// ```
/// use std::path::Path;
/// use schemagen::output::derive_output_path;
///
/// assert_eq!(
///     derive_output_path(Path::new("catalog/orders.csv")),
///     Path::new("catalog/orders_schema.yml"),
/// );
/// ```
pub fn derive_output_path(input: &Path) -> PathBuf {
    let base = if input.extension().is_some() {
        input.file_stem()
    } else {
        input.file_name()
    };

    let mut name = base.map(OsString::from).unwrap_or_default();
    name.push(OUTPUT_SUFFIX);
    input.with_file_name(name)
}

/// Render `doc` and write it beside `input`. Returns the output path.
pub fn write_document(doc: &Document, input: &Path, style: &IndentStyle) -> WriteResult<PathBuf> {
    let rendered = render_document(doc, style)?;
    let output = derive_output_path(input);
    write_atomic(&output, rendered.as_bytes())?;
    Ok(output)
}

/// Write `bytes` to `path` through a temporary file in the same directory.
///
/// The temporary file is removed if any step fails.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> WriteResult<()> {
    let io_err = |source: std::io::Error| WriteError::Io {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(io_err)?;
    tmp.write_all(bytes).map_err(io_err)?;
    tmp.as_file().sync_all().map_err(io_err)?;

    // Temp files are created owner-only; the schema file is meant to be shared.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o644))
            .map_err(io_err)?;
    }

    tmp.persist(path).map_err(|e| io_err(e.error))?;
    Ok(())
}
