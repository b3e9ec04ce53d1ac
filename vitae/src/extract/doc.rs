use std::path::Path;
use std::process::Command;

use crate::error::{Result, VitaeError};
use crate::models::DocumentFormat;

use super::TextProvider;

/// Whether an external command can be spawned at all. The probe flag keeps
/// the tool from waiting on stdin.
fn tool_available(tool: &str, probe_arg: &str) -> bool {
    Command::new(tool).arg(probe_arg).output().is_ok()
}

/// Run an external converter against `path` and return its stdout decoded
/// as UTF-8, substituting replacement characters for invalid sequences.
fn run_tool(tool: &str, path: &Path) -> Result<String> {
    let output = Command::new(tool).arg(path).output()?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(VitaeError::Extraction {
            format: DocumentFormat::Doc,
            message: format!("{tool} failed ({}): {}", output.status, stderr.trim()),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Legacy `.doc` extraction via the `antiword` converter.
pub struct AntiwordProvider;

impl TextProvider for AntiwordProvider {
    fn name(&self) -> &'static str {
        "antiword"
    }

    fn is_available(&self) -> bool {
        tool_available("antiword", "-h")
    }

    fn extract(&self, path: &Path, _bytes: &[u8]) -> Result<String> {
        run_tool("antiword", path)
    }
}

/// Fallback `.doc` extraction via `catdoc`.
pub struct CatdocProvider;

impl TextProvider for CatdocProvider {
    fn name(&self) -> &'static str {
        "catdoc"
    }

    fn is_available(&self) -> bool {
        tool_available("catdoc", "-V")
    }

    fn extract(&self, path: &Path, _bytes: &[u8]) -> Result<String> {
        run_tool("catdoc", path)
    }
}
