//! Shared test infrastructure: temporary slide directories.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

pub const TEMPLATE_JSON: &str =
    r##"{"bg-color": "#1e1e2e", "text-color": "#cdd6f4", "footer-text": "test deck"}"##;

/// Create a temporary slide directory holding a valid template.json.
///
/// The TempDir must be kept alive for the duration of the test; the
/// directory is removed when it drops.
pub fn setup_slide_dir() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    write_file(dir.path(), "template.json", TEMPLATE_JSON);
    dir
}

/// Write one file into the slide directory.
pub fn write_file(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).expect("Failed to write test file");
}
