use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;

use crate::errors::AppError;
use crate::models::slide::{self, Slide};

/// Name of the required template document inside every slide directory.
pub const TEMPLATE_FILE: &str = "template.json";

/// The slide source directory, fixed at startup and shared with the
/// handlers via `web::Data`.
#[derive(Debug, Clone)]
pub struct SlideDir(PathBuf);

impl SlideDir {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

/// The full deck for one directory: the opaque template document plus every
/// slide that parsed, in filename order.
#[derive(Debug, Serialize)]
pub struct Deck {
    pub template: Value,
    pub slides: Vec<Slide>,
}

/// Build the deck for `dir`.
///
/// Failure to load the template document or to list the directory is
/// returned to the caller. Individual slide files are best-effort: files
/// that cannot be read or match no slide shape are logged and skipped.
pub fn assemble(dir: &Path) -> Result<Deck, AppError> {
    let raw = fs::read_to_string(dir.join(TEMPLATE_FILE))?;
    let template: Value = serde_json::from_str(&raw)?;

    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let name = entry?.file_name();
        let Some(name) = name.to_str() else { continue };
        if name.ends_with(".txt") || name.ends_with(".md") {
            names.push(name.to_string());
        }
    }
    names.sort();

    let mut slides = Vec::new();
    for name in &names {
        match read_lines(&dir.join(name)) {
            Ok(lines) => match slide::parse(&lines) {
                Some(s) => slides.push(s),
                None => log::warn!("Skipping {name}: no recognized slide format"),
            },
            Err(e) => log::warn!("Skipping {name}: {e}"),
        }
    }

    Ok(Deck { template, slides })
}

/// Read a slide file into per-line trimmed strings.
fn read_lines(path: &Path) -> std::io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content.lines().map(|l| l.trim().to_string()).collect())
}
