//! Capability-based helpers for reading the JSON inputs of the StoryVerse
//! tools, built on `cap-std` and `camino`.
#![forbid(unsafe_code)]

use std::io;

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};

/// What a path points at when probed before reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Nothing exists at the path.
    Missing,
    /// A regular file.
    File,
    /// Something other than a regular file, such as a directory.
    Other,
}

/// Open a UTF-8 file path for reading using ambient authority.
///
/// # Errors
/// Returns the underlying IO error when the file cannot be opened.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Probe `path` through its parent directory capability.
///
/// A missing file is reported as [`InputKind::Missing`]; a missing parent
/// directory surfaces as a `NotFound` error from opening that directory.
///
/// # Errors
/// Returns IO errors other than the target itself being absent.
pub fn probe_input(path: &Utf8Path) -> io::Result<InputKind> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::other("input path should include a file name"))?;
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    match dir.metadata(name) {
        Ok(meta) if meta.is_file() => Ok(InputKind::File),
        Ok(_) => Ok(InputKind::Other),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(InputKind::Missing),
        Err(err) => Err(err),
    }
}
