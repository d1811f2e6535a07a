/*!
 * Common test utilities for the transcript2srt test suite
 */

use std::path::{Path, PathBuf};
use std::fs;
use anyhow::Result;
use tempfile::TempDir;

/// Two-speaker transcript used across tests
pub const SAMPLE_TRANSCRIPT: &str = "[00:00:01,000] SPEAKER_00: Hello there.\n[00:00:03,500] SPEAKER_01: Hi!\n";

/// SRT expected for `SAMPLE_TRANSCRIPT` with default options
pub const SAMPLE_SRT: &str = "1\n00:00:01,000 --> 00:00:03,400\nSPEAKER_00: Hello there.\n\n2\n00:00:03,500 --> 00:00:04,500\nSPEAKER_01: Hi!\n\n";

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Creates a sample transcript file for testing
pub fn create_test_transcript(dir: &Path, filename: &str) -> Result<PathBuf> {
    create_test_file(dir, filename, SAMPLE_TRANSCRIPT)
}
