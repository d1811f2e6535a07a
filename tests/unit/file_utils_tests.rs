/*!
 * Tests for file utility functions
 */

use std::path::Path;
use anyhow::Result;
use transcript2srt::file_utils::FileManager;
use crate::common;

/// Test that file_exists distinguishes files from directories
#[test]
fn test_file_exists_withFileAndDir_shouldOnlyAcceptFile() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_file(temp_dir.path(), "talk.txt", "content")?;

    assert!(FileManager::file_exists(&test_file));
    assert!(!FileManager::file_exists(temp_dir.path()));
    assert!(!FileManager::file_exists("non_existent_file.tmp"));

    Ok(())
}

/// Test that dir_exists returns false for non-existent directories
#[test]
fn test_dir_exists_withNonExistentDir_shouldReturnFalse() {
    assert!(FileManager::dir_exists("."));
    assert!(!FileManager::dir_exists("./non_existent_directory_12345"));
}

/// Test that generate_output_path swaps the extension for .srt
#[test]
fn test_generate_output_path_withValidInputs_shouldCreateCorrectPath() {
    let output_path = FileManager::generate_output_path(
        Path::new("/tmp/input/meeting.notes.txt"),
        Path::new("/tmp/output"),
    );

    assert_eq!(output_path, Path::new("/tmp/output/meeting.notes.srt"));
}

/// Test that find_files searches recursively and ignores other extensions
#[test]
fn test_find_files_withNestedDirs_shouldReturnSortedMatches() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let b = common::create_test_file(temp_dir.path(), "b.txt", "")?;
    let a = common::create_test_file(temp_dir.path(), "nested/a.TXT", "")?;
    common::create_test_file(temp_dir.path(), "c.srt", "")?;

    let mut expected = vec![a, b];
    expected.sort();

    assert_eq!(FileManager::find_files(temp_dir.path(), ".txt")?, expected);

    Ok(())
}

/// Test that write_to_file creates parent directories
#[test]
fn test_write_to_file_withMissingParent_shouldCreateIt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("deep").join("dir").join("out.srt");

    FileManager::write_to_file(&path, "1\n")?;

    assert_eq!(FileManager::read_to_string(&path)?, "1\n");

    Ok(())
}

/// Test that reading a missing file fails with the path in the message
#[test]
fn test_read_to_string_withMissingFile_shouldFail() {
    let error = FileManager::read_to_string("missing_transcript_12345.txt").unwrap_err();
    assert!(error.to_string().contains("missing_transcript_12345.txt"));
}
