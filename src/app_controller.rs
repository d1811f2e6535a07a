use anyhow::{anyhow, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info, warn};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::converter::{self, ConversionOptions, DEFAULT_PREVIEW_LINES};
use crate::file_utils::{FileManager, TRANSCRIPT_EXTENSION};

// @module: Application controller for transcript conversion

/// What happened to a single input file
#[derive(Debug, Clone, PartialEq)]
pub enum FileOutcome {
    /// Subtitle file written with the given number of cues
    Converted { output_path: PathBuf, cue_count: usize },
    /// Output already existed and overwriting was not requested
    Skipped { output_path: PathBuf },
}

/// Totals for a folder run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FolderSummary {
    pub converted: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Main application controller for transcript conversion
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Options passed to the conversion core
    pub fn options(&self) -> ConversionOptions {
        self.config.conversion_options()
    }

    /// Pick the output folder: explicit argument, then remembered folder, then the input's folder
    pub fn resolve_output_dir(&self, input_file: &Path, output_dir: Option<&Path>) -> PathBuf {
        if let Some(dir) = output_dir {
            return dir.to_path_buf();
        }
        if let Some(dir) = self.config.remembered_output_dir() {
            return dir.to_path_buf();
        }
        input_file.parent().unwrap_or(Path::new(".")).to_path_buf()
    }

    /// Output folder for one transcript of a folder run.
    ///
    /// With an explicit or remembered output root, the transcript's folder relative
    /// to `input_dir` is recreated under it so same-named files in different
    /// subfolders stay apart. Without one, the output lands next to the input.
    pub fn folder_output_dir(&self, input_dir: &Path, transcript: &Path, output_dir: Option<&Path>) -> PathBuf {
        let root = match output_dir.or_else(|| self.config.remembered_output_dir()) {
            Some(root) => root,
            None => return self.resolve_output_dir(transcript, None),
        };

        match transcript.strip_prefix(input_dir).ok().and_then(Path::parent) {
            Some(relative) if !relative.as_os_str().is_empty() => root.join(relative),
            _ => root.to_path_buf(),
        }
    }

    /// Convert one transcript file into `<output_dir>/<stem>.srt`
    pub async fn convert_file(&self, input_file: &Path, output_dir: &Path, force_overwrite: bool) -> Result<FileOutcome> {
        if !FileManager::file_exists(input_file) {
            return Err(anyhow!("Input file does not exist: {:?}", input_file));
        }

        let output_path = FileManager::generate_output_path(input_file, output_dir);
        if output_path.exists() && !force_overwrite {
            warn!("Skipping {:?}, subtitle already exists (use -f to force overwrite)", output_path);
            return Ok(FileOutcome::Skipped { output_path });
        }

        let content = FileManager::read_to_string(input_file)?;
        let options = self.options();

        // The core is synchronous; keep it off the async workers
        let document = tokio::task::spawn_blocking(move || converter::convert_to_document(&content, &options))
            .await
            .context("Conversion task failed")?
            .with_context(|| format!("Failed to convert {:?}", input_file))?;

        FileManager::ensure_dir(output_dir)?;
        document.write_to_srt(&output_path)?;

        debug!("{}", document);
        Ok(FileOutcome::Converted { output_path, cue_count: document.len() })
    }

    /// Run the conversion for a single file
    pub async fn run(&self, input_file: PathBuf, output_dir: Option<PathBuf>, force_overwrite: bool) -> Result<FileOutcome> {
        let start_time = std::time::Instant::now();
        let output_dir = self.resolve_output_dir(&input_file, output_dir.as_deref());

        let outcome = self.convert_file(&input_file, &output_dir, force_overwrite).await?;
        if let FileOutcome::Converted { output_path, cue_count } = &outcome {
            info!(
                "Success: {:?} ({} cues in {:.2}s)",
                output_path,
                cue_count,
                start_time.elapsed().as_secs_f64()
            );
        }

        Ok(outcome)
    }

    /// Convert every transcript under a folder, continuing past failures
    pub async fn run_folder(&self, input_dir: PathBuf, output_dir: Option<PathBuf>, force_overwrite: bool) -> Result<FolderSummary> {
        let start_time = std::time::Instant::now();

        if !FileManager::dir_exists(&input_dir) {
            return Err(anyhow!("Input directory does not exist: {:?}", input_dir));
        }

        let transcripts = FileManager::find_files(&input_dir, TRANSCRIPT_EXTENSION)?;
        if transcripts.is_empty() {
            return Err(anyhow!("No transcript files found in directory: {:?}", input_dir));
        }

        let folder_pb = ProgressBar::new(transcripts.len() as u64);
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        folder_pb.set_style(template_result.progress_chars("█▓▒░"));
        folder_pb.set_message("Converting files");

        let mut summary = FolderSummary::default();
        let mut claimed_outputs: HashSet<PathBuf> = HashSet::new();

        for transcript in &transcripts {
            let file_name = transcript.file_name()
                .map(|f| f.to_string_lossy().to_string())
                .unwrap_or_else(|| "unknown".to_string());
            folder_pb.set_message(format!("Converting: {}", file_name));

            let file_output_dir = self.folder_output_dir(&input_dir, transcript, output_dir.as_deref());

            // Two inputs of one run must never write the same subtitle file
            let output_path = FileManager::generate_output_path(transcript, &file_output_dir);
            if !claimed_outputs.insert(output_path.clone()) {
                folder_pb.suspend(|| error!(
                    "Error converting file {:?}: output {:?} is already produced by another transcript in this run",
                    transcript, output_path
                ));
                summary.failed += 1;
                folder_pb.inc(1);
                continue;
            }

            match self.convert_file(transcript, &file_output_dir, force_overwrite).await {
                Ok(FileOutcome::Converted { .. }) => summary.converted += 1,
                Ok(FileOutcome::Skipped { .. }) => summary.skipped += 1,
                Err(e) => {
                    folder_pb.suspend(|| error!("Error converting file {}: {:#}", file_name, e));
                    summary.failed += 1;
                }
            }

            folder_pb.inc(1);
        }

        folder_pb.finish_with_message("Folder conversion complete");

        info!(
            "Folder conversion completed: {} converted, {} skipped, {} errors in {:.2}s",
            summary.converted,
            summary.skipped,
            summary.failed,
            start_time.elapsed().as_secs_f64()
        );

        Ok(summary)
    }

    /// Preview the first few lines of a transcript as SRT text
    pub fn preview_file(&self, input_file: &Path) -> Result<String> {
        let content = FileManager::read_to_string(input_file)?;
        converter::preview(&content, &self.options(), DEFAULT_PREVIEW_LINES)
            .with_context(|| format!("Failed to preview {:?}", input_file))
    }
}
