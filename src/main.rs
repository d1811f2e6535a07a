// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Result};
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{info, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::{Path, PathBuf};

use transcript2srt::app_config::{self, Config};
use transcript2srt::app_controller::Controller;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

/// Settings shared by every command; each one overrides the config file for this run
#[derive(Args, Debug, Clone)]
struct SettingsArgs {
    /// Seconds added to every timestamp (may be negative)
    #[arg(long, allow_negative_numbers = true)]
    offset: Option<f64>,

    /// Minimum cue duration in seconds
    #[arg(short = 'd', long)]
    min_duration: Option<f64>,

    /// Leave speaker labels out of the cue text
    #[arg(long, conflicts_with = "speaker")]
    no_speaker: bool,

    /// Prefix cue text with speaker labels
    #[arg(long)]
    speaker: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

#[derive(Args, Debug, Clone)]
struct ConvertArgs {
    /// Transcript file or directory of .txt transcripts
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Output folder (default: remembered folder, else next to the input); folder runs recreate subfolders under it
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Store the effective settings back into the config file
    #[arg(short, long)]
    remember: bool,

    #[command(flatten)]
    settings: SettingsArgs,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert transcripts to SRT subtitles (default command)
    Convert(ConvertArgs),

    /// Print the first cues of a transcript without writing anything
    Preview {
        /// Transcript file to preview
        #[arg(value_name = "INPUT_FILE")]
        input_file: PathBuf,

        #[command(flatten)]
        settings: SettingsArgs,
    },

    /// Generate shell completions for transcript2srt
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// transcript2srt - speaker-annotated transcripts to SubRip subtitles
#[derive(Parser, Debug)]
#[command(name = "transcript2srt")]
#[command(version)]
#[command(about = "Convert diarized speech transcripts to SRT subtitles")]
#[command(args_conflicts_with_subcommands = true)]
#[command(long_about = "transcript2srt turns transcript lines of the form
    [HH:MM:SS,mmm] SPEAKER_00: text
into numbered SRT cues. Lines that do not follow this form are ignored.

EXAMPLES:
    transcript2srt talk.txt                      # Write talk.srt next to talk.txt
    transcript2srt -o subs/ --remember talk.txt  # Write into subs/ and remember it
    transcript2srt --offset -1.5 talk.txt        # Shift all cues 1.5s earlier
    transcript2srt --no-speaker -d 2 talk.txt    # No labels, 2s minimum per cue
    transcript2srt transcripts/                  # Convert every .txt in a folder
    transcript2srt preview talk.txt              # Show the first cues
    transcript2srt completions bash > t2s.bash   # Generate bash completions

CONFIGURATION:
    Settings are stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default one
    will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Transcript file or directory of .txt transcripts
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Output folder (default: remembered folder, else next to the input); folder runs recreate subfolders under it
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Store the effective settings back into the config file
    #[arg(short, long)]
    remember: bool,

    #[command(flatten)]
    settings: SettingsArgs,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color and tag for level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("1;31", "ERROR"),
            Level::Warn => ("1;33", "WARN "),
            Level::Info => ("1;32", "INFO "),
            Level::Debug => ("1;36", "DEBUG"),
            Level::Trace => ("1;35", "TRACE"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        // Level changes after startup go through `log::set_max_level`
        metadata.level() <= self.level.max(log::max_level())
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (color, tag) = Self::style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "\x1B[{}m{} {} {}\x1B[0m", color, now, tag, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // The level is updated after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "transcript2srt", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Preview { input_file, settings }) => run_preview(&input_file, &settings),
        Some(Commands::Convert(args)) => run_convert(args).await,
        None => {
            // Default behavior - top-level args act as `convert`
            let input_path = cli.input_path.ok_or_else(|| {
                anyhow!("INPUT_PATH is required when no subcommand is specified")
            })?;

            run_convert(ConvertArgs {
                input_path,
                output_dir: cli.output_dir,
                force_overwrite: cli.force_overwrite,
                remember: cli.remember,
                settings: cli.settings,
            })
            .await
        }
    }
}

/// Load the config file and apply command line overrides
fn load_effective_config(settings: &SettingsArgs) -> Result<Config> {
    // A command line log level applies before the config file is read
    if let Some(level) = &settings.log_level {
        let level: app_config::LogLevel = level.clone().into();
        log::set_max_level(level.to_level_filter());
    }

    let mut config = Config::load_or_create(&settings.config_path)?;

    if let Some(offset) = settings.offset {
        config.offset = offset;
    }
    if let Some(min_duration) = settings.min_duration {
        config.min_duration = min_duration;
    }
    if settings.no_speaker {
        config.include_speaker = false;
    } else if settings.speaker {
        config.include_speaker = true;
    }
    if let Some(level) = &settings.log_level {
        config.log_level = level.clone().into();
    }

    log::set_max_level(config.log_level.to_level_filter());
    Ok(config)
}

async fn run_convert(args: ConvertArgs) -> Result<()> {
    let mut config = load_effective_config(&args.settings)?;

    if args.remember {
        if let Some(dir) = &args.output_dir {
            config.output_path = dir.to_string_lossy().to_string();
        }
    }

    let controller = Controller::with_config(config)?;

    if args.remember {
        controller.config().save(&args.settings.config_path)?;
        info!("Settings saved to {}", args.settings.config_path);
    }

    if args.input_path.is_file() {
        controller
            .run(args.input_path, args.output_dir, args.force_overwrite)
            .await?;
    } else if args.input_path.is_dir() {
        let summary = controller
            .run_folder(args.input_path, args.output_dir, args.force_overwrite)
            .await?;
        if summary.failed > 0 {
            return Err(anyhow!("{} transcript(s) could not be converted", summary.failed));
        }
    } else {
        return Err(anyhow!("Input path does not exist: {:?}", args.input_path));
    }

    Ok(())
}

fn run_preview(input_file: &Path, settings: &SettingsArgs) -> Result<()> {
    let config = load_effective_config(settings)?;
    let controller = Controller::with_config(config)?;

    let preview = controller.preview_file(input_file)?;
    print!("{}", preview);
    Ok(())
}
