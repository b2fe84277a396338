//! Configuration management for batch padding

use crate::error::{WavPadError, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub directory: PathBuf,
    pub audio: AudioConfig,
    pub tool: ToolConfig,
    pub processing: ProcessingConfig,
}

/// Encoding every input file is assumed to share
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    pub sample_rate: u32,
    pub channels: u16,
    pub bits_per_sample: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    pub program: String,
    pub padded_suffix: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingConfig {
    pub dry_run: bool,
    pub strict: bool,
    pub remove_intermediate: bool,
    pub skip_padded: bool,
    pub verify_headers: bool,
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            audio: AudioConfig::default(),
            tool: ToolConfig::default(),
            processing: ProcessingConfig::default(),
        }
    }
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            sample_rate: 22050,
            channels: 1,
            bits_per_sample: 16,
        }
    }
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            program: "sox".to_string(),
            padded_suffix: "_padd".to_string(),
        }
    }
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            dry_run: false,
            strict: false,
            remove_intermediate: false,
            skip_padded: false,
            verify_headers: false,
            verbose: false,
        }
    }
}

impl Config {
    pub fn sample_rate(&self) -> u32 {
        self.audio.sample_rate
    }

    pub fn channels(&self) -> u16 {
        self.audio.channels
    }

    pub fn bits_per_sample(&self) -> u16 {
        self.audio.bits_per_sample
    }

    pub fn program(&self) -> &str {
        &self.tool.program
    }

    pub fn padded_suffix(&self) -> &str {
        &self.tool.padded_suffix
    }

    pub fn verbose(&self) -> bool {
        self.processing.verbose
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "wavpad", about = "Pad WAV files to a common length and convert them to raw PCM", version, author)]
pub struct Args {
    #[arg(help = "Directory containing the WAV files (defaults to the current directory)")]
    pub directory: Option<PathBuf>,

    #[arg(short = 'c', long = "config", help = "Config file path (TOML format)")]
    pub config_file: Option<PathBuf>,

    #[arg(short = 'r', long = "sample-rate", help = "Sample rate of the input files (Hz)")]
    pub sample_rate: Option<u32>,

    #[arg(long = "channels", help = "Channel count of the input files")]
    pub channels: Option<u16>,

    #[arg(short = 'b', long = "bits", help = "Bit depth of the input files")]
    pub bits: Option<u16>,

    #[arg(long = "tool", help = "Audio tool program used for padding and conversion")]
    pub tool: Option<String>,

    #[arg(long = "padded-suffix", help = "Suffix appended to the base name of padded files")]
    pub padded_suffix: Option<String>,

    #[arg(long = "dry-run", help = "Print tool invocations without running them")]
    pub dry_run: bool,

    #[arg(long = "strict", help = "Stop when the tool exits with a failure status")]
    pub strict: bool,

    #[arg(long = "remove-intermediate", help = "Delete the padded WAV after conversion")]
    pub remove_intermediate: bool,

    #[arg(long = "skip-padded", help = "Ignore WAV files produced by a previous run")]
    pub skip_padded: bool,

    #[arg(long = "verify-headers", help = "Warn when a WAV header disagrees with the configured encoding")]
    pub verify_headers: bool,

    #[arg(short = 'v', long = "verbose", help = "Enable verbose output mode")]
    pub verbose: bool,

    #[arg(long = "init-config", help = "Write a default config file to this path and exit")]
    pub init_config: Option<PathBuf>,
}

impl Config {
    /// Create config from command line arguments and config file
    pub fn from_args_and_config(args: Args) -> Result<Self> {
        let mut config = if let Some(config_path) = &args.config_file {
            Self::from_file(config_path)?
        } else {
            Self::default()
        };

        // Command line arguments override config file settings
        if let Some(directory) = args.directory {
            config.directory = directory;
        }
        if let Some(sample_rate) = args.sample_rate {
            config.audio.sample_rate = sample_rate;
        }
        if let Some(channels) = args.channels {
            config.audio.channels = channels;
        }
        if let Some(bits) = args.bits {
            config.audio.bits_per_sample = bits;
        }
        if let Some(tool) = args.tool {
            config.tool.program = tool;
        }
        if let Some(suffix) = args.padded_suffix {
            config.tool.padded_suffix = suffix;
        }
        config.processing.dry_run |= args.dry_run;
        config.processing.strict |= args.strict;
        config.processing.remove_intermediate |= args.remove_intermediate;
        config.processing.skip_padded |= args.skip_padded;
        config.processing.verify_headers |= args.verify_headers;
        config.processing.verbose |= args.verbose;

        config.tool.program = resolve_program(&config.tool.program)?;
        config.validate()?;

        Ok(config)
    }

    /// Load config from TOML config file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| WavPadError::config(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| WavPadError::config(format!("Failed to parse config file: {}", e)))
    }

    pub fn validate(&self) -> Result<()> {
        if self.audio.sample_rate == 0 {
            return Err(WavPadError::config("Sample rate must be greater than 0"));
        }
        if self.audio.sample_rate > 384000 {
            return Err(WavPadError::config("Sample rate cannot exceed 384000 Hz"));
        }

        if self.audio.channels == 0 || self.audio.channels > 32 {
            return Err(WavPadError::config("Channel count must be in range [1, 32]"));
        }

        // sox only writes raw output at these depths
        if !matches!(self.audio.bits_per_sample, 8 | 16 | 24 | 32) {
            return Err(WavPadError::config(format!(
                "Unsupported bit depth: {} (expected 8, 16, 24 or 32)", self.audio.bits_per_sample
            )));
        }

        if self.tool.program.trim().is_empty() {
            return Err(WavPadError::config("Tool program cannot be empty"));
        }

        let suffix = &self.tool.padded_suffix;
        if suffix.is_empty() {
            return Err(WavPadError::config("Padded suffix cannot be empty"));
        }
        if suffix.contains('.') || suffix.contains('/') || suffix.contains('\\') {
            return Err(WavPadError::config("Padded suffix cannot contain '.' or path separators"));
        }

        Ok(())
    }

    /// Save config to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| WavPadError::config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)
            .map_err(|e| WavPadError::config(format!("Failed to write config file: {}", e)))
    }

    /// Create default config file
    pub fn create_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        Self::default().save_to_file(path)
    }
}

/// Anchor a program given as a relative path to the launch directory.
///
/// The tool runs inside the target directory, so `./bin/sox` would otherwise
/// resolve there. Bare names are left for `PATH` lookup.
pub fn resolve_program(program: &str) -> Result<String> {
    let has_separator = program.contains('/') || program.contains(std::path::MAIN_SEPARATOR);
    let path = Path::new(program);
    if !has_separator || path.is_absolute() {
        return Ok(program.to_string());
    }

    let cwd = std::env::current_dir()
        .map_err(|e| WavPadError::config(format!("Cannot resolve tool path {}: {}", program, e)))?;
    Ok(cwd.join(path).to_string_lossy().into_owned())
}
