//! Batch padding pipeline

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use crate::audio::{self, PaddingPlan, WavHeader};
use crate::config::Config;
use crate::error::{WavPadError, Result};
use crate::processing::scan::scan_directory;
use crate::processing::tool::{CommandRunner, ExitOutcome, ToolInvocation, convert_invocation, pad_invocation};

/// What happened to one input file
#[derive(Debug, Clone)]
pub struct FileOutcome {
    pub plan: PaddingPlan,
    pub pad_status: ExitOutcome,
    pub convert_status: ExitOutcome,
    pub intermediate_removed: bool,
}

impl FileOutcome {
    pub fn success(&self) -> bool {
        self.pad_status.success && self.convert_status.success
    }
}

#[derive(Debug, Clone)]
pub struct BatchReport {
    pub directory: PathBuf,
    pub target_bytes: Option<u64>,
    pub files: Vec<FileOutcome>,
    pub processing_time: Duration,
}

impl BatchReport {
    pub fn failed_count(&self) -> usize {
        self.files.iter().filter(|f| !f.success()).count()
    }
}

pub struct BatchProcessor<R: CommandRunner> {
    config: Config,
    runner: R,
}

impl<R: CommandRunner> BatchProcessor<R> {
    pub fn new(config: Config, runner: R) -> Self {
        Self { config, runner }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Pad and convert every WAV file in `dir`, one after another.
    ///
    /// The first error stops the run; files after it are left untouched.
    pub fn run(&mut self, dir: &Path) -> Result<BatchReport> {
        let start_time = Instant::now();

        let skip = self.config.processing.skip_padded.then(|| self.config.padded_suffix().to_string());
        let files = scan_directory(dir, skip.as_deref())?;
        let target_bytes = audio::target_size(&files);

        match target_bytes {
            Some(target) => log::info!(
                "{} WAV files in {}, target size {} bytes ({:.3}s)",
                files.len(), dir.display(), target,
                target as f64 / audio::byte_rate(&self.config.audio)
            ),
            None => log::warn!("No WAV files found in {}", dir.display()),
        }

        if self.config.processing.verify_headers {
            for file in &files {
                self.verify_header(&file.path);
            }
        }

        let plans = audio::plan(&files, &self.config);
        let mut outcomes = Vec::with_capacity(plans.len());
        for plan in plans {
            outcomes.push(self.process_one(dir, plan)?);
        }

        Ok(BatchReport {
            directory: dir.to_path_buf(),
            target_bytes,
            files: outcomes,
            processing_time: start_time.elapsed(),
        })
    }

    fn process_one(&mut self, dir: &Path, plan: PaddingPlan) -> Result<FileOutcome> {
        let dry_run = self.config.processing.dry_run;
        if dry_run {
            // commands follow on their own lines
            println!("{}: {}", plan.file.name, plan.padding_arg());
        } else {
            print!("{}: {}...", plan.file.name, plan.padding_arg());
            std::io::stdout().flush()?;
        }

        let pad = pad_invocation(&plan, &self.config.tool);
        let pad_status = self.invoke(&pad, dir)?;

        let convert = convert_invocation(&plan, &self.config.tool, &self.config.audio);
        let convert_status = self.invoke(&convert, dir)?;

        let intermediate_removed = if self.config.processing.remove_intermediate && !dry_run {
            self.remove_intermediate(&dir.join(&plan.padded_name))?
        } else {
            false
        };

        if !dry_run {
            println!("done");
        }

        Ok(FileOutcome { plan, pad_status, convert_status, intermediate_removed })
    }

    fn invoke(&mut self, invocation: &ToolInvocation, dir: &Path) -> Result<ExitOutcome> {
        let outcome = self.runner.run(invocation, dir)?;
        if !outcome.success {
            if self.config.processing.strict {
                return Err(WavPadError::tool(format!("`{}` failed with {}", invocation, outcome)));
            }
            log::warn!("`{}` failed with {}", invocation, outcome);
        }
        Ok(outcome)
    }

    fn remove_intermediate(&self, path: &Path) -> Result<bool> {
        if !path.exists() {
            log::debug!("Intermediate {} not present, nothing to remove", path.display());
            return Ok(false);
        }
        std::fs::remove_file(path).map_err(|e| {
            WavPadError::io(format!("Cannot remove {}: {}", path.display(), e))
        })?;
        Ok(true)
    }

    fn verify_header(&self, path: &Path) {
        match WavHeader::from_file(path) {
            Ok(header) => {
                let problems = header.mismatches(&self.config.audio);
                if problems.is_empty() {
                    log::debug!("{}: {:.3}s, {:?} samples", path.display(), header.duration, header.sample_format);
                } else {
                    log::warn!("{}: {}", path.display(), problems.join(", "));
                }
            }
            Err(e) => log::warn!("{}", e),
        }
    }
}
