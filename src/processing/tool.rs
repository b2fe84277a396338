//! External audio tool invocation

use std::fmt;
use std::path::Path;
use std::process::Command;
use crate::audio::PaddingPlan;
use crate::config::{AudioConfig, ToolConfig};
use crate::error::{WavPadError, Result};

/// One subprocess call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInvocation {
    pub program: String,
    pub args: Vec<String>,
}

impl ToolInvocation {
    pub fn new<S: Into<String>>(program: S) -> Self {
        Self { program: program.into(), args: Vec::new() }
    }

    pub fn arg<S: Into<String>>(mut self, arg: S) -> Self {
        self.args.push(arg.into());
        self
    }
}

impl fmt::Display for ToolInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " '{}'", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

/// `sox in.wav in_padd.wav pad 0 <seconds>`
pub fn pad_invocation(plan: &PaddingPlan, tool: &ToolConfig) -> ToolInvocation {
    ToolInvocation::new(tool.program.as_str())
        .arg(plan.file.name.as_str())
        .arg(plan.padded_name.as_str())
        .arg("pad")
        .arg("0")
        .arg(plan.padding_arg())
}

/// `sox in_padd.wav -t raw -r <rate> -b <bits> -c <channels> in.raw`
pub fn convert_invocation(plan: &PaddingPlan, tool: &ToolConfig, audio: &AudioConfig) -> ToolInvocation {
    ToolInvocation::new(tool.program.as_str())
        .arg(plan.padded_name.as_str())
        .arg("-t")
        .arg("raw")
        .arg("-r")
        .arg(audio.sample_rate.to_string())
        .arg("-b")
        .arg(audio.bits_per_sample.to_string())
        .arg("-c")
        .arg(audio.channels.to_string())
        .arg(plan.raw_name.as_str())
}

/// How a tool run ended. `code` is `None` when killed by a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitOutcome {
    pub success: bool,
    pub code: Option<i32>,
}

impl ExitOutcome {
    pub fn ok() -> Self {
        Self { success: true, code: Some(0) }
    }
}

impl fmt::Display for ExitOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "exit code {}", code),
            None => write!(f, "terminated by signal"),
        }
    }
}

/// Runs tool invocations inside a working directory
pub trait CommandRunner {
    fn run(&mut self, invocation: &ToolInvocation, cwd: &Path) -> Result<ExitOutcome>;
}

/// Spawns real processes and blocks until they exit
#[derive(Debug, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&mut self, invocation: &ToolInvocation, cwd: &Path) -> Result<ExitOutcome> {
        log::debug!("Running: {}", invocation);

        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .current_dir(cwd)
            .status()
            .map_err(|e| WavPadError::tool(format!(
                "Failed to run {}: {}", invocation.program, e
            )))?;

        Ok(ExitOutcome { success: status.success(), code: status.code() })
    }
}

/// Prints invocations instead of running them
#[derive(Debug, Default)]
pub struct DryRunRunner;

impl CommandRunner for DryRunRunner {
    fn run(&mut self, invocation: &ToolInvocation, _cwd: &Path) -> Result<ExitOutcome> {
        println!("  {}", invocation);
        Ok(ExitOutcome::ok())
    }
}
