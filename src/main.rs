//! wavpad - WAV padding and raw conversion

use anyhow::Context;
use clap::Parser;
use std::process;
use wavpad::processing::{BatchProcessor, BatchReport, CommandRunner, DryRunRunner, SystemRunner};
use wavpad::{init_logging, Args, Config};

fn main() {
    let args = Args::parse();

    init_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    if args.verbose {
        println!("{}", wavpad::get_library_info());
        println!();
    }

    if let Some(path) = &args.init_config {
        Config::create_default_config(path)
            .with_context(|| format!("writing {}", path.display()))?;
        println!("Wrote default config to {}", path.display());
        return Ok(());
    }

    let config = Config::from_args_and_config(args)?;

    if config.processing.dry_run {
        process_with(config, DryRunRunner)
    } else {
        process_with(config, SystemRunner)
    }
}

fn process_with<R: CommandRunner>(config: Config, runner: R) -> anyhow::Result<()> {
    let directory = config.directory.clone();
    log::debug!("Config: {:?}", config);

    let mut processor = BatchProcessor::new(config, runner);
    let report = processor.run(&directory)
        .with_context(|| format!("processing {}", directory.display()))?;

    print_summary(&report, processor.config());
    Ok(())
}

fn print_summary(report: &BatchReport, config: &Config) {
    let failed = report.failed_count();
    if failed > 0 {
        log::warn!("{} of {} files had tool failures", failed, report.files.len());
    }
    if config.verbose() {
        println!("=== Processing Complete ===");
        println!("Directory: {}", report.directory.display());
        println!("Tool: {}", config.program());
        println!("Encoding: {} Hz, {} ch, {} bit",
                 config.sample_rate(), config.channels(), config.bits_per_sample());
        println!("Files: {}", report.files.len());
        if let Some(target) = report.target_bytes {
            println!("Target size: {} bytes", target);
        }
        println!("Time: {:.2}s", report.processing_time.as_secs_f64());
    }
}
