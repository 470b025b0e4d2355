//! Vocabulary Generator - sorted word lists from plain text
//!
//! Main entry point for the command-line application.

use clap::Parser;
use std::io;
use std::process;

use vocab_generator::cli::{Args, RunOptions};
use vocab_generator::pipeline::{Pipeline, PipelineConfig, PipelineReport};
use vocab_generator::progress::{
    create_spinner, error_headline, print_banner, print_bullet, print_error, print_header, print_info,
    print_success, print_warning,
};

fn main() {
    // Parse command-line arguments
    let args = Args::parse();

    // Set up logging
    if args.verbose {
        std::env::set_var("RUST_LOG", "debug");
    } else if !args.quiet {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let verbose = args.verbose;

    if let Err(e) = run(args) {
        // Verbose mode lists the chain one cause per line
        print_error(&error_headline(&e, !verbose));

        if verbose {
            let mut source = e.source();
            while let Some(err) = source {
                print_error(&format!("  Caused by: {}", err));
                source = err.source();
            }
        }

        process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    if !args.quiet {
        print_banner();
    }

    let stdin = io::stdin();
    let options = args.resolve(stdin.lock(), io::stdout())?;

    // Validate arguments
    validate_options(&options)?;

    let config = PipelineConfig::from_args(&args, options.min_length, options.include_caps);

    if !args.quiet && args.verbose {
        print_config(&options, &config);
    }

    let pipeline = Pipeline::new(config)?;

    let spinner = if args.quiet {
        indicatif::ProgressBar::hidden()
    } else {
        create_spinner(&format!("Generating vocabulary for {:?}...", options.input))
    };

    let report = pipeline.run(&options.input);
    spinner.finish_and_clear();
    let report = report?;

    if !args.quiet {
        print_report(&report);
        report.stats.print_summary();
    }

    Ok(())
}

/// Validate resolved options before any artifact is written
fn validate_options(options: &RunOptions) -> anyhow::Result<()> {
    if !options.input.exists() {
        anyhow::bail!("Input path does not exist: {:?}", options.input);
    }

    if !options.input.is_file() {
        anyhow::bail!("Input path is not a file: {:?}", options.input);
    }

    Ok(())
}

/// Print configuration summary
fn print_config(options: &RunOptions, config: &PipelineConfig) {
    print_header("Configuration");

    print_info(&format!("Input:        {:?}", options.input));
    print_info(&format!("Min length:   {}", config.min_length));
    print_info(&format!("Passes:       {:?}", config.policies()));
    print_info(&format!("Keep lists:   {}", config.keep_intermediate));
}

fn print_report(report: &PipelineReport) {
    print_header("Word lists");
    for pass in &report.passes {
        print_bullet(&format!(
            "{}: {} unique of {} matching tokens",
            pass.policy, pass.unique, pass.accepted
        ));
        if pass.unique == 0 {
            print_warning(&format!("No {} words found", pass.policy));
        }
    }

    print_header("Artifacts");
    print_success(&format!("Archive written to: {:?}", report.archive.path));
    print_success(&format!("SHA-512 written to: {:?}", report.digest.path));
    for list in &report.kept_lists {
        print_info(&format!("Kept list:    {:?}", list));
    }
}
