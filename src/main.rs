use std::process;

use clap::Parser;
use colored::Colorize;
use kmer_analyzer::{
    cli::Args,
    config::Config,
    run::{self, Summary},
};

fn main() {
    let args = Args::parse();

    #[cfg(feature = "tracing")]
    init_tracing();

    let config = Config::from(&args);

    if !args.quiet {
        println!("{}: {}", "k-length".bold(), config.k.to_string().blue().bold());
        println!(
            "{}: {}",
            "input".bold(),
            config.input.to_string().underline().bold().blue()
        );
        println!(
            "{}: {}",
            "output".bold(),
            config.output.display().to_string().underline().bold().blue()
        );
        println!();
    }

    match run::run(&config) {
        Ok(summary) => print_summary(&summary),
        Err(e) => {
            eprintln!(
                "{}\n {}",
                "Application error:".red().bold(),
                e.to_string().red()
            );
            process::exit(1);
        }
    }
}

fn print_summary(summary: &Summary) {
    println!(
        "{} Processed {} bases.",
        "Done!".green().bold(),
        summary.bases
    );
    println!(
        "{} {}",
        "Output written to:".bold(),
        summary.output.display()
    );
}

#[cfg(feature = "tracing")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
