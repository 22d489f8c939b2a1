mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Opts;
use gpx_trace::{Config, batch};
use log::info;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_module_path(false)
        .init();

    let opts = Opts::parse();
    let mut config = match &opts.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => Config::default(),
    };
    opts.apply(&mut config);
    config.validate()?;

    info!(
        "Converting {} -> {} ({:?}{})",
        config.input_dir.display(),
        config.output_dir.display(),
        config.format,
        if config.totals { ", with totals" } else { "" }
    );

    let report = batch::run(&config)?;

    println!("\n--- Summary ---");
    println!(
        "Generated {} images, {} failed",
        report.generated.len(),
        report.failures.len()
    );
    for failure in &report.failures {
        println!("  {}: {}", failure.source.display(), failure.message);
    }

    Ok(())
}
