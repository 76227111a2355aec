use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;

mod batch;
mod cli;

use batch::{HeightPolicy, convert_all, format_brightness, output_paths_in, write_output};

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    let config = cli.to_config()?;
    let heights = if cli.fit_height {
        HeightPolicy::FitAspect {
            char_aspect: cli.char_aspect,
        }
    } else {
        HeightPolicy::Fixed
    };

    log::info!(
        "converting {} file(s) at {} columns with the {} palette",
        cli.inputs.len(),
        config.output_width,
        config.palette_style
    );

    let results = convert_all(&cli.inputs, &config, heights);
    let multiple = results.len() > 1;

    let targets = match cli.output {
        Some(ref out) if multiple => {
            std::fs::create_dir_all(out)
                .with_context(|| format!("cannot create output directory {}", out.display()))?;
            output_paths_in(out, &cli.inputs)
        }
        Some(ref out) => vec![out.clone()],
        None => Vec::new(),
    };

    let stdout = std::io::stdout();
    let mut stdout = stdout.lock();
    let mut failures = 0usize;

    for (i, result) in results.into_iter().enumerate() {
        let conversion = match result.conversion {
            Ok(c) => c,
            Err(e) => {
                log::error!("{:#}", e);
                failures += 1;
                continue;
            }
        };

        let mut text = conversion.text;
        if cli.brightness {
            text.push('\n');
            text.push_str(&format_brightness(&conversion.brightness));
        }

        match targets.get(i) {
            Some(target) => {
                if let Err(e) = write_output(target, &text) {
                    log::error!("{:#}", e);
                    failures += 1;
                    continue;
                }
                log::info!("{} -> {}", result.path.display(), target.display());
            }
            None => {
                if multiple {
                    writeln!(stdout, "==> {} <==", result.path.display())?;
                }
                stdout.write_all(text.as_bytes())?;
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{} of {} file(s) failed", failures, cli.inputs.len());
    }
    Ok(())
}
