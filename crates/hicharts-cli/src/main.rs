mod cli;

use std::io::Write;

use hicharts_common::HichartsError;
use hicharts_options::colors::ColorNotation;
use hicharts_options::{validation, ChartOptions};
use tracing_subscriber::EnvFilter;

fn run(args: &cli::Args) -> hicharts_common::Result<()> {
    let mut options: ChartOptions = match &args.options {
        Some(path) => hicharts_options::load_from_path(path)?,
        None => hicharts_options::load_default()?,
    };

    if args.check {
        validation::validate(&options)?;
        tracing::info!("options passed the color lint");
    }

    if args.resolve {
        options.resolve_inheritance();
    }

    if let Some(notation) = args.normalize_colors {
        let notation = match notation {
            cli::Notation::Hex => ColorNotation::Hex,
            cli::Notation::Rgba => ColorNotation::Rgba,
        };
        validation::normalize_colors(&mut options, notation)?;
    }

    if let Some(path) = &args.write {
        hicharts_options::save_options_to_path(&options, path)?;
        tracing::info!("wrote options to {}", path.display());
    }

    let payload = options.try_to_json()?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{payload}")?;
    Ok(())
}

fn main() {
    let args = cli::parse();

    let log_directive = args.log_level.as_deref().unwrap_or("hicharts=info");
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "hicharts=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::debug!("hicharts-options v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&args) {
        tracing::error!("{e}");
        let code = match e {
            HichartsError::Options(_) => 2,
            _ => 1,
        };
        std::process::exit(code);
    }
}
