use anyhow::Context;
use pocketcam::{
    build_operations, generate_program, init_logging, load_boundaries, CancelFlag, Config,
    BUILD_DATE, VERSION,
};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const USAGE: &str = "Usage: pocketcam <boundaries.json> [output.ngc] [config.toml|config.json]";

struct Args {
    input: PathBuf,
    output: PathBuf,
    config: Option<PathBuf>,
}

impl Args {
    fn parse(mut args: impl Iterator<Item = String>) -> anyhow::Result<Option<Self>> {
        let Some(input) = args.next() else {
            anyhow::bail!("{}", USAGE);
        };
        match input.as_str() {
            "-h" | "--help" => {
                println!("{}", USAGE);
                return Ok(None);
            }
            "-V" | "--version" => {
                println!("pocketcam {} (built {})", VERSION, BUILD_DATE);
                return Ok(None);
            }
            _ => {}
        }

        let input = PathBuf::from(input);
        let output = args
            .next()
            .map(PathBuf::from)
            .unwrap_or_else(|| input.with_extension("ngc"));
        let config = args.next().map(PathBuf::from);
        Ok(Some(Self {
            input,
            output,
            config,
        }))
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    if let Some(path) = path {
        return Config::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()));
    }
    match Config::default_path() {
        Ok(path) => Config::load_or_default(&path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        Err(e) => {
            warn!("{}; using default settings", e);
            Ok(Config::default())
        }
    }
}

fn main() -> anyhow::Result<()> {
    let Some(args) = Args::parse(std::env::args().skip(1))? else {
        return Ok(());
    };

    init_logging()?;
    info!("PocketCAM {} (built {})", VERSION, BUILD_DATE);

    let config = load_config(args.config.as_deref())?;
    let boundaries = load_boundaries(&args.input)?;
    info!(
        "Loaded {} boundaries from {}",
        boundaries.len(),
        args.input.display()
    );

    let operations = build_operations(&boundaries, &config, &CancelFlag::new())?;
    let program = generate_program(&operations, &config);

    std::fs::write(&args.output, program)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    info!(
        "Wrote {} operations to {}",
        operations.len(),
        args.output.display()
    );

    Ok(())
}
