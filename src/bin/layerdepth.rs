use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use rand::{SeedableRng, rngs::StdRng};
use tracing_subscriber::EnvFilter;

use layerdepth::{TaskConfig, TaskGenerator, generate_scene};

#[derive(Parser, Debug)]
#[command(name = "layerdepth", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a dataset of task pairs.
    Generate(GenerateArgs),
    /// Render one scene's overlapping and separated views as PNGs.
    Preview(PreviewArgs),
    /// Print the default configuration as JSON.
    DumpConfig,
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Configuration JSON; omitted fields take their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the number of task pairs.
    #[arg(long)]
    num_samples: Option<u32>,

    /// Override the output root.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Override the random seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Skip ground-truth videos.
    #[arg(long)]
    no_video: bool,
}

#[derive(Parser, Debug)]
struct PreviewArgs {
    /// Configuration JSON; omitted fields take their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output directory for the two PNGs.
    #[arg(long)]
    out: PathBuf,

    /// Random seed.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Generate(args) => cmd_generate(args),
        Command::Preview(args) => cmd_preview(args),
        Command::DumpConfig => cmd_dump_config(),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<TaskConfig> {
    match path {
        Some(p) => TaskConfig::load(p).with_context(|| format!("load config '{}'", p.display())),
        None => Ok(TaskConfig::default()),
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let mut cfg = load_config(args.config.as_deref())?;
    if let Some(n) = args.num_samples {
        cfg.num_samples = n;
    }
    if let Some(out) = args.out {
        cfg.output_dir = out;
    }
    if args.seed.is_some() {
        cfg.random_seed = args.seed;
    }
    if args.no_video {
        cfg.generate_videos = false;
    }

    let mut rng = make_rng(cfg.random_seed);
    let mut generator = TaskGenerator::new(cfg)?;
    let dirs = generator.generate_dataset(&mut rng)?;
    eprintln!(
        "wrote {} task pairs under {}",
        dirs.len(),
        generator.config().output_dir.display()
    );
    Ok(())
}

fn cmd_preview(args: PreviewArgs) -> anyhow::Result<()> {
    let mut cfg = load_config(args.config.as_deref())?;
    cfg.generate_videos = false;
    let mut rng = make_rng(args.seed.or(cfg.random_seed));

    let mut generator = TaskGenerator::new(cfg)?;
    let scene = generate_scene(&generator.config().scene_params(), &mut rng);
    let task = generator.render_scene(scene)?;
    let (first, last) = layerdepth::task::generator::write_preview(&task, &args.out)?;
    eprintln!("wrote {} and {}", first.display(), last.display());
    Ok(())
}

fn cmd_dump_config() -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&TaskConfig::default())
        .context("serialize default config")?;
    println!("{json}");
    Ok(())
}
