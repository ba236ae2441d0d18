use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use aztec_avatar::{
    AvatarConfig, Category, DirectorySink, Exporter, Session, option_label, render_preview,
};
use clap::{Args, Parser, Subcommand};
use rand::{SeedableRng, rngs::StdRng};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "aztec-avatar", version)]
struct Cli {
    /// JSON config (assets root, canvas size, fill, quality, catalog).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every category with its options and display labels.
    Catalog,
    /// Flatten a selection to JPEG and save it.
    Export(ExportArgs),
    /// Render a selection as a PNG preview at any size.
    Preview(PreviewArgs),
}

#[derive(Args, Debug)]
struct SelectionArgs {
    /// Pick an option, as `category=option`. Repeatable; applied after `--random`.
    #[arg(long = "set", value_parser = parse_assignment)]
    set: Vec<(Category, String)>,

    /// Start from a randomized selection.
    #[arg(long)]
    random: bool,

    /// Seed for `--random`.
    #[arg(long, requires = "random")]
    seed: Option<u64>,
}

#[derive(Args, Debug)]
struct ExportArgs {
    #[command(flatten)]
    selection: SelectionArgs,

    /// Output directory; the file name comes from the config.
    #[arg(long, default_value = ".")]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct PreviewArgs {
    #[command(flatten)]
    selection: SelectionArgs,

    /// Preview side in pixels.
    #[arg(long, default_value_t = 320)]
    size: u32,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cfg = match &cli.config {
        Some(path) => AvatarConfig::from_path(path)?,
        None => AvatarConfig::default(),
    };

    match cli.cmd {
        Command::Catalog => cmd_catalog(&cfg),
        Command::Export(args) => cmd_export(&cfg, args),
        Command::Preview(args) => cmd_preview(&cfg, args),
    }
}

fn parse_assignment(s: &str) -> Result<(Category, String), String> {
    let (category, option) = s
        .split_once('=')
        .ok_or_else(|| format!("expected category=option, got \"{s}\""))?;
    let category = category.trim().parse::<Category>().map_err(|e| e.to_string())?;
    Ok((category, option.to_owned()))
}

fn build_session(cfg: &AvatarConfig, args: &SelectionArgs) -> anyhow::Result<Session> {
    let catalog = Arc::new(cfg.catalog()?);
    let mut session = match args.seed {
        Some(seed) => Session::with_rng(catalog, StdRng::seed_from_u64(seed)),
        None => Session::new(catalog),
    };
    if args.random {
        session.randomize();
    }
    for (category, option) in &args.set {
        session
            .set(*category, Some(option.as_str()))
            .with_context(|| format!("select {category}={option}"))?;
    }
    Ok(session)
}

fn cmd_catalog(cfg: &AvatarConfig) -> anyhow::Result<()> {
    let catalog = cfg.catalog()?;
    for (category, options) in catalog.iter() {
        println!("{category}:");
        for option in options {
            println!("  {option:<16} {}", option_label(option));
        }
    }
    Ok(())
}

fn cmd_export(cfg: &AvatarConfig, args: ExportArgs) -> anyhow::Result<()> {
    let session = build_session(cfg, &args.selection)?;
    let exporter = Exporter::new(Arc::new(cfg.resolver()), cfg.export_settings());

    let mut sink = DirectorySink::new(&args.out);
    let exported = exporter
        .deliver(session.selection(), &mut sink)
        .context("export avatar")?;

    for (layer, reason) in exported.skipped() {
        eprintln!("skipped {}/{}: {reason}", layer.key.category, layer.key.option);
    }
    for path in sink.written() {
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}

fn cmd_preview(cfg: &AvatarConfig, args: PreviewArgs) -> anyhow::Result<()> {
    let session = build_session(cfg, &args.selection)?;
    let resolver = cfg.resolver();

    let frame = render_preview(session.selection(), &resolver, args.size, None)
        .context("render preview")?;
    if frame.is_empty_state() {
        eprintln!("{}", aztec_avatar::EMPTY_PREVIEW_PROMPT);
    }
    for layer in frame.layers.iter().filter(|l| !l.visible) {
        eprintln!("hidden {}", layer.alt_text());
    }

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    frame
        .image
        .save_with_format(&args.out, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
