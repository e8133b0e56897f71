use std::{
    io::Write as _,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use rayon::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "flowframe", version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the resolved layout as JSON.
    Layout(LayoutArgs),
    /// Print the evaluated state of one frame as JSON.
    Frame(FrameArgs),
    /// Print one fingerprint line per frame in a range.
    Frames(FramesArgs),
}

#[derive(Parser, Debug)]
struct LayoutArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Frame number.
    #[arg(long)]
    frame: u64,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// First frame (inclusive).
    #[arg(long, default_value_t = 0)]
    start: u64,

    /// Last frame (exclusive). Defaults to the frame after the reveal settles.
    #[arg(long)]
    end: Option<u64>,

    /// Evaluate frames on the rayon thread pool.
    #[arg(long)]
    parallel: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Layout(args) => cmd_layout(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Frames(args) => cmd_frames(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn read_scene_json(path: &Path) -> anyhow::Result<flowframe::DiagramScene> {
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("read scene '{}'", path.display()))?;
    let scene = flowframe::DiagramScene::from_json_str(&s)
        .with_context(|| format!("load scene '{}'", path.display()))?;
    Ok(scene)
}

fn cmd_layout(args: LayoutArgs) -> anyhow::Result<()> {
    let scene = read_scene_json(&args.in_path)?;
    let layout = scene.layout()?;
    let json = serde_json::to_string_pretty(&layout).context("serialize layout")?;
    println!("{json}");
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let scene = read_scene_json(&args.in_path)?;
    let layout = scene.layout()?;
    let frame = scene
        .frame(&layout, args.frame as f64)
        .with_context(|| format!("evaluate frame {}", args.frame))?;
    let json = serde_json::to_string_pretty(&frame).context("serialize frame")?;
    println!("{json}");
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let scene = read_scene_json(&args.in_path)?;
    let layout = scene.layout()?;
    let end = args
        .end
        .unwrap_or_else(|| scene.settled_frame().max(0.0).ceil() as u64 + 1);
    if end < args.start {
        anyhow::bail!("--end ({end}) must not be before --start ({})", args.start);
    }

    let eval = |f: u64| -> anyhow::Result<(u64, flowframe::Fingerprint)> {
        let frame = scene
            .frame(&layout, f as f64)
            .with_context(|| format!("evaluate frame {f}"))?;
        Ok((f, frame.fingerprint()))
    };
    let frames: Vec<u64> = (args.start..end).collect();
    let lines: Vec<(u64, flowframe::Fingerprint)> = if args.parallel {
        frames
            .par_iter()
            .map(|&f| eval(f))
            .collect::<anyhow::Result<_>>()?
    } else {
        frames.iter().map(|&f| eval(f)).collect::<anyhow::Result<_>>()?
    };

    let mut out = std::io::stdout().lock();
    for (f, fp) in lines {
        writeln!(out, "{f} {fp}")?;
    }
    tracing::debug!(frames = frames.len(), parallel = args.parallel, "frames evaluated");
    Ok(())
}
