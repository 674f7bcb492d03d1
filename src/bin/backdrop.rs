use std::{collections::BTreeMap, path::PathBuf};

use anyhow::Context as _;
use backdrop::{
    Backdrop, BackdropConfig, BackdropSnapshot, ManualRefresh, PathSink, RecordingBackend,
    SvgOverlay, Viewport,
};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "backdrop", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the animation headless and dump the final state as JSON.
    Simulate(SimulateArgs),
    /// Compute the overlay connector paths for one viewport.
    Paths(PathsArgs),
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Backdrop config JSON (defaults when omitted).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Viewport size, e.g. `1280x720`.
    #[arg(long, value_parser = parse_viewport, default_value = "1280x720")]
    viewport: Viewport,

    /// Number of refresh callbacks to deliver.
    #[arg(long, default_value_t = 120)]
    frames: u64,

    /// Simulated display refresh rate.
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// Resize to this viewport halfway through the run.
    #[arg(long, value_parser = parse_viewport)]
    resize_to: Option<Viewport>,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct PathsArgs {
    /// Backdrop config JSON (defaults when omitted).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Viewport size, e.g. `1280x720`.
    #[arg(long, value_parser = parse_viewport, default_value = "1280x720")]
    viewport: Viewport,

    /// Write an SVG overlay document here instead of printing path strings.
    #[arg(long)]
    svg: Option<PathBuf>,
}

#[derive(serde::Serialize)]
struct SimulationDump {
    state: BackdropSnapshot,
    paths: BTreeMap<String, String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Simulate(args) => cmd_simulate(args),
        Command::Paths(args) => cmd_paths(args),
    }
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<BackdropConfig> {
    let cfg = match path {
        Some(p) => BackdropConfig::from_path(p)
            .with_context(|| format!("load config '{}'", p.display()))?,
        None => BackdropConfig::default(),
    };
    cfg.validate().context("validate config")?;
    Ok(cfg)
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    anyhow::ensure!(
        args.fps.is_finite() && args.fps > 0.0,
        "--fps must be finite and > 0"
    );
    let cfg = load_config(args.config.as_ref())?;

    let mut session = Backdrop::new(
        &cfg,
        args.viewport,
        RecordingBackend::new(),
        ManualRefresh::new(),
        cfg.overlay.viewport_layout(),
        SvgOverlay::new(cfg.overlay.path_ids.clone(), cfg.overlay.style.clone()),
    )?;

    session.on_ready();
    session.on_load(0.0);
    session.start();

    let frame_ms = 1000.0 / args.fps;
    let halfway = args.frames / 2;
    for i in 0..args.frames {
        if i == halfway
            && let Some(vp) = args.resize_to
        {
            session.on_resize(vp);
        }
        if session.refresh_mut().fire().is_none() {
            break;
        }
        session.on_frame(i as f64 * frame_ms)?;
    }
    session.flush_deferred();
    session.stop();

    let paths = cfg
        .overlay
        .path_ids
        .iter()
        .filter(|id| session.sink().has_element(id))
        .map(|id| {
            let d = session.sink().path(id).unwrap_or_default().to_string();
            (id.clone(), d)
        })
        .collect();
    let dump = SimulationDump {
        state: session.snapshot(),
        paths,
    };

    let json = serde_json::to_string_pretty(&dump).context("serialize simulation state")?;
    match &args.out {
        Some(out) => {
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(out, json).with_context(|| format!("write '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_paths(args: PathsArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_ref())?;
    let router = cfg.overlay.router();
    let mut overlay = SvgOverlay::new(cfg.overlay.path_ids.clone(), cfg.overlay.style.clone());

    let outcome = router.recompute(args.viewport, &cfg.overlay.viewport_layout(), &mut overlay);
    anyhow::ensure!(outcome.is_written(), "path recompute skipped: {outcome:?}");

    match &args.svg {
        Some(out) => {
            std::fs::write(out, overlay.to_document(args.viewport))
                .with_context(|| format!("write svg '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => {
            for id in router.path_ids() {
                println!("{id}\t{}", overlay.path(id).unwrap_or_default());
            }
        }
    }
    Ok(())
}

fn parse_viewport(s: &str) -> Result<Viewport, String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let w = w.trim().parse::<u32>().map_err(|e| format!("width: {e}"))?;
    let h = h.trim().parse::<u32>().map_err(|e| format!("height: {e}"))?;
    Ok(Viewport::new(w, h))
}
