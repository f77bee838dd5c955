use std::{
    fs::File,
    io::{BufReader, BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "scrollreel", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Mount a page, replay a scroll sequence and write the final snapshot as JSON.
    Simulate(SimulateArgs),
    /// Print the pinned ranges and where a normalized scroll position snaps to.
    Snap(SnapArgs),
    /// List which sections render for the given content.
    Sections(SectionsArgs),
}

#[derive(Parser, Debug)]
struct PageArgs {
    /// Input site content JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Viewport size as WIDTHxHEIGHT.
    #[arg(long, default_value = "1440x900")]
    viewport: scrollreel::Viewport,

    /// Motion settings JSON (defaults when absent).
    #[arg(long)]
    motion: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    #[command(flatten)]
    page: PageArgs,

    /// Scroll offsets in pixels, applied in order.
    #[arg(long, num_args = 1.., allow_negative_numbers = true)]
    scroll: Vec<f64>,

    /// Seconds of frames to run after each scroll step.
    #[arg(long, default_value_t = 1.0)]
    settle: f64,

    /// Frame length in seconds.
    #[arg(long, default_value_t = 1.0 / 60.0)]
    frame: f64,

    /// Output JSON path (stdout when absent).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct SnapArgs {
    #[command(flatten)]
    page: PageArgs,

    /// Normalized scroll position in [0, 1].
    #[arg(long)]
    at: f64,
}

#[derive(Parser, Debug)]
struct SectionsArgs {
    /// Input site content JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Simulate(args) => cmd_simulate(args),
        Command::Snap(args) => cmd_snap(args),
        Command::Sections(args) => cmd_sections(args),
    }
}

fn read_site(path: &Path) -> anyhow::Result<scrollreel::SiteConfig> {
    scrollreel::SiteConfig::load(path).with_context(|| format!("load site content '{}'", path.display()))
}

fn read_motion(path: Option<&Path>) -> anyhow::Result<scrollreel::MotionSettings> {
    let Some(path) = path else {
        return Ok(scrollreel::MotionSettings::default());
    };
    let f = File::open(path).with_context(|| format!("open motion settings '{}'", path.display()))?;
    let settings: scrollreel::MotionSettings =
        serde_json::from_reader(BufReader::new(f)).with_context(|| "parse motion settings JSON")?;
    Ok(settings)
}

fn mount(args: &PageArgs) -> anyhow::Result<scrollreel::Page> {
    let site = read_site(&args.in_path)?;
    let motion = read_motion(args.motion.as_deref())?;
    Ok(scrollreel::Page::mount(&site, args.viewport, motion)?)
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let page = mount(&args.page)?;
    page.advance(args.settle, args.frame);
    for &offset in &args.scroll {
        let applied = page.scroll_to(offset);
        tracing::info!(requested = offset, applied, "scroll");
        page.advance(args.settle, args.frame);
    }
    let snapshot = page.snapshot();

    match &args.out {
        Some(out) => {
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let f = File::create(out).with_context(|| format!("create '{}'", out.display()))?;
            let mut w = BufWriter::new(f);
            serde_json::to_writer_pretty(&mut w, &snapshot).with_context(|| "write snapshot JSON")?;
            w.flush().with_context(|| format!("flush '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut w = stdout.lock();
            serde_json::to_writer_pretty(&mut w, &snapshot).with_context(|| "write snapshot JSON")?;
            writeln!(w)?;
        }
    }
    Ok(())
}

fn cmd_snap(args: SnapArgs) -> anyhow::Result<()> {
    let page = mount(&args.page)?;
    let Some(snap) = page.engine().snap() else {
        println!("no pinned ranges; snapping disabled");
        return Ok(());
    };
    for (i, r) in snap.ranges().iter().enumerate() {
        println!("range {i}: [{:.4}, {:.4}] center {:.4}", r.start, r.end, r.center);
    }
    let target = snap.snap_to(args.at);
    println!(
        "{:.4} -> {:.4} ({:.3}s)",
        args.at,
        target,
        snap.duration_for(target - args.at)
    );
    Ok(())
}

fn cmd_sections(args: SectionsArgs) -> anyhow::Result<()> {
    let site = read_site(&args.in_path)?;
    for kind in scrollreel::SectionKind::ALL {
        let state = if kind.has_content(&site) {
            "rendered"
        } else {
            "empty"
        };
        println!("{kind:<13}{state}");
    }
    Ok(())
}
