use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "arscan", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the full animation to a PNG sequence or an MP4.
    Render(RenderArgs),
    /// Render a single tick as a PNG.
    Frame(FrameArgs),
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Base image the animation is drawn over.
    #[arg(long)]
    image: PathBuf,

    /// Detector output JSON.
    #[arg(long)]
    detections: PathBuf,

    /// Scanning overlay (GIF or still image). Omit to skip the scanning effect.
    #[arg(long)]
    overlay: Option<PathBuf>,

    /// Category table JSON used to resolve class ids and filter labels.
    #[arg(long)]
    categories: Option<PathBuf>,

    /// Animation config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the number of ticks.
    #[arg(long)]
    frames: Option<u64>,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Directory to write `frame_NNNNN.png` files into.
    #[arg(long, conflicts_with = "mp4", required_unless_present = "mp4")]
    out_dir: Option<PathBuf>,

    /// MP4 output path (requires `ffmpeg` on PATH).
    #[arg(long)]
    mp4: Option<PathBuf>,

    /// Generate tick pixels on a thread pool.
    #[arg(long)]
    parallel: bool,

    /// Worker threads for `--parallel`.
    #[arg(long, requires = "parallel")]
    threads: Option<usize>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Tick index (0-based).
    #[arg(long)]
    index: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Frame(args) => cmd_frame(args),
    }
}

fn build_driver(input: &InputArgs) -> anyhow::Result<arscan::AnimationDriver> {
    let mut config = match input.config.as_deref() {
        Some(path) => arscan::AnimationConfig::from_json_path(path)?,
        None => arscan::AnimationConfig::default(),
    };
    if let Some(frames) = input.frames {
        config.total_frames = frames;
    }

    let mut reader = arscan::DetectionReader::new();
    if let Some(path) = input.categories.as_deref() {
        reader = reader.with_categories(arscan::CategoryTable::from_json_path(path)?);
    }
    let detections = reader.read_path(&input.detections)?;

    let base = arscan::load_base_image(&input.image)?;
    let overlay = match input.overlay.as_deref() {
        Some(path) => arscan::OverlaySequence::load(path)?,
        None => arscan::OverlaySequence::empty(),
    };

    Ok(arscan::AnimationDriver::new(
        base, overlay, detections, config,
    )?)
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut driver = build_driver(&args.input)?;
    let threading = if args.parallel {
        arscan::RenderThreading::parallel(args.threads)
    } else {
        arscan::RenderThreading::default()
    };

    let (report, out) = match (args.out_dir, args.mp4) {
        (Some(dir), _) => {
            let mut sink = arscan::PngSequenceSink::new(&dir);
            (driver.run_with_threading(&mut sink, &threading)?, dir)
        }
        (None, Some(path)) => {
            let mut sink = arscan::FfmpegSink::new(arscan::FfmpegSinkOpts::new(&path));
            (driver.run_with_threading(&mut sink, &threading)?, path)
        }
        (None, None) => anyhow::bail!("one of --out-dir or --mp4 is required"),
    };

    eprintln!("wrote {} frames to {}", report.frames_emitted, out.display());
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let driver = build_driver(&args.input)?;
    let frame = driver.render_tick(arscan::FrameIndex(args.index))?;
    write_png(&args.out, &frame)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn write_png(path: &Path, frame: &arscan::RasterFrame) -> anyhow::Result<()> {
    arscan::ensure_parent_dir(path)?;
    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgb8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))
}
