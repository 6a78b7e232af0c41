use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use justfilm::{
    BoothResult, BoothSession, FrameKind, FrameSource, PHOTO_COUNT, SlotIndex, Snapshot,
    SourceFrame, TestPatternSource, TickEvent, compose_strip, write_strip_png,
};

#[derive(Parser, Debug)]
#[command(name = "justfilm", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a full booth session: 4 timed captures, then compose and export the strip.
    Run(RunArgs),
    /// Compose a strip from four existing photo files (slot order).
    Compose(ComposeArgs),
    /// Write the built-in overlay assets (`images/<frame>.png`) for all frames.
    Assets(AssetsArgs),
}

#[derive(Parser, Debug)]
struct AssetsArgs {
    /// Root directory to scaffold the `images/` assets under.
    #[arg(long, default_value = ".")]
    assets_root: PathBuf,
}

#[derive(Parser, Debug)]
struct RunArgs {
    /// Directory of still images standing in for the live camera feed.
    /// Defaults to a synthetic test pattern.
    #[arg(long)]
    frames_dir: Option<PathBuf>,

    /// Overlay frame to stamp on the strip.
    #[arg(long, default_value = "frame1")]
    frame: FrameKindArg,

    /// Root directory holding `images/<frame>.png` assets.
    #[arg(long, default_value = ".")]
    assets_root: PathBuf,

    /// Directory to write `JustFilm.png` into.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Print a JSON session report to stdout.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Parser, Debug)]
struct ComposeArgs {
    /// Photo file, given exactly four times in slot order (top to bottom).
    #[arg(long = "photo", required = true)]
    photos: Vec<PathBuf>,

    /// Overlay frame to stamp on the strip.
    #[arg(long, default_value = "frame1")]
    frame: FrameKindArg,

    /// Root directory holding `images/<frame>.png` assets.
    #[arg(long, default_value = ".")]
    assets_root: PathBuf,

    /// Directory to write `JustFilm.png` into.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Run(args) => cmd_run(args),
        Command::Compose(args) => cmd_compose(args),
        Command::Assets(args) => cmd_assets(args),
    }
}

fn cmd_assets(args: AssetsArgs) -> anyhow::Result<()> {
    for path in justfilm::write_builtin_overlays(&args.assets_root)? {
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}

fn cmd_run(args: RunArgs) -> anyhow::Result<()> {
    let mut source: Box<dyn FrameSource> = match &args.frames_dir {
        Some(dir) => Box::new(DirFeedSource::open(dir)?),
        None => Box::new(TestPatternSource::new()),
    };

    let mut session = BoothSession::new();
    session.select_frame(args.frame.0);
    session.start()?;
    tracing::info!(frame = %args.frame.0, "booth session started");

    // The tick schedule lives here: one tick per second, stopped on the final
    // capture, so completion cannot leave a timer running.
    loop {
        std::thread::sleep(Duration::from_secs(1));
        match session.tick(Instant::now(), source.as_mut())? {
            TickEvent::Countdown(n) => eprintln!("{n}"),
            TickEvent::Captured {
                slot,
                sequence_done,
            } => {
                eprintln!("*flash* photo {} of {PHOTO_COUNT}", slot.as_usize() + 1);
                if sequence_done {
                    break;
                }
            }
        }
    }

    let out = session.export(&args.assets_root, &args.out_dir)?;
    if args.json {
        println!("{}", session.report(Some(out.clone())).to_json()?);
    }
    eprintln!("wrote {}", out.display());
    Ok(())
}

fn cmd_compose(args: ComposeArgs) -> anyhow::Result<()> {
    if args.photos.len() != PHOTO_COUNT {
        anyhow::bail!(
            "--photo must be given exactly {PHOTO_COUNT} times, got {}",
            args.photos.len()
        );
    }

    let mut shots = Vec::with_capacity(PHOTO_COUNT);
    for (i, path) in args.photos.iter().enumerate() {
        let bytes =
            std::fs::read(path).with_context(|| format!("read photo '{}'", path.display()))?;
        shots.push(Snapshot::from_encoded(SlotIndex::new(i)?, bytes));
    }

    let strip = compose_strip(&shots, args.frame.0, &args.assets_root)?;
    let out = write_strip_png(&strip, &args.out_dir)?;
    eprintln!("wrote {}", out.display());
    Ok(())
}

/// Clap-parseable wrapper around [`FrameKind`].
#[derive(Clone, Debug)]
struct FrameKindArg(FrameKind);

impl std::str::FromStr for FrameKindArg {
    type Err = justfilm::BoothError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(FrameKindArg)
    }
}

/// Live-feed stand-in that serves stills from a directory, in sorted order,
/// looping when it runs out.
struct DirFeedSource {
    files: Vec<PathBuf>,
    next: usize,
}

impl DirFeedSource {
    fn open(dir: &Path) -> anyhow::Result<Self> {
        let mut files: Vec<PathBuf> = std::fs::read_dir(dir)
            .with_context(|| format!("read frames dir '{}'", dir.display()))?
            .filter_map(|e| e.ok().map(|e| e.path()))
            .filter(|p| p.is_file())
            .collect();
        files.sort();
        if files.is_empty() {
            anyhow::bail!("frames dir '{}' holds no files", dir.display());
        }
        Ok(Self { files, next: 0 })
    }
}

impl FrameSource for DirFeedSource {
    fn grab(&mut self) -> BoothResult<SourceFrame> {
        let path = &self.files[self.next % self.files.len()];
        self.next += 1;

        let img = image::open(path)
            .with_context(|| format!("decode frame '{}'", path.display()))
            .map_err(|e| justfilm::BoothError::Capture(format!("{e:#}")))?
            .to_rgba8();
        let (width, height) = img.dimensions();
        SourceFrame::new(width, height, img.into_raw())
    }
}
