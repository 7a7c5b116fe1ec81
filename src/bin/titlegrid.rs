use std::{
    fs::File,
    io::{BufReader, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use titlegrid::{
    CatalogSource as _, Effect, FrameInput, Grid, Host, LoadStatus, LoaderHandoff, MenuConfig,
    MenuSession, ProgressSink, RecordingRenderer, SilentAudio, TitleGridResult, TitleListFile,
};

#[derive(Parser, Debug)]
#[command(name = "titlegrid", version)]
struct Cli {
    /// Log engine events to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Lay out a title list and print the grid as JSON.
    Layout(LayoutArgs),
    /// Drive a headless menu with scripted input and print one JSON line per frame.
    Simulate(SimulateArgs),
}

#[derive(Parser, Debug)]
struct LayoutArgs {
    /// Title list (identifiers separated by commas or whitespace).
    #[arg(long)]
    catalog: PathBuf,

    /// Menu configuration JSON.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Title list (identifiers separated by commas or whitespace).
    #[arg(long)]
    catalog: PathBuf,

    /// Menu configuration JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Input script: a JSON list of `{ "frames": n, "input": { ... } }` steps.
    #[arg(long)]
    script: Option<PathBuf>,

    /// Frames to run; defaults to the script length.
    #[arg(long)]
    frames: Option<u64>,

    /// Report the load as finished after this many polls.
    #[arg(long)]
    load_after: Option<u32>,
}

#[derive(Clone, Debug, serde::Deserialize)]
struct ScriptStep {
    frames: u64,
    #[serde(default)]
    input: FrameInput,
}

#[derive(serde::Serialize)]
struct FrameLine<'a> {
    frame: u64,
    state: &'static str,
    row: usize,
    col: i32,
    selected: Option<usize>,
    viewport: f64,
    effects: &'a [Effect],
    draw_commands: usize,
}

/// Loader that never touches storage: it reports progress on every poll and finishes after
/// a fixed number of polls, if any.
struct ScriptedLoader {
    finish_after: Option<u32>,
    polls: u32,
}

impl LoaderHandoff for ScriptedLoader {
    fn begin_load(
        &mut self,
        title_id: &str,
        progress: &mut dyn ProgressSink,
    ) -> TitleGridResult<LoadStatus> {
        tracing::info!(title_id, "scripted load started");
        self.polls = 0;
        progress.on_progress(0.0);
        Ok(LoadStatus::Pending)
    }

    fn poll(&mut self, progress: &mut dyn ProgressSink) -> TitleGridResult<LoadStatus> {
        self.polls += 1;
        let Some(total) = self.finish_after else {
            progress.on_progress(0.0);
            return Ok(LoadStatus::Pending);
        };
        progress.on_progress((f64::from(self.polls) / f64::from(total.max(1))).min(1.0));
        Ok(if self.polls >= total {
            LoadStatus::Ready
        } else {
            LoadStatus::Pending
        })
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Layout(args) => cmd_layout(args),
        Command::Simulate(args) => cmd_simulate(args),
    }
}

fn read_config(path: Option<&Path>) -> anyhow::Result<MenuConfig> {
    match path {
        Some(p) => MenuConfig::from_path(p)
            .with_context(|| format!("load menu config '{}'", p.display())),
        None => Ok(MenuConfig::default()),
    }
}

fn read_script(path: &Path) -> anyhow::Result<Vec<ScriptStep>> {
    let f = File::open(path).with_context(|| format!("open input script '{}'", path.display()))?;
    let steps: Vec<ScriptStep> =
        serde_json::from_reader(BufReader::new(f)).with_context(|| "parse input script JSON")?;
    Ok(steps)
}

fn cmd_layout(args: LayoutArgs) -> anyhow::Result<()> {
    let cfg = read_config(args.config.as_deref())?;
    let entries = TitleListFile::new(&args.catalog)
        .load()
        .with_context(|| format!("read title list '{}'", args.catalog.display()))?;
    let grid = Grid::build(entries, &cfg)?;
    let json = serde_json::to_string_pretty(&grid).with_context(|| "serialize grid")?;
    println!("{json}");
    Ok(())
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let cfg = read_config(args.config.as_deref())?;
    let steps = match &args.script {
        Some(p) => read_script(p)?,
        None => Vec::new(),
    };
    let scripted: u64 = steps.iter().map(|s| s.frames).sum();
    let frames = args.frames.unwrap_or(scripted);

    let session = MenuSession::new(cfg, Box::new(TitleListFile::new(&args.catalog)))?;
    let loader = ScriptedLoader {
        finish_after: args.load_after,
        polls: 0,
    };
    let mut host = Host::new(session, SilentAudio, loader);
    let mut renderer = RecordingRenderer::new();

    let mut inputs = steps
        .iter()
        .flat_map(|s| std::iter::repeat_n(s.input, s.frames as usize));
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for _ in 0..frames {
        let input = inputs.next().unwrap_or_default();
        renderer.clear();
        let effects = host.frame(&input, &mut renderer)?;

        let s = host.session();
        let line = FrameLine {
            frame: s.frame().0,
            state: s.state().name(),
            row: s.cursor().row(),
            col: s.cursor().col(),
            selected: s.selected(),
            viewport: s.viewport().offset(),
            effects: &effects,
            draw_commands: renderer.commands().len(),
        };
        serde_json::to_writer(&mut out, &line).with_context(|| "serialize frame line")?;
        writeln!(out).with_context(|| "write frame line")?;
        if !s.is_active() {
            break;
        }
    }
    Ok(())
}
