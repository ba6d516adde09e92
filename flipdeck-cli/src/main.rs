use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use flipdeck::{
    Control, CpuRasterizer, Deck, DeckBuilder, FrameRgba, InputEvent, MusicSpec, PageSpec,
    ScriptEvent, Session, Surface, run_script,
};

#[derive(Parser, Debug)]
#[command(name = "flipdeck", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a starter deck JSON (and a matching demo script).
    Init(InitArgs),
    /// Simulate to a tick and write a single PNG frame.
    Frame(FrameArgs),
    /// Simulate a scripted run and write a PNG frame sequence.
    Render(RenderArgs),
}

#[derive(Parser, Debug)]
struct InitArgs {
    /// Output deck JSON path.
    #[arg(long)]
    out: PathBuf,

    /// Also write a demo input script next to the deck.
    #[arg(long, default_value_t = true)]
    with_script: bool,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input deck JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Optional input script JSON (a list of timed events).
    #[arg(long)]
    script: Option<PathBuf>,

    /// Tick to simulate up to (0-based).
    #[arg(long)]
    tick: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input deck JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Optional input script JSON (a list of timed events).
    #[arg(long)]
    script: Option<PathBuf>,

    /// Number of ticks to simulate.
    #[arg(long)]
    ticks: u64,

    /// Output directory for the frame sequence.
    #[arg(long)]
    out: PathBuf,

    /// Write every k-th frame.
    #[arg(long, default_value_t = 1)]
    every: u64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Init(args) => cmd_init(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Render(args) => cmd_render(args),
    }
}

fn cmd_init(args: InitArgs) -> anyhow::Result<()> {
    let deck = starter_deck()?;
    let json = serde_json::to_string_pretty(&deck)?;
    write_with_parents(&args.out, json.as_bytes())?;
    eprintln!("wrote {}", args.out.display());

    if args.with_script {
        let script_path = args.out.with_extension("script.json");
        let json = serde_json::to_string_pretty(&starter_script())?;
        write_with_parents(&script_path, json.as_bytes())?;
        eprintln!("wrote {}", script_path.display());
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let deck = Deck::from_path(&args.in_path)?;
    let script = load_script(args.script.as_deref())?;

    let mut session = Session::new(deck)?;
    run_script(&mut session, &script, args.tick);

    let frame = CpuRasterizer::new().render(&session.scene())?;
    write_png(&args.out, &frame)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let deck = Deck::from_path(&args.in_path)?;
    let script = load_script(args.script.as_deref())?;
    let every = args.every.max(1);

    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("create output dir '{}'", args.out.display()))?;

    let mut session = Session::new(deck)?;
    let mut raster = CpuRasterizer::new();
    let mut pending: Vec<ScriptEvent> = script;
    pending.sort_by_key(|e| e.at_tick);
    let mut delivered = 0;
    let mut written = 0u64;

    for now in 0..args.ticks {
        while delivered < pending.len() && pending[delivered].at_tick <= now {
            session.handle_event(&pending[delivered].event);
            delivered += 1;
        }
        session.tick();

        if now % every == 0 {
            let frame = raster.render(&session.scene())?;
            let path = args.out.join(format!("frame_{now:05}.png"));
            write_png(&path, &frame)?;
            written += 1;
        }
    }

    eprintln!("wrote {} frames to {}", written, args.out.display());
    Ok(())
}

fn load_script(path: Option<&Path>) -> anyhow::Result<Vec<ScriptEvent>> {
    let Some(path) = path else {
        return Ok(Vec::new());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("read script '{}'", path.display()))?;
    let script: Vec<ScriptEvent> =
        serde_json::from_str(&json).with_context(|| format!("parse script '{}'", path.display()))?;
    Ok(script)
}

fn write_png(path: &Path, frame: &FrameRgba) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))
}

fn write_with_parents(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("write '{}'", path.display()))
}

fn starter_deck() -> anyhow::Result<Deck> {
    let deck = DeckBuilder::new(Surface {
        width: 960,
        height: 540,
    })
    .seed(2024)
    .music(MusicSpec {
        source: "music/cancion.mp3".to_string(),
        volume: 0.15,
        start_at_sec: 41.0,
    })
    .page(PageSpec::new("cover").with_typewriter("¡Feliz día! Pasa la página…"))
    .page(PageSpec::new("photos").with_slide_tab())
    .page(PageSpec::new("pop").with_confetti())
    .page(PageSpec::new("end").with_typewriter("Fin ❤"))
    .build()?;
    Ok(deck)
}

fn starter_script() -> Vec<ScriptEvent> {
    vec![
        ScriptEvent {
            at_tick: 0,
            event: InputEvent::Control(Control::Start),
        },
        ScriptEvent {
            at_tick: 90,
            event: InputEvent::Control(Control::Next),
        },
        ScriptEvent {
            at_tick: 180,
            event: InputEvent::Control(Control::Burst),
        },
        ScriptEvent {
            at_tick: 420,
            event: InputEvent::Control(Control::Restart),
        },
    ]
}
