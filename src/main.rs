//! Replay a recorded input script against a headless editor.
//!
//! Usage: `regionmark <script.json> [--config cfg.json] [--store regions.json] [--restore]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    let args = match Args::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    };

    // Installed before anything can fail so every error reaches stderr
    install_logger();

    if let Err(e) = run(args) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

/// Route `log` records to stderr at info level until the config says otherwise.
#[cfg(not(target_arch = "wasm32"))]
fn install_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Trace)
        .init();
    log::set_max_level(log::LevelFilter::Info);
}

#[cfg(not(target_arch = "wasm32"))]
fn load_config(
    path: Option<&std::path::Path>,
) -> Result<regionmark::EditorConfig, regionmark::ConfigError> {
    match path {
        Some(path) => regionmark::EditorConfig::load(path),
        None => Ok(regionmark::EditorConfig::default()),
    }
}

// WASM builds embed the library; there is no replay binary
#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
const USAGE: &str =
    "Usage: regionmark <script.json> [--config cfg.json] [--store regions.json] [--restore]";

#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug)]
struct Args {
    script: std::path::PathBuf,
    config: Option<std::path::PathBuf>,
    store: std::path::PathBuf,
    restore: bool,
}

#[cfg(not(target_arch = "wasm32"))]
impl Args {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self, String> {
        let mut script = None;
        let mut config = None;
        let mut store = None;
        let mut restore = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    config = Some(args.next().ok_or("--config needs a path")?.into());
                }
                "--store" => {
                    store = Some(args.next().ok_or("--store needs a path")?.into());
                }
                "--restore" => restore = true,
                flag if flag.starts_with("--") => {
                    return Err(format!("Unknown option: {}", flag));
                }
                _ if script.is_none() => script = Some(arg.into()),
                _ => return Err(format!("Unexpected argument: {}", arg)),
            }
        }

        Ok(Self {
            script: script.ok_or("Missing script path")?,
            config,
            store: store.unwrap_or_else(|| regionmark::FileStore::default_filename().into()),
            restore,
        })
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    use regionmark::regionmark_ui::{Event, RecordingSurface};
    use regionmark::{EditorState, FileStore, FrameClock, SyncController};
    use web_time::Instant;

    let config = load_config(args.config.as_deref())?;
    log::set_max_level(config.preferences.log_level.to_level_filter());

    let mut editor = EditorState::from_config(&config);
    let mut store = FileStore::new(&args.store);
    let mut sync = SyncController::new();

    if args.restore {
        let count = sync.restore_from(&mut editor, &mut store)?;
        log::info!("Restored {} regions from {:?}", count, store.path());
    }

    let script = std::fs::read_to_string(&args.script)?;
    let events: Vec<Event> = serde_json::from_str(&script)?;
    log::info!("Replaying {} events from {:?}", events.len(), args.script);

    let mut clock = FrameClock::new(config.preferences.frame_rate);
    let mut surface = RecordingSurface::new();
    let mut draw_commands = 0;

    for event in &events {
        log::debug!("Event: {:?}", event);
        editor.handle_event(event);

        // Every event is followed by exactly one frame, paced by the clock
        let now = Instant::now();
        if !clock.should_render(now) {
            std::thread::sleep(clock.time_until_next(now));
        }
        editor.render(&mut surface);
        draw_commands += surface.take().len();
        clock.frame_rendered(Instant::now());
    }

    log::info!(
        "Replay finished: {} frames, {} draw commands, {} regions, selected={:?}, drawing={}",
        clock.frame_count(),
        draw_commands,
        editor.regions().len(),
        editor.selected(),
        editor.is_drawing()
    );

    sync.save_to(&editor, &mut store)?;
    log::info!("Saved {} regions to {:?}", editor.regions().len(), store.path());
    Ok(())
}
