//! Turn readiness gate host
//!
//! Drives a TurnGate from a frame loop and exposes the Fight/Run buttons as
//! REPL commands:
//! - Interactive mode: read commands from stdin
//! - Script mode: replay commands from a file (one per line, `#` comments)

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use turngate_cli::{CliContext, commands, logging, readline};
use turngate_core::context::{AppConfig, AppConfigExt, RunMode};
use turngate_core::{ActionKind, RosterConfig, demo_roster, load_roster_from_file};

// ═══════════════════════════════════════════════════════════════════════════════
// CLI Arguments
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    /// Frames at wall-clock speed
    Realtime,
    /// Frames back to back on a virtual clock
    Accelerated,
}

impl From<ModeArg> for RunMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Realtime => RunMode::Realtime,
            ModeArg::Accelerated => RunMode::Accelerated,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ActionArg {
    Fight,
    Run,
}

impl From<ActionArg> for ActionKind {
    fn from(action: ActionArg) -> Self {
        match action {
            ActionArg::Fight => ActionKind::Fight,
            ActionArg::Run => ActionKind::Run,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "turngate")]
#[command(about = "Readiness-timer turn gate for a simple battle")]
#[command(version)]
struct Args {
    /// Roster TOML file (defaults to the last used roster, then the built-in demo)
    #[arg(short, long)]
    roster: Option<PathBuf>,

    /// Frame length in milliseconds
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Frame pacing for `auto`
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    /// Run commands from a file instead of stdin
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Also print button and refresh signals
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Parser)]
#[command(version, about = "cli")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Advance the gate by whole frames
    Tick {
        #[arg(short, long, default_value_t = 1)]
        frames: u32,
        /// Frame delta in seconds (defaults to the configured tick)
        #[arg(long)]
        dt: Option<f32>,
    },
    Fight {
        #[arg(short, long)]
        room: Option<u32>,
    },
    Run {
        #[arg(short, long)]
        room: Option<u32>,
    },
    Room {
        #[arg(short, long)]
        index: u32,
    },
    Status,
    /// Run unattended for a number of seconds
    Auto {
        #[arg(short, long)]
        seconds: f32,
        /// Press this button whenever it is enabled
        #[arg(short, long, value_enum)]
        act: Option<ActionArg>,
    },
    /// Restart the battle with the current roster
    Init,
    Load {
        #[arg(short, long)]
        path: String,
    },
    Config {
        #[arg(long)]
        tick_ms: Option<u64>,
        #[arg(long, value_enum)]
        mode: Option<ModeArg>,
    },
    SaveConfig,
    Exit,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), String> {
    let _log_guard = logging::init();
    let args = Args::parse();

    let mut config = AppConfig::load();
    if let Some(tick_ms) = args.tick_ms {
        config.set_tick_ms(tick_ms).map_err(|e| e.to_string())?;
    }
    if let Some(mode) = args.mode {
        config.mode = mode.into();
    }

    let (roster, source) = resolve_roster(&args, &config)?;
    let mut ctx = CliContext::new(config, &roster, source, args.verbose);

    if let Some(script) = &args.script {
        let content = std::fs::read_to_string(script)
            .map_err(|e| format!("failed to read script {}: {}", script.display(), e))?;
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            println!("turngate> {line}");
            if respond(line, &mut ctx).await? {
                break;
            }
        }
        return Ok(());
    }

    while let Some(line) = readline()? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match respond(line, &mut ctx).await {
            Ok(quit) => {
                if quit {
                    break;
                }
            }
            Err(err) => println!("{err}"),
        }
    }

    Ok(())
}

fn resolve_roster(args: &Args, config: &AppConfig) -> Result<(RosterConfig, String), String> {
    let path = args
        .roster
        .clone()
        .or_else(|| config.last_roster.as_ref().map(PathBuf::from));

    match path {
        Some(path) => {
            let roster = load_roster_from_file(&path).map_err(|e| commands::error_chain(&e))?;
            Ok((roster, path.display().to_string()))
        }
        None => {
            let roster = demo_roster().map_err(|e| commands::error_chain(&e))?;
            Ok((roster, "<demo>".to_string()))
        }
    }
}

async fn respond(line: &str, ctx: &mut CliContext) -> Result<bool, String> {
    let mut args = shlex::split(line).ok_or("error: Invalid quoting")?;
    args.insert(0, "turngate".to_string());
    let cli = Cli::try_parse_from(args).map_err(|e| e.to_string())?;

    match cli.command {
        Some(Commands::Tick { frames, dt }) => commands::tick(ctx, frames, dt),
        Some(Commands::Fight { room }) => commands::act(ctx, room, ActionKind::Fight),
        Some(Commands::Run { room }) => commands::act(ctx, room, ActionKind::Run),
        Some(Commands::Room { index }) => commands::set_room(ctx, index),
        Some(Commands::Status) => commands::show_status(ctx),
        Some(Commands::Auto { seconds, act }) => {
            commands::auto(ctx, seconds, act.map(ActionKind::from)).await
        }
        Some(Commands::Init) => {
            ctx.gate.init();
            ctx.flush();
        }
        Some(Commands::Load { path }) => commands::load_roster(ctx, &path)?,
        Some(Commands::Config { tick_ms, mode }) => {
            commands::configure(ctx, tick_ms, mode.map(RunMode::from))?
        }
        Some(Commands::SaveConfig) => commands::save_config(ctx)?,
        Some(Commands::Exit) => {
            commands::exit();
            return Ok(true);
        }
        None => {}
    }
    Ok(false)
}
