use std::io::Write;
use std::path::Path;

use turngate_core::context::{AppConfigExt, RunMode};
use turngate_core::{ActionKind, RoomIndex, load_roster_from_file};

use crate::CliContext;
use crate::pacer::format_clock;
use crate::presenter::render_view;

pub fn tick(ctx: &mut CliContext, frames: u32, dt: Option<f32>) {
    let dt = dt.unwrap_or_else(|| ctx.pacer.frame_secs());
    for _ in 0..frames {
        ctx.gate.tick(dt);
        ctx.flush();
    }
    println!("advanced {} frame(s) of {:.3}s", frames, dt);
}

/// Press Fight or Run for `room` (defaults to the active room).
pub fn act(ctx: &mut CliContext, room: Option<RoomIndex>, action: ActionKind) {
    let room = room.unwrap_or_else(|| ctx.gate.active_room_index());
    match ctx.gate.try_execute_player_action(room, action) {
        Some(_) => ctx.flush(),
        None if ctx.gate.is_reset_pending() => {
            println!("{action} ignored: waiting for the timer reset")
        }
        None => println!("{action} ignored: nobody in room {room} is ready"),
    }
}

pub fn set_room(ctx: &mut CliContext, index: RoomIndex) {
    let effective = ctx.gate.set_active_room_index(index);
    ctx.flush();
    if effective != index {
        println!("room {index} out of range, using {effective}");
    }
}

pub fn show_status(ctx: &CliContext) {
    let ready: Vec<_> = ctx
        .gate
        .ready_players()
        .map(|(_, c)| c.name.as_str())
        .collect();
    print!("{}", render_view(&ctx.gate.view(), ctx.gate.clock(), &ready));
}

/// Run the gate unattended for `seconds`, optionally pressing `auto_action`
/// whenever the active room's buttons are enabled.
pub async fn auto(ctx: &mut CliContext, seconds: f32, auto_action: Option<ActionKind>) {
    let frames = ctx.pacer.frames_for(seconds);
    let dt = ctx.pacer.frame_secs();
    let mut actions = 0u32;

    for _ in 0..frames {
        ctx.pacer.next_frame().await;
        ctx.gate.tick(dt);

        if let Some(action) = auto_action {
            let room = ctx.gate.active_room_index();
            if ctx.gate.actions_enabled(room)
                && ctx.gate.try_execute_player_action(room, action).is_some()
            {
                actions += 1;
            }
        }
        ctx.flush();
    }

    tracing::debug!(frames, actions, "auto run finished");
    println!(
        "ran {} frame(s) ({:?}), {} player action(s), {} paced in total",
        frames,
        ctx.pacer.mode(),
        actions,
        format_clock(ctx.pacer.elapsed_secs())
    );
}

pub fn load_roster(ctx: &mut CliContext, path: &str) -> Result<(), String> {
    let roster = load_roster_from_file(Path::new(path)).map_err(|e| error_chain(&e))?;
    ctx.replace_roster(&roster, path.to_string());
    ctx.config.remember_roster(path);
    println!("loaded {} combatant(s) from {}", roster.combatants.len(), path);
    Ok(())
}

pub fn show_settings(ctx: &CliContext) {
    println!("roster:  {}", ctx.roster_source);
    println!("tick:    {}ms", ctx.config.tick_ms);
    println!("mode:    {:?}", ctx.config.mode);
    println!("delay:   {}s", ctx.gate.reset_delay());
    println!("reentry: {:?}", ctx.gate.reentry_policy());
}

pub fn configure(
    ctx: &mut CliContext,
    tick_ms: Option<u64>,
    mode: Option<RunMode>,
) -> Result<(), String> {
    if let Some(tick_ms) = tick_ms {
        ctx.config.set_tick_ms(tick_ms).map_err(|e| e.to_string())?;
    }
    if let Some(mode) = mode {
        ctx.config.mode = mode;
    }
    ctx.reset_pacer();
    show_settings(ctx);
    Ok(())
}

pub fn save_config(ctx: &CliContext) -> Result<(), String> {
    ctx.config.save().map_err(|e| error_chain(&e))?;
    println!("configuration saved");
    Ok(())
}

pub fn exit() {
    let mut stdout = std::io::stdout();
    let _ = write!(stdout, "quitting...");
    let _ = stdout.flush();
}

/// Flatten an error and its sources into one line.
pub fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
