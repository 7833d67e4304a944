//! Replays the overview UI for a number of frames against the tracing
//! backend and reports what was issued. Pass `--trace-calls` to see every
//! backend call.

mod overview;

use anyhow::{Result, bail};
use clap::Parser;
use sigil_backend::logging::{LoggingConfig, init_logging};
use sigil_backend::trace::{Call, Script, TraceBackend};
use sigil_ui::Context;

use crate::overview::Overview;

#[derive(Parser, Debug)]
#[command(name = "sigil-demo")]
#[command(version, about = "Replay the overview UI against a recording backend")]
struct Cli {
    /// Number of frames to build
    #[arg(long, default_value_t = 3)]
    frames: u32,

    /// Log filter, overrides RUST_LOG
    #[arg(long)]
    log: Option<String>,

    /// Log every recorded backend call
    #[arg(long)]
    trace_calls: bool,

    /// Item label reported as clicked on every frame (repeatable)
    #[arg(long = "click")]
    clicks: Vec<String>,

    /// Text typed into the name field on the first frame
    #[arg(long)]
    name: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = cli.log.map(LoggingConfig::with_filter).unwrap_or_default();
    init_logging(logging.trace_calls(cli.trace_calls));

    if cli.frames == 0 {
        bail!("--frames must be at least 1");
    }

    let mut script = cli.clicks.iter().fold(Script::new(), |s, label| s.click(label.as_str()));
    if let Some(name) = &cli.name {
        script = script.type_text("##name", name.as_str());
    }

    let mut backend = TraceBackend::with_script(script);
    let mut state = Overview::default();

    for frame in 1..=cli.frames {
        Context::frame(&mut backend, |ctx| state.build(ctx));
        let calls = backend.take_calls();
        log::info!(
            "frame {frame}: {} calls, {} begins, {} ends",
            calls.len(),
            calls.iter().filter(|c| c.is_begin()).count(),
            calls.iter().filter(|c| c.is_end()).count(),
        );
        if calls.last() != Some(&Call::Render) {
            bail!("frame {frame} did not finish with render");
        }
        // Typed text is delivered once.
        backend.script.typed.clear();
    }

    log::info!(
        "done after {} frames: name={:?} selected={:?} checked={} radio={} clicks={}",
        backend.frame_count(),
        state.name,
        state.selected_item(),
        state.checked,
        state.radio.get(),
        state.clicks.get(),
    );
    Ok(())
}
