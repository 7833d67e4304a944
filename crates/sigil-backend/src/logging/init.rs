use std::sync::Once;

use env_logger::{Env, WriteStyle};

/// Log target the trace backend records every backend call under.
pub const TRACE_TARGET: &str = "sigil::trace";

/// How the process-wide logger is set up.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// `env_logger` filter directives. Wins over `RUST_LOG` when set.
    pub env_filter: Option<String>,
    pub write_style: WriteStyle,
    /// Emit one line per recorded backend call (very noisy).
    pub trace_calls: bool,
    pub timestamps: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { env_filter: None, write_style: WriteStyle::Auto, trace_calls: false, timestamps: true }
    }
}

impl LoggingConfig {
    pub fn with_filter(filter: impl Into<String>) -> Self {
        Self { env_filter: Some(filter.into()), ..Self::default() }
    }

    pub fn trace_calls(mut self, on: bool) -> Self {
        self.trace_calls = on;
        self
    }

    /// Filter string handed to the builder; `None` defers to `RUST_LOG`.
    fn directives(&self) -> Option<String> {
        match &self.env_filter {
            Some(f) if self.trace_calls => Some(format!("{f},{TRACE_TARGET}=trace")),
            Some(f) => Some(f.clone()),
            None if self.trace_calls => Some(format!("info,{TRACE_TARGET}=trace")),
            None => None,
        }
    }
}

static INIT: Once = Once::new();

/// Installs `env_logger` as the global logger, once per process.
///
/// Later calls are no-ops, as is the first call if some other logger (a test
/// harness, say) got there first. Without directives the level is `info`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = match config.directives() {
            Some(d) => {
                let mut b = env_logger::Builder::new();
                b.parse_filters(&d);
                b
            }
            None => env_logger::Builder::from_env(Env::default().default_filter_or("info")),
        };
        builder.write_style(config.write_style);
        if !config.timestamps {
            builder.format_timestamp(None);
        }

        if builder.try_init().is_ok() {
            log::debug!("logging initialized (trace_calls={})", config.trace_calls);
        }
    });
}
