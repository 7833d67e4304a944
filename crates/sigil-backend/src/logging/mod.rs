//! Logger setup shared by sigil binaries. Library code only uses the `log`
//! facade.

mod init;

pub use init::{LoggingConfig, TRACE_TARGET, init_logging};
