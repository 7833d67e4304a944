//! In-memory backend that records every call.
//!
//! `TraceBackend` answers queries from a [`Script`] instead of real input and
//! appends each issued call to a log of [`Call`] values. It backs the widget
//! tests and the demo binary, where it stands in for a real renderer.

mod call;
mod recorder;
mod script;

pub use call::Call;
pub use recorder::TraceBackend;
pub use script::Script;
