//! Tracing pipeline: `tracing` spans exported as OTLP JSON to a local file.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK tracer → FileSpanExporter → rolodex-otlp.json
//! ```
//!
//! The plugin runs in a WASM sandbox with no collector to talk to, so every
//! exported batch is appended as one JSON line under
//! `/host/.local/share/zellij/rolodex/`. The file rotates at 10 MiB and the
//! three most recent backups are kept.
//!
//! The filter comes from `RUST_LOG` if set, else the `trace_level` plugin
//! option, else `"info"`.

mod exporter;
mod init;
mod rotating;

pub use init::init_tracing;
