// multireplace/src/logger.rs
//! Logger setup shared by the binary and the integration tests.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;
use std::io::Write;

/// Initialises `env_logger` on stderr.
///
/// `RUST_LOG` is honoured, defaulting to `warn`. A `level` overrides the
/// global level. Calling this more than once is harmless.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder
        .target(Target::Stderr)
        .format(|buf, record| writeln!(buf, "[{} {}] {}", record.level(), record.target(), record.args()));
    let _ = builder.try_init();
}
