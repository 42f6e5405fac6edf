//! Log setup for the `figures` binary.

use env_logger::{Env, Target};

/// Sends log output to stdout, at `info` unless `RUST_LOG` says otherwise.
/// Calling it more than once is harmless.
pub fn init() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Stdout)
        .format_timestamp(None)
        .try_init();
}
