use env_logger::Env;

/// Environment variable overriding the log filter (e.g. `NOTES_LOG=debug`).
pub const LOG_ENV: &str = "NOTES_LOG";

/// Log to stderr, `info` and above unless `NOTES_LOG` says otherwise.
pub fn init() {
    env_logger::Builder::from_env(Env::default().filter_or(LOG_ENV, "info"))
        .format_timestamp(None)
        .format_target(false)
        .init();
}
