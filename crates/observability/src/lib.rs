//! Tracing/logging setup shared by the binaries.

/// Initialize process-wide logging.
///
/// Filtering follows `RUST_LOG` (default `info`). `FATURAS_LOG=json`
/// switches to JSON lines for log shippers; the default is a compact
/// human-readable format for the terminal. Safe to call multiple times;
/// subsequent calls are no-ops.
pub fn init() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var("FATURAS_LOG").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    if json {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .with_target(false)
            .try_init();
    } else {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .compact()
            .with_target(false)
            .try_init();
    }
}
