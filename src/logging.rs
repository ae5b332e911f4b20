use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber. `PASSDECK_LOG` wins over `RUST_LOG`; the
/// default keeps normal command output free of log lines. Password values are
/// never passed to tracing macros.
pub fn init() {
    let filter = EnvFilter::try_from_env("PASSDECK_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("passdeck=warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
