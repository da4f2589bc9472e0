//! godoc-lint CLI entry point

#[tokio::main]
async fn main() {
    // Structured logging to stderr; stdout carries the report
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .try_init();

    godoc_lint::cli::run().await;
}
