use passdeck::cli;

#[tokio::main]
async fn main() {
    passdeck::logging::init();
    if let Err(e) = cli::run().await {
        eprintln!("❌ Error: {e}");
        std::process::exit(1);
    }
}
