mod api_error;
mod auth_handler;
mod leaderboard_handler;
mod server_config;
mod web_server;

use clap::Parser;
use common::leaderboard::InMemoryLeaderboard;
use common::{log, logger};
use web_server::AppState;

#[derive(Parser)]
#[command(name = "snake_leaderboard_server")]
struct Args {
    #[arg(long)]
    use_log_prefix: bool,

    /// Path to the YAML config; written with defaults if missing.
    #[arg(long, default_value = server_config::CONFIG_FILE)]
    config: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Server".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = server_config::get_config_manager(&args.config).get_or_create_config()?;

    let leaderboard = if config.seed_demo_data {
        log!("Seeding demo users and scores");
        InMemoryLeaderboard::with_demo_data()
    } else {
        InMemoryLeaderboard::new()
    };
    let state = AppState::new(
        leaderboard,
        config.default_top_scores_limit,
        config.max_top_scores_limit,
    );

    let shutdown_signal = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
        log!("Shutdown signal received");
    };

    web_server::run_web_server(&config.bind_address, state, shutdown_signal).await?;

    log!("Server shut down gracefully");

    Ok(())
}
