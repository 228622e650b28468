mod broadcaster;
mod config;
mod input;

use clap::Parser;
use common::games::SessionRng;
use common::games::snake::{SessionCommand, SessionEvent, SnakeSession, SnakeSessionState};
use common::leaderboard::{AuthClient, AuthSession, InMemoryLeaderboard, LeaderboardClient};
use common::{Username, log, logger};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use broadcaster::ConsoleBroadcaster;
use input::{InputCommand, parse_input};

#[derive(Parser)]
#[command(name = "snake_client")]
struct Args {
    #[arg(long)]
    username: Option<String>,

    #[arg(long)]
    password: Option<String>,

    /// Create the account instead of logging in.
    #[arg(long)]
    signup: bool,

    /// Fixed seed for food placement.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = config::get_config_manager().get_or_create_config()?;

    let leaderboard = if config.leaderboard.seed_demo_data {
        InMemoryLeaderboard::with_demo_data()
    } else {
        InMemoryLeaderboard::new()
    };
    let auth = authenticate(&leaderboard, &args).await;

    let rng = args.seed.map(SessionRng::new).unwrap_or_else(SessionRng::from_random);
    log!("Starting session with seed {}", rng.seed());
    let session_state = SnakeSessionState::create("console", config.game.session_settings(), rng, auth);

    let (command_tx, command_rx) = mpsc::unbounded_channel();
    tokio::spawn(read_console_input(session_state.clone(), command_tx));

    println!("w/a/s/d to turn, p or space to pause, r to restart, t to toggle walls, q to quit");
    let summary = SnakeSession::run(session_state, command_rx, leaderboard.clone(), ConsoleBroadcaster).await;

    println!(
        "Played {} game(s), best score {}, last score {}",
        summary.games_played, summary.best_score, summary.last_score
    );
    print_top_scores(&leaderboard, config.leaderboard.top_scores_limit).await;

    Ok(())
}

async fn authenticate(auth_client: &impl AuthClient, args: &Args) -> Option<AuthSession> {
    let (Some(username), Some(password)) = (&args.username, &args.password) else {
        return None;
    };
    let username = Username::new(username.clone());

    let result = if args.signup {
        auth_client.signup(&username, password).await
    } else {
        auth_client.login(&username, password).await
    };

    match result {
        Ok(session) => {
            log!("Authenticated as {}", session.username);
            println!("Playing as {}", session.username);
            Some(session)
        }
        Err(e) => {
            log!("Authentication for {} failed: {}", username, e);
            println!("Authentication failed ({}), playing anonymously", e);
            None
        }
    }
}

async fn read_console_input(
    session_state: SnakeSessionState,
    command_tx: mpsc::UnboundedSender<SessionCommand>,
) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                log!("Failed to read console input: {}", e);
                break;
            }
        };

        let command = match parse_input(&line) {
            Some(InputCommand::Event(event)) => SessionCommand::Event(event),
            Some(InputCommand::ToggleWalkThrough) => {
                let mode = session_state.game_state.lock().await.wall_collision_mode();
                SessionCommand::Event(SessionEvent::SetWallCollisionMode(mode.toggled()))
            }
            Some(InputCommand::Quit) => break,
            None => continue,
        };

        if command_tx.send(command).is_err() {
            return;
        }
    }

    let _ = command_tx.send(SessionCommand::Quit);
}

async fn print_top_scores(leaderboard: &impl LeaderboardClient, limit: usize) {
    match leaderboard.get_top_scores(limit).await {
        Ok(scores) => {
            println!("Top scores:");
            for (rank, entry) in scores.iter().enumerate() {
                println!(
                    "{:>2}. {:<16} {:>6}  {}",
                    rank + 1,
                    entry.username.as_str(),
                    entry.score,
                    entry.date.format("%Y-%m-%d")
                );
            }
        }
        Err(e) => log!("Failed to load top scores: {}", e),
    }
}
