use common::games::GameBroadcaster;
use common::games::snake::{
    DeathReason, GRID_SIZE, GameEndReason, GameOverNotification, Point, SessionPhase,
    SnakeGameSnapshot, SubmissionStatus,
};

const HEAD: char = '@';
const BODY: char = 'o';
const FOOD: char = '*';
const EMPTY: char = '.';

/// Prints every frame and game-over summary to stdout.
#[derive(Clone, Default)]
pub struct ConsoleBroadcaster;

impl GameBroadcaster for ConsoleBroadcaster {
    async fn broadcast_state(&self, snapshot: SnakeGameSnapshot) {
        println!("{}", render_frame(&snapshot));
    }

    async fn broadcast_game_over(&self, notification: GameOverNotification) {
        println!("{}", describe_game_over(&notification));
    }
}

pub fn render_frame(snapshot: &SnakeGameSnapshot) -> String {
    let width = GRID_SIZE as usize;
    let mut cells = vec![vec![EMPTY; width]; width];

    let mut put = |point: Point, symbol: char| {
        if let (Ok(x), Ok(y)) = (usize::try_from(point.x), usize::try_from(point.y))
            && x < width
            && y < width
        {
            cells[y][x] = symbol;
        }
    };

    put(snapshot.food, FOOD);
    for segment in snapshot.segments.iter().skip(1) {
        put(*segment, BODY);
    }
    if let Some(head) = snapshot.segments.first() {
        put(*head, HEAD);
    }

    let border = format!("+{}+", "-".repeat(width));
    let mut frame = String::new();
    frame.push_str(&border);
    frame.push('\n');
    for row in cells {
        frame.push('|');
        frame.extend(row);
        frame.push_str("|\n");
    }
    frame.push_str(&border);
    frame.push('\n');
    frame.push_str(&format!(
        "Score: {}  {}  Walls: {}",
        snapshot.score,
        phase_label(snapshot.phase),
        if snapshot.wall_collision_mode.is_walk_through() {
            "walk-through"
        } else {
            "solid"
        }
    ));
    frame
}

pub fn describe_game_over(notification: &GameOverNotification) -> String {
    let reason = match notification.reason {
        GameEndReason::Death(DeathReason::WallCollision) => "hit the wall",
        GameEndReason::Death(DeathReason::SelfCollision) => "ran into itself",
        GameEndReason::GridFilled => "filled the whole grid",
    };
    let submission = match &notification.submission {
        SubmissionStatus::NotAttempted => String::new(),
        SubmissionStatus::Submitted(entry) => {
            format!(" Score saved for {}.", entry.username)
        }
        SubmissionStatus::Failed(e) => format!(" Could not save score: {}.", e),
    };

    format!(
        "Game over: the snake {}. Final score {}.{} Press r to play again or q to quit.",
        reason, notification.score, submission
    )
}

fn phase_label(phase: SessionPhase) -> &'static str {
    match phase {
        SessionPhase::Running => "",
        SessionPhase::Paused => "[paused]",
        SessionPhase::GameOver => "[game over]",
    }
}
