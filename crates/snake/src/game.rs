//! Growing-body game engine
//!
//! The body is a bounded segment list with the head first. Each advance step
//! runs the terminal checks (boundary, self-collision, win), then moves the
//! head one cell in the current direction, growing on food and trimming the
//! tail otherwise. Turns are debounced to one per step.

use arrayvec::ArrayVec;
use brick_game_score::HighScoreFile;
use brick_game_types::{
    Direction, Phase, Point, SimpleRng, UserAction, BOARD_HEIGHT, BOARD_WIDTH,
    SNAKE_BASE_SPEED_MS, SNAKE_LEVEL_SCORE_STEP, SNAKE_SCORE_FILE,
    SNAKE_SPEED_LEVEL_STEP_MS, SNAKE_WIN_SCORE,
};

const BOARD_CELLS: usize = BOARD_WIDTH as usize * BOARD_HEIGHT as usize;

/// Checkerboard backdrop value for an empty cell (12 or 13). Renderer-only;
/// play never mutates the grid.
pub fn backdrop(x: u8, y: u8) -> u8 {
    13 - (x + y) % 2
}

/// Complete growing-body game state
#[derive(Debug, Clone)]
pub struct Game {
    body: ArrayVec<Point, BOARD_CELLS>,
    food: Option<Point>,
    direction: Direction,
    score: u32,
    high_score: u32,
    level: u32,
    speed_ms: u32,
    phase: Phase,
    move_acc_ms: u32,
    // One accepted turn per advance step
    turn_ready: bool,
    rng: SimpleRng,
    score_file: HighScoreFile,
}

impl Game {
    /// Create a new game using the well-known high-score file
    pub fn new(seed: u32) -> Self {
        Self::with_score_file(seed, HighScoreFile::new(SNAKE_SCORE_FILE))
    }

    /// Create a new game persisting its high score through `score_file`.
    /// The snake starts as four vertical segments in mid-board, heading up.
    pub fn with_score_file(seed: u32, score_file: HighScoreFile) -> Self {
        let mut body = ArrayVec::new();
        body.push(Point::new(5, 9));
        body.push(Point::new(5, 10));
        body.push(Point::new(5, 11));
        body.push(Point::new(5, 12));

        let high_score = score_file.load();
        let mut game = Self {
            body,
            food: None,
            direction: Direction::Up,
            score: 0,
            high_score,
            level: 1,
            speed_ms: SNAKE_BASE_SPEED_MS,
            phase: Phase::NotStarted,
            move_acc_ms: 0,
            turn_ready: true,
            rng: SimpleRng::new(seed),
            score_file,
        };
        game.relocate_food();
        game
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Milliseconds between movement steps at the current level
    pub fn speed_ms(&self) -> u32 {
        self.speed_ms
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Body segments, head first
    pub fn body(&self) -> &[Point] {
        &self.body
    }

    pub fn head(&self) -> Point {
        self.body[0]
    }

    /// Current food cell; `None` only when the board is full
    pub fn food(&self) -> Option<Point> {
        self.food
    }

    /// Transition from `NotStarted` to `Running`; no-op in any other phase
    pub fn start(&mut self) {
        if self.phase == Phase::NotStarted {
            self.phase = Phase::Running;
        }
    }

    /// Toggle between `Running` and `Paused`; no-op in any other phase
    pub fn pause_toggle(&mut self) {
        self.phase = match self.phase {
            Phase::Running => Phase::Paused,
            Phase::Paused => Phase::Running,
            other => other,
        };
    }

    /// Persist the high score and quit, from any phase
    pub fn terminate(&mut self) {
        self.persist_high_score();
        self.phase = Phase::Quit;
    }

    /// Request a turn. Honored only while `Running`, at most once per
    /// advance step, and never into the opposite of the current heading.
    /// An accepted request (including one that repeats the current heading)
    /// consumes the turn allowance until the next step.
    pub fn set_direction(&mut self, dir: Direction) -> bool {
        if self.phase != Phase::Running || !self.turn_ready {
            return false;
        }
        if dir == self.direction.opposite() {
            return false;
        }
        self.direction = dir;
        self.turn_ready = false;
        true
    }

    /// Accumulate elapsed time and perform a movement step each time the
    /// level-derived interval is crossed
    pub fn advance(&mut self, elapsed_ms: u32) {
        if self.phase != Phase::Running {
            return;
        }
        self.move_acc_ms = self.move_acc_ms.saturating_add(elapsed_ms);
        if self.move_acc_ms >= self.speed_ms {
            self.step();
            self.move_acc_ms = 0;
        }
    }

    /// Apply an abstract input action. Arrows turn; `Action` with `held`
    /// sprints one immediate step. `Start`/`Pause`/`Terminate` are processed
    /// in any phase.
    pub fn apply_input(&mut self, action: UserAction, held: bool) {
        if self.phase == Phase::Running {
            match action {
                UserAction::Up => {
                    self.set_direction(Direction::Up);
                }
                UserAction::Down => {
                    self.set_direction(Direction::Down);
                }
                UserAction::Left => {
                    self.set_direction(Direction::Left);
                }
                UserAction::Right => {
                    self.set_direction(Direction::Right);
                }
                UserAction::Action if held => self.step(),
                _ => {}
            }
        }

        match action {
            UserAction::Start => self.start(),
            UserAction::Pause => self.pause_toggle(),
            UserAction::Terminate => self.terminate(),
            _ => {}
        }
    }

    /// One movement step. Terminal checks run first: boundary, then
    /// self-collision, then win, so a win at full score takes precedence
    /// over a collision on the same step.
    fn step(&mut self) {
        if self.phase != Phase::Running {
            return;
        }

        let head = self.head();
        let hit_wall = match self.direction {
            Direction::Left => head.x <= 0,
            Direction::Right => head.x >= BOARD_WIDTH as i8 - 1,
            Direction::Up => head.y <= 0,
            Direction::Down => head.y >= BOARD_HEIGHT as i8 - 1,
        };
        let new_head = head.step(self.direction);
        let hit_self = !hit_wall && self.body.iter().any(|&p| p == new_head);

        if self.score == SNAKE_WIN_SCORE {
            self.phase = Phase::Won;
            return;
        }
        if hit_wall || hit_self {
            self.phase = Phase::Lost;
            return;
        }

        self.body.insert(0, new_head);
        if self.food == Some(new_head) {
            self.score += 1;
            self.level = (self.score / SNAKE_LEVEL_SCORE_STEP + 1)
                .min(brick_game_types::MAX_LEVEL);
            self.speed_ms = SNAKE_BASE_SPEED_MS - self.level * SNAKE_SPEED_LEVEL_STEP_MS;
            self.persist_high_score();
            self.relocate_food();
        } else {
            self.body.pop();
        }

        self.turn_ready = true;
    }

    /// Place the food uniformly among free cells; `None` when none remain
    fn relocate_food(&mut self) {
        let free = BOARD_CELLS - self.body.len();
        if free == 0 {
            self.food = None;
            return;
        }

        let mut k = self.rng.next_range(free as u32);
        for y in 0..BOARD_HEIGHT as i8 {
            for x in 0..BOARD_WIDTH as i8 {
                let p = Point::new(x, y);
                if self.body.iter().any(|&b| b == p) {
                    continue;
                }
                if k == 0 {
                    self.food = Some(p);
                    return;
                }
                k -= 1;
            }
        }
        self.food = None;
    }

    fn persist_high_score(&mut self) {
        if self.score >= self.high_score {
            self.high_score = self.score;
            self.score_file.save(self.high_score);
        }
    }
}
