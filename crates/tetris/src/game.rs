//! Game engine - phase machine, gravity, locking, and input dispatch
//!
//! The engine owns the board, the active and next pieces, and the
//! score/level/phase state. Time arrives as elapsed milliseconds through
//! [`Game::advance`]; an accumulator converts it into discrete gravity steps
//! at the level-derived interval, so correctness does not depend on the
//! caller's tick cadence.

use brick_game_score::HighScoreFile;
use brick_game_types::{
    Phase, PieceKind, Rotation, SimpleRng, UserAction, BOARD_HEIGHT, BOARD_WIDTH,
    TETRIS_SCORE_FILE,
};

use crate::board::Board;
use crate::pieces::{self, Mask, FIRST_SPAWN_Y, RESPAWN_Y, SPAWN_X};
use crate::scoring;

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// A freshly spawned piece above the board
    fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            x: SPAWN_X,
            y: RESPAWN_Y,
        }
    }

    /// The occupancy mask for the current rotation
    pub fn mask(&self) -> &'static Mask {
        pieces::mask(self.kind, self.rotation)
    }

    /// Absolute board coordinates of the four filled cells
    pub fn cells(&self) -> [(i8, i8); 4] {
        let mut cells = pieces::offsets(self.kind, self.rotation);
        for (dx, dy) in &mut cells {
            *dx += self.x;
            *dy += self.y;
        }
        cells
    }
}

/// Complete stacking-game state
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    active: Piece,
    next: PieceKind,
    score: u32,
    high_score: u32,
    level: u32,
    phase: Phase,
    gravity_acc_ms: u32,
    rng: SimpleRng,
    score_file: HighScoreFile,
}

impl Game {
    /// Create a new game using the well-known high-score file
    pub fn new(seed: u32) -> Self {
        Self::with_score_file(seed, HighScoreFile::new(TETRIS_SCORE_FILE))
    }

    /// Create a new game persisting its high score through `score_file`.
    /// Two pieces are pre-rolled: the active piece (visible at y = -2) and
    /// the lookahead.
    pub fn with_score_file(seed: u32, score_file: HighScoreFile) -> Self {
        let mut rng = SimpleRng::new(seed);
        let mut active = Piece::spawn(Self::draw(&mut rng));
        active.y = FIRST_SPAWN_Y;
        let next = Self::draw(&mut rng);
        let high_score = score_file.load();

        Self {
            board: Board::new(),
            active,
            next,
            score: 0,
            high_score,
            level: scoring::level_for_score(0),
            phase: Phase::NotStarted,
            gravity_acc_ms: 0,
            rng,
            score_file,
        }
    }

    fn draw(rng: &mut SimpleRng) -> PieceKind {
        PieceKind::ALL[rng.next_range(7) as usize]
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

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Piece {
        self.active
    }

    pub fn next_kind(&self) -> PieceKind {
        self.next
    }

    /// Current gravity interval in milliseconds
    pub fn gravity_interval_ms(&self) -> u32 {
        scoring::gravity_interval_ms(self.level)
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

    /// Try to shift the active piece one column left
    pub fn move_left(&mut self) -> bool {
        self.try_shift(-1)
    }

    /// Try to shift the active piece one column right
    pub fn move_right(&mut self) -> bool {
        self.try_shift(1)
    }

    fn try_shift(&mut self, dx: i8) -> bool {
        if self.phase != Phase::Running {
            return false;
        }

        // Columns always bind; rows above the board are never
        // collision-checked.
        let valid = self.active.cells().iter().all(|&(cx, cy)| {
            let nx = cx + dx;
            nx >= 0 && nx < BOARD_WIDTH as i8 && !self.board.is_occupied(nx, cy)
        });

        if valid {
            self.active.x += dx;
        }
        valid
    }

    /// Try to step the active piece to its next rotation state.
    /// The candidate mask must stay within columns, must not extend below
    /// the board, and must not overlap occupied cells at non-negative rows.
    /// No wall kicks: a rejected rotation leaves the piece unchanged.
    pub fn rotate(&mut self) -> bool {
        if self.phase != Phase::Running {
            return false;
        }

        let candidate = Piece {
            rotation: self.active.rotation.next(),
            ..self.active
        };
        let valid = candidate.cells().iter().all(|&(cx, cy)| {
            cx >= 0 && cx < BOARD_WIDTH as i8 && cy < BOARD_HEIGHT as i8
                && !self.board.is_occupied(cx, cy)
        });

        if valid {
            self.active = candidate;
        }
        valid
    }

    /// One immediate gravity step (the Down input)
    pub fn soft_drop(&mut self) {
        self.gravity_step();
    }

    /// Accumulate elapsed time and perform a gravity step each time the
    /// level-derived interval is crossed
    pub fn advance(&mut self, elapsed_ms: u32) {
        if self.phase != Phase::Running {
            return;
        }
        self.gravity_acc_ms = self.gravity_acc_ms.saturating_add(elapsed_ms);
        if self.gravity_acc_ms >= self.gravity_interval_ms() {
            self.gravity_step();
            self.gravity_acc_ms = 0;
        }
    }

    /// Apply an abstract input action. The `held` modifier has no meaning in
    /// this game. Movement inputs are honored only while `Running`;
    /// `Start`/`Pause`/`Terminate` are processed in any phase.
    pub fn apply_input(&mut self, action: UserAction, _held: bool) {
        if self.phase == Phase::Running {
            match action {
                UserAction::Left => {
                    self.move_left();
                }
                UserAction::Right => {
                    self.move_right();
                }
                UserAction::Down => self.soft_drop(),
                UserAction::Action => {
                    self.rotate();
                }
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

    /// One gravity step: lock evaluation strictly precedes movement, so a
    /// piece is never moved into an overlapping position.
    fn gravity_step(&mut self) {
        if self.phase != Phase::Running {
            return;
        }

        let cells = self.active.cells();
        let on_bottom = cells.iter().any(|&(_, cy)| cy == BOARD_HEIGHT as i8 - 1);
        let resting = cells
            .iter()
            .any(|&(cx, cy)| self.board.is_occupied(cx, cy + 1));

        if on_bottom {
            // Reaching the bottom row locks unconditionally
            self.lock();
        } else if resting {
            // Loss is checked strictly before the stamp would occur
            if self.board.top_row_occupied() {
                self.phase = Phase::Lost;
                return;
            }
            self.lock();
        }

        // The freshly spawned piece advances on the same cadence (-3 -> -2)
        self.active.y += 1;
    }

    /// Stamp the active piece, clear and score full rows, recompute the
    /// level, persist the high score, and spawn from the lookahead
    fn lock(&mut self) {
        self.board.stamp(&self.active.cells(), self.active.kind);

        let cleared = self.board.clear_full_rows();
        self.score += scoring::line_clear_score(cleared.len());
        self.level = scoring::level_for_score(self.score);
        self.persist_high_score();

        self.active = Piece::spawn(self.next);
        self.next = Self::draw(&mut self.rng);
    }

    fn persist_high_score(&mut self) {
        if self.score >= self.high_score {
            self.high_score = self.score;
            self.score_file.save(self.high_score);
        }
    }

    /// Fill a caller-owned snapshot with the full renderable state
    pub fn snapshot_into(&self, out: &mut crate::snapshot::GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);

        let color = self.next.color_index();
        let next_mask = pieces::mask(self.next, Rotation::North);
        for (dy, row) in next_mask.iter().enumerate() {
            for (dx, cell) in row.iter().enumerate() {
                out.next[dy][dx] = if *cell != 0 { color } else { 0 };
            }
        }

        out.active = crate::snapshot::ActiveSnapshot::from(self.active);
        out.score = self.score;
        out.high_score = self.high_score;
        out.level = self.level;
        out.gravity_ms = self.gravity_interval_ms();
        out.phase = self.phase;
    }

    pub fn snapshot(&self) -> crate::snapshot::GameSnapshot {
        let mut s = crate::snapshot::GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
