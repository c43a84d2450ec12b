mod direction;
mod paused;
mod snake;
mod sparkle;
use self::direction::Direction;
use self::paused::{PauseOpt, Paused};
use self::snake::Snake;
use self::sparkle::Sparkles;
use crate::app::Screen;
use crate::assets::Assets;
use crate::command::Command;
use crate::consts;
use crate::menu::MainMenu;
use crate::options::Mode;
use crate::util::{Globals, Point};
use macroquad::color::{Color, BLACK};
use macroquad::shapes::{draw_line, draw_rectangle};
use rand::Rng;
use std::time::Instant;

/// The playing screen: one round of snake plus the pause overlay
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    globals: Globals,
    snake: Snake,
    food: Vec<Point>,
    obstacles: Vec<Point>,
    score: u32,
    state: GameState,
    sparkles: Sparkles,
    last_tick: Option<Instant>,
}

/// An audible outcome of a gameplay tick
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum GameEvent {
    Eat,
    Collision,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(globals: Globals) -> Self {
        Game::new_with_rng(globals, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(globals: Globals, rng: R) -> Game<R> {
        let mut game = Game {
            rng,
            globals,
            snake: Snake::new(consts::SNAKE_START, Direction::East),
            food: Vec::new(),
            obstacles: Vec::new(),
            score: 0,
            state: GameState::Running,
            sparkles: Sparkles::new(),
            last_tick: None,
        };
        game.reset();
        game
    }

    /// Advance the game by one frame, running the gameplay tick if it is due.
    /// Returns the tick's audible outcome, if any.
    pub(crate) fn update(&mut self) -> Option<GameEvent> {
        if !self.running() || !self.tick_due() {
            return None;
        }
        let event = self.step();
        self.sparkles.decay();
        event
    }

    /// Check the monotonic clock against the configured tick interval.  The
    /// comparison is signed: a non-positive interval fires on every frame.
    fn tick_due(&mut self) -> bool {
        let interval = i64::from(self.globals.options.speed.get());
        let now = Instant::now();
        let elapsed = match self.last_tick {
            Some(prev) => {
                i64::try_from(now.duration_since(prev).as_millis()).unwrap_or(i64::MAX)
            }
            None => i64::MAX,
        };
        if elapsed >= interval {
            self.last_tick = Some(now);
            true
        } else {
            false
        }
    }

    /// One gameplay tick: move the head one cell, or handle the collision
    /// that motion would cause
    fn step(&mut self) -> Option<GameEvent> {
        let new_head = self.snake.next_head();
        if self.snake.occupies(new_head) || self.obstacles.contains(&new_head) {
            self.collide();
            return Some(GameEvent::Collision);
        }
        self.snake.push_head(new_head);
        if self.food.contains(&new_head) {
            self.score += 1;
            if self.score > self.globals.high_score {
                self.globals.high_score = self.score;
            }
            self.food.clear();
            self.spawn_food();
            self.spawn_obstacles(consts::OBSTACLES_PER_MEAL);
            Some(GameEvent::Eat)
        } else {
            self.snake.drop_tail();
            None
        }
    }

    fn collide(&mut self) {
        self.sparkles.burst(self.snake.head());
        if self.score > self.globals.high_score {
            self.globals.high_score = self.score;
        }
        self.reset();
    }

    /// Re-seed the gameplay state while staying on the playing screen.  The
    /// sparkle pool is left alone so a collision burst outlives the reset.
    fn reset(&mut self) {
        self.snake = Snake::new(consts::SNAKE_START, Direction::East);
        self.score = 0;
        self.food.clear();
        self.obstacles.clear();
        self.spawn_food();
        let qty = self.globals.options.obstacles.get();
        self.spawn_obstacles(qty);
    }

    /// Place the configured number of food cells.  A candidate cell is
    /// rejected if the snake or an obstacle occupies it at this moment;
    /// there is no bound on retries.
    fn spawn_food(&mut self) {
        let qty = self.globals.options.food.get();
        for _ in 0..qty {
            let cell = loop {
                let cell = self.random_cell();
                if !self.snake.occupies(cell) && !self.obstacles.contains(&cell) {
                    break cell;
                }
            };
            self.food.push(cell);
        }
    }

    /// Place `qty` obstacles, rejecting cells the snake or a food cell
    /// occupies at this moment
    fn spawn_obstacles(&mut self, qty: usize) {
        for _ in 0..qty {
            let cell = loop {
                let cell = self.random_cell();
                if !self.snake.occupies(cell) && !self.food.contains(&cell) {
                    break cell;
                }
            };
            self.obstacles.push(cell);
        }
    }

    fn random_cell(&mut self) -> Point {
        Point {
            x: self.rng.random_range(0..consts::SCREEN_WIDTH / consts::GRID_SIZE)
                * consts::GRID_SIZE,
            y: self.rng.random_range(0..consts::SCREEN_HEIGHT / consts::GRID_SIZE)
                * consts::GRID_SIZE,
        }
    }
}

impl<R> Game<R> {
    pub(crate) fn globals(&self) -> &Globals {
        &self.globals
    }

    pub(crate) fn handle_command(&mut self, cmd: Command) -> Option<Screen> {
        match self.state {
            GameState::Running => match cmd {
                Command::Up => self.snake.turn(Direction::North),
                Command::Down => self.snake.turn(Direction::South),
                Command::Left => self.snake.turn(Direction::West),
                Command::Right => self.snake.turn(Direction::East),
                Command::Esc => self.state = GameState::Paused(Paused::new()),
                Command::Enter => (),
            },
            GameState::Paused(ref mut paused) => match paused.handle_command(cmd)? {
                PauseOpt::Resume => self.state = GameState::Running,
                PauseOpt::MainMenu => {
                    return Some(Screen::Main(MainMenu::new(self.globals.clone())))
                }
            },
        }
        None
    }

    fn running(&self) -> bool {
        self.state == GameState::Running
    }

    pub(crate) fn draw(&self, assets: &Assets) {
        self.draw_field();
        if self.globals.mode == Mode::Flashlight {
            self.draw_flashlight();
        }
        self.sparkles.draw();
        self.draw_score(assets);
        if let GameState::Paused(ref paused) = self.state {
            paused.draw(assets);
        }
    }

    fn draw_field(&self) {
        let width = consts::SCREEN_WIDTH as f32;
        let height = consts::SCREEN_HEIGHT as f32;
        for x in (0..consts::SCREEN_WIDTH).step_by(consts::GRID_SIZE as usize) {
            draw_line(x as f32, 0.0, x as f32, height, 1.0, consts::GRID_LINE_COLOR);
        }
        for y in (0..consts::SCREEN_HEIGHT).step_by(consts::GRID_SIZE as usize) {
            draw_line(0.0, y as f32, width, y as f32, 1.0, consts::GRID_LINE_COLOR);
        }
        draw_rectangle(0.0, 0.0, width, height, consts::OVERLAY_COLOR);
        for &cell in &self.obstacles {
            draw_cell(cell, consts::OBSTACLE_COLOR);
        }
        for cell in self.snake.segments() {
            draw_cell(cell, consts::SNAKE_COLOR);
        }
        for &cell in &self.food {
            draw_cell(cell, consts::FOOD_COLOR);
        }
    }

    /// Cover every cell whose center lies farther than the flashlight radius
    /// from the head's center, leaving a visible disk around the snake.
    /// Recomputed from scratch each frame.
    fn draw_flashlight(&self) {
        let (head_x, head_y) = self.snake.head().center();
        let radius = consts::FLASHLIGHT_RADIUS * consts::GRID_SIZE;
        for row in 0..consts::SCREEN_HEIGHT / consts::GRID_SIZE {
            for col in 0..consts::SCREEN_WIDTH / consts::GRID_SIZE {
                let cell = Point::new(col * consts::GRID_SIZE, row * consts::GRID_SIZE);
                let (cx, cy) = cell.center();
                let (dx, dy) = (cx - head_x, cy - head_y);
                if dx * dx + dy * dy > radius * radius {
                    draw_cell(cell, BLACK);
                }
            }
        }
    }

    fn draw_score(&self, assets: &Assets) {
        assets.draw_text_top_left(
            &format!("Score: {}", self.score),
            10.0,
            10.0,
            consts::SCORE_FONT_SIZE,
            consts::TEXT_COLOR,
        );
        assets.draw_text_top_left(
            &format!("High: {}", self.globals.high_score),
            10.0,
            40.0,
            consts::SCORE_FONT_SIZE,
            consts::SELECTION_COLOR,
        );
    }
}

fn draw_cell(cell: Point, color: Color) {
    draw_rectangle(
        cell.x as f32,
        cell.y as f32,
        consts::GRID_SIZE as f32,
        consts::GRID_SIZE as f32,
        color,
    );
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum GameState {
    Running,
    Paused(Paused),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    fn new_game() -> Game<ChaCha12Rng> {
        Game::new_with_rng(Globals::default(), ChaCha12Rng::seed_from_u64(RNG_SEED))
    }

    #[test]
    fn new_game_spawns_disjoint_entities() {
        let game = new_game();
        assert_eq!(game.snake.len(), 1);
        assert_eq!(game.snake.head(), consts::SNAKE_START);
        assert_eq!(game.food.len(), consts::DEFAULT_FOOD_QTY);
        assert_eq!(game.obstacles.len(), consts::DEFAULT_OBSTACLE_QTY);
        for &cell in &game.food {
            assert!(!game.snake.occupies(cell));
            assert!(!game.obstacles.contains(&cell));
        }
        for &cell in &game.obstacles {
            assert!(!game.snake.occupies(cell));
        }
    }

    #[test]
    fn spawned_cells_are_grid_aligned_and_in_bounds() {
        let game = new_game();
        for &cell in game.food.iter().chain(&game.obstacles) {
            assert_eq!(cell.x % consts::GRID_SIZE, 0);
            assert_eq!(cell.y % consts::GRID_SIZE, 0);
            assert!((0..consts::SCREEN_WIDTH).contains(&cell.x));
            assert!((0..consts::SCREEN_HEIGHT).contains(&cell.y));
        }
    }

    #[test]
    fn plain_move_drops_tail() {
        let mut game = new_game();
        game.food.clear();
        game.obstacles.clear();
        assert_eq!(game.step(), None);
        assert_eq!(game.snake.head(), Point::new(420, 300));
        assert_eq!(game.snake.len(), 1);
        assert_eq!(game.score, 0);
    }

    #[test]
    fn eating_grows_scores_and_respawns() {
        let mut game = new_game();
        game.food = vec![Point::new(420, 300)];
        game.obstacles.clear();
        assert_eq!(game.step(), Some(GameEvent::Eat));
        assert_eq!(game.score, 1);
        assert_eq!(game.globals.high_score, 1);
        assert_eq!(game.snake.head(), Point::new(420, 300));
        assert_eq!(game.snake.len(), 2);
        assert_eq!(game.food.len(), consts::DEFAULT_FOOD_QTY);
        assert_eq!(game.obstacles.len(), consts::OBSTACLES_PER_MEAL);
        for &cell in &game.food {
            assert!(!game.snake.occupies(cell));
        }
    }

    #[test]
    fn obstacle_collision_resets_without_moving() {
        let mut game = new_game();
        game.food.clear();
        game.obstacles = vec![Point::new(420, 300)];
        game.score = 7;
        assert_eq!(game.step(), Some(GameEvent::Collision));
        assert_eq!(game.sparkles.len(), consts::SPARKLE_BURST);
        assert_eq!(game.score, 0);
        assert_eq!(game.globals.high_score, 7);
        assert_eq!(game.snake.len(), 1);
        assert_eq!(game.snake.head(), consts::SNAKE_START);
        assert_eq!(game.food.len(), consts::DEFAULT_FOOD_QTY);
        assert_eq!(game.obstacles.len(), consts::DEFAULT_OBSTACLE_QTY);
    }

    #[test]
    fn self_collision_resets() {
        let mut game = new_game();
        game.food.clear();
        game.obstacles.clear();
        // head at (400, 300) facing east, with a segment already at (420, 300)
        game.snake = Snake::new(Point::new(420, 300), Direction::East);
        game.snake.push_head(Point::new(400, 300));
        assert_eq!(game.step(), Some(GameEvent::Collision));
        assert_eq!(game.snake.len(), 1);
        assert_eq!(game.snake.head(), consts::SNAKE_START);
        assert_eq!(game.sparkles.len(), consts::SPARKLE_BURST);
    }

    #[test]
    fn high_score_is_monotonic_across_resets() {
        let mut game = new_game();
        game.score = 5;
        game.collide();
        assert_eq!(game.globals.high_score, 5);
        game.score = 3;
        game.collide();
        assert_eq!(game.globals.high_score, 5);
    }

    #[test]
    fn direction_commands_turn_the_snake() {
        let mut game = new_game();
        game.food.clear();
        game.obstacles.clear();
        assert!(game.handle_command(Command::Up).is_none());
        let _ = game.step();
        assert_eq!(game.snake.head(), Point::new(400, 280));
    }

    #[test]
    fn pause_suppresses_the_tick() {
        let mut game = new_game();
        assert!(game.handle_command(Command::Esc).is_none());
        assert!(!game.running());
        assert_eq!(game.update(), None);
        assert_eq!(game.snake.head(), consts::SNAKE_START);
        assert!(game.handle_command(Command::Esc).is_none());
        assert!(game.running());
    }

    #[test]
    fn pause_menu_exits_to_main_with_globals() {
        let mut game = new_game();
        game.globals.high_score = 9;
        assert!(game.handle_command(Command::Esc).is_none());
        assert!(game.handle_command(Command::Down).is_none());
        match game.handle_command(Command::Enter) {
            Some(Screen::Main(menu)) => assert_eq!(menu.globals().high_score, 9),
            other => panic!("expected transition to the main menu, got {other:?}"),
        }
    }
}
