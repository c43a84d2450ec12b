//! Assorted constants & hard-coded configuration
use crate::util::Point;
use macroquad::color::Color;

/// Width of the window in pixels
pub(crate) const SCREEN_WIDTH: i32 = 800;

/// Height of the window in pixels
pub(crate) const SCREEN_HEIGHT: i32 = 600;

/// Side length of one grid cell in pixels; also the distance the snake moves
/// per tick
pub(crate) const GRID_SIZE: i32 = 20;

/// Default time between movements of the snake, in milliseconds
pub(crate) const DEFAULT_TICK_INTERVAL: i32 = 100;

/// Default number of food cells present at once
pub(crate) const DEFAULT_FOOD_QTY: usize = 10;

/// Default number of obstacle cells placed at the start of a game
pub(crate) const DEFAULT_OBSTACLE_QTY: usize = 15;

/// How many obstacles are added every time the snake eats
pub(crate) const OBSTACLES_PER_MEAL: usize = 5;

/// Default horizontal sway of the grass, in pixels
pub(crate) const DEFAULT_WAVE_AMPLITUDE: f32 = 15.0;

/// Default speed factor applied to the grass animation clock
pub(crate) const DEFAULT_WAVE_SPEED: f32 = 0.05;

/// The cell the snake's head is (re)seeded at on every game start and reset
pub(crate) const SNAKE_START: Point = Point::new(SCREEN_WIDTH / 2, SCREEN_HEIGHT / 2);

/// How many grid cells out from the snake's head remain visible in flashlight
/// mode
pub(crate) const FLASHLIGHT_RADIUS: i32 = 5;

/// Number of grass blades generated at startup
pub(crate) const BLADE_QTY: usize = 3000;

/// Amount added to the grass animation clock every frame
pub(crate) const ANIMATION_STEP: f32 = 0.02;

/// Number of sparkles emitted by one collision burst
pub(crate) const SPARKLE_BURST: usize = 20;

/// Amount of life a sparkle loses per gameplay tick; sparkles start at 1.0
/// and are pruned at 0
pub(crate) const SPARKLE_DECAY: f32 = 0.05;

/// Side length in pixels of a sparkle at full life
pub(crate) const SPARKLE_SIZE: f32 = 5.0;

/// Path the menu/score font is loaded from; the built-in font is used when
/// the file is absent
pub(crate) const FONT_PATH: &str = "assets/font.ttf";

/// Style for the grid lines behind the playing field
pub(crate) const GRID_LINE_COLOR: Color = Color::new(0.196, 0.196, 0.196, 1.0);

/// Translucent wash drawn over the grass so the field reads against it
pub(crate) const OVERLAY_COLOR: Color = Color::new(0.118, 0.118, 0.118, 0.5);

/// Style for the snake's segments
pub(crate) const SNAKE_COLOR: Color = Color::new(0.0, 1.0, 0.0, 1.0);

/// Style for food cells
pub(crate) const FOOD_COLOR: Color = Color::new(1.0, 0.0, 0.0, 1.0);

/// Style for obstacle cells
pub(crate) const OBSTACLE_COLOR: Color = Color::new(0.149, 0.561, 0.725, 1.0);

/// Forest green, for the grass
pub(crate) const GRASS_COLOR: Color = Color::new(0.133, 0.545, 0.133, 1.0);

/// Style for sparkles
pub(crate) const SPARKLE_COLOR: Color = Color::new(1.0, 1.0, 1.0, 1.0);

/// Style for the currently-selected menu item and for titles
pub(crate) const SELECTION_COLOR: Color = Color::new(1.0, 1.0, 0.0, 1.0);

/// Style for unselected menu items and ordinary text
pub(crate) const TEXT_COLOR: Color = Color::new(1.0, 1.0, 1.0, 1.0);

/// Style for key-hint lines at the bottom of menus
pub(crate) const HINT_COLOR: Color = Color::new(0.784, 0.784, 0.784, 1.0);

/// Style for text drawn on top of a button
pub(crate) const BUTTON_LABEL_COLOR: Color = Color::new(0.0, 0.0, 0.0, 1.0);

/// Point size used for menu items and buttons
pub(crate) const MENU_FONT_SIZE: u16 = 24;

/// Point size used for the score bar
pub(crate) const SCORE_FONT_SIZE: u16 = 28;

/// Point size used for menu titles
pub(crate) const TITLE_FONT_SIZE: u16 = 28;

/// Point size used for the "Game Paused" banner
pub(crate) const BANNER_FONT_SIZE: u16 = 32;

/// Point size used for key-hint lines
pub(crate) const HINT_FONT_SIZE: u16 = 16;
