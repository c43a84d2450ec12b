use crate::consts;
use enum_dispatch::enum_dispatch;
use enum_map::Enum;
use std::fmt;

/// Gameplay & grass tunables, mutated only through the config menu
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct Options {
    pub(crate) speed: TickInterval,
    pub(crate) food: FoodQty,
    pub(crate) obstacles: ObstacleQty,
    pub(crate) amplitude: WaveAmplitude,
    pub(crate) wave_speed: WaveSpeed,
}

impl Options {
    pub(crate) fn get(&self, key: OptKey) -> OptValue {
        match key {
            OptKey::Speed => self.speed.into(),
            OptKey::Food => self.food.into(),
            OptKey::Obstacles => self.obstacles.into(),
            OptKey::Amplitude => self.amplitude.into(),
            OptKey::WaveSpeed => self.wave_speed.into(),
        }
    }

    pub(crate) fn set(&mut self, key: OptKey, value: OptValue) {
        match key {
            OptKey::Speed => {
                self.speed = value
                    .try_into()
                    .expect("Options::set(Speed, value) called with non-TickInterval value");
            }
            OptKey::Food => {
                self.food = value
                    .try_into()
                    .expect("Options::set(Food, value) called with non-FoodQty value");
            }
            OptKey::Obstacles => {
                self.obstacles = value
                    .try_into()
                    .expect("Options::set(Obstacles, value) called with non-ObstacleQty value");
            }
            OptKey::Amplitude => {
                self.amplitude = value
                    .try_into()
                    .expect("Options::set(Amplitude, value) called with non-WaveAmplitude value");
            }
            OptKey::WaveSpeed => {
                self.wave_speed = value
                    .try_into()
                    .expect("Options::set(WaveSpeed, value) called with non-WaveSpeed value");
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
pub(crate) enum OptKey {
    Speed,
    Food,
    Obstacles,
    Amplitude,
    WaveSpeed,
}

impl OptKey {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            OptKey::Speed => "Snake Speed (smaller = faster)",
            OptKey::Food => "Num Food",
            OptKey::Obstacles => "Num Obstacles",
            OptKey::Amplitude => "Grass Amplitude",
            OptKey::WaveSpeed => "Grass Wave Speed",
        }
    }
}

impl fmt::Display for OptKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// An adjustable option value.  `increase()` corresponds to the right arrow
/// in the config menu and `decrease()` to the left arrow; each implementor
/// supplies its own step size and floor.
#[enum_dispatch]
pub(crate) trait Adjustable {
    fn increase(&mut self);
    fn decrease(&mut self);
}

#[enum_dispatch(Adjustable)] // This also gives us From and TryInto
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum OptValue {
    TickInterval,
    FoodQty,
    ObstacleQty,
    WaveAmplitude,
    WaveSpeed,
}

impl fmt::Display for OptValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            OptValue::TickInterval(v) => write!(f, "{v}"),
            OptValue::FoodQty(v) => write!(f, "{v}"),
            OptValue::ObstacleQty(v) => write!(f, "{v}"),
            OptValue::WaveAmplitude(v) => write!(f, "{v}"),
            OptValue::WaveSpeed(v) => write!(f, "{v}"),
        }
    }
}

/// Milliseconds between gameplay ticks.  "Increasing" this option makes the
/// snake faster by shrinking the interval; shrinking past 1 wraps to -20,
/// at which point a tick fires every frame.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct TickInterval(i32);

impl TickInterval {
    pub(crate) fn get(self) -> i32 {
        self.0
    }
}

impl Default for TickInterval {
    fn default() -> TickInterval {
        TickInterval(consts::DEFAULT_TICK_INTERVAL)
    }
}

impl fmt::Display for TickInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Adjustable for TickInterval {
    fn increase(&mut self) {
        self.0 = if self.0 > 1 { self.0 - 1 } else { -20 };
    }

    fn decrease(&mut self) {
        self.0 += 1;
    }
}

/// Number of food cells kept on the field
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct FoodQty(usize);

impl FoodQty {
    pub(crate) fn get(self) -> usize {
        self.0
    }
}

impl Default for FoodQty {
    fn default() -> FoodQty {
        FoodQty(consts::DEFAULT_FOOD_QTY)
    }
}

impl fmt::Display for FoodQty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Adjustable for FoodQty {
    fn increase(&mut self) {
        self.0 += 1;
    }

    fn decrease(&mut self) {
        self.0 = self.0.saturating_sub(1);
    }
}

/// Number of obstacle cells placed when a game begins
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct ObstacleQty(usize);

impl ObstacleQty {
    pub(crate) fn get(self) -> usize {
        self.0
    }
}

impl Default for ObstacleQty {
    fn default() -> ObstacleQty {
        ObstacleQty(consts::DEFAULT_OBSTACLE_QTY)
    }
}

impl fmt::Display for ObstacleQty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Adjustable for ObstacleQty {
    fn increase(&mut self) {
        self.0 += 1;
    }

    fn decrease(&mut self) {
        self.0 = self.0.saturating_sub(1);
    }
}

/// Horizontal sway of the grass in pixels, stepped by 1 and floored at 0
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct WaveAmplitude(f32);

impl WaveAmplitude {
    pub(crate) fn get(self) -> f32 {
        self.0
    }
}

impl Default for WaveAmplitude {
    fn default() -> WaveAmplitude {
        WaveAmplitude(consts::DEFAULT_WAVE_AMPLITUDE)
    }
}

impl fmt::Display for WaveAmplitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

impl Adjustable for WaveAmplitude {
    fn increase(&mut self) {
        self.0 += 1.0;
    }

    fn decrease(&mut self) {
        self.0 = (self.0 - 1.0).max(0.0);
    }
}

/// Speed factor applied to the grass animation clock, stepped by 0.01 and
/// floored at 0
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct WaveSpeed(f32);

impl WaveSpeed {
    pub(crate) fn get(self) -> f32 {
        self.0
    }
}

impl Default for WaveSpeed {
    fn default() -> WaveSpeed {
        WaveSpeed(consts::DEFAULT_WAVE_SPEED)
    }
}

impl fmt::Display for WaveSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Adjustable for WaveSpeed {
    fn increase(&mut self) {
        self.0 += 0.01;
    }

    fn decrease(&mut self) {
        self.0 = (self.0 - 0.01).max(0.0);
    }
}

/// Visibility mode chosen in the mode menu
#[derive(Clone, Copy, Debug, Default, Enum, Eq, PartialEq)]
pub(crate) enum Mode {
    #[default]
    Normal,
    Flashlight,
}

impl Mode {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Mode::Normal => "Normal Mode",
            Mode::Flashlight => "Flashlight Mode",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
