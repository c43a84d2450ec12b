use crate::consts;
use crate::options::Options;
use macroquad::shapes::draw_line;
use rand::Rng;

/// One blade of grass.  Everything here is fixed at generation time; only
/// the shared animation clock moves the tip.
#[derive(Clone, Copy, Debug, PartialEq)]
struct GrassBlade {
    /// Horizontal position of the base, in pixels
    x: f32,

    /// Vertical position of the base, somewhere in the bottom half of the
    /// window
    y: f32,

    height: f32,

    /// Phase offset into the shared sine wave
    phase: f32,

    /// Per-blade multiplier applied to the configured wave amplitude
    amplitude: f32,
}

impl GrassBlade {
    /// Where the tip of this blade sits at animation time `clock`
    fn tip(&self, clock: f32, options: &Options) -> (f32, f32) {
        let sway = (clock * options.wave_speed.get() + self.phase).sin()
            * options.amplitude.get()
            * self.amplitude
            * 0.1;
        (self.x + sway, self.y - self.height)
    }
}

/// The procedurally placed grass field behind every screen.  Generated once
/// at process start and animated by a clock that advances every frame.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Meadow {
    blades: Vec<GrassBlade>,
    clock: f32,
}

impl Meadow {
    pub(crate) fn new<R: Rng>(rng: &mut R) -> Meadow {
        let blades = (0..consts::BLADE_QTY)
            .map(|_| GrassBlade {
                x: rng.random_range(0.0..consts::SCREEN_WIDTH as f32),
                y: consts::SCREEN_HEIGHT as f32
                    - rng.random_range(0.0..consts::SCREEN_HEIGHT as f32 / 2.0),
                height: rng.random_range(10.0..50.0),
                phase: rng.random_range(0.0..10.0),
                amplitude: rng.random_range(0.5..10.5),
            })
            .collect();
        Meadow { blades, clock: 0.0 }
    }

    /// Advance the animation clock by one frame's worth of time
    pub(crate) fn advance(&mut self) {
        self.clock += consts::ANIMATION_STEP;
    }

    pub(crate) fn draw(&self, options: &Options) {
        for blade in &self.blades {
            let (tip_x, tip_y) = blade.tip(self.clock, options);
            draw_line(blade.x, blade.y, tip_x, tip_y, 1.0, consts::GRASS_COLOR);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    fn new_meadow() -> Meadow {
        Meadow::new(&mut ChaCha12Rng::seed_from_u64(RNG_SEED))
    }

    #[test]
    fn generation_bounds() {
        let meadow = new_meadow();
        assert_eq!(meadow.blades.len(), consts::BLADE_QTY);
        for blade in &meadow.blades {
            assert!((0.0..consts::SCREEN_WIDTH as f32).contains(&blade.x));
            assert!(blade.y > consts::SCREEN_HEIGHT as f32 / 2.0);
            assert!(blade.y <= consts::SCREEN_HEIGHT as f32);
            assert!((10.0..50.0).contains(&blade.height));
            assert!((0.0..10.0).contains(&blade.phase));
            assert!((0.5..10.5).contains(&blade.amplitude));
        }
    }

    #[test]
    fn sway_is_bounded_by_amplitude() {
        let meadow = new_meadow();
        let options = Options::default();
        let mut clock = 0.0;
        for _ in 0..500 {
            clock += consts::ANIMATION_STEP;
            for blade in &meadow.blades {
                let (tip_x, tip_y) = blade.tip(clock, &options);
                let bound = options.amplitude.get() * blade.amplitude * 0.1;
                assert!((tip_x - blade.x).abs() <= bound + 1e-4);
                assert!((tip_y - (blade.y - blade.height)).abs() < f32::EPSILON);
            }
        }
    }

    #[test]
    fn zero_amplitude_freezes_the_tips() {
        use crate::options::Adjustable;

        let meadow = new_meadow();
        let mut options = Options::default();
        while options.amplitude.get() > 0.0 {
            options.amplitude.decrease();
        }
        for blade in &meadow.blades {
            let (tip_x, _) = blade.tip(123.45, &options);
            assert_eq!(tip_x, blade.x);
        }
    }

    #[test]
    fn clock_advances_by_fixed_step() {
        let mut meadow = new_meadow();
        meadow.advance();
        meadow.advance();
        assert!((meadow.clock - 2.0 * consts::ANIMATION_STEP).abs() < f32::EPSILON);
    }
}
