use crate::consts;
use crate::util::Point;
use macroquad::shapes::draw_rectangle;

/// One short-lived collision particle
#[derive(Clone, Copy, Debug, PartialEq)]
struct Sparkle {
    x: f32,
    y: f32,
    life: f32,
}

/// The pool of live sparkles.  Bursts are created on collision and each
/// particle fades out over the following ticks; the pool survives a gameplay
/// reset so the burst stays visible while the new round starts.
#[derive(Clone, Debug, Default, PartialEq)]
pub(super) struct Sparkles(Vec<Sparkle>);

impl Sparkles {
    pub(super) fn new() -> Sparkles {
        Sparkles(Vec::new())
    }

    /// Emit a burst of [`SPARKLE_BURST`][consts::SPARKLE_BURST] particles
    /// centered on `cell`
    pub(super) fn burst(&mut self, cell: Point) {
        let (cx, cy) = cell.center();
        for _ in 0..consts::SPARKLE_BURST {
            self.0.push(Sparkle {
                x: cx as f32,
                y: cy as f32,
                life: 1.0,
            });
        }
    }

    /// Age every particle by one tick and prune the exhausted ones
    pub(super) fn decay(&mut self) {
        for sparkle in &mut self.0 {
            sparkle.life -= consts::SPARKLE_DECAY;
        }
        self.0.retain(|sparkle| sparkle.life > 0.0);
    }

    pub(super) fn len(&self) -> usize {
        self.0.len()
    }

    pub(super) fn draw(&self) {
        for sparkle in &self.0 {
            let size = consts::SPARKLE_SIZE * sparkle.life;
            draw_rectangle(
                sparkle.x - size / 2.0,
                sparkle.y - size / 2.0,
                size,
                size,
                consts::SPARKLE_COLOR,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burst_size() {
        let mut sparkles = Sparkles::new();
        sparkles.burst(Point::new(400, 300));
        assert_eq!(sparkles.len(), consts::SPARKLE_BURST);
    }

    #[test]
    fn particles_fade_out_after_roughly_twenty_ticks() {
        let mut sparkles = Sparkles::new();
        sparkles.burst(Point::new(0, 0));
        for _ in 0..19 {
            sparkles.decay();
        }
        assert_eq!(sparkles.len(), consts::SPARKLE_BURST);
        sparkles.decay();
        sparkles.decay();
        assert_eq!(sparkles.len(), 0);
    }

    #[test]
    fn bursts_accumulate() {
        let mut sparkles = Sparkles::new();
        sparkles.burst(Point::new(0, 0));
        sparkles.decay();
        sparkles.burst(Point::new(100, 100));
        assert_eq!(sparkles.len(), consts::SPARKLE_BURST * 2);
    }
}
