use crate::consts;
use crate::game::GameEvent;
use macroquad::audio::{load_sound_from_bytes, play_sound, PlaySoundParams, Sound};
use macroquad::color::Color;
use macroquad::logging::warn;
use macroquad::text::{draw_text_ex, load_ttf_font, measure_text, Font, TextParams};

/// Frequency of the tone played when the snake eats, in Hz
const EAT_TONE: f32 = 880.0;

/// Frequency of the tone played on a collision, in Hz
const COLLISION_TONE: f32 = 110.0;

/// Everything loaded (or synthesized) once at startup: the menu/score font
/// and the two sound effects.  Every field degrades gracefully when loading
/// fails, so the game itself never has to care.
pub(crate) struct Assets {
    font: Option<Font>,
    eat: Option<Sound>,
    collision: Option<Sound>,
}

impl Assets {
    pub(crate) async fn load() -> Assets {
        let font = match load_ttf_font(consts::FONT_PATH).await {
            Ok(font) => Some(font),
            Err(e) => {
                warn!(
                    "failed to load {}: {:?}; falling back to the built-in font",
                    consts::FONT_PATH, e
                );
                None
            }
        };
        let eat = decode_tone(&sine_wav(EAT_TONE, 0.08, 0.6)).await;
        let collision = decode_tone(&sine_wav(COLLISION_TONE, 0.25, 0.7)).await;
        Assets {
            font,
            eat,
            collision,
        }
    }

    /// Fire-and-forget playback of the effect for a gameplay event
    pub(crate) fn play(&self, event: GameEvent) {
        let sound = match event {
            GameEvent::Eat => &self.eat,
            GameEvent::Collision => &self.collision,
        };
        if let Some(sound) = sound {
            play_sound(
                sound,
                PlaySoundParams {
                    looped: false,
                    volume: 1.0,
                },
            );
        }
    }

    /// Draw `text` with its top-left corner at (`x`, `y`)
    pub(crate) fn draw_text_top_left(&self, text: &str, x: f32, y: f32, size: u16, color: Color) {
        let dims = measure_text(text, self.font.as_ref(), size, 1.0);
        self.draw(text, x, y + dims.offset_y, size, color);
    }

    /// Draw `text` centered on (`center_x`, `center_y`)
    pub(crate) fn draw_text_centered(
        &self,
        text: &str,
        center_x: f32,
        center_y: f32,
        size: u16,
        color: Color,
    ) {
        let dims = measure_text(text, self.font.as_ref(), size, 1.0);
        self.draw(
            text,
            center_x - dims.width / 2.0,
            center_y - dims.height / 2.0 + dims.offset_y,
            size,
            color,
        );
    }

    fn draw(&self, text: &str, x: f32, baseline_y: f32, size: u16, color: Color) {
        draw_text_ex(
            text,
            x,
            baseline_y,
            TextParams {
                font: self.font.as_ref(),
                font_size: size,
                color,
                ..Default::default()
            },
        );
    }
}

async fn decode_tone(bytes: &[u8]) -> Option<Sound> {
    match load_sound_from_bytes(bytes).await {
        Ok(sound) => Some(sound),
        Err(e) => {
            warn!("failed to decode synthesized tone: {:?}; playing nothing", e);
            None
        }
    }
}

/// Render a sine tone as a PCM16 mono WAV held in memory, so the binary
/// needs no sound files on disk
fn sine_wav(frequency_hz: f32, duration_seconds: f32, volume: f32) -> Vec<u8> {
    let sample_rate: u32 = 44100;
    let num_samples = (duration_seconds * sample_rate as f32) as u32;
    let mut data = Vec::with_capacity((num_samples as usize) * 2 + 44);

    let block_align: u16 = 2; // mono 16-bit
    let byte_rate: u32 = sample_rate * u32::from(block_align);
    let data_size: u32 = num_samples * 2;
    let chunk_size: u32 = 36 + data_size;

    // RIFF header
    data.extend_from_slice(b"RIFF");
    data.extend_from_slice(&chunk_size.to_le_bytes());
    data.extend_from_slice(b"WAVE");
    // fmt chunk
    data.extend_from_slice(b"fmt ");
    data.extend_from_slice(&16u32.to_le_bytes()); // PCM chunk size
    data.extend_from_slice(&1u16.to_le_bytes()); // PCM format
    data.extend_from_slice(&1u16.to_le_bytes()); // channels
    data.extend_from_slice(&sample_rate.to_le_bytes());
    data.extend_from_slice(&byte_rate.to_le_bytes());
    data.extend_from_slice(&block_align.to_le_bytes());
    data.extend_from_slice(&16u16.to_le_bytes()); // bits per sample
    // data chunk
    data.extend_from_slice(b"data");
    data.extend_from_slice(&data_size.to_le_bytes());

    let amplitude = volume.clamp(0.0, 1.0) * 0.7;
    for n in 0..num_samples {
        let t = n as f32 / sample_rate as f32;
        let sample =
            (amplitude * (std::f32::consts::TAU * frequency_hz * t).sin() * f32::from(i16::MAX))
                as i16;
        data.extend_from_slice(&sample.to_le_bytes());
    }
    data
}
