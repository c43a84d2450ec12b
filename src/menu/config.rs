use super::{widgets, MainMenu};
use crate::app::Screen;
use crate::assets::Assets;
use crate::command::Command;
use crate::consts;
use crate::options::{Adjustable, OptKey, OptValue};
use crate::util::{EnumExt, Globals};
use enum_map::Enum;

/// The config screen: one row per adjustable option plus a Back row.
/// Left/right edits apply to the shared options immediately.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ConfigMenu {
    selection: ConfigOpt,
    globals: Globals,
}

impl ConfigMenu {
    const FIRST_ROW_Y: f32 = 150.0;
    const ROW_SPACING: f32 = 50.0;

    pub(crate) fn new(globals: Globals) -> ConfigMenu {
        ConfigMenu {
            selection: ConfigOpt::min(),
            globals,
        }
    }

    pub(crate) fn globals(&self) -> &Globals {
        &self.globals
    }

    pub(crate) fn handle_command(&mut self, cmd: Command) -> Option<Screen> {
        match cmd {
            Command::Up => self.selection = self.selection.wrapping_prev(),
            Command::Down => self.selection = self.selection.wrapping_next(),
            Command::Left => self.adjust(|value| value.decrease()),
            Command::Right => self.adjust(|value| value.increase()),
            Command::Enter if self.selection == ConfigOpt::Back => {
                return Some(Screen::Main(MainMenu::new(self.globals.clone())))
            }
            Command::Esc => return Some(Screen::Main(MainMenu::new(self.globals.clone()))),
            Command::Enter => (),
        }
        None
    }

    fn adjust(&mut self, f: impl Fn(&mut OptValue)) {
        if let Some(key) = self.selection.key() {
            let mut value = self.globals.options.get(key);
            f(&mut value);
            self.globals.options.set(key, value);
        }
    }

    pub(crate) fn draw(&self, assets: &Assets) {
        widgets::draw_title(assets, "CONFIG MENU", 50.0);
        for (i, opt) in ConfigOpt::iter().enumerate() {
            widgets::draw_menu_line(
                assets,
                &opt.line(&self.globals),
                Self::FIRST_ROW_Y + i as f32 * Self::ROW_SPACING,
                self.selection == opt,
            );
        }
        widgets::draw_hint(
            assets,
            "Use UP/DOWN to select, LEFT/RIGHT to adjust. ESC = back",
            consts::SCREEN_HEIGHT as f32 - 40.0,
        );
    }
}

/// The rows of the config menu, top to bottom
#[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
enum ConfigOpt {
    Speed,
    Food,
    Obstacles,
    Amplitude,
    WaveSpeed,
    Back,
}

impl ConfigOpt {
    /// The option this row edits; `None` for the Back row
    fn key(self) -> Option<OptKey> {
        match self {
            ConfigOpt::Speed => Some(OptKey::Speed),
            ConfigOpt::Food => Some(OptKey::Food),
            ConfigOpt::Obstacles => Some(OptKey::Obstacles),
            ConfigOpt::Amplitude => Some(OptKey::Amplitude),
            ConfigOpt::WaveSpeed => Some(OptKey::WaveSpeed),
            ConfigOpt::Back => None,
        }
    }

    fn line(self, globals: &Globals) -> String {
        match self.key() {
            Some(key) => format!("{key}: {}", globals.options.get(key)),
            None => "Back to Main Menu".to_owned(),
        }
    }
}
