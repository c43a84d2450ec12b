use super::{widgets, MainMenu};
use crate::app::Screen;
use crate::assets::Assets;
use crate::command::Command;
use crate::consts;
use crate::options::Mode;
use crate::util::{EnumExt, Globals};

/// The mode screen: pick between normal visibility and flashlight mode
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ModeMenu {
    selection: Mode,
    globals: Globals,
}

impl ModeMenu {
    const FIRST_ROW_Y: f32 = 200.0;
    const ROW_SPACING: f32 = 60.0;

    pub(crate) fn new(globals: Globals) -> ModeMenu {
        ModeMenu {
            selection: globals.mode,
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
            Command::Enter => {
                self.globals.mode = self.selection;
                return Some(Screen::Main(MainMenu::new(self.globals.clone())));
            }
            Command::Esc => return Some(Screen::Main(MainMenu::new(self.globals.clone()))),
            _ => (),
        }
        None
    }

    pub(crate) fn draw(&self, assets: &Assets) {
        widgets::draw_title(assets, "CHOOSE GAME MODE", 60.0);
        for (i, mode) in Mode::iter().enumerate() {
            widgets::draw_menu_line(
                assets,
                mode.as_str(),
                Self::FIRST_ROW_Y + i as f32 * Self::ROW_SPACING,
                self.selection == mode,
            );
        }
        widgets::draw_hint(
            assets,
            "Use UP/DOWN to highlight, ENTER to confirm. ESC to return",
            consts::SCREEN_HEIGHT as f32 - 40.0,
        );
    }
}
