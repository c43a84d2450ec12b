use crate::assets::Assets;
use crate::command::Command;
use crate::consts;
use crate::menu::widgets;
use crate::util::EnumExt;
use enum_map::Enum;

/// The two-item menu shown over the frozen field while the game is paused
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Paused {
    /// The currently-selected item in the pause menu
    selection: PauseOpt,
}

impl Paused {
    const BUTTON_WIDTH: f32 = 200.0;

    pub(super) fn new() -> Paused {
        Paused {
            selection: PauseOpt::min(),
        }
    }

    /// Handle a command.  Returns `Some` if the user made a choice.
    pub(super) fn handle_command(&mut self, cmd: Command) -> Option<PauseOpt> {
        match cmd {
            Command::Esc => return Some(PauseOpt::Resume),
            Command::Enter => return Some(self.selection),
            Command::Up => self.selection = self.selection.wrapping_prev(),
            Command::Down => self.selection = self.selection.wrapping_next(),
            _ => (),
        }
        None
    }

    pub(super) fn draw(&self, assets: &Assets) {
        let center_x = consts::SCREEN_WIDTH as f32 / 2.0;
        let center_y = consts::SCREEN_HEIGHT as f32 / 2.0;
        assets.draw_text_centered(
            "Game Paused",
            center_x,
            center_y - 80.0,
            consts::BANNER_FONT_SIZE,
            consts::SELECTION_COLOR,
        );
        for (i, opt) in PauseOpt::iter().enumerate() {
            widgets::draw_button(
                assets,
                opt.label(),
                Self::BUTTON_WIDTH,
                center_y - 20.0 + i as f32 * 60.0,
                self.selection == opt,
            );
        }
        assets.draw_text_centered(
            "Use ENTER to select, ESC to resume",
            center_x,
            center_y + 90.0,
            consts::HINT_FONT_SIZE,
            consts::HINT_COLOR,
        );
    }
}

/// The choices in the pause menu
#[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
pub(super) enum PauseOpt {
    /// Unpause/resume the game
    Resume,

    /// Return to the main menu
    MainMenu,
}

impl PauseOpt {
    fn label(self) -> &'static str {
        match self {
            PauseOpt::Resume => "Resume",
            PauseOpt::MainMenu => "Main Menu",
        }
    }
}
