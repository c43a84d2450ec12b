mod config;
mod mode;
pub(crate) mod widgets;
pub(crate) use self::config::ConfigMenu;
pub(crate) use self::mode::ModeMenu;
use crate::app::Screen;
use crate::assets::Assets;
use crate::command::Command;
use crate::consts;
use crate::game::Game;
use crate::util::{EnumExt, Globals};
use enum_map::Enum;

/// The entry screen: start a game, open the config or mode menus, or quit
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct MainMenu {
    selection: MainOpt,
    globals: Globals,
}

impl MainMenu {
    const BUTTON_WIDTH: f32 = 220.0;

    pub(crate) fn new(globals: Globals) -> MainMenu {
        MainMenu {
            selection: MainOpt::min(),
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
                return Some(match self.selection {
                    MainOpt::Start => Screen::Game(Game::new(self.globals.clone())),
                    MainOpt::Config => Screen::Config(ConfigMenu::new(self.globals.clone())),
                    MainOpt::Mode => Screen::Mode(ModeMenu::new(self.globals.clone())),
                    MainOpt::Quit => Screen::Quit,
                })
            }
            _ => (),
        }
        None
    }

    pub(crate) fn draw(&self, assets: &Assets) {
        for (i, opt) in MainOpt::iter().enumerate() {
            widgets::draw_button(
                assets,
                opt.label(),
                Self::BUTTON_WIDTH,
                200.0 + i as f32 * 60.0,
                self.selection == opt,
            );
        }
        widgets::draw_hint(
            assets,
            "Use UP/DOWN to select, ENTER to confirm. ESC to pause/return",
            consts::SCREEN_HEIGHT as f32 / 2.0 + 150.0,
        );
    }
}

#[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
enum MainOpt {
    Start,
    Config,
    Mode,
    Quit,
}

impl MainOpt {
    fn label(self) -> &'static str {
        match self {
            MainOpt::Start => "Start Game",
            MainOpt::Config => "Config Menu",
            MainOpt::Mode => "Game Mode",
            MainOpt::Quit => "Quit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycling_wraps_both_ways() {
        let mut menu = MainMenu::new(Globals::default());
        assert_eq!(menu.selection, MainOpt::Start);
        assert!(menu.handle_command(Command::Up).is_none());
        assert_eq!(menu.selection, MainOpt::Quit);
        assert!(menu.handle_command(Command::Down).is_none());
        assert_eq!(menu.selection, MainOpt::Start);
        for _ in 0..MainOpt::LENGTH {
            assert!(menu.handle_command(Command::Down).is_none());
        }
        assert_eq!(menu.selection, MainOpt::Start);
    }

    #[test]
    fn enter_starts_a_game() {
        let mut menu = MainMenu::new(Globals::default());
        assert!(matches!(
            menu.handle_command(Command::Enter),
            Some(Screen::Game(_))
        ));
    }

    #[test]
    fn enter_opens_the_other_screens() {
        let mut menu = MainMenu::new(Globals::default());
        assert!(menu.handle_command(Command::Down).is_none());
        assert!(matches!(
            menu.handle_command(Command::Enter),
            Some(Screen::Config(_))
        ));
        assert!(menu.handle_command(Command::Down).is_none());
        assert!(matches!(
            menu.handle_command(Command::Enter),
            Some(Screen::Mode(_))
        ));
        assert!(menu.handle_command(Command::Down).is_none());
        assert!(matches!(
            menu.handle_command(Command::Enter),
            Some(Screen::Quit)
        ));
    }

    #[test]
    fn esc_is_ignored() {
        let mut menu = MainMenu::new(Globals::default());
        assert!(menu.handle_command(Command::Esc).is_none());
        assert_eq!(menu.selection, MainOpt::Start);
    }
}
