use crate::assets::Assets;
use crate::command::Command;
use crate::game::Game;
use crate::grass::Meadow;
use crate::menu::{ConfigMenu, MainMenu, ModeMenu};
use crate::util::Globals;
use macroquad::color::BLACK;
use macroquad::window::{clear_background, next_frame};
use rand::Rng;

/// The application: the current screen plus the state that outlives every
/// screen (the grass field and the loaded assets)
pub(crate) struct App {
    screen: Screen,
    meadow: Meadow,
    assets: Assets,
}

impl App {
    pub(crate) fn new<R: Rng>(assets: Assets, mut rng: R) -> App {
        App {
            screen: Screen::Main(MainMenu::new(Globals::default())),
            meadow: Meadow::new(&mut rng),
            assets,
        }
    }

    pub(crate) async fn run(mut self) {
        while !self.quitting() {
            self.process_input();
            self.update();
            self.draw();
            next_frame().await;
        }
    }

    fn process_input(&mut self) {
        let Some(cmd) = Command::read() else {
            return;
        };
        let next = match self.screen {
            Screen::Main(ref mut menu) => menu.handle_command(cmd),
            Screen::Config(ref mut menu) => menu.handle_command(cmd),
            Screen::Mode(ref mut menu) => menu.handle_command(cmd),
            Screen::Game(ref mut game) => game.handle_command(cmd),
            Screen::Quit => None,
        };
        if let Some(next) = next {
            self.screen = next;
        }
    }

    fn update(&mut self) {
        self.meadow.advance();
        if let Screen::Game(ref mut game) = self.screen {
            if let Some(event) = game.update() {
                self.assets.play(event);
            }
        }
    }

    fn draw(&self) {
        clear_background(BLACK);
        if let Some(globals) = self.screen.globals() {
            self.meadow.draw(&globals.options);
        }
        match self.screen {
            Screen::Main(ref menu) => menu.draw(&self.assets),
            Screen::Config(ref menu) => menu.draw(&self.assets),
            Screen::Mode(ref menu) => menu.draw(&self.assets),
            Screen::Game(ref game) => game.draw(&self.assets),
            Screen::Quit => (),
        }
    }

    fn quitting(&self) -> bool {
        matches!(self.screen, Screen::Quit)
    }
}

/// The screens of the application.  Each variant owns that screen's whole
/// state; command handlers return the screen to switch to, if any.
#[derive(Debug)]
pub(crate) enum Screen {
    Main(MainMenu),
    Config(ConfigMenu),
    Mode(ModeMenu),
    Game(Game),
    Quit,
}

impl Screen {
    fn globals(&self) -> Option<&Globals> {
        match self {
            Screen::Main(menu) => Some(menu.globals()),
            Screen::Config(menu) => Some(menu.globals()),
            Screen::Mode(menu) => Some(menu.globals()),
            Screen::Game(game) => Some(game.globals()),
            Screen::Quit => None,
        }
    }
}
