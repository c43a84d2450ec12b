mod app;
mod assets;
mod command;
mod consts;
mod game;
mod grass;
mod menu;
mod options;
mod util;
use crate::app::App;
use crate::assets::Assets;
use macroquad::prelude::*;
use rand::rng;

fn window_conf() -> Conf {
    Conf {
        window_title: "Lawnsnake".to_owned(),
        window_width: consts::SCREEN_WIDTH,
        window_height: consts::SCREEN_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let assets = Assets::load().await;
    App::new(assets, rng()).run().await;
}
