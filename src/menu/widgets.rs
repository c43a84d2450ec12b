use crate::assets::Assets;
use crate::consts;
use macroquad::shapes::draw_rectangle;

/// Standard height of a menu button
pub(crate) const BUTTON_HEIGHT: f32 = 40.0;

/// Draw a filled, horizontally centered button with a dark label on it,
/// highlighted when selected
pub(crate) fn draw_button(assets: &Assets, label: &str, width: f32, y: f32, selected: bool) {
    let fill = if selected {
        consts::SELECTION_COLOR
    } else {
        consts::TEXT_COLOR
    };
    let center_x = consts::SCREEN_WIDTH as f32 / 2.0;
    draw_rectangle(center_x - width / 2.0, y, width, BUTTON_HEIGHT, fill);
    assets.draw_text_centered(
        label,
        center_x,
        y + BUTTON_HEIGHT / 2.0,
        consts::MENU_FONT_SIZE,
        consts::BUTTON_LABEL_COLOR,
    );
}

/// Draw a title line centered near the top of a menu screen
pub(crate) fn draw_title(assets: &Assets, text: &str, y: f32) {
    assets.draw_text_centered(
        text,
        consts::SCREEN_WIDTH as f32 / 2.0,
        y,
        consts::TITLE_FONT_SIZE,
        consts::SELECTION_COLOR,
    );
}

/// Draw one selectable line of menu text, highlighted when selected
pub(crate) fn draw_menu_line(assets: &Assets, text: &str, y: f32, selected: bool) {
    let color = if selected {
        consts::SELECTION_COLOR
    } else {
        consts::TEXT_COLOR
    };
    assets.draw_text_centered(
        text,
        consts::SCREEN_WIDTH as f32 / 2.0,
        y,
        consts::MENU_FONT_SIZE,
        color,
    );
}

/// Draw the key-hint line of a menu screen
pub(crate) fn draw_hint(assets: &Assets, text: &str, y: f32) {
    assets.draw_text_centered(
        text,
        consts::SCREEN_WIDTH as f32 / 2.0,
        y,
        consts::HINT_FONT_SIZE,
        consts::HINT_COLOR,
    );
}
