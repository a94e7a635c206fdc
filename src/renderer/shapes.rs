//! Draw pass for the playing field and the game-over screen

use super::{LARGE_FONT, MEDIUM_FONT, Surface};
use crate::settings::{Labels, Theme};
use crate::sim::{Ball, GameState, Paddle, Side};

/// Separator segment size
const SEPARATOR_WIDTH: f32 = 2.0;
const SEPARATOR_SEGMENT: f32 = 10.0;
/// Distance between the tops of two separator segments
const SEPARATOR_SPACING: f32 = 20.0;

/// Draw one frame of the current state
pub fn render(state: &GameState, theme: &Theme, surface: &mut impl Surface) {
    let (w, h) = (state.arena.width, state.arena.height);

    surface.clear_rect(0.0, 0.0, w, h);
    surface.fill_rect(0.0, 0.0, w, h, &theme.background);

    draw_score(surface, state.left.score, w / 4.0, h / 5.0, theme);
    draw_score(surface, state.right.score, 3.0 * w / 4.0, h / 5.0, theme);
    draw_separator(surface, w, h, theme);

    draw_paddle(surface, &state.left, theme);
    draw_paddle(surface, &state.right, theme);
    draw_ball(surface, &state.ball, theme);
}

/// Replace the field with the winner announcement
pub fn render_game_over(
    state: &GameState,
    winner: Side,
    theme: &Theme,
    labels: &Labels,
    surface: &mut impl Surface,
) {
    let (w, h) = (state.arena.width, state.arena.height);

    surface.clear_rect(0.0, 0.0, w, h);
    let headline = format!("{} Wins!", labels.for_side(winner));
    surface.fill_text(&headline, w / 4.0, h / 2.0, &LARGE_FONT, &theme.text);
    surface.fill_text(
        "Congratulations!",
        w / 4.0,
        h / 2.0 + 60.0,
        &MEDIUM_FONT,
        &theme.text,
    );
}

fn draw_score(surface: &mut impl Surface, score: u32, x: f32, y: f32, theme: &Theme) {
    surface.fill_text(&score.to_string(), x, y, &LARGE_FONT, &theme.text);
}

/// Dashed line down the middle of the field
fn draw_separator(surface: &mut impl Surface, w: f32, h: f32, theme: &Theme) {
    let x = (w - SEPARATOR_WIDTH) / 2.0;
    let mut y = 0.0;
    while y <= h {
        surface.fill_rect(x, y, SEPARATOR_WIDTH, SEPARATOR_SEGMENT, &theme.separator);
        y += SEPARATOR_SPACING;
    }
}

fn draw_paddle(surface: &mut impl Surface, paddle: &Paddle, theme: &Theme) {
    surface.fill_rect(paddle.x, paddle.y, paddle.width, paddle.height, &theme.paddle);
}

fn draw_ball(surface: &mut impl Surface, ball: &Ball, theme: &Theme) {
    surface.fill_circle(ball.pos.x, ball.pos.y, ball.radius, &theme.ball);
}
