//! Per-frame scene assembly
//!
//! Draw order, back to front: background, pipes, ground, bird, particles,
//! popups, HUD. The shake offset moves everything, HUD included.

use glam::Vec2;

use super::{Renderer, Rgba, Sprite, TextAlign, TextSize, colors};
use crate::consts::*;
use crate::settings::Settings;
use crate::sim::{GamePhase, GameState};

/// HUD anchor points (unshaken)
const SCORE_POS: Vec2 = Vec2::new(SCREEN_WIDTH as f32 / 2.0, 30.0);
const HIGH_SCORE_POS: Vec2 = Vec2::new(10.0, 10.0);
const GAME_OVER_POS: Vec2 =
    Vec2::new(SCREEN_WIDTH as f32 / 2.0, SCREEN_HEIGHT as f32 / 2.0 - 40.0);
const NEW_RECORD_POS: Vec2 =
    Vec2::new(SCREEN_WIDTH as f32 / 2.0, SCREEN_HEIGHT as f32 / 2.0 + 10.0);

/// Issue one full frame to `renderer` and present it
pub fn render_frame(state: &GameState, settings: &Settings, renderer: &mut impl Renderer) {
    let shake = if settings.effective_screen_shake() {
        state.shake.offset
    } else {
        Vec2::ZERO
    };

    renderer.draw_sprite(Sprite::Background, shake, 0.0);

    for pipe in &state.pipes {
        let (top, bottom) = pipe.rects();
        renderer.draw_sprite(Sprite::PipeTop, top.top_left() + shake, 0.0);
        renderer.draw_sprite(Sprite::PipeBottom, bottom.top_left() + shake, 0.0);
    }

    let ground = Vec2::new(state.ground.x as f32, GROUND_Y as f32) + shake;
    renderer.draw_sprite(Sprite::Ground, ground, 0.0);
    renderer.draw_sprite(Sprite::Ground, ground + Vec2::new(SCREEN_WIDTH as f32, 0.0), 0.0);

    let bird = &state.bird;
    renderer.draw_sprite(
        Sprite::Bird { frame: bird.frame },
        bird.rect.top_left() + shake,
        bird.angle,
    );

    if settings.particles {
        for p in state.particles.iter().filter(|p| p.alpha > 0) {
            let radius = (p.size / 2) as f32;
            let center = p.pos + Vec2::splat(radius) + shake;
            renderer.fill_circle(center, radius, Rgba(p.color.0, p.color.1, p.color.2, p.alpha));
        }
    }

    if settings.score_popups {
        for popup in &state.popups {
            let c = colors::POPUP;
            renderer.draw_text(
                &popup.label(),
                popup.pos + shake,
                Rgba(c.0, c.1, c.2, popup.alpha),
                TextSize::Small,
                TextAlign::Center,
            );
        }
    }

    draw_hud(state, shake, renderer);
    renderer.present();
}

fn draw_hud(state: &GameState, shake: Vec2, renderer: &mut impl Renderer) {
    renderer.draw_text(
        &state.score.to_string(),
        SCORE_POS + shake,
        colors::SCORE,
        TextSize::Large,
        TextAlign::Center,
    );
    renderer.draw_text(
        &format!("High Score: {}", state.high_score),
        HIGH_SCORE_POS + shake,
        colors::HIGH_SCORE,
        TextSize::Small,
        TextAlign::Left,
    );

    if state.phase == GamePhase::GameOver {
        renderer.draw_text(
            "Game Over! Press R",
            GAME_OVER_POS + shake,
            colors::GAME_OVER,
            TextSize::Large,
            TextAlign::Center,
        );
        if state.new_record {
            renderer.draw_text(
                "New High Score!",
                NEW_RECORD_POS + shake,
                colors::NEW_RECORD,
                TextSize::Small,
                TextAlign::Center,
            );
        }
    }
}
