//! Score and lives readout.
//!
//! Both are drawn glyph by glyph from the digit table (`SpriteId::Digit`) with a
//! fixed horizontal pitch rather than with a font.

use crate::assets::{SpriteId, TIMES_GLYPH};
use crate::game::constants::{DIGIT_PITCH, HUD_MARGIN, SCORE_HUD_OFFSET};
use crate::render::Surface;

fn digits(value: u64) -> impl Iterator<Item = u8> {
    value
        .to_string()
        .into_bytes()
        .into_iter()
        .map(|byte| byte - b'0')
}

/// Draws the score in the top-right corner.
pub fn draw_score(surface: &mut dyn Surface, score: u32, arena_width: f64) -> Result<(), String> {
    let mut x = arena_width - SCORE_HUD_OFFSET;
    let y = HUD_MARGIN;

    for digit in digits(u64::from(score)) {
        surface.draw_sprite(SpriteId::Digit(digit), x, y, 0.0)?;
        x += DIGIT_PITCH;
    }

    Ok(())
}

/// Draws the life icon, the "x" glyph and the remaining lives.
///
/// Nothing is drawn once the player is out of lives.
pub fn draw_lives(surface: &mut dyn Surface, lives: i32) -> Result<(), String> {
    if lives < 1 {
        return Ok(());
    }

    let (x, y) = (HUD_MARGIN, HUD_MARGIN);
    surface.draw_sprite(SpriteId::Life, x, y, 0.0)?;
    surface.draw_sprite(SpriteId::Digit(TIMES_GLYPH), x + 40.0, y + 5.0, 0.0)?;

    let mut digit_x = x + 60.0;
    for digit in digits(lives.unsigned_abs().into()) {
        surface.draw_sprite(SpriteId::Digit(digit), digit_x, y + 5.0, 0.0)?;
        digit_x += DIGIT_PITCH;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::HeadlessSurface;

    #[test]
    fn test_score_digits_use_fixed_pitch() {
        let mut surface = HeadlessSurface::new();
        draw_score(&mut surface, 120, 1000.0).unwrap();

        let drawn: Vec<_> = surface.sprites().collect();
        assert_eq!(
            drawn,
            vec![
                (SpriteId::Digit(1), 850.0, 25.0),
                (SpriteId::Digit(2), 870.0, 25.0),
                (SpriteId::Digit(0), 890.0, 25.0),
            ]
        );
    }

    #[test]
    fn test_zero_score_draws_single_zero() {
        let mut surface = HeadlessSurface::new();
        draw_score(&mut surface, 0, 1000.0).unwrap();
        assert_eq!(surface.sprites().count(), 1);
    }

    #[test]
    fn test_lives_show_icon_glyph_and_count() {
        let mut surface = HeadlessSurface::new();
        draw_lives(&mut surface, 3).unwrap();

        let drawn: Vec<_> = surface.sprites().map(|(sprite, _, _)| sprite).collect();
        assert_eq!(
            drawn,
            vec![SpriteId::Life, SpriteId::Digit(TIMES_GLYPH), SpriteId::Digit(3)]
        );
    }

    #[test]
    fn test_lives_hidden_when_out_of_lives() {
        let mut surface = HeadlessSurface::new();
        draw_lives(&mut surface, 0).unwrap();
        draw_lives(&mut surface, -1).unwrap();
        assert!(surface.calls.is_empty());
    }
}
