//! Main Menu Screen
//!
//! The screen shown after loading and after every game: a title, the PLAY and
//! EXIT items with keyboard selection, and the best scores so far.

use crate::render::{Color, FontSize, Surface};
use crate::save::{ScoreEntry, high_scores};
use crate::vector::Vector2D;

/// How many scores the menu lists.
pub const HIGH_SCORE_COUNT: usize = 10;

/// Configuration for menu appearance
#[derive(Debug, Clone)]
pub struct MenuStyle {
    /// Item box width in pixels
    pub item_width: u32,

    /// Item box height in pixels
    pub item_height: u32,

    /// Vertical distance between items
    pub item_spacing: u32,

    /// Title text color
    pub title_color: Color,

    /// Normal item text color
    pub item_color: Color,

    /// Selected item text color
    pub selected_item_color: Color,

    /// Selection highlight color
    pub highlight_color: Color,

    /// Item border color
    pub border_color: Color,
}

impl Default for MenuStyle {
    fn default() -> Self {
        MenuStyle {
            item_width: 220,
            item_height: 50,
            item_spacing: 70,
            title_color: Color::WHITE,
            item_color: Color::rgb(160, 160, 170),
            selected_item_color: Color::WHITE,
            highlight_color: Color::BLUE,
            border_color: Color::rgb(100, 100, 120),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Play,
    Exit,
}

impl MenuOption {
    pub fn label(&self) -> &'static str {
        match self {
            MenuOption::Play => "PLAY",
            MenuOption::Exit => "EXIT",
        }
    }
}

/// The main menu.
///
/// # Example
///
/// ```ignore
/// let mut menu = Menu::new(store.load_scores().unwrap_or_default());
///
/// menu.select_next();
/// menu.draw(&mut surface, 1000.0, 600.0)?;
///
/// if menu.selected() == MenuOption::Play {
///     // start a new game
/// }
/// ```
pub struct Menu {
    title: String,
    options: Vec<MenuOption>,
    selected_index: usize,
    high_scores: Vec<ScoreEntry>,
    style: MenuStyle,
}

impl Menu {
    /// Creates the menu, keeping the best of `scores` for display.
    pub fn new(scores: Vec<ScoreEntry>) -> Self {
        Menu {
            title: "ASTEROIDS".to_string(),
            options: vec![MenuOption::Play, MenuOption::Exit],
            selected_index: 0,
            high_scores: high_scores(&scores, HIGH_SCORE_COUNT),
            style: MenuStyle::default(),
        }
    }

    /// Move selection up (wraps to bottom)
    pub fn select_previous(&mut self) {
        if self.selected_index == 0 {
            self.selected_index = self.options.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Move selection down (wraps to top)
    pub fn select_next(&mut self) {
        self.selected_index = (self.selected_index + 1) % self.options.len();
    }

    pub fn selected(&self) -> MenuOption {
        self.options[self.selected_index]
    }

    pub fn high_scores(&self) -> &[ScoreEntry] {
        &self.high_scores
    }

    /// Draws the menu centered in a `width` x `height` screen.
    pub fn draw(&self, surface: &mut dyn Surface, width: f64, height: f64) -> Result<(), String> {
        let center_x = width / 2.0;

        // 1. Title
        surface.draw_text(
            &self.title,
            Vector2D::new(center_x, height / 5.0),
            true,
            self.style.title_color,
            FontSize::Big,
            1.0,
        )?;

        // 2. Items
        let item_start_y = height / 2.0 - f64::from(self.style.item_spacing) / 2.0;
        for (i, option) in self.options.iter().enumerate() {
            let item_center = Vector2D::new(
                center_x,
                item_start_y + (i as f64) * f64::from(self.style.item_spacing),
            );
            let is_selected = i == self.selected_index;

            let x = (item_center.x - f64::from(self.style.item_width) / 2.0) as i32;
            let y = (item_center.y - f64::from(self.style.item_height) / 2.0) as i32;

            // Selection highlight
            if is_selected {
                surface.fill_rect(
                    x,
                    y,
                    self.style.item_width,
                    self.style.item_height,
                    self.style.highlight_color,
                )?;
            }
            surface.draw_rect(
                x,
                y,
                self.style.item_width,
                self.style.item_height,
                self.style.border_color,
            )?;

            let text_color = if is_selected {
                self.style.selected_item_color
            } else {
                self.style.item_color
            };
            surface.draw_text(option.label(), item_center, true, text_color, FontSize::Medium, 1.0)?;
        }

        // 3. High scores, right column
        self.draw_high_scores(surface, Vector2D::new(width * 0.8, height / 3.0))
    }

    fn draw_high_scores(&self, surface: &mut dyn Surface, top: Vector2D) -> Result<(), String> {
        surface.draw_text(
            "HIGH SCORES",
            top,
            true,
            self.style.title_color,
            FontSize::Medium,
            1.0,
        )?;

        for (i, entry) in self.high_scores.iter().enumerate() {
            let line = format!("{}  {}", entry.score, entry.date);
            let position = Vector2D::new(top.x, top.y + 30.0 * (i as f64 + 1.0));
            surface.draw_text(&line, position, true, self.style.item_color, FontSize::Medium, 1.0)?;
        }

        Ok(())
    }
}
