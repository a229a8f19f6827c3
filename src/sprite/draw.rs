//! Drawing cards into sprite sheet cells

use crate::core::{CardKind, Color, Judge, Move, Rhythm, Stumble};
use crate::layout::PrintedCard;
use crate::sprite::font::{has_glyphs, Fonts, TextSize};
use ab_glyph::FontVec;
use image::{Rgb, RgbImage};
use imageproc::drawing::{
    draw_filled_rect_mut, draw_hollow_rect_mut, draw_line_segment_mut, draw_text_mut, text_size,
};
use imageproc::rect::Rect;

const HEADER_HEIGHT: u32 = 40;
const JUDGE_HEADER_HEIGHT: u32 = 50;
const LINE_HEIGHT: i32 = 18;

const RED: Color = Color::rgb(0xC0, 0x39, 0x2B);
const GREEN: Color = Color::rgb(0x27, 0xAE, 0x60);
const PURPLE: Color = Color::rgb(0x8E, 0x44, 0xAD);
const BLUE: Color = Color::rgb(0x15, 0x65, 0xC0);
const GREY: Color = Color::rgb(0x66, 0x66, 0x66);
const LIGHT_GREY: Color = Color::rgb(0x99, 0x99, 0x99);
const CREAM: Color = Color::rgb(0xFE, 0xF9, 0xF0);
const MINT: Color = Color::rgb(0xE8, 0xF5, 0xE9);
const STUMBLE_HEADER: Color = Color::rgb(0x34, 0x49, 0x5E);
const STUMBLE_X: Color = Color::rgb(0xE7, 0x4C, 0x3C);

/// Horizontal text anchor; text is always vertically centered on `y`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Left,
    Center,
    Right,
}

fn rgb(color: Color) -> Rgb<u8> {
    Rgb(color.to_array())
}

/// Perceived brightness check, used to keep header text readable
fn is_light(color: Color) -> bool {
    let luma = 299 * color.r as u32 + 587 * color.g as u32 + 114 * color.b as u32;
    luma > 186_000
}

/// A card-sized region of a sheet
pub struct CardCell<'a> {
    img: &'a mut RgbImage,
    fonts: &'a Fonts,
    x: i32,
    y: i32,
    width: u32,
    height: u32,
}

impl<'a> CardCell<'a> {
    pub fn new(
        img: &'a mut RgbImage,
        fonts: &'a Fonts,
        origin: (u32, u32),
        width: u32,
        height: u32,
    ) -> Self {
        CardCell {
            img,
            fonts,
            x: origin.0 as i32,
            y: origin.1 as i32,
            width,
            height,
        }
    }

    fn center_x(&self) -> i32 {
        self.x + self.width as i32 / 2
    }

    fn center_y(&self) -> i32 {
        self.y + self.height as i32 / 2
    }

    fn fill(&mut self, dx: i32, dy: i32, w: u32, h: u32, color: Color) {
        if w == 0 || h == 0 {
            return;
        }
        let rect = Rect::at(self.x + dx, self.y + dy).of_size(w, h);
        draw_filled_rect_mut(self.img, rect, rgb(color));
    }

    fn outline(&mut self, dx: i32, dy: i32, w: u32, h: u32, thickness: u32, color: Color) {
        for t in 0..thickness {
            let (w, h) = (w.saturating_sub(2 * t), h.saturating_sub(2 * t));
            if w == 0 || h == 0 {
                break;
            }
            let rect = Rect::at(self.x + dx + t as i32, self.y + dy + t as i32).of_size(w, h);
            draw_hollow_rect_mut(self.img, rect, rgb(color));
        }
    }

    fn card_background(&mut self, color: Color) {
        let (w, h) = (self.width, self.height);
        self.fill(0, 0, w, h, color);
        self.outline(0, 0, w, h, 2, Color::BLACK);
    }

    fn header(&mut self, height: u32, color: Color) {
        let w = self.width;
        self.fill(0, 0, w, height, color);
    }

    /// Draw `text` anchored at absolute pixel position (`x`, `y`)
    fn text(&mut self, text: &str, x: i32, y: i32, anchor: Anchor, size: TextSize, color: Color) {
        let Some(font) = self.fonts.get(size) else {
            return;
        };
        let scale = size.scale();
        let (w, h) = text_size(scale, font, text);
        let left = match anchor {
            Anchor::Left => x,
            Anchor::Center => x - w as i32 / 2,
            Anchor::Right => x - w as i32,
        };
        draw_text_mut(self.img, rgb(color), left, y - h as i32 / 2, scale, font, text);
    }

    /// Centered text broken into lines that fit the card, at most `max_lines`
    fn paragraph(&mut self, text: &str, top: i32, size: TextSize, color: Color, max_lines: usize) {
        let Some(font) = self.fonts.get(size) else {
            return;
        };
        let lines = wrap_text(font, size, text, self.width.saturating_sub(20));
        let cx = self.center_x();
        for (i, line) in lines.iter().take(max_lines).enumerate() {
            self.text(line, cx, top + i as i32 * LINE_HEIGHT, Anchor::Center, size, color);
        }
    }

    fn header_text_color(background: Color) -> Color {
        if is_light(background) {
            Color::BLACK
        } else {
            Color::WHITE
        }
    }

    /// Replace `preferred` with `fallback` when the font cannot render it
    fn printable<'t>(&self, size: TextSize, preferred: &'t str, fallback: &'t str) -> &'t str {
        match self.fonts.get(size) {
            Some(font) if has_glyphs(font, preferred) => preferred,
            _ => fallback,
        }
    }

    pub fn draw(&mut self, card: &PrintedCard<'_>) {
        match card {
            PrintedCard::Move(m) => self.draw_move(m),
            PrintedCard::Rhythm(r) => self.draw_rhythm(r),
            PrintedCard::Judge(j) => self.draw_judge(j),
            PrintedCard::Stumble => self.draw_stumble(),
        }
    }

    pub fn draw_move(&mut self, mv: &Move) {
        self.card_background(Color::WHITE);
        let header = mv.style.sprite_color();
        self.header(HEADER_HEIGHT, header);

        let (cx, left, right) = (self.center_x(), self.x + 20, self.x + self.width as i32 - 20);
        let name_color = Self::header_text_color(header);
        let name_y = self.y + HEADER_HEIGHT as i32 / 2;
        self.text(&mv.name, cx, name_y, Anchor::Center, TextSize::Medium, name_color);

        let mut row = self.y + HEADER_HEIGHT as i32 + 20;
        self.text("Cost:", left, row, Anchor::Left, TextSize::Small, Color::BLACK);
        self.text(&mv.cost.to_string(), right, row, Anchor::Right, TextSize::Large, RED);

        row += 35;
        self.text("Type:", left, row, Anchor::Left, TextSize::Small, Color::BLACK);
        self.text(mv.move_type.as_str(), right, row, Anchor::Right, TextSize::Small, Color::BLACK);

        row += 30;
        self.text("Style:", left, row, Anchor::Left, TextSize::Small, Color::BLACK);
        self.text(
            &mv.style.display_name(),
            right,
            row,
            Anchor::Right,
            TextSize::Small,
            Color::BLACK,
        );

        row += 35;
        let box_top = row - 5 - self.y;
        let box_width = self.width.saturating_sub(20);
        self.fill(10, box_top, box_width, 35, MINT);
        self.outline(10, box_top, box_width, 35, 1, GREEN);
        self.text("Bonus:", left, row + 12, Anchor::Left, TextSize::Small, Color::BLACK);
        self.text(
            &format!("+{}", mv.bonus),
            right,
            row + 12,
            Anchor::Right,
            TextSize::Medium,
            GREEN,
        );

        row += 55;
        self.text(mv.recovery.description(), cx, row, Anchor::Center, TextSize::Small, BLUE);
    }

    pub fn draw_rhythm(&mut self, rhythm: &Rhythm) {
        self.card_background(Color::WHITE);
        self.header(HEADER_HEIGHT, PURPLE);
        let (cx, name_y) = (self.center_x(), self.y + HEADER_HEIGHT as i32 / 2);
        self.text(&rhythm.name, cx, name_y, Anchor::Center, TextSize::Small, Color::WHITE);

        let content = self.y + HEADER_HEIGHT as i32 + 30;
        match &rhythm.effect {
            Some(effect) => {
                self.text(effect, cx, content, Anchor::Center, TextSize::Medium, PURPLE);
                if let Some(condition) = &rhythm.condition {
                    self.paragraph(condition, content + 40, TextSize::Small, GREY, 4);
                }
            }
            None => {
                let flavor = rhythm.flavor_text.as_deref().unwrap_or("");
                let cy = self.center_y();
                self.paragraph(flavor, cy, TextSize::Small, LIGHT_GREY, 5);
            }
        }
    }

    pub fn draw_judge(&mut self, judge: &Judge) {
        self.card_background(CREAM);
        self.header(JUDGE_HEADER_HEIGHT, RED);
        let (cx, left) = (self.center_x(), self.x + 10);
        self.text(&judge.name, cx, self.y + 15, Anchor::Center, TextSize::Medium, Color::WHITE);
        self.text(&judge.title, cx, self.y + 35, Anchor::Center, TextSize::Small, Color::WHITE);

        let mut row = self.y + JUDGE_HEADER_HEIGHT as i32 + 15;
        let stars = judge.stars();
        let fallback = "*".repeat(judge.difficulty as usize);
        let stars = self.printable(TextSize::Medium, &stars, &fallback).to_string();
        self.text(&stars, cx, row, Anchor::Center, TextSize::Medium, RED);

        row += 30;
        self.text("Requirement:", left, row, Anchor::Left, TextSize::Small, Color::BLACK);
        self.paragraph(&judge.requirement, row + 20, TextSize::Small, Color::BLACK, 6);

        let reward = format!("Reward: +{} pts", judge.reward_points);
        let bottom = self.y + self.height as i32 - 60;
        self.text(&reward, left, bottom, Anchor::Left, TextSize::Small, GREEN);
    }

    pub fn draw_stumble(&mut self) {
        self.card_background(Color::WHITE);
        self.header(HEADER_HEIGHT, STUMBLE_HEADER);
        let (cx, cy) = (self.center_x(), self.center_y());
        let name_y = self.y + HEADER_HEIGHT as i32 / 2;
        self.text(Stumble::NAME, cx, name_y, Anchor::Center, TextSize::Medium, Color::WHITE);

        // Thick red X
        let (mx, my, r) = (cx as f32, (cy - 30) as f32, 22.0);
        let red = rgb(STUMBLE_X);
        for offset in -2..=2 {
            let o = offset as f32;
            draw_line_segment_mut(self.img, (mx - r + o, my - r), (mx + r + o, my + r), red);
            draw_line_segment_mut(self.img, (mx + r + o, my - r), (mx - r + o, my + r), red);
        }

        self.text("Cost: 0", cx, cy + 20, Anchor::Center, TextSize::Small, GREY);
        self.text("No Style - No Type", cx, cy + 40, Anchor::Center, TextSize::Small, GREY);
        self.text(Stumble::PENALTY, cx, cy + 65, Anchor::Center, TextSize::Small, RED);
    }

    pub fn draw_back(&mut self, kind: CardKind) {
        self.card_background(kind.back_color());
        let (cx, cy) = (self.center_x(), self.center_y());
        let title_size = self.fitting_size("Beat by Beat");
        self.text("Beat by Beat", cx, cy - 30, Anchor::Center, title_size, Color::WHITE);
        let label = kind.slug().to_uppercase();
        self.text(&label, cx, cy + 20, Anchor::Center, TextSize::Medium, Color::WHITE);
    }

    /// Largest text size at which `text` fits inside the card with a margin
    fn fitting_size(&self, text: &str) -> TextSize {
        for size in [TextSize::Large, TextSize::Medium] {
            if let Some(font) = self.fonts.get(size) {
                if text_size(size.scale(), font, text).0 + 10 <= self.width {
                    return size;
                }
            }
        }
        TextSize::Small
    }
}

/// Greedy word wrap against the rendered width of each line
pub fn wrap_text(font: &FontVec, size: TextSize, text: &str, max_width: u32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        if current.is_empty() || text_size(size.scale(), font, &candidate).0 <= max_width {
            current = candidate;
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
