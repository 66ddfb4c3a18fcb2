use crate::config::RenderOptions;
use crate::model::Ingredient;

/// Horizontal center of the title, in points.
pub const TITLE_CENTER_X: f32 = 300.0;
pub const TITLE_Y: f32 = 770.0;

/// Divider below the title: (x1, x2, y), in points.
pub const DIVIDER: (f32, f32, f32) = (30.0, 550.0, 710.0);

/// Origin of the ingredient/instruction text block, in points.
pub const TEXT_ORIGIN: (f32, f32) = (40.0, 680.0);

/// Bottom-left corner of the photo, in points.
pub const PHOTO_ORIGIN: (f32, f32) = (3.0, 10.0);

/// Advance width of every Courier glyph, as a fraction of the font size.
const COURIER_ADVANCE: f32 = 0.6;

/// Line spacing as a multiple of the font size.
pub const LEADING: f32 = 1.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Regular,
    Bold,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    pub style: FontStyle,
    pub size: f32,
}

/// Everything drawn on the page except the photo.
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    pub title: String,
    pub title_size: f32,
    /// Left edge that centers the title on [`TITLE_CENTER_X`]
    pub title_x: f32,
    pub lines: Vec<TextLine>,
}

/// Hard split of an instruction segment.
///
/// Segments longer than `threshold` characters become two lines split at
/// character index `at`; the split ignores word boundaries.
pub fn wrap_instruction(segment: &str, threshold: usize, at: usize) -> Vec<String> {
    if segment.chars().count() <= threshold {
        return vec![segment.to_string()];
    }

    let split = segment
        .char_indices()
        .nth(at)
        .map_or(segment.len(), |(i, _)| i);
    let (head, tail) = segment.split_at(split);
    vec![head.to_string(), tail.to_string()]
}

/// Width of `text` set in Courier at `size` points.
pub fn courier_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * COURIER_ADVANCE * size
}

pub fn layout_document(
    ingredients: &[Ingredient],
    instructions: &[String],
    title: &str,
    options: &RenderOptions,
) -> PageLayout {
    let mut lines = Vec::with_capacity(ingredients.len() + instructions.len() + 2);

    lines.push(TextLine {
        text: "Ingredients:".to_string(),
        style: FontStyle::Bold,
        size: options.header_font_size,
    });
    // Ingredients are never wrapped
    lines.extend(ingredients.iter().map(|ingredient| TextLine {
        text: ingredient.text.clone(),
        style: FontStyle::Regular,
        size: options.ingredient_font_size,
    }));

    lines.push(TextLine {
        text: "Instructions:".to_string(),
        style: FontStyle::Bold,
        size: options.header_font_size,
    });
    for segment in instructions {
        for text in wrap_instruction(segment, options.wrap_threshold, options.wrap_at) {
            lines.push(TextLine {
                text,
                style: FontStyle::Regular,
                size: options.instruction_font_size,
            });
        }
    }

    PageLayout {
        title: title.to_string(),
        title_size: options.title_font_size,
        title_x: TITLE_CENTER_X - courier_width(title, options.title_font_size) / 2.0,
        lines,
    }
}
