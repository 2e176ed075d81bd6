//! Confusion matrix heatmap

use ab_glyph::{Font, FontRef, PxScale};
use image::{Rgb, RgbImage, imageops};
use imageproc::drawing::{draw_filled_rect_mut, draw_hollow_rect_mut, draw_text_mut, text_size};
use imageproc::rect::Rect;
use std::path::Path;

use crate::core::constants::heatmap::{
    AXIS_SIZE, COUNT_SIZE, DARK, HEIGHT, INK, INK_ON_DARK, LIGHT, TICK_SIZE, TITLE, TITLE_SIZE,
    WIDTH, X_LABEL, Y_LABEL,
};
use crate::core::error::Result;
use crate::metrics::{ConfusionMatrix, LabelSet};

/// DejaVu Sans, shipped with the crate so rendering never depends on system fonts
static FONT_DATA: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");

const GRID_LEFT: u32 = 220;
const GRID_TOP: u32 = 110;
const GRID_WIDTH: u32 = 700;
const GRID_HEIGHT: u32 = 560;
const CELL_WIDTH: u32 = GRID_WIDTH / 2;
const CELL_HEIGHT: u32 = GRID_HEIGHT / 2;

/// Smallest pixel height a label is shrunk to when it does not fit
const MIN_TEXT_SIZE: f32 = 10.0;

/// A piece of text and the top-left corner it is drawn at
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Placement {
    pub text: String,
    pub x: i32,
    pub y: i32,
    pub size: f32,
}

/// Parse the embedded font
pub fn load_font() -> Result<FontRef<'static>> {
    Ok(FontRef::try_from_slice(FONT_DATA)?)
}

/// Colour of a cell holding `count` when the largest cell holds `max`
pub fn cell_color(count: usize, max: usize) -> Rgb<u8> {
    let t = if max == 0 {
        0.0
    } else {
        count as f64 / max as f64
    };
    let channel = |i: usize| -> u8 {
        let light = LIGHT[i] as f64;
        let dark = DARK[i] as f64;
        (light + (dark - light) * t).round() as u8
    };
    Rgb([channel(0), channel(1), channel(2)])
}

/// Annotation ink that stays readable on `background`
pub fn ink_for(background: Rgb<u8>) -> Rgb<u8> {
    let [r, g, b] = background.0;
    let luminance = (0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64) / 255.0;
    if luminance < 0.5 {
        Rgb(INK_ON_DARK)
    } else {
        Rgb(INK)
    }
}

/// Top-left corner of the cell at (`actual`, `predicted`)
pub fn cell_origin(actual: usize, predicted: usize) -> (u32, u32) {
    (
        GRID_LEFT + predicted as u32 * CELL_WIDTH,
        GRID_TOP + actual as u32 * CELL_HEIGHT,
    )
}

/// Largest size up to `preferred` at which `text` fits in `max_width`
fn fit_size(font: &impl Font, text: &str, max_width: u32, preferred: f32) -> f32 {
    let (width, _) = text_size(PxScale::from(preferred), font, text);
    if width <= max_width {
        preferred
    } else {
        (preferred * max_width as f32 / width as f32)
            .floor()
            .max(MIN_TEXT_SIZE)
    }
}

/// Place `text` centred horizontally on `center_x`, with its top at `y`
fn centered(
    font: &impl Font,
    text: &str,
    center_x: u32,
    y: u32,
    max_width: u32,
    preferred: f32,
) -> Placement {
    let size = fit_size(font, text, max_width, preferred);
    let (width, _) = text_size(PxScale::from(size), font, text);
    Placement {
        text: text.to_string(),
        x: center_x as i32 - width as i32 / 2,
        y: y as i32,
        size,
    }
}

/// Tick labels for the predicted (x) and actual (y) axes, each in
/// `[negative, positive]` order
pub(crate) fn tick_placements(
    font: &impl Font,
    labels: &LabelSet,
) -> (Vec<Placement>, Vec<Placement>) {
    let mut x_ticks = Vec::with_capacity(2);
    let mut y_ticks = Vec::with_capacity(2);

    for (class, label) in labels.ordered().into_iter().enumerate() {
        let (x, _) = cell_origin(0, class);
        x_ticks.push(centered(
            font,
            label,
            x + CELL_WIDTH / 2,
            GRID_TOP + GRID_HEIGHT + 12,
            CELL_WIDTH - 20,
            TICK_SIZE,
        ));

        let size = fit_size(font, label, GRID_LEFT - 80, TICK_SIZE);
        let (width, height) = text_size(PxScale::from(size), font, label);
        let (_, y) = cell_origin(class, 0);
        y_ticks.push(Placement {
            text: label.to_string(),
            x: (GRID_LEFT - 12) as i32 - width as i32,
            y: (y + CELL_HEIGHT / 2) as i32 - height as i32 / 2,
            size,
        });
    }

    (x_ticks, y_ticks)
}

fn draw(image: &mut RgbImage, font: &impl Font, placement: &Placement, color: Rgb<u8>) {
    draw_text_mut(
        image,
        color,
        placement.x,
        placement.y,
        PxScale::from(placement.size),
        font,
        &placement.text,
    );
}

/// Draw `text` rotated a quarter turn counter-clockwise, centred on `center_y`
fn draw_vertical(
    image: &mut RgbImage,
    font: &impl Font,
    text: &str,
    x: i64,
    center_y: u32,
    size: f32,
) {
    let scale = PxScale::from(size);
    let (width, height) = text_size(scale, font, text);
    let mut strip = RgbImage::from_pixel(width.max(1), height.max(1), Rgb([255, 255, 255]));
    draw_text_mut(&mut strip, Rgb(INK), 0, 0, scale, font, text);

    let rotated = imageops::rotate270(&strip);
    let y = center_y as i64 - rotated.height() as i64 / 2;
    imageops::overlay(image, &rotated, x, y);
}

/// Draw the annotated 2×2 heatmap. Rows are actual classes and columns
/// predicted classes, both in `[negative, positive]` order.
pub fn render_heatmap(matrix: &ConfusionMatrix, labels: &LabelSet) -> Result<RgbImage> {
    let font = load_font()?;
    let mut image = RgbImage::from_pixel(WIDTH, HEIGHT, Rgb([255, 255, 255]));
    let ink = Rgb(INK);
    let max = matrix.max_cell();

    // Title
    let title = centered(&font, TITLE, WIDTH / 2, 40, WIDTH - 40, TITLE_SIZE);
    draw(&mut image, &font, &title, ink);

    // Cells
    for actual in 0..2 {
        for predicted in 0..2 {
            let count = matrix.cell(actual, predicted);
            let fill = cell_color(count, max);
            let (x, y) = cell_origin(actual, predicted);
            draw_filled_rect_mut(
                &mut image,
                Rect::at(x as i32, y as i32).of_size(CELL_WIDTH, CELL_HEIGHT),
                fill,
            );

            let text = count.to_string();
            let size = fit_size(&font, &text, CELL_WIDTH - 20, COUNT_SIZE);
            let (_, height) = text_size(PxScale::from(size), &font, &text);
            let annotation = centered(
                &font,
                &text,
                x + CELL_WIDTH / 2,
                y + CELL_HEIGHT.saturating_sub(height) / 2,
                CELL_WIDTH - 20,
                size,
            );
            draw(&mut image, &font, &annotation, ink_for(fill));
        }
    }
    draw_hollow_rect_mut(
        &mut image,
        Rect::at(GRID_LEFT as i32, GRID_TOP as i32).of_size(GRID_WIDTH, GRID_HEIGHT),
        ink,
    );

    // Tick labels
    let (x_ticks, y_ticks) = tick_placements(&font, labels);
    for tick in x_ticks.iter().chain(&y_ticks) {
        draw(&mut image, &font, tick, ink);
    }

    // Axis labels
    let x_label = centered(
        &font,
        X_LABEL,
        GRID_LEFT + GRID_WIDTH / 2,
        GRID_TOP + GRID_HEIGHT + 56,
        GRID_WIDTH,
        AXIS_SIZE,
    );
    draw(&mut image, &font, &x_label, ink);
    draw_vertical(
        &mut image,
        &font,
        Y_LABEL,
        30,
        GRID_TOP + GRID_HEIGHT / 2,
        AXIS_SIZE,
    );

    Ok(image)
}

/// Render the heatmap and save it as PNG at `path`
pub fn write_heatmap(matrix: &ConfusionMatrix, labels: &LabelSet, path: &Path) -> Result<()> {
    render_heatmap(matrix, labels)?.save(path)?;
    Ok(())
}
