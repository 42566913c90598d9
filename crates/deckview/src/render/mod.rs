pub mod layouts;

use eframe::egui;

use crate::deck::{Slide, SlideKind};
use crate::icons;
use crate::theme::Theme;

/// Render a single slide using the layout selected by its type tag.
pub fn render_slide(
    ui: &egui::Ui,
    slide: &Slide,
    theme: &Theme,
    rect: egui::Rect,
    opacity: f32,
    scale: f32,
) {
    match slide.kind {
        SlideKind::Cover => layouts::cover::render(ui, slide, theme, rect, opacity, scale),
        SlideKind::Section => layouts::section::render(ui, slide, theme, rect, opacity, scale),
        SlideKind::Content => layouts::content::render(ui, slide, theme, rect, opacity, scale),
        SlideKind::List => layouts::list::render(ui, slide, theme, rect, opacity, scale),
    }
}

/// Draw a horizontally centered line of text; returns the height consumed.
pub(crate) fn draw_centered(
    ui: &egui::Ui,
    text: &str,
    font: egui::FontId,
    color: egui::Color32,
    rect: egui::Rect,
    y: f32,
    wrap_width: f32,
) -> f32 {
    let galley = ui
        .painter()
        .layout(text.to_string(), font, color, wrap_width);
    let h = galley.rect.height();
    let x = rect.center().x - galley.rect.width() / 2.0;
    ui.painter().galley(egui::pos2(x, y), galley, color);
    h
}

/// Draw the slide's icon glyph centered at `y`, if the slide carries an icon
/// key; returns the height consumed (0 when there is no icon).
pub(crate) fn draw_icon(
    ui: &egui::Ui,
    slide: &Slide,
    theme: &Theme,
    rect: egui::Rect,
    y: f32,
    opacity: f32,
    scale: f32,
) -> f32 {
    let Some(key) = &slide.icon else { return 0.0 };
    let color = Theme::with_opacity(theme.heading_color, opacity);
    draw_centered(
        ui,
        icons::glyph(key),
        egui::FontId::proportional(72.0 * scale),
        color,
        rect,
        y,
        rect.width(),
    )
}

/// Rough height of the icon/title/subtitle header block, used by the layouts
/// to center their content vertically before anything is painted.
pub(crate) fn estimate_header_height(
    slide: &Slide,
    theme: &Theme,
    title_size: f32,
    scale: f32,
) -> f32 {
    let mut h = 0.0;
    if slide.icon.is_some() {
        h += (72.0 + 24.0) * scale;
    }
    h += title_size * 1.2 * scale + 16.0 * scale;
    if slide.subtitle.is_some() {
        h += theme.subtitle_size * 1.2 * scale + 16.0 * scale;
    }
    h
}
