use eframe::egui;

use crate::deck::Slide;
use crate::render;
use crate::theme::Theme;

/// Opening slide: icon, oversized accent title, subtitle, and the points as
/// centered standalone lines rather than bullets.
pub fn render(
    ui: &egui::Ui,
    slide: &Slide,
    theme: &Theme,
    rect: egui::Rect,
    opacity: f32,
    scale: f32,
) {
    let padding = 80.0 * scale;
    let content_rect = rect.shrink(padding);

    let title_size = theme.cover_title_size * scale;
    let point_size = theme.body_size * scale;

    // Estimate total height for vertical centering
    let mut total = render::estimate_header_height(slide, theme, theme.cover_title_size, scale);
    if !slide.points.is_empty() {
        total += 32.0 * scale + slide.points.len() as f32 * point_size * 1.6;
    }

    let mut y = (content_rect.center().y - total / 2.0).max(content_rect.top());

    let h = render::draw_icon(ui, slide, theme, content_rect, y, opacity, scale);
    if h > 0.0 {
        y += h + 24.0 * scale;
    }

    let title_color = Theme::with_opacity(theme.accent, opacity);
    y += render::draw_centered(
        ui,
        &slide.title,
        egui::FontId::proportional(title_size),
        title_color,
        content_rect,
        y,
        content_rect.width(),
    ) + 16.0 * scale;

    if let Some(subtitle) = &slide.subtitle {
        let subtitle_color = Theme::with_opacity(theme.muted, opacity);
        y += render::draw_centered(
            ui,
            subtitle,
            egui::FontId::proportional(theme.subtitle_size * scale),
            subtitle_color,
            content_rect,
            y,
            content_rect.width(),
        ) + 16.0 * scale;
    }

    if !slide.points.is_empty() {
        y += 32.0 * scale;
        let point_color = Theme::with_opacity(theme.foreground, opacity);
        for point in &slide.points {
            y += render::draw_centered(
                ui,
                point,
                egui::FontId::proportional(point_size),
                point_color,
                content_rect,
                y,
                content_rect.width() * 0.8,
            ) + point_size * 0.5;
        }
    }
}
