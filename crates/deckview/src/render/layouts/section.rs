use eframe::egui;

use crate::deck::Slide;
use crate::render;
use crate::theme::Theme;

/// Section divider: little more than a centered heading with an accent rule.
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

    let total = render::estimate_header_height(slide, theme, theme.cover_title_size, scale)
        + 28.0 * scale;
    let mut y = (content_rect.center().y - total / 2.0).max(content_rect.top());

    let h = render::draw_icon(ui, slide, theme, content_rect, y, opacity, scale);
    if h > 0.0 {
        y += h + 24.0 * scale;
    }

    let title_color = Theme::with_opacity(theme.heading_color, opacity);
    y += render::draw_centered(
        ui,
        &slide.title,
        egui::FontId::proportional(theme.cover_title_size * scale),
        title_color,
        content_rect,
        y,
        content_rect.width(),
    ) + 28.0 * scale;

    // Accent rule under the heading
    let rule_width = 160.0 * scale;
    let rule_rect = egui::Rect::from_min_size(
        egui::pos2(content_rect.center().x - rule_width / 2.0, y),
        egui::vec2(rule_width, 6.0 * scale),
    );
    ui.painter().rect_filled(
        rule_rect,
        3.0 * scale,
        Theme::with_opacity(theme.accent, opacity),
    );
    y += 28.0 * scale;

    if let Some(subtitle) = &slide.subtitle {
        let subtitle_color = Theme::with_opacity(theme.muted, opacity);
        render::draw_centered(
            ui,
            subtitle,
            egui::FontId::proportional(theme.subtitle_size * scale),
            subtitle_color,
            content_rect,
            y,
            content_rect.width(),
        );
    }
}
