use eframe::egui;

use crate::deck::Slide;
use crate::render;
use crate::theme::Theme;

/// Default layout: centered header, points as left-aligned paragraphs.
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
    let body_width = content_rect.width() * 0.75;
    let body_left = content_rect.center().x - body_width / 2.0;

    let point_size = theme.body_size * scale;
    let point_color = Theme::with_opacity(theme.foreground, opacity);
    let point_font = egui::FontId::proportional(point_size);

    // Lay the paragraphs out first so the whole slide can be centered
    let galleys: Vec<_> = slide
        .points
        .iter()
        .map(|p| {
            ui.painter()
                .layout(p.clone(), point_font.clone(), point_color, body_width)
        })
        .collect();
    let gap = point_size * 0.7;
    let body_height: f32 = galleys.iter().map(|g| g.rect.height() + gap).sum();

    let total = render::estimate_header_height(slide, theme, theme.title_size, scale)
        + 24.0 * scale
        + body_height;
    let mut y = (content_rect.center().y - total / 2.0).max(content_rect.top());

    let h = render::draw_icon(ui, slide, theme, content_rect, y, opacity, scale);
    if h > 0.0 {
        y += h + 24.0 * scale;
    }

    let title_color = Theme::with_opacity(theme.heading_color, opacity);
    y += render::draw_centered(
        ui,
        &slide.title,
        egui::FontId::proportional(theme.title_size * scale),
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

    y += 24.0 * scale;
    for galley in galleys {
        let h = galley.rect.height();
        ui.painter()
            .galley(egui::pos2(body_left, y), galley, point_color);
        y += h + gap;
    }
}
