use eframe::egui;

use crate::deck::Slide;
use crate::render;
use crate::theme::Theme;

/// Bullet layout: each point gets its own surface card with an accent marker.
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

    let card_width = content_rect.width() * 0.8;
    let card_left = content_rect.center().x - card_width / 2.0;
    let card_pad = 18.0 * scale;
    let marker_gutter = 44.0 * scale;
    let gap = 16.0 * scale;

    let point_size = theme.body_size * scale;
    let point_color = Theme::with_opacity(theme.foreground, opacity);
    let point_font = egui::FontId::proportional(point_size);
    let text_width = card_width - card_pad * 2.0 - marker_gutter;

    let galleys: Vec<_> = slide
        .points
        .iter()
        .map(|p| {
            ui.painter()
                .layout(p.clone(), point_font.clone(), point_color, text_width)
        })
        .collect();
    let cards_height: f32 = galleys
        .iter()
        .map(|g| g.rect.height() + card_pad * 2.0 + gap)
        .sum();

    let total = render::estimate_header_height(slide, theme, theme.title_size, scale)
        + 24.0 * scale
        + cards_height;
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
    let card_bg = Theme::with_opacity(theme.surface, opacity);
    let marker_color = Theme::with_opacity(theme.accent, opacity);
    for galley in galleys {
        let text_height = galley.rect.height();
        let card_rect = egui::Rect::from_min_size(
            egui::pos2(card_left, y),
            egui::vec2(card_width, text_height + card_pad * 2.0),
        );
        ui.painter().rect_filled(card_rect, 10.0 * scale, card_bg);

        let marker_galley = ui.painter().layout_no_wrap(
            "\u{2022}".to_string(),
            egui::FontId::proportional(point_size * 1.2),
            marker_color,
        );
        ui.painter().galley(
            egui::pos2(card_rect.left() + card_pad, card_rect.top() + card_pad),
            marker_galley,
            marker_color,
        );

        ui.painter().galley(
            egui::pos2(
                card_rect.left() + card_pad + marker_gutter,
                card_rect.top() + card_pad,
            ),
            galley,
            point_color,
        );

        y = card_rect.bottom() + gap;
    }
}
