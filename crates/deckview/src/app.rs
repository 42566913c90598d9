use std::path::PathBuf;
use std::time::Instant;

use eframe::egui;

use crate::config::Config;
use crate::controller::Controller;
use crate::deck::Deck;
use crate::icons;
use crate::render;
use crate::theme::Theme;

const PROGRESS_BAR_HEIGHT: f32 = 8.0;
const NAV_BAR_HEIGHT: f32 = 110.0;

struct PresentationApp {
    deck: Deck,
    controller: Controller,
    theme: Theme,
    show_hud: bool,
    toast: Option<Toast>,
    last_esc: Option<Instant>,
}

struct Toast {
    message: String,
    start: Instant,
}

impl Toast {
    fn new(message: String) -> Self {
        Self {
            message,
            start: Instant::now(),
        }
    }

    fn opacity(&self) -> f32 {
        let elapsed = self.start.elapsed().as_secs_f32();
        let duration = 1.5;
        let fade_start = 1.0;
        if elapsed < fade_start {
            1.0
        } else if elapsed < duration {
            1.0 - (elapsed - fade_start) / (duration - fade_start)
        } else {
            0.0
        }
    }

    fn is_expired(&self) -> bool {
        self.start.elapsed().as_secs_f32() >= 1.5
    }
}

impl PresentationApp {
    fn new(deck: Deck) -> Self {
        let theme_name = deck.meta.theme.as_deref().unwrap_or("light");
        let theme = Theme::from_name(theme_name);
        let controller = Controller::new(deck.len());

        Self {
            deck,
            controller,
            theme,
            show_hud: false,
            toast: None,
            last_esc: None,
        }
    }

    fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        self.toast = Some(Toast::new(format!("Theme: {}", self.theme.name)));
    }

    fn compute_scale(rect: egui::Rect) -> f32 {
        let ref_w = 1920.0;
        let ref_h = 1080.0;
        (rect.width() / ref_w).min(rect.height() / ref_h)
    }

    fn nav_bar_rect(rect: egui::Rect, scale: f32) -> egui::Rect {
        egui::Rect::from_min_max(
            egui::pos2(rect.left(), rect.bottom() - NAV_BAR_HEIGHT * scale),
            rect.max,
        )
    }

    /// Slide area between the progress bar and the navigation bar.
    fn content_rect(rect: egui::Rect, scale: f32) -> egui::Rect {
        egui::Rect::from_min_max(
            egui::pos2(rect.left(), rect.top() + PROGRESS_BAR_HEIGHT * scale),
            egui::pos2(rect.right(), rect.bottom() - NAV_BAR_HEIGHT * scale),
        )
    }

    fn draw_progress_bar(&self, ui: &egui::Ui, rect: egui::Rect, scale: f32) {
        let bar_rect = egui::Rect::from_min_size(
            rect.min,
            egui::vec2(rect.width(), PROGRESS_BAR_HEIGHT * scale),
        );
        ui.painter().rect_filled(bar_rect, 0.0, self.theme.track);

        let fill_width = rect.width() * self.controller.progress_percentage() / 100.0;
        let fill_rect =
            egui::Rect::from_min_size(rect.min, egui::vec2(fill_width, bar_rect.height()));
        ui.painter().rect_filled(fill_rect, 0.0, self.theme.accent);
    }

    /// Position pill and fullscreen button in the top-right corner. Returns
    /// true when the fullscreen button was clicked.
    fn draw_toolbar(&self, ui: &egui::Ui, ctx: &egui::Context, rect: egui::Rect, scale: f32) -> bool {
        let margin = 20.0 * scale;
        let pill_font = egui::FontId::monospace(16.0 * scale);

        // Fullscreen button, outermost
        let button_size = 40.0 * scale;
        let button_rect = egui::Rect::from_min_size(
            egui::pos2(
                rect.right() - margin - button_size,
                rect.top() + PROGRESS_BAR_HEIGHT * scale + margin,
            ),
            egui::vec2(button_size, button_size),
        );
        let hover_pos = ctx.input(|i| i.pointer.hover_pos());
        let hovered = hover_pos.is_some_and(|p| button_rect.contains(p));
        let button_bg = if hovered {
            self.theme.track
        } else {
            self.theme.surface
        };
        ui.painter()
            .rect_filled(button_rect, button_size / 2.0, button_bg);
        let glyph = if self.controller.is_fullscreen() {
            icons::MINIMIZE
        } else {
            icons::MAXIMIZE
        };
        let glyph_galley = ui.painter().layout_no_wrap(
            glyph.to_string(),
            egui::FontId::proportional(18.0 * scale),
            self.theme.foreground,
        );
        ui.painter().galley(
            button_rect.center() - glyph_galley.rect.size() / 2.0,
            glyph_galley,
            self.theme.foreground,
        );

        // Position pill to its left
        let label = self.controller.position_label();
        let label_galley = ui
            .painter()
            .layout_no_wrap(label, pill_font, self.theme.muted);
        let pill_pad = 12.0 * scale;
        let pill_rect = egui::Rect::from_min_size(
            egui::pos2(
                button_rect.left() - 10.0 * scale - label_galley.rect.width() - pill_pad * 2.0,
                button_rect.top() + (button_size - label_galley.rect.height()) / 2.0 - pill_pad / 2.0,
            ),
            egui::vec2(
                label_galley.rect.width() + pill_pad * 2.0,
                label_galley.rect.height() + pill_pad,
            ),
        );
        ui.painter()
            .rect_filled(pill_rect, pill_rect.height() / 2.0, self.theme.surface);
        ui.painter().galley(
            egui::pos2(
                pill_rect.left() + pill_pad,
                pill_rect.top() + pill_pad / 2.0,
            ),
            label_galley,
            self.theme.muted,
        );

        let clicked = ctx.input(|i| i.pointer.button_pressed(egui::PointerButton::Primary));
        clicked && hovered
    }

    /// Previous/next buttons and the position dots. Mutates the controller
    /// directly on click; all of this runs on the single UI thread.
    fn draw_nav_bar(&mut self, ui: &egui::Ui, ctx: &egui::Context, rect: egui::Rect, scale: f32) {
        let bar_rect = Self::nav_bar_rect(rect, scale);

        ui.painter().rect_filled(bar_rect, 0.0, self.theme.surface);
        ui.painter().line_segment(
            [bar_rect.left_top(), bar_rect.right_top()],
            egui::Stroke::new(1.0, self.theme.track),
        );

        let (hover_pos, clicked) = ctx.input(|i| {
            (
                i.pointer.hover_pos(),
                i.pointer.button_pressed(egui::PointerButton::Primary),
            )
        });

        // Previous / next buttons
        let button_size = egui::vec2(200.0 * scale, 56.0 * scale);
        let margin = 40.0 * scale;
        let prev_rect = egui::Rect::from_min_size(
            egui::pos2(
                bar_rect.left() + margin,
                bar_rect.center().y - button_size.y / 2.0,
            ),
            button_size,
        );
        let next_rect = egui::Rect::from_min_size(
            egui::pos2(
                bar_rect.right() - margin - button_size.x,
                bar_rect.center().y - button_size.y / 2.0,
            ),
            button_size,
        );

        let prev_enabled = !self.controller.is_first();
        let next_enabled = !self.controller.is_last();

        self.draw_nav_button(
            ui,
            hover_pos,
            prev_rect,
            icons::CHEVRON_LEFT,
            "Previous",
            prev_enabled,
            false,
            scale,
        );
        self.draw_nav_button(
            ui,
            hover_pos,
            next_rect,
            icons::CHEVRON_RIGHT,
            "Next",
            next_enabled,
            true,
            scale,
        );

        if clicked {
            if let Some(pos) = hover_pos {
                if prev_enabled && prev_rect.contains(pos) {
                    self.controller.previous();
                }
                if next_enabled && next_rect.contains(pos) {
                    self.controller.next();
                }
            }
        }

        // Position dots, one per slide, active one widened
        let count = self.controller.slide_count();
        let active = self.controller.current_index();
        let dot_h = 12.0 * scale;
        let dot_w = 12.0 * scale;
        let active_w = 28.0 * scale;
        let gap = 10.0 * scale;
        let total_w = (count - 1) as f32 * (dot_w + gap) + active_w;
        let mut x = bar_rect.center().x - total_w / 2.0;
        let dot_y = bar_rect.center().y - dot_h / 2.0;

        for i in 0..count {
            let w = if i == active { active_w } else { dot_w };
            let dot_rect =
                egui::Rect::from_min_size(egui::pos2(x, dot_y), egui::vec2(w, dot_h));
            let hovered = hover_pos.is_some_and(|p| dot_rect.expand(4.0 * scale).contains(p));
            let color = if i == active {
                self.theme.accent
            } else if hovered {
                self.theme.muted
            } else {
                self.theme.track
            };
            ui.painter().rect_filled(dot_rect, dot_h / 2.0, color);

            if clicked && hovered {
                self.controller.jump_to(i);
            }
            x += w + gap;
        }

        // Footer, tucked under the previous button
        if let Some(footer) = &self.deck.meta.footer {
            let footer_galley = ui.painter().layout_no_wrap(
                footer.clone(),
                egui::FontId::proportional(13.0 * scale),
                self.theme.muted,
            );
            ui.painter().galley(
                egui::pos2(
                    bar_rect.left() + margin,
                    bar_rect.bottom() - footer_galley.rect.height() - 6.0 * scale,
                ),
                footer_galley,
                self.theme.muted,
            );
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_nav_button(
        &self,
        ui: &egui::Ui,
        hover_pos: Option<egui::Pos2>,
        rect: egui::Rect,
        chevron: &str,
        label: &str,
        enabled: bool,
        chevron_right: bool,
        scale: f32,
    ) {
        let hovered = enabled && hover_pos.is_some_and(|p| rect.contains(p));
        let (bg, fg) = if !enabled {
            (self.theme.surface, self.theme.track)
        } else if chevron_right {
            // Forward button carries the accent, like the progress bar
            let bg = if hovered {
                Theme::with_opacity(self.theme.accent, 0.85)
            } else {
                self.theme.accent
            };
            (bg, self.theme.background)
        } else {
            let bg = if hovered {
                self.theme.track
            } else {
                self.theme.surface
            };
            (bg, self.theme.foreground)
        };

        ui.painter().rect_filled(rect, 10.0 * scale, bg);

        let text = if chevron_right {
            format!("{label}  {chevron}")
        } else {
            format!("{chevron}  {label}")
        };
        let galley =
            ui.painter()
                .layout_no_wrap(text, egui::FontId::proportional(20.0 * scale), fg);
        ui.painter()
            .galley(rect.center() - galley.rect.size() / 2.0, galley, fg);
    }

    fn draw_toast(&self, ui: &egui::Ui, ctx: &egui::Context, rect: egui::Rect, scale: f32) {
        let Some(toast) = &self.toast else { return };
        let opacity = toast.opacity();
        if opacity <= 0.0 {
            return;
        }
        let toast_color = Theme::with_opacity(self.theme.foreground, opacity * 0.9);
        let toast_bg = Theme::with_opacity(self.theme.surface, opacity * 0.9);
        let galley = ui.painter().layout_no_wrap(
            toast.message.clone(),
            egui::FontId::proportional(20.0 * scale),
            toast_color,
        );
        let padding = 16.0 * scale;
        let toast_rect = egui::Rect::from_min_size(
            egui::pos2(
                rect.center().x - galley.rect.width() / 2.0 - padding,
                rect.bottom() - (NAV_BAR_HEIGHT + 60.0) * scale,
            ),
            egui::vec2(
                galley.rect.width() + padding * 2.0,
                galley.rect.height() + padding * 2.0,
            ),
        );
        ui.painter().rect_filled(toast_rect, 8.0 * scale, toast_bg);
        ui.painter().galley(
            egui::pos2(toast_rect.left() + padding, toast_rect.top() + padding),
            galley,
            toast_color,
        );
        ctx.request_repaint();
    }

    fn draw_hud(&self, ui: &egui::Ui, rect: egui::Rect, scale: f32) {
        let shortcuts = [
            ("Space / N / \u{2192}", "Next slide"),
            ("P / \u{2190}", "Previous slide"),
            ("Home / End", "First / last slide"),
            ("F", "Toggle fullscreen"),
            ("D", "Toggle theme"),
            ("H", "Toggle this overlay"),
            ("Q / Esc \u{00d7}2", "Quit"),
        ];

        let bg = Theme::with_opacity(self.theme.surface, 0.95);
        let text_color = Theme::with_opacity(self.theme.foreground, 0.9);
        let key_color = Theme::with_opacity(self.theme.accent, 0.9);

        let padding = 24.0 * scale;
        let line_height = 32.0 * scale;
        let hud_height = shortcuts.len() as f32 * line_height + padding * 2.0 + 40.0 * scale;
        let hud_width = 380.0 * scale;
        let hud_rect =
            egui::Rect::from_center_size(rect.center(), egui::vec2(hud_width, hud_height));

        ui.painter().rect_filled(hud_rect, 12.0 * scale, bg);

        let title_galley = ui.painter().layout_no_wrap(
            "Keyboard Shortcuts".to_string(),
            egui::FontId::proportional(20.0 * scale),
            Theme::with_opacity(self.theme.heading_color, 0.9),
        );
        ui.painter().galley(
            egui::pos2(hud_rect.left() + padding, hud_rect.top() + padding),
            title_galley,
            text_color,
        );

        let mut y = hud_rect.top() + padding + 40.0 * scale;
        for (key, desc) in &shortcuts {
            let key_galley = ui.painter().layout_no_wrap(
                key.to_string(),
                egui::FontId::monospace(15.0 * scale),
                key_color,
            );
            ui.painter().galley(
                egui::pos2(hud_rect.left() + padding, y),
                key_galley,
                key_color,
            );

            let desc_galley = ui.painter().layout_no_wrap(
                desc.to_string(),
                egui::FontId::proportional(15.0 * scale),
                text_color,
            );
            ui.painter().galley(
                egui::pos2(hud_rect.left() + padding + 180.0 * scale, y),
                desc_galley,
                text_color,
            );

            y += line_height;
        }
    }
}

impl eframe::App for PresentationApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Collect viewport commands to send AFTER the input closure
        // (sending inside ctx.input() causes RwLock deadlock)
        let mut viewport_cmds: Vec<egui::ViewportCommand> = Vec::new();

        ctx.input(|i| {
            // Quit: Q, or Esc twice within a second
            if i.key_pressed(egui::Key::Q) {
                viewport_cmds.push(egui::ViewportCommand::Close);
                return;
            }
            if i.key_pressed(egui::Key::Escape) {
                if let Some(last) = self.last_esc {
                    if last.elapsed().as_secs_f32() < 1.0 {
                        viewport_cmds.push(egui::ViewportCommand::Close);
                        return;
                    }
                }
                self.last_esc = Some(Instant::now());
                self.toast = Some(Toast::new("Press Esc again to exit".to_string()));
                return;
            }

            // Fullscreen toggle: the flag flips optimistically and the host
            // request is fire-and-forget
            if i.key_pressed(egui::Key::F) {
                let fullscreen = self.controller.toggle_fullscreen();
                viewport_cmds.push(egui::ViewportCommand::Fullscreen(fullscreen));
                return;
            }

            if i.key_pressed(egui::Key::D) {
                self.toggle_theme();
                return;
            }
            if i.key_pressed(egui::Key::H) {
                self.show_hud = !self.show_hud;
                return;
            }

            // Forward: Right, N, Space
            if i.key_pressed(egui::Key::ArrowRight)
                || i.key_pressed(egui::Key::N)
                || i.key_pressed(egui::Key::Space)
            {
                self.controller.next();
            }
            // Backward: Left, P
            if i.key_pressed(egui::Key::ArrowLeft) || i.key_pressed(egui::Key::P) {
                self.controller.previous();
            }
            if i.key_pressed(egui::Key::Home) {
                self.controller.jump_to(0);
            }
            if i.key_pressed(egui::Key::End) {
                self.controller
                    .jump_to(self.controller.slide_count().saturating_sub(1));
            }
        });

        // Send collected viewport commands outside the input closure
        for cmd in viewport_cmds {
            ctx.send_viewport_cmd(cmd);
        }

        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }

        let bg = self.theme.background;

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(bg).inner_margin(0.0))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                ui.painter().rect_filled(rect, 0.0, bg);

                let scale = Self::compute_scale(rect);
                let content_rect = Self::content_rect(rect, scale);

                let slide = &self.deck.slides[self.controller.current_index()];
                render::render_slide(ui, slide, &self.theme, content_rect, 1.0, scale);

                self.draw_progress_bar(ui, rect, scale);
                if self.draw_toolbar(ui, ctx, rect, scale) {
                    let fullscreen = self.controller.toggle_fullscreen();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(fullscreen));
                }
                self.draw_nav_bar(ui, ctx, rect, scale);
                self.draw_toast(ui, ctx, rect, scale);

                if self.show_hud {
                    self.draw_hud(ui, rect, scale);
                }
            });
    }
}

pub fn run(file: PathBuf, fullscreen: bool, start_slide: Option<usize>) -> anyhow::Result<()> {
    let deck = Deck::load(&file)?;

    let title = deck.meta.title.clone().unwrap_or_else(|| {
        format!(
            "deckview \u{2014} {}",
            file.file_name().unwrap_or_default().to_string_lossy()
        )
    });

    let slide_count = deck.len();

    // --slide overrides the configured start mode
    let config = Config::load_or_default();
    let config_start = config
        .defaults
        .as_ref()
        .and_then(|d| d.start_mode.as_deref());

    let initial_slide = if let Some(s) = start_slide {
        s.saturating_sub(1)
    } else {
        match config_start {
            Some("first") | None => 0,
            Some(n) => n.parse::<usize>().map(|v| v.saturating_sub(1)).unwrap_or(0),
        }
    };
    let initial_slide = initial_slide.min(slide_count.saturating_sub(1));

    let config_theme = config.defaults.as_ref().and_then(|d| d.theme.clone());

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([1280.0, 720.0])
        .with_title(&title);

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            let mut app = PresentationApp::new(deck);
            // Config theme wins over the deck's own theme hint
            if let Some(name) = config_theme {
                app.theme = Theme::from_name(&name);
            }
            app.controller.jump_to(initial_slide);
            if fullscreen {
                let state = app.controller.toggle_fullscreen();
                cc.egui_ctx
                    .send_viewport_cmd(egui::ViewportCommand::Fullscreen(state));
            }
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}
