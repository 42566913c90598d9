use eframe::egui::Color32;

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub background: Color32,
    /// Card background for list points and the toolbar pill.
    pub surface: Color32,
    pub foreground: Color32,
    /// Secondary text: subtitles, footers, disabled controls.
    pub muted: Color32,
    pub heading_color: Color32,
    pub accent: Color32,
    /// Unfilled part of the progress bar and inactive position dots.
    pub track: Color32,
    pub cover_title_size: f32,
    pub title_size: f32,
    pub subtitle_size: f32,
    pub body_size: f32,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            background: Color32::WHITE,
            surface: Color32::from_rgb(0xF1, 0xF5, 0xF9),
            foreground: Color32::from_rgb(0x33, 0x41, 0x55),
            muted: Color32::from_rgb(0x94, 0xA3, 0xB8),
            heading_color: Color32::from_rgb(0x1E, 0x29, 0x3B),
            accent: Color32::from_rgb(0x25, 0x63, 0xEB),
            track: Color32::from_rgb(0xE2, 0xE8, 0xF0),
            cover_title_size: 96.0,
            title_size: 64.0,
            subtitle_size: 36.0,
            body_size: 30.0,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            background: Color32::from_rgb(0x0F, 0x17, 0x2A),
            surface: Color32::from_rgb(0x1E, 0x29, 0x3B),
            foreground: Color32::from_rgb(0xCB, 0xD5, 0xE1),
            muted: Color32::from_rgb(0x64, 0x74, 0x8B),
            heading_color: Color32::from_rgb(0xF1, 0xF5, 0xF9),
            accent: Color32::from_rgb(0x60, 0xA5, 0xFA),
            track: Color32::from_rgb(0x33, 0x41, 0x55),
            cover_title_size: 96.0,
            title_size: 64.0,
            subtitle_size: 36.0,
            body_size: 30.0,
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            "dark" => Self::dark(),
            _ => Self::light(),
        }
    }

    pub fn toggled(&self) -> Self {
        if self.name == "dark" {
            Self::light()
        } else {
            Self::dark()
        }
    }

    /// Apply opacity to a color
    pub fn with_opacity(color: Color32, opacity: f32) -> Color32 {
        Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), (opacity * 255.0) as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_defaults_to_light() {
        assert_eq!(Theme::from_name("light").name, "light");
        assert_eq!(Theme::from_name("dark").name, "dark");
        assert_eq!(Theme::from_name("mauve").name, "light");
    }

    #[test]
    fn toggled_flips_both_ways() {
        assert_eq!(Theme::light().toggled().name, "dark");
        assert_eq!(Theme::dark().toggled().name, "light");
    }
}
