use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSupport {
    Truecolor,
    Color256,
    Mono,
}

pub fn detect_color_support() -> ColorSupport {
    if std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
        return ColorSupport::Mono;
    }

    let colorterm = std::env::var("COLORTERM")
        .unwrap_or_default()
        .to_lowercase();
    if colorterm.contains("truecolor") || colorterm.contains("24bit") {
        return ColorSupport::Truecolor;
    }
    ColorSupport::Color256
}

#[derive(Debug, Clone)]
pub struct Theme {
    pub header_accent_bg: Color,
    pub header_accent_fg: Color,
    pub status_err: Color,
    pub statusbar_bg: Color,
    pub panel_border: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub label_key: Color,
    pub tab_active: Color,
    pub pill_key_bg: Color,
    pub pill_key_fg: Color,
    pub pill_desc_fg: Color,
    pub surface_bg: Color,
    pub axis: Color,
    pub frequency_line: Color,
    pub usage_line: Color,
    pub ram_line: Color,
}

impl Theme {
    pub fn for_support(support: ColorSupport) -> Self {
        if support == ColorSupport::Mono {
            return Self::mono();
        }
        let mut theme = Self::dark();
        theme.apply_color_support(support);
        theme
    }

    fn apply_color_support(&mut self, support: ColorSupport) {
        let map = |c: Color| adapt_color(c, support);

        self.header_accent_bg = map(self.header_accent_bg);
        self.header_accent_fg = map(self.header_accent_fg);
        self.status_err = map(self.status_err);
        self.statusbar_bg = map(self.statusbar_bg);
        self.panel_border = map(self.panel_border);
        self.text_primary = map(self.text_primary);
        self.text_secondary = map(self.text_secondary);
        self.label_key = map(self.label_key);
        self.tab_active = map(self.tab_active);
        self.pill_key_bg = map(self.pill_key_bg);
        self.pill_key_fg = map(self.pill_key_fg);
        self.pill_desc_fg = map(self.pill_desc_fg);
        self.surface_bg = map(self.surface_bg);
        self.axis = map(self.axis);
        self.frequency_line = map(self.frequency_line);
        self.usage_line = map(self.usage_line);
        self.ram_line = map(self.ram_line);
    }

    pub fn dark() -> Self {
        Theme {
            header_accent_bg: Color::Green,
            header_accent_fg: Color::Black,
            status_err: Color::Rgb(239, 68, 68),
            statusbar_bg: Color::DarkGray,
            panel_border: Color::DarkGray,
            text_primary: Color::White,
            text_secondary: Color::Gray,
            label_key: Color::Rgb(250, 204, 21),
            tab_active: Color::Rgb(103, 232, 249),
            pill_key_bg: Color::Yellow,
            pill_key_fg: Color::Black,
            pill_desc_fg: Color::White,
            surface_bg: Color::DarkGray,
            axis: Color::Gray,
            frequency_line: Color::Rgb(96, 165, 250),
            usage_line: Color::Rgb(52, 211, 153),
            ram_line: Color::Rgb(129, 140, 248),
        }
    }

    pub fn mono() -> Self {
        Theme {
            header_accent_bg: Color::White,
            header_accent_fg: Color::Black,
            status_err: Color::White,
            statusbar_bg: Color::Black,
            panel_border: Color::Gray,
            text_primary: Color::White,
            text_secondary: Color::Gray,
            label_key: Color::White,
            tab_active: Color::White,
            pill_key_bg: Color::White,
            pill_key_fg: Color::Black,
            pill_desc_fg: Color::White,
            surface_bg: Color::Black,
            axis: Color::Gray,
            frequency_line: Color::White,
            usage_line: Color::White,
            ram_line: Color::White,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::for_support(detect_color_support())
    }
}

fn adapt_color(color: Color, support: ColorSupport) -> Color {
    match support {
        ColorSupport::Truecolor => color,
        ColorSupport::Color256 => match color {
            Color::Rgb(r, g, b) => Color::Indexed(rgb_to_ansi256(r, g, b)),
            _ => color,
        },
        ColorSupport::Mono => match color {
            Color::Rgb(r, g, b) => {
                let luminance = 0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64;
                if luminance > 128.0 {
                    Color::White
                } else {
                    Color::Black
                }
            }
            Color::White | Color::Black | Color::Gray | Color::DarkGray => color,
            _ => Color::White,
        },
    }
}

fn rgb_to_ansi256(r: u8, g: u8, b: u8) -> u8 {
    let r = (r as f32 / 255.0 * 5.0).round() as u8;
    let g = (g as f32 / 255.0 * 5.0).round() as u8;
    let b = (b as f32 / 255.0 * 5.0).round() as u8;
    16 + 36 * r + 6 * g + b
}
