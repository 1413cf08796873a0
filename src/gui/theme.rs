use eframe::egui::{
    self,
    Color32,
    RichText,
    Stroke,
    Visuals,
};

/// Color palette pair for the trainer. Both variants are registered with
/// egui at startup; the preference switch in the top bar picks which one is
/// active.
#[derive(Clone)]
pub struct Theme {
    dark: Palette,
    light: Palette,
}

#[derive(Clone)]
struct Palette {
    background: Color32,
    surface: Color32,
    surface_raised: Color32,
    foreground: Color32,
    muted: Color32,
    accent: Color32,
    success: Color32,
    danger: Color32,
    warning: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Self::midnight()
    }
}

impl Theme {
    pub fn midnight() -> Self {
        Theme {
            dark: Palette {
                background: Color32::from_rgb(24, 26, 38),
                surface: Color32::from_rgb(32, 35, 52),
                surface_raised: Color32::from_rgb(44, 48, 70),
                foreground: Color32::from_rgb(222, 224, 235),
                muted: Color32::from_rgb(120, 130, 165),
                accent: Color32::from_rgb(170, 140, 250),
                success: Color32::from_rgb(95, 210, 135),
                danger: Color32::from_rgb(245, 100, 100),
                warning: Color32::from_rgb(250, 190, 100),
            },
            light: Palette {
                background: Color32::from_rgb(245, 245, 250),
                surface: Color32::from_rgb(255, 255, 255),
                surface_raised: Color32::from_rgb(235, 236, 245),
                foreground: Color32::from_rgb(40, 42, 55),
                muted: Color32::from_rgb(130, 138, 165),
                accent: Color32::from_rgb(120, 90, 210),
                success: Color32::from_rgb(60, 165, 100),
                danger: Color32::from_rgb(200, 70, 70),
                warning: Color32::from_rgb(210, 150, 60),
            },
        }
    }

    fn palette(&self, ctx: &egui::Context) -> &Palette {
        if ctx.style().visuals.dark_mode {
            &self.dark
        } else {
            &self.light
        }
    }

    pub fn heading(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).color(self.palette(ctx).accent).strong()
    }

    pub fn muted(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).color(self.palette(ctx).muted)
    }

    pub fn accent(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).accent
    }

    pub fn success(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).success
    }

    pub fn danger(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).danger
    }

    pub fn warning(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).warning
    }

    pub fn card_fill(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).surface_raised
    }
}

/// Register both palette variants so egui's theme preference switch flips
/// between them without any extra plumbing.
pub fn set_theme(ctx: &egui::Context, theme: &Theme) {
    ctx.set_visuals_of(egui::Theme::Dark, visuals_from(&theme.dark, Visuals::dark()));
    ctx.set_visuals_of(egui::Theme::Light, visuals_from(&theme.light, Visuals::light()));
}

fn visuals_from(palette: &Palette, mut visuals: Visuals) -> Visuals {
    visuals.override_text_color = Some(palette.foreground);
    visuals.panel_fill = palette.background;
    visuals.window_fill = palette.surface;
    visuals.extreme_bg_color = palette.surface;
    visuals.faint_bg_color = palette.surface_raised;
    visuals.selection.bg_fill = palette.accent.linear_multiply(0.4);
    visuals.hyperlink_color = palette.accent;

    visuals.widgets.noninteractive.bg_fill = palette.surface;
    visuals.widgets.inactive.bg_fill = palette.surface_raised;
    visuals.widgets.hovered.bg_fill = palette.surface_raised;
    visuals.widgets.active.bg_fill = palette.accent.linear_multiply(0.6);
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, palette.accent);

    visuals
}
