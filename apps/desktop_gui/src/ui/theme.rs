use egui::Color32;

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub background: Color32,
    pub card: Color32,
    pub primary: Color32,
    pub primary_active: Color32,
    pub text: Color32,
    pub light_text: Color32,
    pub border: Color32,
    pub tag_bg: Color32,
    pub project_button_bg: Color32,
    pub project_button_hover: Color32,
    pub project_button_text: Color32,
}

pub const PALETTE: Palette = Palette {
    background: Color32::from_rgb(0xf8, 0xf9, 0xfa),
    card: Color32::WHITE,
    primary: Color32::from_rgb(0x80, 0x00, 0x00),
    primary_active: Color32::from_rgb(0x66, 0x00, 0x00),
    text: Color32::BLACK,
    light_text: Color32::from_rgb(0x44, 0x44, 0x44),
    border: Color32::from_rgb(0xdd, 0xdd, 0xdd),
    tag_bg: Color32::from_rgb(0xf0, 0xf0, 0xf0),
    project_button_bg: Color32::from_rgb(0xad, 0xd8, 0xe6),
    project_button_hover: Color32::from_rgb(0xae, 0xd5, 0xe2),
    project_button_text: Color32::from_rgb(0x00, 0x00, 0x80),
};

/// Colours of a flat button. `active` is shown while the pointer hovers or
/// presses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonColors {
    pub fill: Color32,
    pub active: Color32,
    pub text: Color32,
}

impl ButtonColors {
    pub fn fill_for(self, hovered: bool, pressed: bool) -> Color32 {
        if hovered || pressed {
            self.active
        } else {
            self.fill
        }
    }
}

pub const PRIMARY_BUTTON: ButtonColors = ButtonColors {
    fill: PALETTE.primary,
    active: PALETTE.primary_active,
    text: Color32::WHITE,
};

pub const SECONDARY_BUTTON: ButtonColors = ButtonColors {
    fill: PALETTE.tag_bg,
    active: PALETTE.border,
    text: PALETTE.primary,
};

pub const PROJECT_BUTTON: ButtonColors = ButtonColors {
    fill: PALETTE.project_button_bg,
    active: PALETTE.project_button_hover,
    text: PALETTE.project_button_text,
};

/// Point sizes for the text roles used across panels.
pub mod size {
    pub const HEADER: f32 = 19.0;
    pub const TITLE: f32 = 17.0;
    pub const SUBTITLE: f32 = 13.5;
    pub const BUTTON: f32 = 13.5;
    pub const BODY: f32 = 12.5;
    pub const TAG: f32 = 11.5;
    pub const INITIALS: f32 = 26.0;
}

pub fn visuals() -> egui::Visuals {
    let mut visuals = egui::Visuals::light();
    visuals.override_text_color = Some(PALETTE.text);
    visuals.window_fill = PALETTE.background;
    visuals.panel_fill = PALETTE.background;
    visuals.extreme_bg_color = PALETTE.card;
    visuals.faint_bg_color = PALETTE.tag_bg;
    visuals.hyperlink_color = PALETTE.project_button_text;
    visuals.selection.bg_fill = PALETTE.primary;
    visuals.widgets.hovered.weak_bg_fill = PALETTE.border;
    visuals.widgets.active.weak_bg_fill = PALETTE.primary_active;

    for widget in [
        &mut visuals.widgets.inactive,
        &mut visuals.widgets.hovered,
        &mut visuals.widgets.active,
    ] {
        widget.corner_radius = egui::CornerRadius::same(2);
    }
    visuals
}

pub fn apply(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    style.visuals = visuals();
    style.spacing.item_spacing = egui::vec2(8.0, 5.0);
    style.spacing.button_padding = egui::vec2(10.0, 6.0);
    ctx.set_style(style);
}
