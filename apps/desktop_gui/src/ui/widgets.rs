//! Small styled widgets and the block renderer for pre-built panels.

use egui::{Color32, RichText};

use crate::{
    controller::events::UiAction,
    panels::{layout::centered_row_offsets, Block, Panel, Thumbnail},
    ui::{
        textures::TextureCache,
        theme::{size, ButtonColors, PALETTE, PROJECT_BUTTON},
    },
};

pub const THUMBNAIL_GAP: f32 = 10.0;

/// Label wrapped at a fixed column width.
pub fn wrapped_label(ui: &mut egui::Ui, text: RichText, width: f32) {
    ui.scope(|ui| {
        ui.set_max_width(width);
        ui.add(egui::Label::new(text).wrap());
    });
}

pub fn tag(ui: &mut egui::Ui, text: &str) {
    egui::Frame::NONE
        .fill(PALETTE.tag_bg)
        .inner_margin(egui::Margin::same(5))
        .show(ui, |ui| {
            ui.label(RichText::new(text).size(size::TAG).color(PALETTE.text));
        });
}

pub fn badge(ui: &mut egui::Ui, text: &str) {
    egui::Frame::NONE
        .fill(PALETTE.primary)
        .inner_margin(egui::Margin::symmetric(6, 3))
        .show(ui, |ui| {
            ui.label(
                RichText::new(text)
                    .size(size::BODY)
                    .strong()
                    .color(Color32::WHITE),
            );
        });
}

/// Fixed-size square with the subject's initials, shown when no photo loads.
pub fn initials_badge(ui: &mut egui::Ui, initials: &str, side: f32) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(side, side), egui::Sense::hover());
    ui.painter()
        .rect_filled(rect, egui::CornerRadius::same(2), PALETTE.primary);
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        initials,
        egui::FontId::proportional(size::INITIALS),
        Color32::WHITE,
    );
}

/// Flat button painted by hand so the fill follows the pointer state.
pub fn flat_button(
    ui: &mut egui::Ui,
    text: RichText,
    colors: ButtonColors,
    min_size: egui::Vec2,
) -> egui::Response {
    let galley = egui::WidgetText::from(text.color(colors.text)).into_galley(
        ui,
        Some(egui::TextWrapMode::Extend),
        f32::INFINITY,
        egui::TextStyle::Button,
    );
    let size = (galley.size() + ui.spacing().button_padding * 2.0).max(min_size);
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());

    let fill = colors.fill_for(response.hovered(), response.is_pointer_button_down_on());
    ui.painter()
        .rect_filled(rect, egui::CornerRadius::same(2), fill);
    let text_pos = rect.center() - galley.size() / 2.0;
    ui.painter().galley(text_pos, galley, colors.text);

    response.on_hover_cursor(egui::CursorIcon::PointingHand)
}

/// Width a button needs for `text` at `font_size`, including padding.
pub fn button_width(ui: &egui::Ui, text: &str, font_size: f32, strong: bool) -> f32 {
    let mut rich = RichText::new(text).size(font_size);
    if strong {
        rich = rich.strong();
    }
    let galley = egui::WidgetText::from(rich).into_galley(
        ui,
        Some(egui::TextWrapMode::Extend),
        f32::INFINITY,
        egui::TextStyle::Button,
    );
    galley.size().x + ui.spacing().button_padding.x * 2.0
}

/// One cell of the tab navigation row. Active cells are filled with the
/// primary colour and use bold white text.
pub fn nav_button(ui: &mut egui::Ui, label: &str, width: f32, active: bool) -> egui::Response {
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(width, 30.0), egui::Sense::click());

    let fill = if active {
        PALETTE.primary
    } else if response.hovered() {
        PALETTE.border
    } else {
        PALETTE.card
    };
    ui.painter()
        .rect_filled(rect, egui::CornerRadius::same(2), fill);

    let font = egui::FontId::proportional(size::BUTTON);
    let text_color = if active { Color32::WHITE } else { PALETTE.text };
    let galley = ui.painter().layout_no_wrap(label.to_string(), font, text_color);
    let text_pos = rect.center() - galley.size() / 2.0;
    ui.painter().galley(text_pos, galley.clone(), text_color);
    if active {
        // faux bold
        ui.painter()
            .galley(text_pos + egui::vec2(0.6, 0.0), galley, text_color);
    }

    response.on_hover_cursor(egui::CursorIcon::PointingHand)
}

fn visuals_region(
    ui: &mut egui::Ui,
    thumbnails: &[Thumbnail],
    textures: &mut TextureCache,
) {
    egui::Frame::NONE
        .fill(PALETTE.tag_bg)
        .stroke(egui::Stroke::new(1.0, PALETTE.border))
        .inner_margin(egui::Margin::same(10))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            let widths: Vec<f32> = thumbnails
                .iter()
                .map(|t| t.bitmap.width as f32)
                .collect();
            let offsets = centered_row_offsets(ui.available_width(), &widths, THUMBNAIL_GAP);
            let row_height = thumbnails
                .iter()
                .map(|t| t.bitmap.height as f32)
                .fold(0.0, f32::max);

            ui.horizontal(|ui| {
                ui.set_min_height(row_height);
                ui.spacing_mut().item_spacing.x = THUMBNAIL_GAP;
                if let Some(first) = offsets.first() {
                    ui.add_space(*first);
                }
                for thumbnail in thumbnails {
                    let texture =
                        textures.get_or_upload(ui.ctx(), &thumbnail.key, &thumbnail.bitmap);
                    let size = egui::vec2(
                        thumbnail.bitmap.width as f32,
                        thumbnail.bitmap.height as f32,
                    );
                    ui.add(egui::Image::new(egui::load::SizedTexture::new(
                        texture.id(),
                        size,
                    )));
                }
            });
        });
}

fn project_card(
    ui: &mut egui::Ui,
    title: &str,
    description: &str,
    wrap_width: f32,
    link_label: &str,
    link_url: &str,
    actions: &mut Vec<UiAction>,
) {
    egui::Frame::NONE
        .fill(PALETTE.tag_bg)
        .stroke(egui::Stroke::new(1.0, PALETTE.border))
        .inner_margin(egui::Margin::same(10))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(title).size(size::BUTTON).strong());
            ui.add_space(5.0);
            wrapped_label(
                ui,
                RichText::new(description)
                    .size(size::BODY)
                    .color(PALETTE.light_text),
                wrap_width,
            );
            ui.add_space(5.0);
            if flat_button(
                ui,
                RichText::new(link_label).size(size::BODY),
                PROJECT_BUTTON,
                egui::Vec2::ZERO,
            )
            .on_hover_text(link_url)
                .clicked()
            {
                actions.push(UiAction::OpenLink(link_url.to_string()));
            }
        });
}

/// Draws every block of `panel` top to bottom.
pub fn render_panel(
    ui: &mut egui::Ui,
    panel: &Panel,
    textures: &mut TextureCache,
    actions: &mut Vec<UiAction>,
) {
    for block in &panel.blocks {
        match block {
            Block::Title(text) => {
                ui.add_space(4.0);
                ui.label(RichText::new(text).size(size::TITLE).strong());
            }
            Block::Subtitle(text) => {
                ui.add_space(8.0);
                ui.label(
                    RichText::new(text)
                        .size(size::SUBTITLE)
                        .color(PALETTE.primary),
                );
            }
            Block::Body(text) => {
                ui.label(RichText::new(text).size(size::BODY));
            }
            Block::Detail(text) => {
                ui.label(
                    RichText::new(text)
                        .size(size::BODY)
                        .color(PALETTE.light_text),
                );
                ui.add_space(4.0);
            }
            Block::Bullet { text, wrap_width } => {
                wrapped_label(ui, RichText::new(text).size(size::BODY), *wrap_width);
            }
            Block::Visuals(thumbnails) => visuals_region(ui, thumbnails, textures),
            Block::ProjectCard {
                title,
                description,
                wrap_width,
                link,
            } => {
                project_card(
                    ui,
                    title,
                    description,
                    *wrap_width,
                    &link.label,
                    &link.url,
                    actions,
                );
                ui.add_space(5.0);
            }
            Block::TagRows(rows) => {
                for row in rows {
                    ui.horizontal(|ui| {
                        ui.spacing_mut().item_spacing.x = 5.0;
                        for text in row {
                            tag(ui, text);
                        }
                    });
                }
                ui.add_space(10.0);
            }
            Block::TitleWithBadge { title, badge: metric } => {
                egui::Sides::new().show(
                    ui,
                    |ui| {
                        ui.add(
                            egui::Label::new(RichText::new(title).size(size::TITLE).strong())
                                .wrap(),
                        );
                    },
                    |ui| badge(ui, metric),
                );
                ui.add_space(5.0);
            }
        }
    }
}
