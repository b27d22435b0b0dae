use egui::RichText;
use resume_model::{Resume, TabId};

use crate::{
    assets::AssetLoader,
    controller::{events::UiAction, links::LinkDispatcher, tabs::TabController},
    panels::{self, layout::centered_row_offsets, Panels, Thumbnail},
    ui::{
        textures::TextureCache,
        theme::{self, size, PALETTE, PRIMARY_BUTTON, SECONDARY_BUTTON},
        widgets,
    },
};

pub const PHOTO_SIZE: u32 = 100;
pub const INITIALS_BADGE_SIZE: f32 = 64.0;
pub const BIO_WRAP_WIDTH: f32 = 320.0;
const HEADER_BUTTON_GAP: f32 = 10.0;
const NAV_BUTTON_GAP: f32 = 4.0;

/// What the header card shows in the photo slot.
#[derive(Debug, Clone)]
pub enum HeaderPhoto {
    Photo(Thumbnail),
    Initials(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEmphasis {
    Primary,
    Secondary,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderButton {
    pub label: String,
    pub emphasis: ButtonEmphasis,
    pub action: UiAction,
}

pub struct ResumeApp {
    content: Resume,
    panels: Panels,
    tabs: TabController,
    links: LinkDispatcher,
    header_photo: HeaderPhoto,
    header_buttons: [HeaderButton; 2],
    textures: TextureCache,
    style_applied: bool,
}

impl ResumeApp {
    /// Resolves every asset and builds all four panels up front.
    pub fn new(content: Resume, mut loader: AssetLoader, links: LinkDispatcher) -> Self {
        let profile = content.profile();
        let header_photo = match loader.try_load_exact(&profile.photo_path, PHOTO_SIZE, PHOTO_SIZE)
        {
            Some(bitmap) => HeaderPhoto::Photo(Thumbnail {
                key: loader.key(&profile.photo_path, PHOTO_SIZE, PHOTO_SIZE),
                bitmap,
            }),
            None => {
                tracing::info!(
                    path = %profile.photo_path,
                    "profile photo unavailable; showing initials"
                );
                HeaderPhoto::Initials(profile.initials())
            }
        };
        let header_buttons = [
            HeaderButton {
                label: profile.primary_link.label.clone(),
                emphasis: ButtonEmphasis::Primary,
                action: UiAction::OpenLink(profile.primary_link.url.clone()),
            },
            HeaderButton {
                label: profile.secondary_link.label.clone(),
                emphasis: ButtonEmphasis::Secondary,
                action: UiAction::OpenLink(profile.secondary_link.url.clone()),
            },
        ];

        let panels = panels::build_all(&content, &mut loader);
        tracing::info!(
            assets_root = %loader.root().display(),
            cached_assets = loader.cached_len(),
            "built résumé panels"
        );

        Self {
            content,
            panels,
            tabs: TabController::new(),
            links,
            header_photo,
            header_buttons,
            textures: TextureCache::default(),
            style_applied: false,
        }
    }

    pub fn apply(&mut self, action: UiAction) {
        tracing::debug!(action = action.name(), "applying ui action");
        match action {
            UiAction::SelectTab(tab) => self.tabs.select_tab(tab),
            UiAction::OpenLink(url) => self.links.open_link(&url),
        }
    }

    pub fn tabs(&self) -> &TabController {
        &self.tabs
    }

    pub fn panels(&self) -> &Panels {
        &self.panels
    }

    pub fn header_photo(&self) -> &HeaderPhoto {
        &self.header_photo
    }

    pub fn header_buttons(&self) -> &[HeaderButton] {
        &self.header_buttons
    }

    /// Tab buttons in navigation order with their current active state.
    pub fn tab_buttons(&self) -> Vec<(TabId, String, bool)> {
        self.content
            .tabs()
            .iter()
            .map(|tab| {
                (
                    tab.id,
                    self.content.tab_label(tab.id).to_string(),
                    self.tabs.is_button_active(tab.id),
                )
            })
            .collect()
    }

    fn apply_style_if_needed(&mut self, ctx: &egui::Context) {
        if self.style_applied {
            return;
        }
        theme::apply(ctx);
        self.style_applied = true;
    }

    fn show_top_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_bar")
            .frame(
                egui::Frame::NONE
                    .fill(PALETTE.background)
                    .inner_margin(egui::Margin::symmetric(20, 10)),
            )
            .show_separator_line(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("Curriculum Vitae").size(size::TITLE).strong());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            RichText::new("⬇")
                                .size(size::TITLE)
                                .color(PALETTE.light_text),
                        );
                    });
                });
            });
    }

    fn show_header_card(&mut self, ui: &mut egui::Ui) {
        let profile = self.content.profile();
        egui::Frame::NONE
            .fill(PALETTE.card)
            .inner_margin(egui::Margin::symmetric(20, 15))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    match &self.header_photo {
                        HeaderPhoto::Photo(photo) => {
                            let texture =
                                self.textures
                                    .get_or_upload(ui.ctx(), &photo.key, &photo.bitmap);
                            ui.add(egui::Image::new(egui::load::SizedTexture::new(
                                texture.id(),
                                egui::vec2(PHOTO_SIZE as f32, PHOTO_SIZE as f32),
                            )));
                        }
                        HeaderPhoto::Initials(initials) => {
                            widgets::initials_badge(ui, initials, INITIALS_BADGE_SIZE);
                        }
                    }
                    ui.add_space(15.0);
                    ui.vertical(|ui| {
                        ui.label(RichText::new(&profile.name).size(size::HEADER).strong());
                        ui.label(
                            RichText::new(&profile.title)
                                .size(size::SUBTITLE)
                                .color(PALETTE.primary),
                        );
                        ui.add_space(5.0);
                        widgets::wrapped_label(
                            ui,
                            RichText::new(&profile.bio)
                                .size(size::BODY)
                                .color(PALETTE.light_text),
                            BIO_WRAP_WIDTH,
                        );
                    });
                });
            });
    }

    fn show_link_row(&self, ui: &mut egui::Ui, actions: &mut Vec<UiAction>) {
        let widths: Vec<f32> = self
            .header_buttons
            .iter()
            .map(|button| {
                widgets::button_width(
                    ui,
                    &button.label,
                    size::BUTTON,
                    button.emphasis == ButtonEmphasis::Primary,
                )
            })
            .collect();
        let offsets = centered_row_offsets(ui.available_width(), &widths, HEADER_BUTTON_GAP);

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = HEADER_BUTTON_GAP;
            if let Some(first) = offsets.first() {
                ui.add_space(*first);
            }
            for (button, width) in self.header_buttons.iter().zip(&widths) {
                let text = RichText::new(&button.label).size(size::BUTTON);
                let (text, colors) = match button.emphasis {
                    ButtonEmphasis::Primary => (text.strong(), PRIMARY_BUTTON),
                    ButtonEmphasis::Secondary => (text, SECONDARY_BUTTON),
                };
                if widgets::flat_button(ui, text, colors, egui::vec2(*width, 34.0)).clicked() {
                    actions.push(button.action.clone());
                }
            }
        });
    }

    fn show_tab_nav(&self, ui: &mut egui::Ui, actions: &mut Vec<UiAction>) {
        let buttons = self.tab_buttons();
        egui::Frame::NONE
            .fill(PALETTE.card)
            .inner_margin(egui::Margin::symmetric(20, 5))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                let count = buttons.len().max(1) as f32;
                let width =
                    (ui.available_width() - NAV_BUTTON_GAP * (count - 1.0)).max(0.0) / count;
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = NAV_BUTTON_GAP;
                    for (id, label, active) in &buttons {
                        if widgets::nav_button(ui, label, width, *active).clicked() {
                            actions.push(UiAction::SelectTab(*id));
                        }
                    }
                });
            });
    }

    fn show_content(&mut self, ui: &mut egui::Ui, actions: &mut Vec<UiAction>) {
        let Self {
            panels,
            tabs,
            textures,
            ..
        } = self;
        egui::Frame::NONE
            .fill(PALETTE.card)
            .inner_margin(egui::Margin::same(20))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                for (tab, panel) in panels.iter() {
                    if tabs.is_visible(*tab) {
                        widgets::render_panel(ui, panel, textures, actions);
                    }
                }
            });
    }
}

impl eframe::App for ResumeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_style_if_needed(ctx);
        let mut actions = Vec::new();

        self.show_top_bar(ctx);
        egui::CentralPanel::default()
            .frame(
                egui::Frame::NONE
                    .fill(PALETTE.background)
                    .inner_margin(egui::Margin::symmetric(20, 0)),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        self.show_header_card(ui);
                        ui.add_space(10.0);
                        self.show_link_row(ui, &mut actions);
                        ui.add_space(15.0);
                        self.show_tab_nav(ui, &mut actions);
                        ui.add_space(10.0);
                        self.show_content(ui, &mut actions);
                        ui.add_space(20.0);
                    });
            });

        for action in actions {
            self.apply(action);
        }
    }
}

#[cfg(test)]
#[path = "../tests/app_tests.rs"]
mod tests;
