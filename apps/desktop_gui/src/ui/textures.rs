//! GPU-side cache for decoded bitmaps, keyed like the asset cache.

use std::collections::HashMap;

use egui::TextureHandle;

use crate::assets::{AssetKey, Bitmap};

#[derive(Default)]
pub struct TextureCache {
    textures: HashMap<AssetKey, TextureHandle>,
}

impl TextureCache {
    /// Uploads `bitmap` on first use; later frames reuse the handle.
    pub fn get_or_upload(
        &mut self,
        ctx: &egui::Context,
        key: &AssetKey,
        bitmap: &Bitmap,
    ) -> TextureHandle {
        self.textures
            .entry(key.clone())
            .or_insert_with(|| {
                let image = egui::ColorImage::from_rgba_unmultiplied(bitmap.size(), &bitmap.rgba);
                ctx.load_texture(key.texture_name(), image, egui::TextureOptions::LINEAR)
            })
            .clone()
    }
}
