//! Local image resolution: decode, force-resize and memoize bitmaps.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::Arc,
};

use image::{imageops::FilterType, Rgba, RgbaImage};

/// Light gray, matching the placeholder tint of the empty visuals slots.
pub const PLACEHOLDER_RGBA: [u8; 4] = [211, 211, 211, 255];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitmapSource {
    Decoded,
    Placeholder,
}

#[derive(Debug, Clone)]
pub struct Bitmap {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
    pub source: BitmapSource,
}

impl Bitmap {
    fn from_rgba(image: RgbaImage, source: BitmapSource) -> Self {
        Self {
            width: image.width(),
            height: image.height(),
            rgba: image.into_raw(),
            source,
        }
    }

    pub fn placeholder(width: u32, height: u32) -> Self {
        Self::from_rgba(
            RgbaImage::from_pixel(width, height, Rgba(PLACEHOLDER_RGBA)),
            BitmapSource::Placeholder,
        )
    }

    pub fn is_placeholder(&self) -> bool {
        self.source == BitmapSource::Placeholder
    }

    pub fn size(&self) -> [usize; 2] {
        [self.width as usize, self.height as usize]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetKey {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

impl AssetKey {
    /// Stable texture name for the GPU-side cache.
    pub fn texture_name(&self) -> String {
        format!(
            "asset:{}@{}x{}",
            self.path.display(),
            self.width,
            self.height
        )
    }
}

/// Resolves image paths against `root` and keeps every result for the
/// lifetime of the process.
#[derive(Debug)]
pub struct AssetLoader {
    root: PathBuf,
    cache: HashMap<AssetKey, Arc<Bitmap>>,
}

impl AssetLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            cache: HashMap::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn key(&self, path: &str, width: u32, height: u32) -> AssetKey {
        AssetKey {
            path: self.root.join(path),
            width,
            height,
        }
    }

    /// Always yields a `width × height` bitmap; missing or undecodable files
    /// become a placeholder.
    pub fn load_image(&mut self, path: &str, width: u32, height: u32) -> Arc<Bitmap> {
        let key = self.key(path, width, height);
        if let Some(cached) = self.cache.get(&key) {
            return Arc::clone(cached);
        }

        let bitmap = Arc::new(
            decode_resized(&key).unwrap_or_else(|| Bitmap::placeholder(width, height)),
        );
        self.cache.insert(key, Arc::clone(&bitmap));
        bitmap
    }

    /// Like [`AssetLoader::load_image`] but reports failure as `None` so the
    /// caller can pick its own fallback.
    pub fn try_load_exact(&mut self, path: &str, width: u32, height: u32) -> Option<Arc<Bitmap>> {
        Some(self.load_image(path, width, height)).filter(|bitmap| !bitmap.is_placeholder())
    }

    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }
}

fn decode_resized(key: &AssetKey) -> Option<Bitmap> {
    if !key.path.exists() {
        tracing::warn!(path = %key.path.display(), "image not found; using placeholder");
        return None;
    }

    match image::open(&key.path) {
        Ok(decoded) => {
            let resized = decoded
                .resize_exact(key.width, key.height, FilterType::Lanczos3)
                .to_rgba8();
            tracing::debug!(
                path = %key.path.display(),
                width = key.width,
                height = key.height,
                "decoded image"
            );
            Some(Bitmap::from_rgba(resized, BitmapSource::Decoded))
        }
        Err(err) => {
            tracing::warn!(path = %key.path.display(), error = %err, "failed to decode image");
            None
        }
    }
}
