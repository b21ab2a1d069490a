//! Lazily decoded image assets (background photo and result images).

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::prediction::ResultImage;
use eframe::egui::{self, ColorImage, TextureHandle, TextureOptions};

const BACKGROUND_FILE_NAME: &str = "Air_pollution_2.jpg";
const FORM_BACKGROUND_FILE_NAME: &str = "Air_pollution_3.jpg";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(super) enum AssetKind {
    /// Behind the whole window.
    Background,
    /// Behind the form card only.
    FormBackground,
    Result(ResultImage),
}

impl AssetKind {
    fn file_name(self) -> &'static str {
        match self {
            Self::Background => BACKGROUND_FILE_NAME,
            Self::FormBackground => FORM_BACKGROUND_FILE_NAME,
            Self::Result(image) => image.file_name(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub(super) enum AssetError {
    #[error("Failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
}

/// Texture cache keyed by asset; failed loads are remembered so they are
/// attempted once per run.
pub(super) struct AssetTextures {
    dir: PathBuf,
    textures: HashMap<AssetKind, Option<TextureHandle>>,
}

impl AssetTextures {
    pub(super) fn new(dir: PathBuf) -> Self {
        Self {
            dir,
            textures: HashMap::new(),
        }
    }

    pub(super) fn texture(&mut self, ctx: &egui::Context, kind: AssetKind) -> Option<TextureHandle> {
        let dir = &self.dir;
        self.textures
            .entry(kind)
            .or_insert_with(|| {
                let path = dir.join(kind.file_name());
                match load_color_image(&path) {
                    Ok(image) => Some(ctx.load_texture(
                        format!("asset:{}", kind.file_name()),
                        image,
                        TextureOptions::LINEAR,
                    )),
                    Err(err) => {
                        tracing::warn!("Image asset unavailable: {err}");
                        None
                    }
                }
            })
            .clone()
    }
}

/// Decode an image file into an egui color image.
pub(super) fn load_color_image(path: &Path) -> Result<ColorImage, AssetError> {
    let image = image::open(path)
        .map_err(|source| AssetError::Decode {
            path: path.to_path_buf(),
            source,
        })?
        .to_rgba8();
    let size = [image.width() as usize, image.height() as usize];
    Ok(ColorImage::from_rgba_unmultiplied(size, image.as_raw()))
}
