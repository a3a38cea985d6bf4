use std::collections::HashMap;
use std::path::{Path, PathBuf};

use eframe::egui;
use image::RgbaImage;
use thiserror::Error;

use crate::words::WordList;

/// Width of one animation frame in the sprite sheet.
pub const FRAME_WIDTH: u32 = 32;

const WORD_LIST: &str = "words.txt";
const WORD_ICON_DIR: &str = "words";

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum AssetType {
    SpriteSheet,
    Gem,
}

fn filename_from_asset_type(asset_type: AssetType) -> &'static str {
    match asset_type {
        AssetType::SpriteSheet => "unicorn-v2.png",
        AssetType::Gem => "gem.png",
    }
}

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("could not read '{path}'")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not decode image '{path}'")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("sprite sheet '{path}' is {width} pixels wide, at least one 32 pixel frame is required")]
    NoFrames { path: PathBuf, width: u32 },
    #[error("word list '{path}' contains no words")]
    EmptyWordList { path: PathBuf },
}

/// Read and decode an image file.
pub fn load_image(path: &Path) -> Result<RgbaImage, AssetError> {
    let image = image::ImageReader::open(path)
        .map_err(|source| AssetError::Read {
            path: path.to_path_buf(),
            source,
        })?
        .decode()
        .map_err(|source| AssetError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(image.to_rgba8())
}

/// Number of complete frames in a sprite sheet of the given width.
pub fn frame_count(width: u32) -> usize {
    (width / FRAME_WIDTH) as usize
}

/// Read the newline-delimited word list. An empty list is an error.
pub fn load_word_list(path: &Path) -> Result<WordList, AssetError> {
    let text = std::fs::read_to_string(path).map_err(|source| AssetError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    WordList::parse(&text).ok_or_else(|| AssetError::EmptyWordList {
        path: path.to_path_buf(),
    })
}

/// Load all `*.png` files in `dir`, keyed by their upper-cased file stem.
///
/// Icons are optional: a missing directory or a broken file is logged and skipped.
pub fn load_word_icons(dir: &Path) -> HashMap<String, RgbaImage> {
    let mut icons = HashMap::new();

    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            log::warn!("could not load word images from '{}': {err}", dir.display());
            return icons;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() || path.extension().is_none_or(|ext| ext != "png") {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
            continue;
        };
        match load_image(&path) {
            Ok(image) => {
                icons.insert(stem.to_uppercase(), image);
            }
            Err(err) => log::warn!("skipping word image: {err}"),
        }
    }

    log::info!("loaded {} word images", icons.len());
    icons
}

/// The sprite sheet texture, sliced into frames of equal width.
#[derive(Clone)]
pub struct SpriteSheet {
    texture: egui::TextureHandle,
    frame_count: usize,
}

impl SpriteSheet {
    pub fn texture(&self) -> &egui::TextureHandle {
        &self.texture
    }

    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// Size of a single frame in pixels.
    pub fn frame_size(&self) -> egui::Vec2 {
        egui::vec2(FRAME_WIDTH as f32, self.texture.size_vec2().y)
    }

    /// Texture coordinates of frame `index` (wrapping around).
    pub fn uv(&self, index: usize) -> egui::Rect {
        let sheet_width = self.texture.size_vec2().x;
        let index = index % self.frame_count;
        let left = (index as u32 * FRAME_WIDTH) as f32 / sheet_width;
        let right = ((index as u32 + 1) * FRAME_WIDTH) as f32 / sheet_width;
        egui::Rect::from_min_max(egui::pos2(left, 0.), egui::pos2(right, 1.))
    }
}

/// All textures used by the game.
#[derive(Clone)]
pub struct Assets {
    sprite_sheet: SpriteSheet,
    gem: egui::TextureHandle,
    word_icons: HashMap<String, egui::TextureHandle>,
}

impl Assets {
    /// Load all assets below `root` and upload them as textures.
    ///
    /// The sprite sheet and the gem image are required, word icons are not.
    pub fn load(root: &Path, context: &egui::Context) -> Result<Self, AssetError> {
        let sheet_path = root.join(filename_from_asset_type(AssetType::SpriteSheet));
        let sheet = load_image(&sheet_path)?;
        let frame_count = frame_count(sheet.width());
        if frame_count == 0 {
            return Err(AssetError::NoFrames {
                path: sheet_path,
                width: sheet.width(),
            });
        }
        let sprite_sheet = SpriteSheet {
            texture: upload(context, "sprite sheet", &sheet),
            frame_count,
        };

        let gem = load_image(&root.join(filename_from_asset_type(AssetType::Gem)))?;
        let gem = upload(context, "gem", &gem);

        let word_icons = load_word_icons(&root.join(WORD_ICON_DIR))
            .into_iter()
            .map(|(word, image)| {
                let texture = upload(context, &format!("word {word}"), &image);
                (word, texture)
            })
            .collect();

        Ok(Assets {
            sprite_sheet,
            gem,
            word_icons,
        })
    }

    pub fn sprite_sheet(&self) -> &SpriteSheet {
        &self.sprite_sheet
    }

    pub fn gem(&self) -> &egui::TextureHandle {
        &self.gem
    }

    /// The icon for `word`, if there is one.
    pub fn word_icon(&self, word: &str) -> Option<&egui::TextureHandle> {
        self.word_icons.get(word)
    }
}

/// Path of the word list below the asset root.
pub fn word_list_path(root: &Path) -> PathBuf {
    root.join(WORD_LIST)
}

fn upload(context: &egui::Context, name: &str, image: &RgbaImage) -> egui::TextureHandle {
    let size = [image.width() as _, image.height() as _];
    let pixels = image.as_flat_samples();
    let color_image = egui::ColorImage::from_rgba_unmultiplied(size, pixels.as_slice());
    context.load_texture(name, color_image, egui::TextureOptions::NEAREST)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icons;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("unicorn-toots-{name}-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn frames() {
        assert_eq!(frame_count(0), 0);
        assert_eq!(frame_count(31), 0);
        assert_eq!(frame_count(32), 1);
        assert_eq!(frame_count(130), 4);
    }

    #[test]
    fn word_list() {
        let dir = scratch_dir("words");
        let path = word_list_path(&dir);
        std::fs::write(&path, "cat\ndog\n\n").unwrap();
        let words = load_word_list(&path).unwrap();
        assert_eq!(words.iter().collect::<Vec<_>>(), vec!["CAT", "DOG"]);

        std::fs::write(&path, "\n\n").unwrap();
        assert!(matches!(load_word_list(&path), Err(AssetError::EmptyWordList { .. })));

        std::fs::remove_file(&path).unwrap();
        assert!(matches!(load_word_list(&path), Err(AssetError::Read { .. })));
    }

    #[test]
    fn broken_image() {
        let dir = scratch_dir("broken");
        let path = dir.join("gem.png");
        std::fs::write(&path, b"not a png").unwrap();
        assert!(matches!(load_image(&path), Err(AssetError::Decode { .. })));
        assert!(matches!(
            load_image(&dir.join("missing.png")),
            Err(AssetError::Read { .. })
        ));
    }

    #[test]
    fn word_icons_from_generated_images() {
        let dir = scratch_dir("icons");
        let written = icons::write_all(&dir).unwrap();
        std::fs::write(dir.join("notes.txt"), "ignored").unwrap();
        std::fs::write(dir.join("broken.png"), b"garbage").unwrap();

        let loaded = load_word_icons(&dir);
        assert_eq!(loaded.len(), written);
        assert_eq!(loaded["CAT"].dimensions(), (32, 32));
        assert!(!loaded.contains_key("BROKEN"));
    }

    fn write_image(path: &Path, width: u32, height: u32) {
        RgbaImage::from_pixel(width, height, image::Rgba([200, 100, 50, 255]))
            .save(path)
            .unwrap();
    }

    #[test]
    fn load_all_assets() {
        let dir = scratch_dir("all");
        write_image(&dir.join(filename_from_asset_type(AssetType::SpriteSheet)), 96, 32);
        write_image(&dir.join(filename_from_asset_type(AssetType::Gem)), 16, 16);
        icons::write_all(&dir.join(WORD_ICON_DIR)).unwrap();

        let context = egui::Context::default();
        let assets = Assets::load(&dir, &context).unwrap();
        assert_eq!(assets.sprite_sheet().frame_count(), 3);
        assert_eq!(assets.sprite_sheet().frame_size(), egui::vec2(32., 32.));
        assert_eq!(assets.gem().size(), [16, 16]);
        assert!(assets.word_icon("CAT").is_some());
        assert!(assets.word_icon("ZEBRA").is_none());
    }

    #[test]
    fn missing_gem_is_fatal() {
        let dir = scratch_dir("no-gem");
        write_image(&dir.join(filename_from_asset_type(AssetType::SpriteSheet)), 64, 32);

        let context = egui::Context::default();
        assert!(matches!(Assets::load(&dir, &context), Err(AssetError::Read { .. })));
    }

    #[test]
    fn narrow_sprite_sheet_is_fatal() {
        let dir = scratch_dir("narrow");
        write_image(&dir.join(filename_from_asset_type(AssetType::SpriteSheet)), 20, 32);
        write_image(&dir.join(filename_from_asset_type(AssetType::Gem)), 16, 16);

        let context = egui::Context::default();
        assert!(matches!(
            Assets::load(&dir, &context),
            Err(AssetError::NoFrames { width: 20, .. })
        ));
    }

    #[test]
    fn missing_icon_dir_is_not_fatal() {
        let dir = scratch_dir("no-icons");
        assert!(load_word_icons(&dir.join("nope")).is_empty());
    }
}
