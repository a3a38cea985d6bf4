//! Procedurally drawn 32×32 pixel-art icons, one per word of the default word list.
//!
//! The icons are written to disk by the `gen-word-images` tool and shown next to the word
//! while spelling it.

mod drawings;

use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};
use strum::IntoEnumIterator;
use thiserror::Error;

/// Width and height of every icon.
pub const ICON_SIZE: u32 = 32;

/// The drawable icons. The lowercase variant name is the word (and the file stem).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, strum::EnumIter, strum::IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum IconKind {
    Cat,
    Dog,
    Sun,
    Moon,
    Star,
    Fish,
    Tree,
    Frog,
    Bird,
    Cake,
    Hat,
    Run,
    Jump,
    Play,
    Rain,
    Snow,
    Leaf,
    Bear,
    Duck,
    Ship,
}

impl IconKind {
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Draw the icon.
    pub fn render(self) -> RgbaImage {
        let mut canvas = Canvas::new();
        drawings::draw(self, &mut canvas);
        canvas.into_image()
    }
}

/// A fully transparent icon-sized image with clipped drawing primitives.
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    pub fn new() -> Self {
        Canvas {
            image: RgbaImage::new(ICON_SIZE, ICON_SIZE),
        }
    }

    /// Overwrite a single pixel (including alpha). Pixels outside the canvas are ignored.
    pub fn set(&mut self, x: i32, y: i32, color: Rgba<u8>) {
        if (0..ICON_SIZE as i32).contains(&x) && (0..ICON_SIZE as i32).contains(&y) {
            self.image.put_pixel(x as u32, y as u32, color);
        }
    }

    /// Fill the rectangle with inclusive corners `(x0, y0)` and `(x1, y1)`.
    pub fn fill_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba<u8>) {
        for y in y0..=y1 {
            for x in x0..=x1 {
                self.set(x, y, color);
            }
        }
    }

    /// Fill all pixels with `dx² + dy² <= r²`.
    pub fn fill_circle(&mut self, cx: i32, cy: i32, r: i32, color: Rgba<u8>) {
        for y in cy - r..=cy + r {
            for x in cx - r..=cx + r {
                let (dx, dy) = (x - cx, y - cy);
                if dx * dx + dy * dy <= r * r {
                    self.set(x, y, color);
                }
            }
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.image.get_pixel(x, y)
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Error)]
pub enum IconError {
    #[error("could not create output directory '{path}'")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not write icon '{path}'")]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Render every icon and save it as `<dir>/<name>.png`, creating `dir` if necessary.
///
/// Return the number of files written.
pub fn write_all(dir: &Path) -> Result<usize, IconError> {
    std::fs::create_dir_all(dir).map_err(|source| IconError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut count = 0;
    for kind in IconKind::iter() {
        let path = dir.join(format!("{}.png", kind.name()));
        kind.render()
            .save(&path)
            .map_err(|source| IconError::Write {
                path: path.clone(),
                source,
            })?;
        log::info!("created {}", path.display());
        count += 1;
    }

    Ok(count)
}
