//! Header logo loading.
//!
//! The logo is optional: callers treat any [`AssetError`] as "no logo" and
//! keep going.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Displayed logo edge length in points.
pub const LOGO_SIZE: f32 = 50.0;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("{} does not exist", .0.display())]
    NotFound(PathBuf),
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Decoded RGBA8 pixels ready to be uploaded as a texture.
#[derive(Clone, PartialEq, Eq)]
pub struct LogoImage {
    pub width: usize,
    pub height: usize,
    pub rgba: Vec<u8>,
}

impl std::fmt::Debug for LogoImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogoImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl LogoImage {
    pub fn size(&self) -> [usize; 2] {
        [self.width, self.height]
    }

    /// Converts into an egui image for texture upload.
    pub fn to_color_image(&self) -> egui::ColorImage {
        egui::ColorImage::from_rgba_unmultiplied(self.size(), &self.rgba)
    }
}

/// Reads and decodes the logo at `path`.
pub fn load_logo(path: impl AsRef<Path>) -> Result<LogoImage, AssetError> {
    let path = path.as_ref();

    let bytes = std::fs::read(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            AssetError::NotFound(path.to_path_buf())
        } else {
            AssetError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let decoded = image::load_from_memory(&bytes).map_err(|source| AssetError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let rgba8 = decoded.to_rgba8();
    let (w, h) = (rgba8.width() as usize, rgba8.height() as usize);

    Ok(LogoImage {
        width: w,
        height: h,
        rgba: rgba8.into_raw(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    #[test]
    fn test_missing_logo_is_not_found() {
        let path = env::temp_dir().join("s2w_definitely_missing_logo.png");
        let _ = fs::remove_file(&path);

        let err = load_logo(&path).unwrap_err();
        assert!(matches!(err, AssetError::NotFound(_)));
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_garbage_logo_fails_to_decode() {
        let path = env::temp_dir().join("s2w_garbage_logo.png");
        fs::write(&path, b"not a png at all").unwrap();

        let err = load_logo(&path).unwrap_err();
        assert!(matches!(err, AssetError::Decode { .. }));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_decodes_png() {
        let path = env::temp_dir().join("s2w_unit_logo.png");
        let img = image::RgbaImage::from_pixel(4, 3, image::Rgba([74, 144, 226, 255]));
        img.save(&path).unwrap();

        let logo = load_logo(&path).unwrap();
        assert_eq!(logo.size(), [4, 3]);
        assert_eq!(logo.rgba.len(), 4 * 3 * 4);
        assert_eq!(&logo.rgba[0..4], &[74, 144, 226, 255]);
        assert_eq!(logo.to_color_image().size, [4, 3]);

        let _ = fs::remove_file(&path);
    }
}
