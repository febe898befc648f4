//! Header logo state.
//!
//! Loading is best-effort: a failure is logged and the header is drawn
//! without a logo.

use s2w::assets::load_logo;
use std::path::Path;

#[derive(Default)]
pub struct LogoState {
    texture: Option<egui::TextureHandle>,
}

impl std::fmt::Debug for LogoState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogoState")
            .field("loaded", &self.texture.is_some())
            .finish()
    }
}

impl LogoState {
    /// State with no logo.
    pub fn none() -> Self {
        Self::default()
    }

    /// Loads the logo at `path` and uploads it as a texture.
    pub fn load(ctx: &egui::Context, path: &Path) -> Self {
        match load_logo(path) {
            Ok(logo) => {
                tracing::debug!("Loaded logo {} ({}x{})", path.display(), logo.width, logo.height);
                let texture = ctx.load_texture("logo", logo.to_color_image(), egui::TextureOptions::LINEAR);
                Self { texture: Some(texture) }
            }
            Err(e) => {
                tracing::warn!("Logo not found: {}", e);
                Self::none()
            }
        }
    }

    pub fn texture(&self) -> Option<&egui::TextureHandle> {
        self.texture.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    #[test]
    fn test_missing_logo_falls_back() {
        let ctx = egui::Context::default();
        let path = env::temp_dir().join("s2w_logo_state_missing.png");
        let _ = fs::remove_file(&path);

        let logo = LogoState::load(&ctx, &path);
        assert!(logo.texture().is_none());
    }

    #[test]
    fn test_loads_existing_logo() {
        let ctx = egui::Context::default();
        let path = env::temp_dir().join("s2w_logo_state_present.png");
        image::RgbaImage::from_pixel(2, 2, image::Rgba([94, 208, 189, 255]))
            .save(&path)
            .unwrap();

        let logo = LogoState::load(&ctx, &path);
        assert_eq!(logo.texture().map(|t| t.size()), Some([2, 2]));

        let _ = fs::remove_file(&path);
    }
}
