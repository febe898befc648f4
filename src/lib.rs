pub mod config;
pub mod theme;
pub mod tabs;
pub mod credentials;
pub mod assets;
pub mod help;

// Export configuration
pub use config::{AppConfig, WindowGeometry, ConfigError};

// Export brand theme
pub use theme::{BrandPalette, hex_to_color32, with_alpha};

// Export tab model
pub use tabs::Tab;

// Export credential data model
pub use credentials::{CredentialField, CredentialForm};

// Export asset loading
pub use assets::{load_logo, LogoImage, AssetError};

// Export static help content
pub use help::{HELP_TITLE, HELP_STEPS, help_text};
