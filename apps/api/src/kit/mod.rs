// Kit export: rendering the design into static files and zipping them.

pub mod package;
pub mod renderer;
pub mod templates;

pub use package::{package, KitError, ARCHIVE_NAME};
pub use renderer::{render, KitArtifact, KitTheme};
