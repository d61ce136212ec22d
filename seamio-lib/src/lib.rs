pub mod catalog;
pub mod error;
pub mod manifest;
pub mod matfile;
pub mod types;

pub use error::{Result, SeamioError};
pub use manifest::{InputRole, ManifestPaths, resolve_manifest, resolve_manifest_str};
pub use matfile::{MaterialSet, parse_mat_file, parse_mat_str};
pub use seamio_data;
pub use seamio_data::MaterialRecord;
