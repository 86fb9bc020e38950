pub mod assets;
pub mod content_loader;
pub mod frontmatter;
pub mod markup;
pub mod settings;
pub mod story_export;

use std::path::PathBuf;

pub use content_loader::ContentLoader;

/// Failures while reading or exporting content. The loader logs and recovers
/// from all of them. Export failures surface as a status message.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("header block is missing its closing `---`")]
    UnterminatedHeader,

    #[error("header block is not a key/value mapping")]
    HeaderNotAMapping,

    #[error("invalid header block: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
