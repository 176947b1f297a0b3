use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CarouselError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid manifest {}: {source}", path.display())]
    Manifest {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("duplicate slide id `{0}`")]
    DuplicateId(String),

    #[error("failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("no slides found in {}", .0.display())]
    NoSlides(PathBuf),

    #[error("none of the {0} slides could be loaded")]
    NothingLoaded(usize),

    #[error("failed to decode image {image}: {reason}")]
    Decode { image: String, reason: String },

    #[error("failed to create texture for {image}: {reason}")]
    Texture { image: String, reason: String },
}

pub type Result<T> = std::result::Result<T, CarouselError>;
