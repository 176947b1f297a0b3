use std::collections::HashSet;
use std::path::{Path, PathBuf};
use serde::Deserialize;
use crate::constants::{DEFAULT_AUTOPLAY_MS, TRANSITION_DURATION};
use crate::error::{CarouselError, Result};
use crate::slide::{ImageSource, Slide};
use crate::texture_loader::load_sorted_image_paths;

/// A slide entry as written in the manifest.
#[derive(Debug, Clone, Deserialize)]
pub struct SlideEntry {
    pub id: String,
    pub image: String,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default = "default_autoplay_ms")]
    autoplay_ms: i64,
    #[serde(default = "default_transition_secs")]
    transition_secs: f32,
    #[serde(default)]
    slides: Vec<SlideEntry>,
}

fn default_autoplay_ms() -> i64 {
    DEFAULT_AUTOPLAY_MS
}

fn default_transition_secs() -> f32 {
    TRANSITION_DURATION
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShowConfig {
    /// Zero or less disables autoplay
    pub autoplay_ms: i64,
    pub transition_secs: f32,
    pub slides: Vec<Slide>,
}

impl ShowConfig {
    /// Loads a `.toml` manifest, or scans `source` for images when it is a directory.
    pub fn load(source: &Path) -> Result<Self> {
        if source.is_dir() {
            return Self::from_directory(source);
        }

        let content = std::fs::read_to_string(source)
            .map_err(|e| CarouselError::Io { path: source.to_path_buf(), source: e })?;
        let base = source.parent().unwrap_or_else(|| Path::new("."));
        Self::from_manifest(&content, base)
            .map_err(|e| match e {
                CarouselError::NoSlides(_) => CarouselError::NoSlides(source.to_path_buf()),
                CarouselError::Manifest { source: e, .. } => {
                    CarouselError::Manifest { path: source.to_path_buf(), source: e }
                }
                other => other,
            })
    }

    pub fn from_directory(dir: &Path) -> Result<Self> {
        let slides = load_sorted_image_paths(dir)?
            .into_iter()
            .map(|image| Slide {
                id: image
                    .file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned())
                    .unwrap_or_default(),
                image: ImageSource::Local(image),
                url: None,
            })
            .collect();
        Ok(Self {
            autoplay_ms: DEFAULT_AUTOPLAY_MS,
            transition_secs: TRANSITION_DURATION,
            slides,
        })
    }

    /// Parses manifest text; relative image paths resolve against `base`.
    pub fn from_manifest(content: &str, base: &Path) -> Result<Self> {
        let manifest: Manifest = toml::from_str(content)
            .map_err(|source| CarouselError::Manifest { path: base.to_path_buf(), source })?;

        let mut seen = HashSet::new();
        let mut slides = Vec::with_capacity(manifest.slides.len());
        for entry in manifest.slides {
            if !seen.insert(entry.id.clone()) {
                return Err(CarouselError::DuplicateId(entry.id));
            }
            slides.push(Slide {
                image: resolve_image(&entry.image, base),
                id: entry.id,
                url: entry.url,
            });
        }

        if slides.is_empty() {
            return Err(CarouselError::NoSlides(base.to_path_buf()));
        }

        Ok(Self {
            autoplay_ms: manifest.autoplay_ms,
            transition_secs: manifest.transition_secs.max(0.0),
            slides,
        })
    }
}

/// Classifies an image reference. `http(s)://` URLs are fetched at load time,
/// `file://` URLs and plain paths are read from disk.
pub fn resolve_image(reference: &str, base: &Path) -> ImageSource {
    if reference.starts_with("http://") || reference.starts_with("https://") {
        return ImageSource::Remote(reference.to_string());
    }
    let path = Path::new(reference.strip_prefix("file://").unwrap_or(reference));
    if path.is_absolute() {
        ImageSource::Local(path.to_path_buf())
    } else {
        ImageSource::Local(base.join(path))
    }
}
