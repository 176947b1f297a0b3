use std::fmt;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use raylib::prelude::*;
use crate::constants::*;
use crate::layout::{FrameGeometry, cover_source, place};

/// Where a slide's image comes from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ImageSource {
    Local(PathBuf),
    Remote(String),
}

impl ImageSource {
    /// Lowercase file extension, used as the decoder hint. Query strings and
    /// fragments of remote URLs are ignored.
    pub fn extension(&self) -> String {
        let path = match self {
            ImageSource::Local(path) => path.clone(),
            ImageSource::Remote(url) => match reqwest::Url::parse(url) {
                Ok(parsed) => PathBuf::from(parsed.path()),
                Err(_) => PathBuf::from(url),
            },
        };
        Path::new(&path)
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_lowercase()
    }
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageSource::Local(path) => write!(f, "{}", path.display()),
            ImageSource::Remote(url) => f.write_str(url),
        }
    }
}

/// One source slide, as supplied by the manifest or the image directory.
#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    pub id: String,
    pub image: ImageSource,
    pub url: Option<String>,
}

/// A frame of the ring on screen. Duplicate frames share their texture.
pub struct SlideFrame {
    image: Rc<Texture2D>,
    caption: Option<String>,

    pub active: bool,
    pub geometry: FrameGeometry,
}

impl SlideFrame {
    pub fn new(image: Rc<Texture2D>, caption: Option<String>) -> Self {
        Self {
            image,
            caption,
            active: false,
            geometry: FrameGeometry::RESTING,
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        if !self.active {
            return;
        }

        let screen_width = RENDER_WIDTH as f32;
        let screen_height = RENDER_HEIGHT as f32;

        let source = cover_source(
            self.image.width() as f32,
            self.image.height() as f32,
            screen_width,
            screen_height,
        );

        if let Some((source_rec, dest_rec)) = place(self.geometry, source, screen_width, screen_height) {
            d.draw_texture_pro(
                &*self.image,
                source_rec,
                dest_rec,
                Vector2::new(0.0, 0.0),
                0.0,
                Color::WHITE,
            );
        }

        // The caption travels with the frame, not with the stretched image
        if let Some(caption) = &self.caption {
            let x = self.geometry.offset * screen_width + 64.0;
            if x < screen_width && x > -screen_width {
                d.draw_text(
                    caption,
                    x as i32,
                    RENDER_HEIGHT - 64 - CAPTION_FONT_SIZE,
                    CAPTION_FONT_SIZE,
                    Color::WHITE,
                );
            }
        }
    }
}
