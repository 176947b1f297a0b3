use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::time::Duration;
use raylib::prelude::*;
use exif::{Reader, Tag, Value, In};
use tracing::{debug, info, warn};
use crate::error::{CarouselError, Result};
use crate::slide::ImageSource;

const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Downloads remote slide images.
pub struct ImageFetcher {
    http_client: reqwest::blocking::Client,
}

impl ImageFetcher {
    pub fn new() -> Result<Self> {
        let http_client = reqwest::blocking::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()?;
        Ok(Self { http_client })
    }

    pub fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let fetch_error = |e: reqwest::Error| CarouselError::Fetch { url: url.to_string(), reason: e.to_string() };

        let response = self.http_client
            .get(url)
            .send()
            .and_then(|response| response.error_for_status())
            .map_err(fetch_error)?;
        let bytes = response.bytes().map_err(fetch_error)?;
        info!(url, bytes = bytes.len(), "fetched remote image");
        Ok(bytes.to_vec())
    }
}

/// Raw bytes of a slide image, from disk or over HTTP.
pub fn read_image_bytes(source: &ImageSource, fetcher: &ImageFetcher) -> Result<Vec<u8>> {
    match source {
        ImageSource::Local(path) => fs::read(path)
            .map_err(|e| CarouselError::Io { path: path.clone(), source: e }),
        ImageSource::Remote(url) => fetcher.fetch(url),
    }
}

pub fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
}

// --- Helper: Load and Sort Image Paths ---
pub fn load_sorted_image_paths(dir_path: &Path) -> Result<Vec<PathBuf>> {
    let io_error = |source| CarouselError::Io { path: dir_path.to_path_buf(), source };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir_path).map_err(io_error)? {
        let path = entry.map_err(io_error)?.path();
        if path.is_file() && is_image(&path) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    if paths.is_empty() {
        Err(CarouselError::NoSlides(dir_path.to_path_buf()))
    } else {
        Ok(paths)
    }
}

/// EXIF orientation of a JPEG, 1 (upright) when absent or unreadable.
fn exif_orientation(source: &ImageSource, file_bytes: &[u8]) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(file_bytes)) {
        Ok(exif) => match exif.get_field(Tag::Orientation, In::PRIMARY).map(|field| &field.value) {
            Some(Value::Short(values)) if !values.is_empty() => values[0],
            _ => 1,
        },
        Err(e) => {
            warn!(image = %source, "could not read EXIF data: {}", e);
            1
        }
    }
}

// --- Load Image, Apply EXIF Rotation, Create Texture ---
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    source: &ImageSource,
    fetcher: &ImageFetcher,
) -> Result<Texture2D> {
    let file_bytes = read_image_bytes(source, fetcher)?;

    let extension = source.extension();
    let orientation = if extension == "jpg" || extension == "jpeg" {
        exif_orientation(source, &file_bytes)
    } else {
        1
    };

    let mut image = Image::load_image_from_mem(&(".".to_string() + &extension), &file_bytes)
        .map_err(|e| CarouselError::Decode { image: source.to_string(), reason: e.to_string() })?;

    // 3 = 180 deg, 6 = 90 deg clockwise, 8 = 90 deg counter-clockwise. Flips are ignored.
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }
    if orientation != 1 {
        debug!(image = %source, orientation, "applied EXIF rotation");
    }

    let texture = rl.load_texture_from_image(thread, &image)
        .map_err(|e| CarouselError::Texture { image: source.to_string(), reason: e.to_string() })?;

    // Unload the CPU copy now the texture lives on the GPU
    drop(image);

    Ok(texture)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("carousel-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn lists_images_sorted_by_name() {
        let dir = scratch_dir("sorted");
        for name in ["b.JPG", "a.png", "notes.txt", "c.gif"] {
            fs::write(dir.join(name), b"").unwrap();
        }
        fs::create_dir(dir.join("d.png")).unwrap();

        let names: Vec<_> = load_sorted_image_paths(&dir)
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.png", "b.JPG", "c.gif"]);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn directory_without_images_is_an_error() {
        let dir = scratch_dir("empty");
        fs::write(dir.join("readme.md"), b"").unwrap();
        assert!(matches!(load_sorted_image_paths(&dir), Err(CarouselError::NoSlides(_))));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn reads_local_image_bytes() {
        let dir = scratch_dir("bytes");
        let path = dir.join("banner.png");
        fs::write(&path, b"not really a png").unwrap();

        let fetcher = ImageFetcher::new().unwrap();
        let bytes = read_image_bytes(&ImageSource::Local(path), &fetcher).unwrap();
        assert_eq!(bytes, b"not really a png");

        let missing = read_image_bytes(&ImageSource::Local(dir.join("gone.png")), &fetcher);
        assert!(matches!(missing, Err(CarouselError::Io { .. })));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn unreachable_remote_image_is_a_fetch_error() {
        // Nothing listens on the discard port of the loopback interface
        let url = "http://127.0.0.1:9/kashi-banner1.png";
        let fetcher = ImageFetcher::new().unwrap();
        match read_image_bytes(&ImageSource::Remote(url.into()), &fetcher) {
            Err(CarouselError::Fetch { url: failed, .. }) => assert_eq!(failed, url),
            other => panic!("expected a fetch error, got {other:?}"),
        }
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let dir = std::env::temp_dir().join("carousel-does-not-exist-at-all");
        assert!(matches!(load_sorted_image_paths(&dir), Err(CarouselError::Io { .. })));
    }
}
