use std::collections::HashMap;
use std::rc::Rc;
use raylib::prelude::*;
use tracing::{info, warn};
use crate::carousel::Carousel;
use crate::config::ShowConfig;
use crate::constants::*;
use crate::controls::Controls;
use crate::deck::Deck;
use crate::error::{CarouselError, Result};
use crate::gesture::PointerInput;
use crate::ring::SlideRing;
use crate::slide::{ImageSource, Slide, SlideFrame};
use crate::state::Direction;
use crate::texture_loader::{ImageFetcher, load_texture_with_exif_rotation};

pub trait Engine {
    /// Uploads the slides to the GPU. Returns how many could be loaded.
    fn initialize(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread, slides: Vec<Slide>) -> Result<usize>;
    /// Updates and draws one frame into `framebuffer`. False when there is nothing to draw.
    fn render_frame(&mut self, dt: f32, rl: &mut RaylibHandle, thread: &RaylibThread, framebuffer: &mut RenderTexture2D) -> bool;
}

pub struct CarouselEngine {
    autoplay_ms: i64,
    transition_secs: f32,
    carousel: Option<Carousel<Deck>>,
}

impl CarouselEngine {
    pub fn new(config: &ShowConfig) -> Self {
        Self {
            autoplay_ms: config.autoplay_ms,
            transition_secs: config.transition_secs,
            carousel: None,
        }
    }

    /// Tears the carousel down: autoplay and gesture capture stop, an
    /// in-flight transition is abandoned.
    pub fn unmount(&mut self) {
        if let Some(mut carousel) = self.carousel.take() {
            carousel.unmount();
            info!("carousel unmounted");
        }
    }
}

impl Drop for CarouselEngine {
    fn drop(&mut self) {
        self.unmount();
    }
}

fn draw_loading(rl: &mut RaylibHandle, thread: &RaylibThread, loaded: usize, total: usize) {
    let mut d = rl.begin_drawing(thread);
    d.clear_background(Color::BLACK);

    let sw = d.get_screen_width() as f32;
    let sh = d.get_screen_height() as f32;
    let bar_width = sw * 0.4;
    let progress = if total == 0 { 1.0 } else { loaded as f32 / total as f32 };

    d.draw_rectangle_lines_ex(
        Rectangle::new((sw - bar_width) * 0.5, sh * 0.5 - 4.0, bar_width, 8.0),
        1.0,
        Color::GRAY,
    );
    d.draw_rectangle_rec(
        Rectangle::new((sw - bar_width) * 0.5, sh * 0.5 - 4.0, bar_width * progress, 8.0),
        Color::WHITE,
    );
}

/// Samples mouse, wheel and keys, in render coordinates.
fn read_input(rl: &RaylibHandle) -> PointerInput {
    let scale_x = RENDER_WIDTH as f32 / rl.get_screen_width().max(1) as f32;
    let scale_y = RENDER_HEIGHT as f32 / rl.get_screen_height().max(1) as f32;

    let position = rl.is_cursor_on_screen().then(|| {
        let mouse = rl.get_mouse_position();
        (mouse.x * scale_x, mouse.y * scale_y)
    });

    let key = if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) || rl.is_key_pressed(KeyboardKey::KEY_DOWN) {
        Some(Direction::Forward)
    } else if rl.is_key_pressed(KeyboardKey::KEY_LEFT) || rl.is_key_pressed(KeyboardKey::KEY_UP) {
        Some(Direction::Backward)
    } else {
        None
    };

    PointerInput {
        position,
        pressed: rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT),
        down: rl.is_mouse_button_down(MouseButton::MOUSE_BUTTON_LEFT),
        released: rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT),
        wheel: rl.get_mouse_wheel_move(),
        key,
    }
}

impl Engine for CarouselEngine {
    fn initialize(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread, slides: Vec<Slide>) -> Result<usize> {
        // Load each image once; duplicate ring frames share the texture
        let fetcher = ImageFetcher::new()?;
        let mut textures: HashMap<ImageSource, Rc<Texture2D>> = HashMap::new();
        let mut loaded: Vec<(Rc<Texture2D>, Option<String>)> = Vec::new();

        let total = slides.len();
        for (i, slide) in slides.into_iter().enumerate() {
            draw_loading(rl, thread, i, total);

            let texture = match textures.get(&slide.image) {
                Some(texture) => Rc::clone(texture),
                None => match load_texture_with_exif_rotation(rl, thread, &slide.image, &fetcher) {
                    Ok(texture) => {
                        let texture = Rc::new(texture);
                        textures.insert(slide.image.clone(), Rc::clone(&texture));
                        texture
                    }
                    Err(e) => {
                        warn!(id = %slide.id, "skipping slide: {}", e);
                        continue;
                    }
                },
            };
            loaded.push((texture, slide.url));
        }
        draw_loading(rl, thread, total, total);

        if loaded.is_empty() {
            return Err(CarouselError::NothingLoaded(total));
        }

        let count = loaded.len();
        let ring = SlideRing::new(&loaded);
        let frames = ring
            .iter()
            .map(|(texture, url)| Some(SlideFrame::new(Rc::clone(texture), url.clone())))
            .collect();

        info!(slides = count, frames = ring.len(), "carousel mounted");
        let deck = Deck::new(frames, self.transition_secs);

        let controls = Controls::new(RENDER_WIDTH as f32, RENDER_HEIGHT as f32);
        self.carousel = Some(Carousel::new(count, self.autoplay_ms, controls, deck));
        Ok(count)
    }

    fn render_frame(&mut self, dt: f32, rl: &mut RaylibHandle, thread: &RaylibThread, framebuffer: &mut RenderTexture2D) -> bool {
        let Some(carousel) = self.carousel.as_mut() else {
            return false;
        };

        let input = read_input(rl);
        carousel.update(dt, &input);

        let carousel = &*carousel;
        rl.draw_texture_mode(thread, framebuffer, |mut tmd| {
            let mut d = tmd.begin_drawing(thread);
            d.clear_background(Color::BLACK);

            carousel.animator().draw(&mut d);
            carousel.controls().draw(&mut d, carousel.hovered_control());
        });

        true
    }
}
