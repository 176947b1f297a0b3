use raylib::prelude::*;

/// Where a frame and its inner image sit, in viewport widths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameGeometry {
    pub offset: f32,        // Horizontal offset of the frame
    pub inner_offset: f32,  // Offset of the image inside its frame
    pub inner_scale: f32,   // Horizontal stretch of the image
    pub inner_origin: f32,  // Transform origin of the stretch, 0 = left edge, 1 = right edge
}

impl FrameGeometry {
    pub const RESTING: FrameGeometry = FrameGeometry {
        offset: 0.0,
        inner_offset: 0.0,
        inner_scale: 1.0,
        inner_origin: 0.5,
    };
}

/// Part of a texture that fills a viewport without distortion (object-fit: cover).
pub fn cover_source(tex_width: f32, tex_height: f32, view_width: f32, view_height: f32) -> Rectangle {
    let scale = (view_width / tex_width).max(view_height / tex_height);
    let width = view_width / scale;
    let height = view_height / scale;
    Rectangle::new((tex_width - width) * 0.5, (tex_height - height) * 0.5, width, height)
}

/// Source and destination rectangles for drawing `source` with `geometry`,
/// clipped to the frame and to the viewport. `None` when nothing is visible.
pub fn place(
    geometry: FrameGeometry,
    source: Rectangle,
    view_width: f32,
    view_height: f32,
) -> Option<(Rectangle, Rectangle)> {
    let frame_left = geometry.offset * view_width;
    let frame_right = frame_left + view_width;

    let inner_width = view_width * geometry.inner_scale;
    if inner_width <= 0.0 {
        return None;
    }
    let inner_left = frame_left
        + geometry.inner_offset * view_width
        + geometry.inner_origin * view_width * (1.0 - geometry.inner_scale);

    let left = inner_left.max(frame_left).max(0.0);
    let right = (inner_left + inner_width).min(frame_right).min(view_width);
    if right - left <= 0.0 {
        return None;
    }

    let u0 = (left - inner_left) / inner_width;
    let u1 = (right - inner_left) / inner_width;
    let src = Rectangle::new(
        source.x + u0 * source.width,
        source.y,
        (u1 - u0) * source.width,
        source.height,
    );
    let dst = Rectangle::new(left, 0.0, right - left, view_height);
    Some((src, dst))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn cover_crops_the_long_side() {
        let wide = cover_source(3840.0, 1080.0, 1920.0, 1080.0);
        assert!(close(wide.x, 960.0) && close(wide.width, 1920.0));
        assert!(close(wide.y, 0.0) && close(wide.height, 1080.0));

        let tall = cover_source(1000.0, 1000.0, 1920.0, 1080.0);
        assert!(close(tall.x, 0.0) && close(tall.width, 1000.0));
        assert!(close(tall.height, 562.5) && close(tall.y, 218.75));
    }

    #[test]
    fn resting_frame_fills_the_viewport() {
        let source = Rectangle::new(0.0, 0.0, 800.0, 450.0);
        let (src, dst) = place(FrameGeometry::RESTING, source, 1920.0, 1080.0).unwrap();
        assert!(close(src.x, 0.0) && close(src.width, 800.0));
        assert!(close(dst.x, 0.0) && close(dst.width, 1920.0) && close(dst.height, 1080.0));
    }

    #[test]
    fn half_offscreen_frame_is_clipped() {
        let source = Rectangle::new(0.0, 0.0, 800.0, 450.0);
        let geometry = FrameGeometry { offset: 0.5, ..FrameGeometry::RESTING };
        let (src, dst) = place(geometry, source, 1920.0, 1080.0).unwrap();
        assert!(close(dst.x, 960.0) && close(dst.width, 960.0));
        assert!(close(src.x, 0.0) && close(src.width, 400.0));
    }

    #[test]
    fn stretched_image_stays_inside_its_frame() {
        let source = Rectangle::new(0.0, 0.0, 800.0, 450.0);
        let geometry = FrameGeometry { inner_scale: 2.0, inner_origin: 1.0, ..FrameGeometry::RESTING };
        let (src, dst) = place(geometry, source, 1920.0, 1080.0).unwrap();
        assert!(close(dst.x, 0.0) && close(dst.width, 1920.0));
        assert!(close(src.x, 400.0) && close(src.width, 400.0));
    }

    #[test]
    fn offscreen_frame_draws_nothing() {
        let source = Rectangle::new(0.0, 0.0, 800.0, 450.0);
        for offset in [-1.0, 1.0] {
            let geometry = FrameGeometry { offset, ..FrameGeometry::RESTING };
            assert!(place(geometry, source, 1920.0, 1080.0).is_none());
        }
    }
}
