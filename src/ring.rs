use crate::state::Direction;

/// The source slides extended with one duplicate frame at each end, so every
/// step animates between two neighbours and the ends can be snapped silently.
///
/// `frames[0]` is a copy of the last slide and `frames[n + 1]` a copy of the
/// first; `1..=n` hold the slides in their original order.
#[derive(Debug, Clone)]
pub struct SlideRing<T> {
    frames: Vec<T>,
}

impl<T: Clone> SlideRing<T> {
    pub fn new(slides: &[T]) -> Self {
        let (Some(first), Some(last)) = (slides.first(), slides.last()) else {
            return Self { frames: Vec::new() };
        };

        let mut frames = Vec::with_capacity(slides.len() + 2);
        frames.push(last.clone());
        frames.extend_from_slice(slides);
        frames.push(first.clone());
        Self { frames }
    }
}

impl<T> SlideRing<T> {
    /// Number of source slides (N).
    pub fn real_len(&self) -> usize {
        self.frames.len().saturating_sub(2)
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.frames.iter()
    }

    /// Resting index reached from `index` by one step in `direction`.
    pub fn step(&self, index: usize, direction: Direction) -> usize {
        let last_real = self.real_len() as i64;
        let candidate = index as i64 + direction.sign() as i64;
        if candidate < 1 {
            last_real.max(1) as usize
        } else if candidate > last_real {
            1
        } else {
            candidate as usize
        }
    }

    /// Zero-based position in the source slides shown by ring frame `index`.
    pub fn real_index(&self, index: usize) -> Option<usize> {
        let n = self.real_len();
        if n == 0 || index >= self.frames.len() {
            return None;
        }
        Some(match index {
            0 => n - 1,
            i if i == n + 1 => 0,
            i => i - 1,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_boundary_slides() {
        let ring = SlideRing::new(&["A", "B", "C"]);
        let frames: Vec<_> = ring.iter().copied().collect();
        assert_eq!(frames, vec!["C", "A", "B", "C", "A"]);
        assert_eq!(ring.real_len(), 3);
    }

    #[test]
    fn step_wraps_at_both_ends() {
        let ring = SlideRing::new(&["A", "B", "C"]);
        assert_eq!(ring.step(1, Direction::Forward), 2);
        assert_eq!(ring.step(3, Direction::Forward), 1);
        assert_eq!(ring.step(1, Direction::Backward), 3);
        assert_eq!(ring.step(2, Direction::Backward), 1);
    }

    #[test]
    fn real_index_maps_duplicates_to_their_source() {
        let ring = SlideRing::new(&["A", "B", "C"]);
        assert_eq!(ring.real_index(0), Some(2));
        assert_eq!(ring.real_index(1), Some(0));
        assert_eq!(ring.real_index(3), Some(2));
        assert_eq!(ring.real_index(4), Some(0));
        assert_eq!(ring.real_index(5), None);
    }

    #[test]
    fn degenerate_rings() {
        let empty: SlideRing<&str> = SlideRing::new(&[]);
        assert_eq!(empty.len(), 0);
        assert_eq!(empty.real_len(), 0);
        assert_eq!(empty.real_index(0), None);

        let single = SlideRing::new(&["A"]);
        assert_eq!(single.len(), 3);
        assert_eq!(single.step(1, Direction::Forward), 1);
        assert_eq!(single.step(1, Direction::Backward), 1);
    }
}
