//! Blocked-capture detection on raw frames.
//!
//! Both driver apps flag their offer screens against screen recording; a
//! blocked capture comes through as an all-black frame. Sampling a sparse
//! pixel grid is enough to catch that and skip the OCR round entirely.

/// Every RGB channel must be below this for a pixel to count as black.
pub const BLACK_CHANNEL_CEILING: u8 = 10;

/// Darkness ratio above which a frame is considered blocked.
pub const BLOCKED_RATIO: f64 = 0.95;

/// Sample every Nth pixel on each axis.
const SAMPLE_STEP: usize = 10;

/// A captured RGBA8 frame.
#[derive(Debug, Clone)]
pub struct Frame {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl Frame {
    /// Wrap an RGBA8 buffer. Trailing bytes beyond `width * height * 4`
    /// are ignored; a short buffer just yields fewer samples.
    pub fn rgba(width: usize, height: usize, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Fraction of sampled pixels that are near-black.
    ///
    /// Returns 0.0 for an empty frame so that a degenerate capture is
    /// treated as "not blocked" and falls through to the text path, which
    /// rejects it anyway.
    pub fn darkness_ratio(&self) -> f64 {
        let mut total = 0usize;
        let mut black = 0usize;

        for y in (0..self.height).step_by(SAMPLE_STEP) {
            for x in (0..self.width).step_by(SAMPLE_STEP) {
                let offset = (y * self.width + x) * 4;
                let Some(px) = self.data.get(offset..offset + 3) else {
                    continue;
                };
                total += 1;
                if px.iter().all(|c| *c < BLACK_CHANNEL_CEILING) {
                    black += 1;
                }
            }
        }

        if total == 0 {
            0.0
        } else {
            black as f64 / total as f64
        }
    }

    /// Whether the frame looks like a blocked capture.
    pub fn is_mostly_black(&self, threshold: f64) -> bool {
        self.darkness_ratio() > threshold
    }
}
