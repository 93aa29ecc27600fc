//! Widget configuration surface.
//!
//! Every field has a default, so callers only spell out what they change:
//!
//! ```ignore
//! let props = ScrollProps {
//!     items: demo_items(),
//!     autoplay: true,
//!     ..ScrollProps::default()
//! };
//! ```

use super::item::Item;

/// Which way the static tilt leans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TiltDirection {
    #[default]
    Left,
    Right,
}

/// Which way autoplay moves the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AutoplayDirection {
    Up,
    #[default]
    Down,
}

impl AutoplayDirection {
    /// Signed per-frame delta for a given speed.
    pub fn delta(self, speed: f64) -> f64 {
        match self {
            Self::Down => speed,
            Self::Up => -speed,
        }
    }
}

/// Vertical extent of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MaxHeight {
    /// Take all the rows the host gives us (`100%`).
    #[default]
    Fill,
    /// At most this many terminal rows.
    Rows(u16),
}

impl MaxHeight {
    /// Clamp an available row count to this limit.
    pub fn clamp(self, available: u16) -> u16 {
        match self {
            Self::Fill => available,
            Self::Rows(n) => n.min(available),
        }
    }
}

/// Configuration for one scroll widget instance.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollProps {
    /// Viewport width in terminal columns.
    pub width: u16,
    pub max_height: MaxHeight,
    /// Spacing added after each item, as written (e.g. `"-0.5em"`).  Only the
    /// leading number takes part in the wrap period.
    pub negative_margin: String,
    pub items: Vec<Item>,
    /// Minimum measured height of one item, in units.
    pub item_min_height: f64,
    pub is_tilted: bool,
    pub tilt_direction: TiltDirection,
    pub autoplay: bool,
    /// Units per frame.
    pub autoplay_speed: f64,
    pub autoplay_direction: AutoplayDirection,
    pub pause_on_hover: bool,
}

impl Default for ScrollProps {
    fn default() -> Self {
        Self {
            width: 30,
            max_height: MaxHeight::Fill,
            negative_margin: "-0.5em".into(),
            items: Vec::new(),
            item_min_height: 150.0,
            is_tilted: false,
            tilt_direction: TiltDirection::Left,
            autoplay: false,
            autoplay_speed: 0.5,
            autoplay_direction: AutoplayDirection::Down,
            pause_on_hover: false,
        }
    }
}

impl ScrollProps {
    /// Numeric spacing per item.  Unparseable margins count as `0`.
    pub fn spacing(&self) -> f64 {
        parse_leading_float(&self.negative_margin).unwrap_or(0.0)
    }

    /// `true` when switching from `self` to `other` requires a full
    /// teardown and re-mount (as opposed to a plain re-render).
    pub fn needs_remount(&self, other: &ScrollProps) -> bool {
        self.items != other.items
            || self.negative_margin != other.negative_margin
            || self.autoplay != other.autoplay
            || self.autoplay_speed != other.autoplay_speed
            || self.autoplay_direction != other.autoplay_direction
            || self.pause_on_hover != other.pause_on_hover
    }
}

/// Parse the longest numeric prefix of `s` (after leading whitespace), so
/// `"-0.5em"` gives `-0.5`, `"12px"` gives `12` and `"1e1em"` gives `10`.
pub fn parse_leading_float(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;

    if end < bytes.len() && (bytes[end] == b'-' || bytes[end] == b'+') {
        end += 1;
    }
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }
    if !seen_digit {
        return None;
    }
    // Optional exponent, only taken when it has digits.
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'-' || bytes[exp_end] == b'+') {
            exp_end += 1;
        }
        let digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > digits_start {
            end = exp_end;
        }
    }
    s[..end].parse().ok()
}
