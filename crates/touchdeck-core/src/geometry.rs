//! Pixel/percentage conversions and rectangle math shared by dispatch and the editor.
//!
//! Stored positions are percentages of the *travel range* of a widget, that is
//! `(screen - widget) * percent`, expressed as integers in `[0, 10000]`. A widget
//! of non-zero size therefore never leaves the screen, even at 0% or 100%.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Axis, WidgetSize};

/// Denominator of every stored percentage (`10000` = 100%).
pub const PERCENT_SCALE: f32 = 10000.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn along(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Width => self.width,
            Axis::Height => self.height,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn from_origin_size(origin: Vec2, size: Size) -> Self {
        Rect {
            x: origin.x,
            y: origin.y,
            w: size.width,
            h: size.height,
        }
    }

    /// Inclusive on every edge.
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x <= self.x + self.w && p.y >= self.y && p.y <= self.y + self.h
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn is_empty(&self) -> bool {
        self.w <= 0.0 || self.h <= 0.0
    }
}

/// A widget position as two percentages of travel range, each in `[0, 10000]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "RawPercentPosition")
)]
pub struct PercentPosition {
    pub x: u16,
    pub y: u16,
}

/// Unchecked document form; clamped on the way in.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawPercentPosition {
    x: u16,
    y: u16,
}

#[cfg(feature = "serde")]
impl From<RawPercentPosition> for PercentPosition {
    fn from(raw: RawPercentPosition) -> Self {
        PercentPosition::new(raw.x, raw.y)
    }
}

impl PercentPosition {
    pub const MAX: u16 = 10000;

    pub fn new(x: u16, y: u16) -> Self {
        Self {
            x: x.min(Self::MAX),
            y: y.min(Self::MAX),
        }
    }
}

/// Screen size in pixels plus the dp→px scale used for fixed sizes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenMetrics {
    pub size: Size,
    pub density: f32,
}

impl ScreenMetrics {
    pub fn new(width: f32, height: f32, density: f32) -> Self {
        Self {
            size: Size::new(width, height),
            density,
        }
    }

    pub fn dp_to_px(&self, dp: f32) -> f32 {
        dp * self.density
    }
}

impl Default for ScreenMetrics {
    fn default() -> Self {
        Self::new(1280.0, 800.0, 1.0)
    }
}

/// Resolves a size policy to pixels.
///
/// `Wrap` sizes depend on content the renderer measures; `measured` carries that
/// size and a missing measurement resolves to zero.
pub fn resolve_size(size: &WidgetSize, metrics: &ScreenMetrics, measured: Option<Size>) -> Size {
    match *size {
        WidgetSize::Fixed {
            width_dp,
            height_dp,
        } => Size::new(metrics.dp_to_px(width_dp), metrics.dp_to_px(height_dp)),
        WidgetSize::Percentage {
            width,
            height,
            width_ref,
            height_ref,
        } => Size::new(
            width as f32 / PERCENT_SCALE * metrics.size.along(width_ref),
            height as f32 / PERCENT_SCALE * metrics.size.along(height_ref),
        ),
        WidgetSize::Wrap => measured.unwrap_or_default(),
    }
}

fn percent_fraction(p: u16) -> f32 {
    (p as f32 / PERCENT_SCALE).clamp(0.0, 1.0)
}

pub fn resolve_position(percent: PercentPosition, widget: Size, screen: Size) -> Vec2 {
    Vec2 {
        x: (screen.width - widget.width) * percent_fraction(percent.x),
        y: (screen.height - widget.height) * percent_fraction(percent.y),
    }
}

fn axis_percent(offset: f32, travel: f32) -> u16 {
    if travel <= 0.0 {
        return 0;
    }
    (offset / travel * PERCENT_SCALE)
        .round()
        .clamp(0.0, PERCENT_SCALE) as u16
}

/// Inverse of [`resolve_position`]. An axis with no travel range maps to 0.
pub fn to_percent_position(offset: Vec2, widget: Size, screen: Size) -> PercentPosition {
    PercentPosition {
        x: axis_percent(offset.x, screen.width - widget.width),
        y: axis_percent(offset.y, screen.height - widget.height),
    }
}

/// Clamps an offset so the widget stays inside the screen on both axes.
pub fn clamp_offset(offset: Vec2, widget: Size, screen: Size) -> Vec2 {
    let max_x = (screen.width - widget.width).max(0.0);
    let max_y = (screen.height - widget.height).max(0.0);
    Vec2 {
        x: offset.x.clamp(0.0, max_x),
        y: offset.y.clamp(0.0, max_y),
    }
}

/// Distance between the nearest edges of two rectangles; touching or overlapping is 0.
pub fn min_rect_distance(a: &Rect, b: &Rect) -> f32 {
    let dx = if a.right() < b.x {
        b.x - a.right()
    } else if b.right() < a.x {
        a.x - b.right()
    } else {
        0.0
    };
    let dy = if a.bottom() < b.y {
        b.y - a.bottom()
    } else if b.bottom() < a.y {
        a.y - b.bottom()
    } else {
        0.0
    };

    match (dx > 0.0, dy > 0.0) {
        (true, true) => (dx * dx + dy * dy).sqrt(),
        (true, false) => dx,
        (false, true) => dy,
        (false, false) => 0.0,
    }
}
