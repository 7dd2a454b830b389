//! Tooltip placement relative to a highlighted region.
//!
//! The tour core never walks the UI itself. A front-end implements
//! `UiLocator` to answer "where is this region right now", and
//! `Placement::for_target` picks which side of it the tooltip goes on.

use serde::{Deserialize, Serialize};

/// Axis-aligned region bounds in screen units, origin top-left.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    #[must_use]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    #[must_use]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }
}

/// Visible screen area.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Side of the target on which the tooltip is drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Placement {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}

impl Placement {
    /// Pick the roomier side of `target` by splitting the viewport into thirds.
    ///
    /// Vertical placement wins over horizontal: a target near the top gets
    /// its tooltip below, near the bottom above, then near the left edge to
    /// the right, near the right edge to the left. Anything central, or an
    /// unresolved target, defaults to `Top`.
    #[must_use]
    pub fn for_target(target: Option<Rect>, viewport: Viewport) -> Self {
        let Some(rect) = target else {
            return Placement::Top;
        };

        if rect.top() < viewport.height / 3.0 {
            Placement::Bottom
        } else if rect.bottom() > viewport.height * 2.0 / 3.0 {
            Placement::Top
        } else if rect.left() < viewport.width / 3.0 {
            Placement::Right
        } else if rect.right() > viewport.width * 2.0 / 3.0 {
            Placement::Left
        } else {
            Placement::Top
        }
    }
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Placement::Top => "above",
            Placement::Bottom => "below",
            Placement::Left => "left of",
            Placement::Right => "right of",
        };
        write!(f, "{name}")
    }
}

/// Resolves tour selectors against the live UI.
pub trait UiLocator {
    /// Bounds of the region matching `selector`, if it is on screen.
    fn locate(&self, selector: &str) -> Option<Rect>;

    /// Is a region matching `selector` on screen?
    fn exists(&self, selector: &str) -> bool {
        self.locate(selector).is_some()
    }
}
