//! Points, sizes and rectangles in drawing units.
//!
//! The y axis grows downward: `min_y` is the top edge.

#[cfg(feature = "std")]
fn ceil(value: f64) -> f64 {
    value.ceil()
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn ceil(value: f64) -> f64 {
    libm::ceil(value)
}

/// A point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// The origin.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Creates a point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the point moved by `dx`, `dy`.
    #[must_use]
    pub fn offset_by(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// A width and height.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl Size {
    /// The empty size.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Creates a size.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns whether either dimension is not positive.
    #[must_use]
    pub fn is_empty(self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Rounds both dimensions up to whole units.
    #[must_use]
    pub fn ceil(self) -> Self {
        Self::new(ceil(self.width), ceil(self.height))
    }
}

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Top-left corner.
    pub origin: Point,
    /// Extent.
    pub size: Size,
}

impl Rect {
    /// Creates a rectangle from its top-left corner and extent.
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// Creates a rectangle from an origin and a size.
    #[must_use]
    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Left edge.
    #[must_use]
    pub const fn min_x(&self) -> f64 {
        self.origin.x
    }

    /// Top edge.
    #[must_use]
    pub const fn min_y(&self) -> f64 {
        self.origin.y
    }

    /// Right edge.
    #[must_use]
    pub fn max_x(&self) -> f64 {
        self.origin.x + self.size.width
    }

    /// Bottom edge.
    #[must_use]
    pub fn max_y(&self) -> f64 {
        self.origin.y + self.size.height
    }

    /// Center point.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.size.width / 2.0,
            self.origin.y + self.size.height / 2.0,
        )
    }

    /// Returns whether the rectangle covers no area.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size.is_empty()
    }

    /// Shrinks the rectangle by `dx` on the left and right and `dy` on the
    /// top and bottom.
    ///
    /// A dimension that would turn negative collapses to zero around the
    /// original center line.
    #[must_use]
    pub fn inset_by(&self, dx: f64, dy: f64) -> Self {
        let center = self.center();
        let width = self.size.width - 2.0 * dx;
        let height = self.size.height - 2.0 * dy;
        let (x, width) = if width < 0.0 {
            (center.x, 0.0)
        } else {
            (self.origin.x + dx, width)
        };
        let (y, height) = if height < 0.0 {
            (center.y, 0.0)
        } else {
            (self.origin.y + dy, height)
        };
        Self::new(x, y, width, height)
    }

    /// Scales the rectangle by `factor` about its center.
    ///
    /// # Example
    ///
    /// ```
    /// use cardface::Rect;
    ///
    /// let zoomed = Rect::new(0.0, 0.0, 200.0, 100.0).zoom(0.5);
    /// assert_eq!(zoomed, Rect::new(50.0, 25.0, 100.0, 50.0));
    /// ```
    #[must_use]
    pub fn zoom(&self, factor: f64) -> Self {
        let width = self.size.width * factor;
        let height = self.size.height * factor;
        Self::new(
            self.origin.x + (self.size.width - width) / 2.0,
            self.origin.y + (self.size.height - height) / 2.0,
            width,
            height,
        )
    }

    /// The left half of the rectangle.
    #[must_use]
    pub fn left_half(&self) -> Self {
        Self::new(
            self.origin.x,
            self.origin.y,
            self.size.width / 2.0,
            self.size.height,
        )
    }

    /// The right half of the rectangle.
    #[must_use]
    pub fn right_half(&self) -> Self {
        let width = self.size.width / 2.0;
        Self::new(self.origin.x + width, self.origin.y, width, self.size.height)
    }

    /// Returns whether `other` lies entirely inside this rectangle, allowing
    /// `tolerance` of overhang on every edge.
    #[must_use]
    pub fn contains_rect(&self, other: &Self, tolerance: f64) -> bool {
        other.min_x() >= self.min_x() - tolerance
            && other.min_y() >= self.min_y() - tolerance
            && other.max_x() <= self.max_x() + tolerance
            && other.max_y() <= self.max_y() + tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inset_shrinks_both_sides() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0).inset_by(5.0, 10.0);
        assert_eq!(rect, Rect::new(15.0, 30.0, 90.0, 30.0));
    }

    #[test]
    fn oversized_inset_collapses_to_center() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0).inset_by(8.0, 1.0);
        assert_eq!(rect.size.width, 0.0);
        assert_eq!(rect.origin.x, 5.0);
        assert_eq!(rect.size.height, 8.0);
        assert!(rect.is_empty());
    }

    #[test]
    fn halves_split_width() {
        let rect = Rect::new(0.0, 5.0, 40.0, 10.0);
        assert_eq!(rect.left_half(), Rect::new(0.0, 5.0, 20.0, 10.0));
        assert_eq!(rect.right_half(), Rect::new(20.0, 5.0, 20.0, 10.0));
    }

    #[test]
    fn zoom_keeps_center() {
        let rect = Rect::new(10.0, 10.0, 300.0, 400.0);
        let zoomed = rect.zoom(1.5);
        assert_eq!(zoomed.center(), rect.center());
        assert_eq!(zoomed.size, Size::new(450.0, 600.0));
    }

    #[test]
    fn ceil_rounds_up() {
        assert_eq!(Size::new(10.2, 3.0).ceil(), Size::new(11.0, 3.0));
    }
}
