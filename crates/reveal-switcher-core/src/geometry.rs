//! Basic geometry types for transitions and clip boundaries.

/// A point in 2D space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// The origin point (0, 0).
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Convert to a glam Vec2.
    #[inline]
    pub fn to_vec2(self) -> glam::Vec2 {
        glam::Vec2::new(self.x, self.y)
    }

    /// Create from a glam Vec2.
    #[inline]
    pub fn from_vec2(v: glam::Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

impl From<glam::Vec2> for Point {
    fn from(v: glam::Vec2) -> Self {
        Self::from_vec2(v)
    }
}

/// A 2D displacement, such as the slide offset of a layer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

impl Offset {
    /// Create a new offset.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// No displacement.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Convert to a glam Vec2.
    #[inline]
    pub fn to_vec2(self) -> glam::Vec2 {
        glam::Vec2::new(self.x, self.y)
    }
}

impl From<(f32, f32)> for Offset {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

impl From<glam::Vec2> for Offset {
    fn from(v: glam::Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

/// A size in 2D space (width and height).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Zero size.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };
}

impl From<(f32, f32)> for Size {
    fn from((width, height): (f32, f32)) -> Self {
        Self { width, height }
    }
}

/// A rectangle defined by origin and size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    /// Create a new rectangle from origin and size.
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point { x, y },
            size: Size { width, height },
        }
    }

    /// A rectangle at the origin covering `size`.
    #[inline]
    pub const fn from_size(size: Size) -> Self {
        Self {
            origin: Point::ZERO,
            size,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.origin.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.origin.y
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.origin.x + self.size.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.origin.y + self.size.height
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.height
    }

    /// The center point.
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.size.width / 2.0,
            self.origin.y + self.size.height / 2.0,
        )
    }
}

/// Commands that make up a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Move to a point without drawing.
    MoveTo(Point),
    /// Draw a line to a point.
    LineTo(Point),
    /// Draw a quadratic bezier curve.
    QuadTo { control: Point, end: Point },
    /// Draw a cubic bezier curve.
    CubicTo { control1: Point, control2: Point, end: Point },
    /// Close the current subpath.
    Close,
}

/// A 2D path, used for clip boundaries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

/// Control point distance for approximating a quarter circle with a cubic.
const KAPPA: f32 = 0.552_284_8;

impl Path {
    /// Create a new empty path.
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Move to a point without drawing.
    pub fn move_to(&mut self, p: Point) -> &mut Self {
        self.commands.push(PathCommand::MoveTo(p));
        self
    }

    /// Draw a line to a point.
    pub fn line_to(&mut self, p: Point) -> &mut Self {
        self.commands.push(PathCommand::LineTo(p));
        self
    }

    /// Draw a quadratic bezier curve.
    pub fn quad_to(&mut self, control: Point, end: Point) -> &mut Self {
        self.commands.push(PathCommand::QuadTo { control, end });
        self
    }

    /// Draw a cubic bezier curve.
    pub fn cubic_to(&mut self, control1: Point, control2: Point, end: Point) -> &mut Self {
        self.commands.push(PathCommand::CubicTo { control1, control2, end });
        self
    }

    /// Close the current subpath.
    pub fn close(&mut self) -> &mut Self {
        self.commands.push(PathCommand::Close);
        self
    }

    /// Get the path commands.
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Check if the path is empty.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Whether every subpath in this path ends with [`PathCommand::Close`].
    ///
    /// An empty path is not considered closed.
    pub fn is_closed(&self) -> bool {
        if self.commands.is_empty() {
            return false;
        }
        let mut open = false;
        for command in &self.commands {
            match command {
                PathCommand::MoveTo(_) => {
                    if open {
                        return false;
                    }
                    open = true;
                }
                PathCommand::Close => open = false,
                _ => {}
            }
        }
        !open
    }

    /// Create a closed rectangle path.
    pub fn rect(rect: Rect) -> Self {
        let mut path = Self::new();
        path.move_to(Point::new(rect.left(), rect.top()))
            .line_to(Point::new(rect.right(), rect.top()))
            .line_to(Point::new(rect.right(), rect.bottom()))
            .line_to(Point::new(rect.left(), rect.bottom()))
            .close();
        path
    }

    /// Create a closed rounded rectangle path with a uniform corner radius.
    ///
    /// The radius is clamped to half of the shorter side.
    pub fn rounded_rect(rect: Rect, radius: f32) -> Self {
        let r = radius.max(0.0).min(rect.width().min(rect.height()) / 2.0);
        if r == 0.0 {
            return Self::rect(rect);
        }

        let mut path = Self::new();
        path.move_to(Point::new(rect.left() + r, rect.top()))
            .line_to(Point::new(rect.right() - r, rect.top()))
            .quad_to(
                Point::new(rect.right(), rect.top()),
                Point::new(rect.right(), rect.top() + r),
            )
            .line_to(Point::new(rect.right(), rect.bottom() - r))
            .quad_to(
                Point::new(rect.right(), rect.bottom()),
                Point::new(rect.right() - r, rect.bottom()),
            )
            .line_to(Point::new(rect.left() + r, rect.bottom()))
            .quad_to(
                Point::new(rect.left(), rect.bottom()),
                Point::new(rect.left(), rect.bottom() - r),
            )
            .line_to(Point::new(rect.left(), rect.top() + r))
            .quad_to(
                Point::new(rect.left(), rect.top()),
                Point::new(rect.left() + r, rect.top()),
            )
            .close();
        path
    }

    /// Create a closed circle path from four cubic arcs.
    pub fn circle(center: Point, radius: f32) -> Self {
        let r = radius.max(0.0);
        let k = r * KAPPA;
        let (cx, cy) = (center.x, center.y);

        let mut path = Self::new();
        path.move_to(Point::new(cx + r, cy))
            .cubic_to(Point::new(cx + r, cy + k), Point::new(cx + k, cy + r), Point::new(cx, cy + r))
            .cubic_to(Point::new(cx - k, cy + r), Point::new(cx - r, cy + k), Point::new(cx - r, cy))
            .cubic_to(Point::new(cx - r, cy - k), Point::new(cx - k, cy - r), Point::new(cx, cy - r))
            .cubic_to(Point::new(cx + k, cy - r), Point::new(cx + r, cy - k), Point::new(cx + r, cy))
            .close();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_creation() {
        let p = Point::new(1.0, 2.0);
        assert_eq!(p.x, 1.0);
        assert_eq!(p.y, 2.0);

        let p2: Point = (3.0, 4.0).into();
        assert_eq!(p2, Point::new(3.0, 4.0));
    }

    #[test]
    fn test_rect_geometry() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.right(), 110.0);
        assert_eq!(r.bottom(), 70.0);
        assert_eq!(r.center(), Point::new(60.0, 45.0));
    }

    #[test]
    fn test_rect_path_is_closed() {
        let path = Path::rect(Rect::from_size(Size::new(40.0, 30.0)));
        assert_eq!(path.commands().len(), 5);
        assert!(path.is_closed());
    }

    #[test]
    fn test_open_path_is_not_closed() {
        let mut path = Path::new();
        path.move_to(Point::ZERO).line_to(Point::new(1.0, 1.0));
        assert!(!path.is_closed());
        assert!(!Path::new().is_closed());
    }

    #[test]
    fn test_circle_starts_and_ends_on_radius() {
        let path = Path::circle(Point::new(50.0, 50.0), 10.0);
        assert!(path.is_closed());
        assert_eq!(path.commands()[0], PathCommand::MoveTo(Point::new(60.0, 50.0)));
        match path.commands()[4] {
            PathCommand::CubicTo { end, .. } => assert_eq!(end, Point::new(60.0, 50.0)),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_rounded_rect_clamps_radius() {
        let rect = Rect::new(0.0, 0.0, 20.0, 10.0);
        let path = Path::rounded_rect(rect, 100.0);
        assert!(path.is_closed());
        assert_eq!(path.commands()[0], PathCommand::MoveTo(Point::new(5.0, 0.0)));
        assert_eq!(Path::rounded_rect(rect, 0.0), Path::rect(rect));
    }
}
