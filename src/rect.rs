/// Axis-aligned selection rectangle in widget-local pixel coordinates.
///
/// A rectangle with non-positive width or height is "absent": no selection
/// is active. Degenerate rectangles are never an error, they simply read as
/// absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl SelectRect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn is_present(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Half-open containment: the right and bottom edges are exclusive.
    pub fn contains(&self, (px, py): (i32, i32)) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }

    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
    }

    /// Rectangle shrunk by `mx`/`my` on each side. May be degenerate.
    pub fn inset(&self, mx: i32, my: i32) -> SelectRect {
        SelectRect::new(
            self.x + mx,
            self.y + my,
            self.width - 2 * mx,
            self.height - 2 * my,
        )
    }

    /// Overlap with `other`, or `None` when the overlap has no area.
    pub fn intersect(&self, other: &SelectRect) -> Option<SelectRect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let clipped = SelectRect::new(
            x,
            y,
            self.right().min(other.right()) - x,
            self.bottom().min(other.bottom()) - y,
        );
        clipped.is_present().then_some(clipped)
    }
}

/// Selection rectangle corners that can be pulled to resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

/// Classify `p` against the corner zones of `rect`.
///
/// Zones are measured around the rectangle inset by `margin` on each side,
/// so the same margin extends the zone both inward and outward of each
/// corner of the inset rectangle. Checked in SE, SW, NE, NW order; near
/// degenerate rectangles the zones overlap and the first match wins.
pub fn corner_at(rect: &SelectRect, p: (i32, i32), margin: (i32, i32)) -> Option<Corner> {
    let (mx, my) = margin;
    let inner = rect.inset(mx, my);
    let near = |edge: i32, coord: i32, m: i32| (edge - coord).abs() < m;

    if near(inner.bottom(), p.1, my) && near(inner.right(), p.0, mx) {
        Some(Corner::SouthEast)
    } else if near(inner.bottom(), p.1, my) && near(inner.x, p.0, mx) {
        Some(Corner::SouthWest)
    } else if near(inner.y, p.1, my) && near(inner.right(), p.0, mx) {
        Some(Corner::NorthEast)
    } else if near(inner.y, p.1, my) && near(inner.x, p.0, mx) {
        Some(Corner::NorthWest)
    } else {
        None
    }
}
