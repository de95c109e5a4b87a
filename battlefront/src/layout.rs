//! Conversion between device pointer positions and the logical cells of the playing
//! field, plus the basic geometry types used for hit-testing.
use crate::resolution::ResolutionProfile;

/// Top edge of the large field, in design pixels.
pub const FIELD_TOP: i32 = 122;
/// Left edge of the large field, in design pixels.
pub const FIELD_LEFT: i32 = 349;
pub const FIELD_WIDTH: i32 = 418;
pub const FIELD_HEIGHT: i32 = 418;

pub const CELL_WIDTH: i32 = 40;
pub const CELL_HEIGHT: i32 = 40;
/// Space between adjacent cells, in design pixels.
pub const CELL_GAP: i32 = 2;

/// A pointer position in device pixels.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Construct a [`Point`] from the given `x` and `y`.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

/// An axis aligned rectangle in device pixels.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> i32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.top + self.height
    }

    /// Returns true if the point lies inside this rectangle. Both edges are inclusive,
    /// so a point on the right or bottom border is still inside.
    pub fn contains(&self, point: Point) -> bool {
        let (x, y) = (f64::from(point.x), f64::from(point.y));
        x >= f64::from(self.left)
            && x <= f64::from(self.right())
            && y >= f64::from(self.top)
            && y <= f64::from(self.bottom())
    }

    /// The midpoint of this rectangle.
    pub fn center(&self) -> Point {
        Point::new(
            self.left as f32 + self.width as f32 / 2.0,
            self.top as f32 + self.height as f32 / 2.0,
        )
    }
}

/// A logical grid cell. Produced from arbitrary pointer positions, so either component
/// may be negative or beyond the grid; use [`Cell::within`] before acting on it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Check if this cell lies inside a grid of the given width (columns) and height
    /// (rows).
    pub fn within(&self, width: i32, height: i32) -> bool {
        self.row >= 0 && self.row < height && self.col >= 0 && self.col < width
    }
}

/// Map a device pointer position onto the large field. Never fails: positions outside
/// the field produce out of range cells, floored toward negative infinity.
pub fn pointer_to_cell(pointer: Point, profile: &ResolutionProfile) -> Cell {
    let scale = profile.scale_multiplier;
    let row = (f64::from(pointer.y) - f64::from(FIELD_TOP) * scale)
        / (f64::from(CELL_HEIGHT + CELL_GAP) * scale);
    let col = (f64::from(pointer.x) - f64::from(FIELD_LEFT) * scale)
        / (f64::from(CELL_WIDTH + CELL_GAP) * scale);
    Cell::new(row.floor() as i32, col.floor() as i32)
}

/// Device rectangle covered by a cell of the large field. This is where hit and splash
/// animations are drawn.
pub fn cell_rect(cell: Cell, profile: &ResolutionProfile) -> Rect {
    Rect::new(
        profile.scale(FIELD_LEFT + cell.col * (CELL_WIDTH + CELL_GAP)),
        profile.scale(FIELD_TOP + cell.row * (CELL_HEIGHT + CELL_GAP)),
        profile.scale(CELL_WIDTH),
        profile.scale(CELL_HEIGHT),
    )
}

/// Device rectangle of the whole large field.
pub fn field_rect(profile: &ResolutionProfile) -> Rect {
    Rect::new(
        profile.scale(FIELD_LEFT),
        profile.scale(FIELD_TOP),
        profile.scale(FIELD_WIDTH),
        profile.scale(FIELD_HEIGHT),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolution::Resolution;

    #[test]
    fn cell_centers_map_back_to_their_cell() {
        for res in Resolution::ALL {
            let profile = res.profile();
            for row in 0..10 {
                for col in 0..10 {
                    let cell = Cell::new(row, col);
                    let center = cell_rect(cell, &profile).center();
                    assert_eq!(pointer_to_cell(center, &profile), cell, "{} {:?}", res, cell);
                }
            }
        }
    }

    #[test]
    fn points_left_of_the_field_floor_negative() {
        let profile = Resolution::Res800x600.profile();
        // One pixel left of and above the field origin.
        let cell = pointer_to_cell(Point::new(348.0, 121.0), &profile);
        assert_eq!(cell, Cell::new(-1, -1));
        assert!(!cell.within(10, 10));

        let far = pointer_to_cell(Point::new(0.0, 0.0), &profile);
        assert_eq!(far, Cell::new(-3, -9));
    }

    #[test]
    fn gap_pixels_belong_to_the_preceding_cell() {
        let profile = Resolution::Res800x600.profile();
        // Cell 0 spans 349..389, the gap 389..391 still floors to column 0.
        assert_eq!(pointer_to_cell(Point::new(390.0, 122.0), &profile).col, 0);
        assert_eq!(pointer_to_cell(Point::new(391.0, 122.0), &profile).col, 1);
    }

    #[test]
    fn beyond_the_grid_is_out_of_bounds() {
        let profile = Resolution::Res1280x960.profile();
        let cell = pointer_to_cell(Point::new(1279.0, 959.0), &profile);
        assert!(cell.col >= 10 && cell.row >= 10);
        assert!(!cell.within(10, 10));
    }

    #[test]
    fn field_spans_the_ten_by_ten_grid() {
        let profile = Resolution::Res800x600.profile();
        let field = field_rect(&profile);
        assert_eq!(field, Rect::new(349, 122, 418, 418));
        let last = cell_rect(Cell::new(9, 9), &profile);
        assert_eq!((last.right(), last.bottom()), (field.right(), field.bottom()));

        for res in Resolution::ALL {
            let profile = res.profile();
            let field = field_rect(&profile);
            for &cell in [Cell::new(0, 0), Cell::new(9, 9), Cell::new(4, 7)].iter() {
                assert!(field.contains(cell_rect(cell, &profile).center()), "{} {:?}", res, cell);
            }
        }
    }

    #[test]
    fn rect_contains_is_inclusive() {
        let rect = Rect::new(40, 570, 120, 20);
        assert!(rect.contains(Point::new(40.0, 570.0)));
        assert!(rect.contains(Point::new(160.0, 590.0)));
        assert!(!rect.contains(Point::new(160.5, 590.0)));
        assert!(!rect.contains(Point::new(39.9, 580.0)));
    }
}
