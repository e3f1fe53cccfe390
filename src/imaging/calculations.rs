//! Pure square-geometry functions.
//!
//! All functions here are pure and testable without any I/O or images.

/// A centered square cut out of a rectangular source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SquareRegion {
    /// Left edge of the square in source coordinates.
    pub x: u32,
    /// Top edge of the square in source coordinates.
    pub y: u32,
    /// Edge length: the shorter source dimension.
    pub side: u32,
}

/// A square canvas with the source placed in its middle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpandCanvas {
    /// Edge length: the longer source dimension.
    pub side: u32,
    pub offset_x: u32,
    pub offset_y: u32,
}

/// Calculate the largest centered square inside a `(width, height)` source.
///
/// Odd differences round the offset down, so the extra pixel is dropped from
/// the right or bottom edge.
///
/// # Examples
/// ```
/// # use sqrl::imaging::calculate_crop_region;
/// let region = calculate_crop_region((800, 600));
/// assert_eq!((region.x, region.y, region.side), (100, 0, 600));
/// ```
pub fn calculate_crop_region(source: (u32, u32)) -> SquareRegion {
    let (w, h) = source;
    let side = w.min(h);
    SquareRegion {
        x: (w - side) / 2,
        y: (h - side) / 2,
        side,
    }
}

/// Calculate the square canvas that holds a `(width, height)` source centered.
///
/// # Examples
/// ```
/// # use sqrl::imaging::calculate_expand_canvas;
/// let canvas = calculate_expand_canvas((800, 600));
/// assert_eq!((canvas.side, canvas.offset_x, canvas.offset_y), (800, 0, 100));
/// ```
pub fn calculate_expand_canvas(source: (u32, u32)) -> ExpandCanvas {
    let (w, h) = source;
    let side = w.max(h);
    ExpandCanvas {
        side,
        offset_x: (side - w) / 2,
        offset_y: (side - h) / 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // calculate_crop_region tests
    // =========================================================================

    #[test]
    fn crop_landscape_centers_horizontally() {
        let r = calculate_crop_region((800, 600));
        assert_eq!(r, SquareRegion { x: 100, y: 0, side: 600 });
    }

    #[test]
    fn crop_portrait_centers_vertically() {
        let r = calculate_crop_region((600, 800));
        assert_eq!(r, SquareRegion { x: 0, y: 100, side: 600 });
    }

    #[test]
    fn crop_square_is_whole_image() {
        let r = calculate_crop_region((500, 500));
        assert_eq!(r, SquareRegion { x: 0, y: 0, side: 500 });
    }

    #[test]
    fn crop_single_pixel() {
        let r = calculate_crop_region((1, 1));
        assert_eq!(r, SquareRegion { x: 0, y: 0, side: 1 });
    }

    #[test]
    fn crop_odd_difference_rounds_down() {
        // 101 - 100 = 1 → offset 0, last column dropped
        let r = calculate_crop_region((101, 100));
        assert_eq!(r, SquareRegion { x: 0, y: 0, side: 100 });
    }

    // =========================================================================
    // calculate_expand_canvas tests
    // =========================================================================

    #[test]
    fn expand_landscape_pads_vertically() {
        let c = calculate_expand_canvas((800, 600));
        assert_eq!(
            c,
            ExpandCanvas {
                side: 800,
                offset_x: 0,
                offset_y: 100
            }
        );
    }

    #[test]
    fn expand_portrait_pads_horizontally() {
        let c = calculate_expand_canvas((300, 900));
        assert_eq!(
            c,
            ExpandCanvas {
                side: 900,
                offset_x: 300,
                offset_y: 0
            }
        );
    }

    #[test]
    fn expand_odd_difference_puts_extra_row_at_bottom() {
        // 100x97: 3 rows of padding → 1 on top, 2 below
        let c = calculate_expand_canvas((100, 97));
        assert_eq!(c.offset_y, 1);
        assert_eq!(c.side - c.offset_y - 97, 2);
    }

    #[test]
    fn expand_leaves_room_for_every_source_row() {
        let c = calculate_expand_canvas((800, 600));
        assert_eq!(c.offset_y + 600 + c.offset_y, c.side);
        assert_eq!(c.offset_x + 800, c.side);
    }
}
