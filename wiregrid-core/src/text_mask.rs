/// Hidden text lookup for the middle depth slices of the grid
use crate::error::{Error, Result};
use crate::geometry::GridDimensions;

const THE_INTERNET: [&str; 5] = [
    "  TTT H H EEE   III N   N TTT EEE RRR  N   N EEE TTT  ",
    "   T  H H E      I  NN  N  T  E   R  R NN  N E    T   ",
    "   T  HHH EE     I  N N N  T  EE  RRR  N N N EE   T   ",
    "   T  H H E      I  N  NN  T  E   R R  N  NN E    T   ",
    "   T  H H EEE   III N   N  T  EEE R  R N   N EEE  T   ",
];

/// Rectangular character grid; any non-space cell marks a lit lattice point
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextMask {
    rows: Vec<Vec<char>>,
    width: usize,
}

impl TextMask {
    /// Build a mask, rejecting empty or ragged rows
    pub fn new<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let rows: Vec<Vec<char>> = rows.iter().map(|r| r.as_ref().chars().collect()).collect();
        let width = rows.first().map(Vec::len).ok_or(Error::EmptyTextMask)?;

        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != width)
        {
            return Err(Error::RaggedTextMask {
                row,
                expected: width,
                found,
            });
        }

        Ok(Self { rows, width })
    }

    /// The built-in "THE INTERNET" banner
    pub fn the_internet() -> Result<Self> {
        Self::new(&THE_INTERNET)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn row_len(&self) -> usize {
        self.width
    }

    /// Character at a mask cell, `None` outside the mask
    pub fn glyph(&self, row: i64, col: i64) -> Option<char> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        self.rows.get(row)?.get(col).copied()
    }
}

/// Whether the lattice point `(x, y, z)` lies on a glyph of the mask.
///
/// Only the two depth layers `centerZ` and `centerZ - 1` carry the text; the
/// mask is centered on the grid's integer center in x and y.
pub fn is_highlighted(x: usize, y: usize, z: usize, dims: &GridDimensions, mask: &TextMask) -> bool {
    let (center_x, center_y, center_z) = dims.center();
    if z != center_z && z + 1 != center_z {
        return false;
    }

    let row = y as i64 - center_y as i64 + (mask.row_count() / 2) as i64;
    let col = x as i64 - center_x as i64 + (mask.row_len() / 2) as i64;
    matches!(mask.glyph(row, col), Some(c) if c != ' ')
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn mask() -> TextMask {
        TextMask::the_internet().unwrap()
    }

    #[test]
    fn test_builtin_mask_is_rectangular() {
        let mask = mask();
        assert_eq!(mask.row_count(), 5);
        assert_eq!(mask.row_len(), 54);
    }

    #[test]
    fn test_ragged_mask_rejected() {
        let err = TextMask::new(&["ab", "abc"]).unwrap_err();
        assert_eq!(
            err,
            Error::RaggedTextMask {
                row: 1,
                expected: 2,
                found: 3
            }
        );
        assert_eq!(TextMask::new::<&str>(&[]).unwrap_err(), Error::EmptyTextMask);
    }

    #[test]
    fn test_center_is_lit() {
        let mask = mask();
        let dims = GridDimensions::new(50, 10, 15);
        let (cx, cy, cz) = dims.center();
        assert_eq!(mask.glyph(2, 27), Some('T'));
        assert!(is_highlighted(cx, cy, cz, &dims, &mask));
        assert!(is_highlighted(cx, cy, cz - 1, &dims, &mask));
    }

    #[test]
    fn test_other_depths_never_lit() {
        let mask = mask();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..10 {
            let dims = GridDimensions::random(&mut rng);
            let (_, _, cz) = dims.center();
            for z in (0..dims.depth).filter(|&z| z != cz && z + 1 != cz) {
                for y in 0..dims.height {
                    for x in 0..dims.width {
                        assert!(!is_highlighted(x, y, z, &dims, &mask));
                    }
                }
            }
        }
    }

    #[test]
    fn test_outside_mask_rows_and_columns() {
        let mask = mask();
        let dims = GridDimensions::new(59, 14, 24);
        let (cx, cy, cz) = dims.center();
        // rows above and below the five mask rows
        assert!(!is_highlighted(cx, cy - 3, cz, &dims, &mask));
        assert!(!is_highlighted(cx, cy + 3, cz, &dims, &mask));
        // column 0 and everything left of it
        assert!(!is_highlighted(cx - 27, cy, cz, &dims, &mask));
        assert!(!is_highlighted(0, cy, cz, &dims, &mask));
    }

    #[test]
    fn test_lit_points_match_glyphs() {
        let mask = mask();
        let dims = GridDimensions::new(56, 12, 20);
        let (cx, cy, cz) = dims.center();
        // top row "  TTT ...": columns 2..5 lit, 0..2 blank
        let x0 = cx - 27;
        let y0 = cy - 2;
        assert!(!is_highlighted(x0 + 1, y0, cz, &dims, &mask));
        assert!(is_highlighted(x0 + 2, y0, cz, &dims, &mask));
        assert!(is_highlighted(x0 + 4, y0, cz, &dims, &mask));
        assert!(!is_highlighted(x0 + 5, y0, cz, &dims, &mask));
    }
}
