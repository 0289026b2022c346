//! Pixel-art title banner with a zigzag reveal animation.
//!
//! The banner is a small grid of filled/empty cells. The reveal walks the
//! grid boustrophedon style (even rows left to right, odd rows right to
//! left) and makes filled cells visible as the walk passes over them.

/// Five-row pixel map spelling "SNAKE" (`█` = filled).
pub const BANNER_SNAKE: &[&str] = &[
    "█████ █   █  ███  █   █ █████",
    "█     ██  █ █   █ █  █  █    ",
    "█████ █ █ █ █████ ██    ███  ",
    "    █ █  ██ █   █ █  █  █    ",
    "█████ █   █ █   █ █   █ █████",
];

/// Glyph used for a revealed banner cell.
pub const BANNER_GLYPH: char = '█';

/// Parsed banner bitmap plus the precomputed zigzag traversal order.
#[derive(Debug, Clone)]
pub struct PixelBanner {
    cells: Vec<Vec<bool>>,
    traversal: Vec<(usize, usize)>,
    width: usize,
}

impl PixelBanner {
    /// Parses a banner from rows of text; `█` marks a filled cell.
    ///
    /// Rows shorter than the widest row are padded with empty cells.
    #[must_use]
    pub fn parse(rows: &[&str]) -> Self {
        let width = rows
            .iter()
            .map(|row| row.chars().count())
            .max()
            .unwrap_or(0);

        let cells: Vec<Vec<bool>> = rows
            .iter()
            .map(|row| {
                let mut parsed: Vec<bool> =
                    row.chars().map(|ch| ch == BANNER_GLYPH).collect();
                parsed.resize(width, false);
                parsed
            })
            .collect();

        let mut traversal = Vec::with_capacity(width * cells.len());
        for y in 0..cells.len() {
            if y % 2 == 0 {
                traversal.extend((0..width).map(|x| (x, y)));
            } else {
                traversal.extend((0..width).rev().map(|x| (x, y)));
            }
        }

        Self {
            cells,
            traversal,
            width,
        }
    }

    /// Returns the default "SNAKE" banner.
    #[must_use]
    pub fn snake() -> Self {
        Self::parse(BANNER_SNAKE)
    }

    /// Banner width in cells.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Banner height in cells.
    #[must_use]
    pub fn height(&self) -> usize {
        self.cells.len()
    }

    /// Number of cells the zigzag walk visits (width × height).
    #[must_use]
    pub fn traversal_len(&self) -> usize {
        self.traversal.len()
    }

    /// Returns true when the cell is part of the artwork.
    #[must_use]
    pub fn is_filled(&self, x: usize, y: usize) -> bool {
        self.cells
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .unwrap_or(false)
    }

    /// Filled cells among the first `progress` cells of the zigzag walk.
    pub fn revealed(&self, progress: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.traversal
            .iter()
            .take(progress)
            .copied()
            .filter(|&(x, y)| self.is_filled(x, y))
    }

    /// Renders the reveal state as one string per banner row.
    ///
    /// Cells the walk has not reached yet render as spaces, so partially
    /// revealed rows keep their alignment.
    #[must_use]
    pub fn render_rows(&self, progress: usize) -> Vec<String> {
        let mut rows = vec![vec![' '; self.width]; self.height()];
        for (x, y) in self.revealed(progress) {
            rows[y][x] = BANNER_GLYPH;
        }
        rows.into_iter().map(String::from_iter).collect()
    }
}
