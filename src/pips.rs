//! Pip layout table.
//!
//! Each entry lists how many pips sit on each row, top to bottom, for the
//! rank whose order equals the entry index. Index 0 is a placeholder so that
//! the ace lands on index 1.

/// Pip counts per row, indexed by rank order.
pub const PIPS_PER_ROW: [&[u8]; 11] = [
    &[0],
    &[1],
    &[1, 1],
    &[1, 1, 1],
    &[2, 2],
    &[2, 1, 2],
    &[2, 2, 2],
    &[2, 1, 2, 2],
    &[2, 2, 2, 2],
    &[2, 2, 1, 2, 2],
    &[2, 2, 2, 2, 2],
];

const fn longest_pattern() -> usize {
    let mut max = 0;
    let mut i = 0;
    while i < PIPS_PER_ROW.len() {
        if PIPS_PER_ROW[i].len() > max {
            max = PIPS_PER_ROW[i].len();
        }
        i += 1;
    }
    max
}

const fn widest_row() -> u8 {
    let mut max = 0;
    let mut i = 0;
    while i < PIPS_PER_ROW.len() {
        let rows = PIPS_PER_ROW[i];
        let mut j = 0;
        while j < rows.len() {
            if rows[j] > max {
                max = rows[j];
            }
            j += 1;
        }
        i += 1;
    }
    max
}

const MAX_VERTICAL: usize = longest_pattern();
const MAX_HORIZONTAL: u8 = widest_row();

/// Returns the rows for a rank order.
///
/// Face ranks and anything past ten have no pips and yield an empty slice.
///
/// # Example
///
/// ```
/// use cardface::pips::rows_for;
///
/// assert_eq!(rows_for(7), &[2, 1, 2, 2]);
/// assert!(rows_for(12).is_empty());
/// ```
#[must_use]
pub fn rows_for(order: usize) -> &'static [u8] {
    PIPS_PER_ROW.get(order).copied().unwrap_or(&[])
}

/// Largest number of rows in any entry of the table.
#[must_use]
pub const fn max_vertical_count() -> usize {
    MAX_VERTICAL
}

/// Largest pip count on a single row in any entry of the table.
#[must_use]
pub const fn max_horizontal_count() -> u8 {
    MAX_HORIZONTAL
}

/// Total pips drawn for a row pattern.
#[must_use]
pub fn pip_total(rows: &[u8]) -> usize {
    rows.iter().map(|&count| usize::from(count)).sum()
}
