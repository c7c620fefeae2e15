use cclabel_core::BinaryMask;

/// Builds a mask from ASCII art where `#` marks foreground.
#[must_use]
pub fn mask(art: &str) -> BinaryMask {
    let rows: Vec<Vec<bool>> = art
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| line.bytes().map(|cell| cell == b'#').collect())
        .collect();
    BinaryMask::from_rows(&rows).expect("art must be rectangular")
}

/// Renders labels back to rows of digits, `.` for background.
#[must_use]
pub fn render(labels: &[u32], width: usize) -> Vec<String> {
    labels
        .chunks(width)
        .map(|row| {
            row.iter()
                .map(|&label| match label {
                    0 => '.',
                    n => char::from_digit(n, 36).unwrap_or('?'),
                })
                .collect()
        })
        .collect()
}
