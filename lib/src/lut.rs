//! Glyph lookup for pixel intensities
//!
//! The palette is ordered from the sparsest glyph to the densest one. Dark
//! pixels pick dense glyphs, light pixels pick sparse ones, so the art reads
//! as ink on a light terminal-sized page.

/// Default palette, 10 levels from sparsest (space) to densest (@)
pub const PALETTE: [char; 10] = [
    ' ', // 0: sparsest, used for white
    '.', // 1
    ':', // 2
    '-', // 3
    '=', // 4
    '+', // 5
    '*', // 6
    '#', // 7
    '%', // 8
    '@', // 9: densest, used for black
];

/// Quantize an intensity onto `levels` palette steps
///
/// Computes `floor(value / 255 * (levels - 1))` in integer arithmetic, so
/// both ends land exactly on 0 and `levels - 1`.
pub fn glyph_index(value: u8, levels: usize) -> usize {
    if levels == 0 {
        return 0;
    }
    value as usize * (levels - 1) / u8::MAX as usize
}

/// Get the palette character for an intensity value
///
/// # Arguments
/// * `value` - Grayscale intensity [0, 255]
/// * `palette` - Glyphs ordered from sparsest to densest
///
/// # Returns
/// The glyph at `len - 1 - glyph_index(value, len)`, or a space for an
/// empty palette
pub fn glyph_for(value: u8, palette: &[char]) -> char {
    let len = palette.len();
    if len == 0 {
        return ' ';
    }
    palette[len - 1 - glyph_index(value, len)]
}
