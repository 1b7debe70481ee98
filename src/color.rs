//! Per-configuration mapping from cell state to paint color.
use image::Rgba;

use crate::error::ConfigError;
use crate::matrix::CellState;

pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Colors used to paint each [`CellState`].
///
/// Every state always has an entry, so a lookup can never miss. The table is
/// owned by a [`crate::options::RenderConfig`]; there is no shared global
/// copy, so configurations rendered on different threads stay independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorTable {
    entries: [Rgba<u8>; CellState::ALL.len()],
}

impl Default for ColorTable {
    fn default() -> Self {
        let mut entries = [BLACK; CellState::ALL.len()];
        entries[CellState::Background.index()] = WHITE;
        ColorTable { entries }
    }
}

impl ColorTable {
    /// Overwrites the color for `state`.
    pub fn set(&mut self, state: CellState, color: Rgba<u8>) {
        self.entries[state.index()] = color;
    }

    /// The current color for `state`.
    pub fn color_for(&self, state: CellState) -> Rgba<u8> {
        self.entries[state.index()]
    }
}

/// Parses `#RGB`, `#RRGGBB` or `#RRGGBBAA` into an opaque-by-default color.
///
/// The leading `#` is optional and digits are case-insensitive.
///
/// # Example
///
/// ```rust
/// use image::Rgba;
/// use qirender::color::parse_hex;
///
/// assert_eq!(parse_hex("#ff8000").unwrap(), Rgba([255, 128, 0, 255]));
/// assert_eq!(parse_hex("0F0").unwrap(), Rgba([0, 255, 0, 255]));
/// assert!(parse_hex("#12345").is_err());
/// ```
pub fn parse_hex(hex: &str) -> Result<Rgba<u8>, ConfigError> {
    let invalid = || ConfigError::InvalidHexColor(hex.to_string());
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
    let short = |i: usize| {
        u8::from_str_radix(&digits[i..i + 1], 16)
            .map(|v| v * 17)
            .map_err(|_| invalid())
    };
    match digits.len() {
        3 => Ok(Rgba([short(0)?, short(1)?, short(2)?, 255])),
        6 => Ok(Rgba([channel(0)?, channel(2)?, channel(4)?, 255])),
        8 => Ok(Rgba([channel(0)?, channel(2)?, channel(4)?, channel(6)?])),
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table() {
        let table = ColorTable::default();
        assert_eq!(table.color_for(CellState::Background), WHITE);
        assert_eq!(table.color_for(CellState::Foreground), BLACK);
        assert_eq!(table.color_for(CellState::Finder), BLACK);
    }

    #[test]
    fn test_set_only_touches_one_entry() {
        let mut table = ColorTable::default();
        let red = Rgba([255, 0, 0, 255]);
        table.set(CellState::Foreground, red);
        assert_eq!(table.color_for(CellState::Foreground), red);
        assert_eq!(table.color_for(CellState::Finder), BLACK);
        assert_eq!(table.color_for(CellState::Background), WHITE);
    }

    #[test]
    fn test_parse_hex_forms() {
        assert_eq!(parse_hex("#000000").unwrap(), BLACK);
        assert_eq!(parse_hex("FFFFFF").unwrap(), WHITE);
        assert_eq!(parse_hex("#AbC").unwrap(), Rgba([0xAA, 0xBB, 0xCC, 255]));
        assert_eq!(parse_hex("#11223380").unwrap(), Rgba([0x11, 0x22, 0x33, 0x80]));
    }

    #[test]
    fn test_parse_hex_rejects_garbage() {
        for bad in ["", "#", "#12", "#1234", "#12345g", "red", "#1234567", "#ééé"] {
            assert!(
                matches!(parse_hex(bad), Err(ConfigError::InvalidHexColor(_))),
                "{bad:?} should be rejected"
            );
        }
    }
}
