//! Fixed grid geometry and half addressing for the LED HAT.

/// Rows on the HAT.
pub const ROWS: usize = 4;
/// Columns on the HAT.
pub const COLS: usize = 8;
/// Total number of addressable pixels.
pub const LED_COUNT: usize = ROWS * COLS;

/// Logical partition of the strip targeted by a request.
///
/// `Left` and `Right` are named from the perspective of a device mounted
/// with its USB port facing down; the orientation flag compensates for an
/// upside-down mounting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Half {
    Full,
    Left,
    Right,
}

/// A half value outside `left`/`right`/absent.
#[derive(Debug)]
pub struct UnknownHalf(pub String);

impl Half {
    /// Parse the optional half field of a request. An absent half means
    /// the whole strip.
    pub fn parse(value: Option<&str>) -> Result<Half, UnknownHalf> {
        match value {
            None => Ok(Half::Full),
            Some("left") => Ok(Half::Left),
            Some("right") => Ok(Half::Right),
            Some(other) => Err(UnknownHalf(other.to_string())),
        }
    }

    /// Swap left/right meaning for an upside-down mounting.
    fn oriented(self, inverted: bool) -> Half {
        if !inverted {
            return self;
        }
        match self {
            Half::Left => Half::Right,
            Half::Right => Half::Left,
            Half::Full => Half::Full,
        }
    }

    /// Physical pixel indices covered by this half, row-major.
    pub fn pixels(self, inverted: bool) -> Vec<usize> {
        let cols = match self.oriented(inverted) {
            Half::Full => 0..COLS,
            Half::Left => 0..COLS / 2,
            Half::Right => COLS / 2..COLS,
        };
        let mut indices = Vec::with_capacity(ROWS * cols.len());
        for row in 0..ROWS {
            for col in cols.clone() {
                indices.push(row * COLS + col);
            }
        }
        indices
    }

    /// Human-readable label used in response messages.
    pub fn label(self) -> &'static str {
        match self {
            Half::Full => "all",
            Half::Left => "left",
            Half::Right => "right",
        }
    }
}
