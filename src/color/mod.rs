//! Named base colors and intensity scaling.

/// A single pixel's color value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    /// All channels zero, i.e. the pixel is off.
    pub const BLACK: Rgb = Rgb {
        red: 0,
        green: 0,
        blue: 0,
    };

    /// Scale each channel to a percentage of its base value, truncating.
    fn scaled(self, percent: u32) -> Rgb {
        Rgb {
            red: (u32::from(self.red) * percent / 100) as u8,
            green: (u32::from(self.green) * percent / 100) as u8,
            blue: (u32::from(self.blue) * percent / 100) as u8,
        }
    }
}

pub type ColorResult<T> = Result<T, ColorError>;

#[derive(Debug)]
pub enum ColorError {
    /// The requested name is not in the base color table.
    UnknownName(String),
    /// Intensity outside the 0-100 percent range.
    IntensityRange(i64),
}

/// Look up a base color by name and scale it by an intensity percentage.
///
/// Intensity is validated before the name so an out-of-range value is
/// reported no matter what the caller asked for.
pub fn resolve(name: &str, intensity: i64) -> ColorResult<Rgb> {
    if intensity < 0 || intensity > 100 {
        return Err(ColorError::IntensityRange(intensity));
    }
    let base = base_color(name).ok_or_else(|| ColorError::UnknownName(name.to_string()))?;
    Ok(base.scaled(intensity as u32))
}

/// Fixed base color table, matched case-insensitively.
fn base_color(name: &str) -> Option<Rgb> {
    let rgb = match name.to_ascii_lowercase().as_str() {
        "green" => Rgb {
            red: 0,
            green: 255,
            blue: 0,
        },
        "red" => Rgb {
            red: 255,
            green: 0,
            blue: 0,
        },
        "orange" => Rgb {
            red: 255,
            green: 69,
            blue: 0,
        },
        _ => return None,
    };
    Some(rgb)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_intensity_returns_base_color() {
        assert_eq!(
            resolve("green", 100).unwrap(),
            Rgb {
                red: 0,
                green: 255,
                blue: 0
            }
        );
        assert_eq!(
            resolve("red", 100).unwrap(),
            Rgb {
                red: 255,
                green: 0,
                blue: 0
            }
        );
        assert_eq!(
            resolve("orange", 100).unwrap(),
            Rgb {
                red: 255,
                green: 69,
                blue: 0
            }
        );
    }

    #[test]
    fn names_match_case_insensitively() {
        assert_eq!(resolve("GREEN", 75).unwrap(), resolve("green", 75).unwrap());
        assert_eq!(resolve("Orange", 30).unwrap(), resolve("orange", 30).unwrap());
    }

    #[test]
    fn channels_are_floored_per_channel() {
        // 255 * 50 / 100 = 127.5 and 69 * 50 / 100 = 34.5, both truncate.
        assert_eq!(
            resolve("orange", 50).unwrap(),
            Rgb {
                red: 127,
                green: 34,
                blue: 0
            }
        );
    }

    #[test]
    fn every_intensity_matches_the_floor_formula() {
        for name in &["green", "red", "orange"] {
            let base = base_color(name).unwrap();
            for intensity in 0..=100i64 {
                let resolved = resolve(name, intensity).unwrap();
                let pct = intensity as u32;
                assert_eq!(resolved.red, (u32::from(base.red) * pct / 100) as u8);
                assert_eq!(resolved.green, (u32::from(base.green) * pct / 100) as u8);
                assert_eq!(resolved.blue, (u32::from(base.blue) * pct / 100) as u8);
                assert!(resolved.red <= base.red);
                assert!(resolved.green <= base.green);
                assert!(resolved.blue <= base.blue);
            }
        }
    }

    #[test]
    fn out_of_range_intensity_fails_regardless_of_name() {
        match resolve("green", 101) {
            Err(ColorError::IntensityRange(101)) => {}
            other => panic!("expected intensity error, got {:?}", other),
        }
        match resolve("not-a-color", -1) {
            Err(ColorError::IntensityRange(-1)) => {}
            other => panic!("expected intensity error, got {:?}", other),
        }
    }

    #[test]
    fn unknown_name_fails() {
        match resolve("magenta", 50) {
            Err(ColorError::UnknownName(name)) => assert_eq!(name, "magenta"),
            other => panic!("expected unknown color, got {:?}", other),
        }
    }
}
