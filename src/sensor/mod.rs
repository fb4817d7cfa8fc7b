//! CPU temperature readout.

use std::fs;
use std::path::Path;

/// Where the kernel exposes the CPU thermal zone, in millidegrees.
const THERMAL_ZONE: &str = "/sys/class/thermal/thermal_zone0/temp";

pub type SensorResult<T> = Result<T, SensorError>;

#[derive(Debug)]
pub enum SensorError {
    /// The platform has no readable CPU temperature.
    Unavailable,
}

/// Current CPU temperature in Celsius, if the platform exposes one.
pub fn cpu_temperature() -> SensorResult<f32> {
    read_thermal_zone(THERMAL_ZONE)
}

fn read_thermal_zone<P: AsRef<Path>>(path: P) -> SensorResult<f32> {
    let raw = fs::read_to_string(path).map_err(|_| SensorError::Unavailable)?;
    let millidegrees: i64 = raw.trim().parse().map_err(|_| SensorError::Unavailable)?;
    Ok(millidegrees as f32 / 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::io::Write;

    fn temp_file(name: &str, contents: &str) -> std::path::PathBuf {
        let path = env::temp_dir().join(name);
        let mut file = fs::File::create(&path).unwrap();
        write!(file, "{}", contents).unwrap();
        path
    }

    #[test]
    fn parses_millidegrees() {
        let path = temp_file("busylight_thermal_ok", "45017\n");
        let celsius = read_thermal_zone(&path).unwrap();
        assert!((celsius - 45.017).abs() < 0.001);
    }

    #[test]
    fn missing_zone_is_unavailable() {
        let result = read_thermal_zone("/nonexistent/thermal_zone/temp");
        assert!(matches!(result, Err(SensorError::Unavailable)));
    }

    #[test]
    fn garbage_content_is_unavailable() {
        let path = temp_file("busylight_thermal_bad", "not-a-number");
        assert!(matches!(
            read_thermal_zone(&path),
            Err(SensorError::Unavailable)
        ));
    }
}
