use std::path::Path;
use std::{fs, io};

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Root {
    /// Server configuration.
    pub server: Server,
    /// Light behavior settings.
    pub light: Light,
    /// Operating-hours policy, in raw form.
    pub schedule: ScheduleConfig,
    /// Strip host device to drive.
    pub host: Host,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Server {
    /// Host address to serve the HTTP API on.
    pub web_addr: String,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Light {
    /// Intensity percentage used when the caller supplies none.
    pub default_intensity: i64,
    /// When false, caller-supplied intensity is ignored in favor of the default.
    pub control_intensity: bool,
    /// Set when the device is mounted upside-down; swaps left/right meaning.
    pub invert_position: bool,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleConfig {
    /// Whether the schedule is enforced at all.
    pub enabled: bool,
    /// Window start, "HH:MM", inclusive.
    pub start: String,
    /// Window end, "HH:MM", inclusive.
    pub end: String,
    /// Weekday names the window applies to ("mon".."sun" or full names).
    pub weekdays: Vec<String>,
    /// Seconds between enforcer checks. Defaults to 60.
    pub check_interval_secs: Option<u64>,
}

/// Strip host device configuration.
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase", tag = "type")]
pub enum Host {
    /// Microcontroller bridge on a serial port.
    Serial {
        /// Path to a serial device. Unset runs the bridge unconnected.
        path: Option<String>,
    },
    /// Forward committed frames to a remote busylight over UDP.
    Udp {
        /// Target UDP address.
        addr: String,
    },
    /// In-memory buffer, for headless runs.
    Memory {},
}

pub fn read_config_yaml<T: AsRef<Path>>(path: T) -> io::Result<Root> {
    let file = fs::File::open(path)?;
    let reader = io::BufReader::new(file);
    let root: Root = serde_yaml::from_reader(reader).map_err(|err| {
        eprintln!("Error reading config file: {:?}", err);
        io::Error::from(io::ErrorKind::InvalidData)
    })?;

    sanity_check(&root)?;

    Ok(root)
}

/// Quick sanity check for the configuration.
fn sanity_check(root: &Root) -> io::Result<()> {
    let intensity = root.light.default_intensity;
    if intensity < 0 || intensity > 100 {
        eprintln!("Default intensity out of range: {}", intensity);
        return Err(io::Error::from(io::ErrorKind::InvalidData));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "
server:
  webAddr: 0.0.0.0:5000
light:
  defaultIntensity: 20
  controlIntensity: true
  invertPosition: false
schedule:
  enabled: true
  start: \"08:00\"
  end: \"17:00\"
  weekdays: [mon, tue, wed, thu, fri]
host:
  type: memory
";

    #[test]
    fn parses_sample_config() {
        let root: Root = serde_yaml::from_str(SAMPLE).unwrap();
        assert_eq!(root.server.web_addr, "0.0.0.0:5000");
        assert_eq!(root.light.default_intensity, 20);
        assert!(root.light.control_intensity);
        assert!(!root.light.invert_position);
        assert_eq!(root.schedule.weekdays.len(), 5);
        assert!(root.schedule.check_interval_secs.is_none());
        match root.host {
            Host::Memory {} => {}
            other => panic!("expected memory host, got {:?}", other),
        }
        assert!(sanity_check(&root).is_ok());
    }

    #[test]
    fn rejects_out_of_range_default_intensity() {
        let mut root: Root = serde_yaml::from_str(SAMPLE).unwrap();
        root.light.default_intensity = 150;
        assert!(sanity_check(&root).is_err());
    }
}
