//! The signal dispatcher turns validated requests into pixel writes.
//!
//! This is the single entry point the listener calls into. It owns the
//! device lock: the critical section "stage N pixels, then commit" is
//! never entered by two writers at once, so concurrent requests and the
//! background enforcer resolve by last-committed-wins instead of tearing
//! a frame on the physical strip.

use std::io;
use std::sync::Mutex;

use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::color::{self, ColorError, Rgb};
use crate::config;
use crate::host::{self, StripHost};
use crate::schedule::{Schedule, ScheduleError};
use crate::strip::{Half, UnknownHalf};

pub mod enforcer;

/// A caller's intent, as received from the network layer.
#[derive(Deserialize, Debug)]
pub struct SignalRequest {
    /// "green", "red", "orange", or the sentinel "off".
    pub color: String,
    /// "left", "right", or absent for the whole strip.
    pub half: Option<String>,
    /// Intensity percentage (0-100). Absent means the configured default.
    pub intensity: Option<i64>,
}

/// A request to turn off all or part of the strip.
#[derive(Deserialize, Debug)]
pub struct OffRequest {
    pub half: Option<String>,
}

/// What a successful dispatch actually did.
#[derive(Debug)]
pub struct Outcome {
    /// The half the caller addressed (before orientation mapping).
    pub half: Half,
    /// The color name applied, lowercased.
    pub color: String,
    /// The intensity actually used.
    pub intensity: i64,
}

pub type SignalResult<T> = Result<T, SignalError>;

/// Failures a dispatch can produce. All are local and non-retryable.
#[derive(Debug)]
pub enum SignalError {
    /// The color name is not in the known set.
    InvalidColor(String),
    /// Intensity outside 0-100.
    InvalidIntensity(i64),
    /// Half value outside left/right/absent.
    InvalidHalf(String),
    /// Blocked by the operating-hours gate.
    ScheduleViolation,
    /// The device commit failed.
    Device(io::Error),
}

impl From<ColorError> for SignalError {
    fn from(err: ColorError) -> SignalError {
        match err {
            ColorError::UnknownName(name) => SignalError::InvalidColor(name),
            ColorError::IntensityRange(value) => SignalError::InvalidIntensity(value),
        }
    }
}

impl From<UnknownHalf> for SignalError {
    fn from(err: UnknownHalf) -> SignalError {
        SignalError::InvalidHalf(err.0)
    }
}

impl From<io::Error> for SignalError {
    fn from(err: io::Error) -> SignalError {
        SignalError::Device(err)
    }
}

/// Errors while building the dispatcher from configuration.
#[derive(Debug)]
pub enum SetupError {
    Schedule(ScheduleError),
    Io(io::Error),
}

impl From<ScheduleError> for SetupError {
    fn from(err: ScheduleError) -> SetupError {
        SetupError::Schedule(err)
    }
}

impl From<io::Error> for SetupError {
    fn from(err: io::Error) -> SetupError {
        SetupError::Io(err)
    }
}

/// Owns the strip host behind the device lock, together with the
/// immutable policy values fixed at startup.
pub struct Dispatcher {
    host: Mutex<Box<dyn StripHost + Send>>,
    schedule: Schedule,
    inverted: bool,
    default_intensity: i64,
    control_intensity: bool,
}

impl Dispatcher {
    /// Build a dispatcher and its host device from a configuration.
    pub fn from_config(config: &config::Root) -> Result<Dispatcher, SetupError> {
        let host_device = host::from_config(&config.host)?;
        let schedule = Schedule::from_config(&config.schedule)?;
        Ok(Dispatcher::new(host_device, schedule, &config.light))
    }

    pub fn new(
        host_device: Box<dyn StripHost + Send>,
        schedule: Schedule,
        light: &config::Light,
    ) -> Dispatcher {
        Dispatcher {
            host: Mutex::new(host_device),
            schedule,
            inverted: light.invert_position,
            default_intensity: light.default_intensity,
            control_intensity: light.control_intensity,
        }
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Apply a color (or "off") signal at the given moment.
    ///
    /// The schedule gate runs before anything else; a blocked request
    /// returns without touching the device buffer.
    pub fn apply_signal(&self, request: &SignalRequest, now: NaiveDateTime) -> SignalResult<Outcome> {
        if !self.schedule.allows(now) {
            return Err(SignalError::ScheduleViolation);
        }

        let half = Half::parse(request.half.as_deref())?;
        let intensity = self.effective_intensity(request.intensity);

        let rgb = if request.color.eq_ignore_ascii_case("off") {
            Rgb::BLACK
        } else {
            color::resolve(&request.color, intensity)?
        };

        self.write(half, rgb)?;

        Ok(Outcome {
            half,
            color: request.color.to_lowercase(),
            intensity,
        })
    }

    /// Turn off all or part of the strip at the given moment.
    ///
    /// The off path goes through the same gate and the same write path
    /// as the color path; only the resolved color is fixed at black.
    pub fn apply_off(&self, request: &OffRequest, now: NaiveDateTime) -> SignalResult<Outcome> {
        if !self.schedule.allows(now) {
            return Err(SignalError::ScheduleViolation);
        }

        let half = Half::parse(request.half.as_deref())?;
        self.write(half, Rgb::BLACK)?;

        Ok(Outcome {
            half,
            color: "off".to_string(),
            intensity: 0,
        })
    }

    /// Full-strip off that bypasses the schedule gate. Only the
    /// background enforcer uses this.
    pub fn force_off(&self) -> io::Result<()> {
        self.write(Half::Full, Rgb::BLACK)
    }

    fn effective_intensity(&self, requested: Option<i64>) -> i64 {
        if self.control_intensity {
            requested.unwrap_or(self.default_intensity)
        } else {
            self.default_intensity
        }
    }

    /// Stage every pixel of the half and commit once, all under the
    /// device lock.
    fn write(&self, half: Half, rgb: Rgb) -> io::Result<()> {
        let pixels = half.pixels(self.inverted);
        let mut host_device = self
            .host
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "device lock poisoned"))?;
        for index in pixels {
            host_device.set_pixel(index, rgb);
        }
        host_device.commit()
    }
}
