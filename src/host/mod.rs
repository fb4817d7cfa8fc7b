//! Strip host devices receive pixel writes and produce physical output.

use std::io;

use crate::color::Rgb;
use crate::config;
use crate::strip::LED_COUNT;

pub mod memory;
pub mod proxy;
pub mod serial;

pub use self::memory::MemoryStrip;
pub use self::proxy::UdpStrip;
pub use self::serial::SerialStrip;

/// Bytes per committed frame: three color channels per pixel.
pub const FRAME_LEN: usize = LED_COUNT * 3;

/// Strip hosts buffer pixel writes and flush them to a device on commit.
///
/// Implementations are not required to be thread-safe on their own; the
/// dispatcher serializes all access behind its device lock.
pub trait StripHost {
    /// Stage a single pixel's color in the buffer.
    fn set_pixel(&mut self, index: usize, color: Rgb);
    /// Write the current buffer to the device in one frame.
    fn commit(&mut self) -> io::Result<()>;
}

/// Build the configured host device.
pub fn from_config(host: &config::Host) -> io::Result<Box<dyn StripHost + Send>> {
    let host_device: Box<dyn StripHost + Send> = match host {
        config::Host::Serial { path } => Box::new(SerialStrip::new(path.as_ref())?),
        config::Host::Udp { addr } => Box::new(UdpStrip::new(addr)?),
        config::Host::Memory {} => Box::new(MemoryStrip::new()),
    };
    Ok(host_device)
}
