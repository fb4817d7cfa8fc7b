//! Serial bridge support for a microcontroller-driven strip.

use serialport;
use std::io;

use super::{StripHost, FRAME_LEN};
use crate::color::Rgb;
use crate::strip::LED_COUNT;

/// Frame start marker.
const FRAME_HEADER: [u8; 2] = [0x7e, 0x01];
/// Frame end marker.
const FRAME_TRAILER: [u8; 1] = [0xe7];

/// The serial host passes committed frames to a microcontroller bridge
/// connected through a serial port.
///
/// A frame is the header, `FRAME_LEN` color bytes in pixel order (red,
/// green, blue per pixel), and the trailer.
pub struct SerialStrip {
    /// Output port. Unset runs the host unconnected, which is useful on
    /// machines without the bridge plugged in.
    port: Option<Box<dyn serialport::SerialPort>>,
    /// Buffer for raw frame data.
    payload: [u8; FRAME_LEN],
}

impl SerialStrip {
    /// Construct a new serial strip host.
    pub fn new(path: Option<&String>) -> io::Result<SerialStrip> {
        println!("[serial] Strip bridge @ {:?}", path);
        let port = match path {
            Some(path) => {
                let mut port = serialport::open(path)?;
                port.set_baud_rate(115_200)?;
                Some(port)
            }
            None => None,
        };

        Ok(SerialStrip {
            payload: [0; FRAME_LEN],
            port,
        })
    }
}

impl StripHost for SerialStrip {
    fn set_pixel(&mut self, index: usize, color: Rgb) {
        if index >= LED_COUNT {
            panic!("Invalid pixel index: {}", index);
        }
        let offset = index * 3;
        self.payload[offset] = color.red;
        self.payload[offset + 1] = color.green;
        self.payload[offset + 2] = color.blue;
    }

    /// Flush the current buffer onto the wire as one frame.
    fn commit(&mut self) -> io::Result<()> {
        if let Some(port) = self.port.as_mut() {
            let mut writer =
                io::BufWriter::with_capacity(FRAME_HEADER.len() + FRAME_LEN + FRAME_TRAILER.len(), port);
            use std::io::Write;
            writer.write_all(&FRAME_HEADER)?;
            writer.write_all(&self.payload)?;
            writer.write_all(&FRAME_TRAILER)?;
            writer.flush()?;
        }
        Ok(())
    }
}
