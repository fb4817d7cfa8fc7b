//! Forwards committed frames to a remote busylight over UDP.

use std::io;
use std::net::UdpSocket;

use super::{StripHost, FRAME_LEN};
use crate::color::Rgb;
use crate::strip::LED_COUNT;

/// Frame format version sent as the first byte of every datagram.
const FRAME_VERSION: u8 = 1;

/// The UDP strip host sends each committed frame as a single datagram:
/// a version byte followed by `FRAME_LEN` color bytes in pixel order.
pub struct UdpStrip {
    /// UDP socket reused between commits.
    socket: UdpSocket,
    /// Buffer for raw frame data.
    payload: [u8; FRAME_LEN],
}

impl UdpStrip {
    /// Build a new UDP strip host set to talk to a specific address.
    pub fn new(addr: &str) -> io::Result<UdpStrip> {
        println!("[udp] Strip forwarder @ {}", addr);
        let socket = UdpSocket::bind("0.0.0.0:0")?;
        socket.connect(addr)?;
        Ok(UdpStrip {
            socket,
            payload: [0; FRAME_LEN],
        })
    }
}

impl StripHost for UdpStrip {
    fn set_pixel(&mut self, index: usize, color: Rgb) {
        if index >= LED_COUNT {
            panic!("Invalid pixel index: {}", index);
        }
        let offset = index * 3;
        self.payload[offset] = color.red;
        self.payload[offset + 1] = color.green;
        self.payload[offset + 2] = color.blue;
    }

    fn commit(&mut self) -> io::Result<()> {
        let mut datagram = [0u8; 1 + FRAME_LEN];
        datagram[0] = FRAME_VERSION;
        datagram[1..].copy_from_slice(&self.payload);
        self.socket.send(&datagram)?;
        Ok(())
    }
}
