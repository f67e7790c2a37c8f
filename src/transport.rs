//! Frame-paced UDP transport
//!
//! Slices the assembled buffer into 20 ms frames and sends each as a
//! length-prefixed datagram, pacing against elapsed time from a
//! single monotonic anchor so per-frame sleep error never accumulates
//! over a long announcement.

use crate::audio::frame::frame_to_packet;
use crate::audio::{AudioBuffer, FRAME_MICROS, FRAME_SAMPLES};
use crate::{AnnounceError, Result};
use log::{error, info};
use std::net::{SocketAddr, ToSocketAddrs, UdpSocket};
use std::thread;
use std::time::{Duration, Instant};

/// Outcome of one transmission
pub struct TransmitReport {
    pub frames_sent: usize,
    pub frames_total: usize,
}

impl TransmitReport {
    pub fn complete(&self) -> bool {
        self.frames_sent == self.frames_total
    }
}

/// Pacing policy: how long to wait before sending `next_frame`, given
/// the time elapsed since frame 0 went out.
///
/// The target is the absolute schedule position `next_frame * 20 ms`,
/// not "20 ms after the previous send", so processing overhead inside
/// the loop is absorbed instead of accumulating as drift.
pub fn pace_delay(elapsed: Duration, next_frame: u64) -> Duration {
    let target = Duration::from_micros(next_frame * FRAME_MICROS);
    target.saturating_sub(elapsed)
}

/// Send the buffer to the bridge as paced, length-prefixed datagrams.
///
/// A send failure aborts the remainder immediately; the report says
/// how far transmission got. The socket is released on every exit
/// path. Only failing to create or aim the socket is an `Err`.
pub fn transmit(buffer: AudioBuffer, host: &str, port: u16) -> Result<TransmitReport> {
    let samples = buffer.into_samples();
    let frames_total = (samples.len() + FRAME_SAMPLES - 1) / FRAME_SAMPLES;

    let dest: SocketAddr = (host, port)
        .to_socket_addrs()
        .map_err(|e| AnnounceError::Transport(format!("Cannot resolve {}:{}: {}", host, port, e)))?
        .next()
        .ok_or_else(|| {
            AnnounceError::Transport(format!("No address found for {}:{}", host, port))
        })?;

    let socket = UdpSocket::bind("0.0.0.0:0")
        .map_err(|e| AnnounceError::Transport(format!("Failed to create socket: {}", e)))?;

    info!(
        "Sending {} bytes ({} frames) to {}",
        samples.len() * 2,
        frames_total,
        dest
    );

    let start = Instant::now();
    let mut frames_sent = 0;

    for (index, frame) in samples.chunks(FRAME_SAMPLES).enumerate() {
        let packet = frame_to_packet(frame);

        if let Err(e) = socket.send_to(&packet, dest) {
            error!("Send failed on frame {} of {}: {}", index, frames_total, e);
            break;
        }
        frames_sent += 1;

        thread::sleep(pace_delay(start.elapsed(), index as u64 + 1));
    }

    info!("Done sending audio ({} of {} frames)", frames_sent, frames_total);
    Ok(TransmitReport {
        frames_sent,
        frames_total,
    })
}
