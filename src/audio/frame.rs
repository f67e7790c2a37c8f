//! Frame and packet encoding
//!
//! One wire packet per frame: a 4-byte big-endian length field that
//! always encodes `FRAME_BYTES`, followed by exactly `FRAME_BYTES` of
//! little-endian PCM. Pure functions, testable without a socket.

use crate::audio::{FRAME_BYTES, FRAME_SAMPLES};

/// Total datagram size: length header plus frame payload
pub const PACKET_BYTES: usize = 4 + FRAME_BYTES;

/// Encode one frame's samples as a wire packet.
///
/// `frame` holds at most `FRAME_SAMPLES` samples; a short final frame
/// is zero-padded so every packet carries exactly `FRAME_BYTES` of
/// payload. The length header is a fixed framing constant, not a
/// variable length field.
pub fn frame_to_packet(frame: &[i16]) -> [u8; PACKET_BYTES] {
    debug_assert!(frame.len() <= FRAME_SAMPLES);

    let mut packet = [0u8; PACKET_BYTES];
    packet[..4].copy_from_slice(&(FRAME_BYTES as u32).to_be_bytes());

    for (i, sample) in frame.iter().enumerate() {
        let bytes = sample.to_le_bytes();
        packet[4 + 2 * i] = bytes[0];
        packet[4 + 2 * i + 1] = bytes[1];
    }

    packet
}

/// Decode a packet's payload back into samples.
///
/// Inverse of [`frame_to_packet`] modulo tail padding; the bridge
/// does this on its side, and round-trip tests lean on it here.
pub fn packet_samples(packet: &[u8; PACKET_BYTES]) -> Vec<i16> {
    packet[4..]
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packet_size_and_header() {
        let frame = [0i16; FRAME_SAMPLES];
        let packet = frame_to_packet(&frame);
        assert_eq!(packet.len(), 324);
        // Big-endian 320
        assert_eq!(packet[..4], [0x00, 0x00, 0x01, 0x40]);
    }

    #[test]
    fn test_payload_is_little_endian() {
        let mut frame = [0i16; FRAME_SAMPLES];
        frame[0] = 0x1234;
        frame[1] = -1;
        let packet = frame_to_packet(&frame);
        assert_eq!(packet[4], 0x34);
        assert_eq!(packet[5], 0x12);
        assert_eq!(packet[6], 0xFF);
        assert_eq!(packet[7], 0xFF);
    }

    #[test]
    fn test_short_final_frame_is_zero_padded() {
        let frame = [1000i16; 7];
        let packet = frame_to_packet(&frame);
        let decoded = packet_samples(&packet);
        assert_eq!(decoded.len(), FRAME_SAMPLES);
        assert_eq!(&decoded[..7], &[1000i16; 7]);
        assert!(decoded[7..].iter().all(|&s| s == 0));
    }

    #[test]
    fn test_round_trip_full_frame() {
        let frame: Vec<i16> = (0..FRAME_SAMPLES as i16).map(|i| i * 100).collect();
        let packet = frame_to_packet(&frame);
        assert_eq!(packet_samples(&packet), frame);
    }
}
