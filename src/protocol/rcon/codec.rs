//! RCON framing codec.

use bytes::{Buf, BufMut, BytesMut};
use tokio::io::{AsyncRead, AsyncWrite};
use tokio_util::codec::{Decoder, Encoder, Framed};

use crate::common::error::ProtocolError;
use crate::protocol::rcon::packets::{RconPacket, PACKET_OVERHEAD};

/// Largest length prefix accepted from the server.
pub const MAX_PACKET_SIZE: usize = 64 * 1024;

/// Codec for RCON packets.
///
/// Wire layout, all integers little-endian:
/// `length: i32 | request_id: i32 | type: i32 | body | 0x00 | 0x00`
/// where `length` counts every byte after itself.
#[derive(Debug, Default)]
pub struct RconCodec;

impl Decoder for RconCodec {
    type Item = RconPacket;
    type Error = ProtocolError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        if src.len() < 4 {
            return Ok(None);
        }

        let length = i32::from_le_bytes([src[0], src[1], src[2], src[3]]);
        if length < PACKET_OVERHEAD as i32 {
            return Err(ProtocolError::InvalidPacket {
                message: format!("length {} is below the minimum of {}", length, PACKET_OVERHEAD),
            });
        }

        let length = length as usize;
        if length > MAX_PACKET_SIZE {
            return Err(ProtocolError::PacketTooLarge {
                size: length,
                max: MAX_PACKET_SIZE,
            });
        }

        if src.len() < 4 + length {
            src.reserve(4 + length - src.len());
            return Ok(None);
        }

        src.advance(4);
        let mut frame = src.split_to(length);

        let request_id = frame.get_i32_le();
        let packet_type = frame.get_i32_le();
        // Drop the two trailing terminators
        let body = frame.split_to(frame.len() - 2).freeze();

        Ok(Some(RconPacket {
            request_id,
            packet_type,
            body,
        }))
    }
}

impl Encoder<RconPacket> for RconCodec {
    type Error = ProtocolError;

    fn encode(&mut self, item: RconPacket, dst: &mut BytesMut) -> Result<(), Self::Error> {
        let length = item.length();
        if length > MAX_PACKET_SIZE {
            return Err(ProtocolError::PacketTooLarge {
                size: length,
                max: MAX_PACKET_SIZE,
            });
        }

        dst.reserve(4 + length);
        dst.put_i32_le(length as i32);
        dst.put_i32_le(item.request_id);
        dst.put_i32_le(item.packet_type);
        dst.put_slice(&item.body);
        dst.put_u8(0);
        dst.put_u8(0);

        Ok(())
    }
}

/// A framed RCON connection.
pub type RconConnection<S> = Framed<S, RconCodec>;

/// Create a new RCON connection from a stream.
pub fn new_rcon_connection<S: AsyncRead + AsyncWrite>(stream: S) -> RconConnection<S> {
    Framed::new(stream, RconCodec)
}
