//! RCON packet definitions.

use bytes::Bytes;

/// Client login request carrying the password.
pub const SERVERDATA_AUTH: i32 = 3;
/// Server answer to a login request.
pub const SERVERDATA_AUTH_RESPONSE: i32 = 2;
/// Client command request. Shares its value with `SERVERDATA_AUTH_RESPONSE`.
pub const SERVERDATA_EXECCOMMAND: i32 = 2;
/// Server answer to a command.
pub const SERVERDATA_RESPONSE_VALUE: i32 = 0;

/// Request id the server echoes back when the password is wrong.
pub const AUTH_FAILED_ID: i32 = -1;

/// Bytes counted by the length prefix besides the body:
/// request id (4) + type (4) + body terminator (1) + empty string terminator (1).
pub const PACKET_OVERHEAD: usize = 10;

/// A single RCON packet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RconPacket {
    pub request_id: i32,
    pub packet_type: i32,
    pub body: Bytes,
}

impl RconPacket {
    pub fn new(request_id: i32, packet_type: i32, body: impl Into<Bytes>) -> Self {
        Self {
            request_id,
            packet_type,
            body: body.into(),
        }
    }

    /// Login request for `password`.
    pub fn login(request_id: i32, password: &str) -> Self {
        Self::new(request_id, SERVERDATA_AUTH, password.as_bytes().to_vec())
    }

    /// Command request.
    pub fn command(request_id: i32, command: &str) -> Self {
        Self::new(request_id, SERVERDATA_EXECCOMMAND, command.as_bytes().to_vec())
    }

    /// Value of the length prefix for this packet.
    pub fn length(&self) -> usize {
        self.body.len() + PACKET_OVERHEAD
    }

    /// Body decoded as text. Invalid UTF-8 sequences are replaced.
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}
