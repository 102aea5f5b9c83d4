//! Minecraft remote console (RCON) protocol.

pub mod codec;
pub mod connector;
pub mod packets;

pub use codec::new_rcon_connection;
pub use connector::connect;
pub use packets::RconPacket;
