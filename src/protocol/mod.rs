//! Wire protocols spoken to the game server.

pub mod rcon;
