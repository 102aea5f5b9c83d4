//! RCON TCP connection, authorization and command execution.

use std::io;

use futures::{SinkExt, StreamExt};
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::TcpStream;
use tracing::debug;

use crate::common::error::{ConsoleError, ProtocolError, ProtocolResult};
use crate::protocol::rcon::codec::{new_rcon_connection, RconConnection};
use crate::protocol::rcon::packets::*;

/// One authenticated-or-not RCON session over a stream.
pub struct RconSession<S> {
    connection: RconConnection<S>,
    next_id: i32,
}

/// Open a TCP connection to an RCON server.
pub async fn connect(host: &str, port: u16) -> Result<RconSession<TcpStream>, ConsoleError> {
    debug!("Connecting to console at {}:{}", host, port);

    let stream = TcpStream::connect((host, port))
        .await
        .map_err(|e| ConsoleError::Connect {
            host: host.to_string(),
            port,
            source: e,
        })?;

    Ok(RconSession::new(stream))
}

impl<S> RconSession<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S) -> Self {
        Self {
            connection: new_rcon_connection(stream),
            next_id: 0,
        }
    }

    /// Log in with `password`.
    ///
    /// Some servers send an empty response value ahead of the auth
    /// response; it is skipped.
    pub async fn authorize(&mut self, password: &str) -> Result<(), ConsoleError> {
        let request_id = self.next_request_id();
        let auth_error = |e: ProtocolError| ConsoleError::Auth {
            reason: e.to_string(),
        };

        self.send(RconPacket::login(request_id, password))
            .await
            .map_err(auth_error)?;

        loop {
            let packet = self.receive().await.map_err(auth_error)?;

            match (packet.packet_type, packet.request_id) {
                (SERVERDATA_AUTH_RESPONSE, AUTH_FAILED_ID) => {
                    return Err(ConsoleError::Auth {
                        reason: "password rejected".to_string(),
                    });
                }
                (SERVERDATA_AUTH_RESPONSE, id) if id == request_id => {
                    debug!("Console authorization accepted");
                    return Ok(());
                }
                (packet_type, id) => {
                    debug!("Skipping packet type {} id {} during authorization", packet_type, id);
                }
            }
        }
    }

    /// Run `command` and return the server's response text.
    pub async fn execute(&mut self, command: &str) -> Result<String, ConsoleError> {
        let request_id = self.next_request_id();
        let exec_error = |e: ProtocolError| ConsoleError::Exec {
            command: command.to_string(),
            reason: e.to_string(),
        };

        debug!("Executing console command: {}", command);
        self.send(RconPacket::command(request_id, command))
            .await
            .map_err(exec_error)?;

        loop {
            let packet = self.receive().await.map_err(exec_error)?;

            if packet.packet_type == SERVERDATA_RESPONSE_VALUE && packet.request_id == request_id {
                let body = packet.body_text();
                debug!("Console response ({} bytes): {}", body.len(), body);
                return Ok(body);
            }

            debug!(
                "Skipping packet type {} id {} while waiting for id {}",
                packet.packet_type, packet.request_id, request_id
            );
        }
    }

    fn next_request_id(&mut self) -> i32 {
        // Ids stay positive so they never collide with AUTH_FAILED_ID
        self.next_id = self.next_id.checked_add(1).unwrap_or(1);
        self.next_id
    }

    async fn send(&mut self, packet: RconPacket) -> ProtocolResult<()> {
        self.connection.send(packet).await
    }

    async fn receive(&mut self) -> ProtocolResult<RconPacket> {
        match self.connection.next().await {
            Some(result) => result,
            None => Err(ProtocolError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "connection closed by server",
            ))),
        }
    }
}
