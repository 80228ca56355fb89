//! # Session
//!
//! Wallet-connection lifecycle: `Disconnected → Connecting → Connected → Disconnected`.
//! Exactly one session exists per running feed; nothing survives a restart.

use serde::Serialize;

use crate::error::{AppError, Result};
use crate::models::WalletKind;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionState {
    #[default]
    Disconnected,
    Connecting,
    Connected,
}

/// The current user's wallet connection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Session {
    state: ConnectionState,
    address: Option<String>,
    wallet: Option<WalletKind>,
}

/// Result of asking the session to start connecting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectStart {
    /// Now `Connecting`; the wallet must be asked for an address.
    Started,
    /// Already connected with this address.
    AlreadyConnected(String),
}

impl Session {
    pub fn state(&self) -> ConnectionState {
        self.state
    }

    pub fn is_connected(&self) -> bool {
        self.state == ConnectionState::Connected
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn wallet(&self) -> Option<WalletKind> {
        self.wallet
    }

    /// Address of the connected wallet, or `PermissionDenied`.
    pub fn require_connected(&self, action: &str) -> Result<&str> {
        match (&self.state, &self.address) {
            (ConnectionState::Connected, Some(address)) => Ok(address),
            _ => Err(AppError::PermissionDenied(format!(
                "please connect your wallet to {}",
                action
            ))),
        }
    }

    pub fn begin_connect(&mut self, wallet: WalletKind) -> Result<ConnectStart> {
        match self.state {
            ConnectionState::Connected => Ok(ConnectStart::AlreadyConnected(
                self.address.clone().unwrap_or_default(),
            )),
            ConnectionState::Connecting => Err(AppError::ConnectionRefused(
                "a connection request is already pending".into(),
            )),
            ConnectionState::Disconnected => {
                self.state = ConnectionState::Connecting;
                self.wallet = Some(wallet);
                Ok(ConnectStart::Started)
            }
        }
    }

    pub fn complete_connect(&mut self, address: String) -> Result<()> {
        if self.state != ConnectionState::Connecting {
            return Err(AppError::Internal(format!(
                "cannot complete a connection from state {:?}",
                self.state
            )));
        }
        self.state = ConnectionState::Connected;
        self.address = Some(address);
        Ok(())
    }

    /// Connecting failed; back to disconnected.
    pub fn fail_connect(&mut self) {
        if self.state == ConnectionState::Connecting {
            *self = Session::default();
        }
    }

    /// Idempotent.
    pub fn disconnect(&mut self) {
        *self = Session::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn connected(address: &str) -> Session {
        let mut session = Session::default();
        session.begin_connect(WalletKind::Sui).unwrap();
        session.complete_connect(address.to_string()).unwrap();
        session
    }

    #[test]
    fn starts_disconnected() {
        let session = Session::default();
        assert_eq!(session.state(), ConnectionState::Disconnected);
        assert!(session.address().is_none());
        assert!(matches!(session.require_connected("like"), Err(AppError::PermissionDenied(_))));
    }

    #[test]
    fn full_lifecycle() {
        let mut session = connected("0xdeadbeef...cafe");
        assert!(session.is_connected());
        assert_eq!(session.address(), Some("0xdeadbeef...cafe"));
        assert_eq!(session.wallet(), Some(WalletKind::Sui));

        session.disconnect();
        assert_eq!(session, Session::default());
        session.disconnect();
        assert_eq!(session, Session::default());
    }

    #[test]
    fn second_connect_while_pending_is_refused() {
        let mut session = Session::default();
        assert_eq!(session.begin_connect(WalletKind::Ethos).unwrap(), ConnectStart::Started);
        assert!(matches!(
            session.begin_connect(WalletKind::Ethos),
            Err(AppError::ConnectionRefused(_))
        ));
    }

    #[test]
    fn connect_when_connected_keeps_address() {
        let mut session = connected("0x12345678...abcd");
        assert_eq!(
            session.begin_connect(WalletKind::Suiet).unwrap(),
            ConnectStart::AlreadyConnected("0x12345678...abcd".into())
        );
        assert!(session.is_connected());
    }

    #[test]
    fn failed_connect_returns_to_disconnected() {
        let mut session = Session::default();
        session.begin_connect(WalletKind::Suiet).unwrap();
        session.fail_connect();
        assert_eq!(session.state(), ConnectionState::Disconnected);
        assert!(session.wallet().is_none());
    }

    #[test]
    fn complete_without_begin_is_rejected() {
        let mut session = Session::default();
        assert!(matches!(
            session.complete_connect("0x1".into()),
            Err(AppError::Internal(_))
        ));
    }
}
