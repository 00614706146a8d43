#![allow(deprecated)]

use std::fmt;

use opentelemetry_semantic_conventions::attribute;

pub const NET_PEER_NAME: &str = attribute::NET_PEER_NAME;
pub const NET_PEER_PORT: &str = attribute::NET_PEER_PORT;
pub const NET_TRANSPORT: &str = attribute::NET_TRANSPORT;
pub const NET_SOCK_PEER_ADDR: &str = attribute::NET_SOCK_PEER_ADDR;
pub const NET_SOCK_PEER_PORT: &str = attribute::NET_SOCK_PEER_PORT;
pub const NET_SOCK_FAMILY: &str = attribute::NET_SOCK_FAMILY;
pub const NET_SOCK_PEER_NAME: &str = attribute::NET_SOCK_PEER_NAME;

/// Values for `net.transport`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NetTransport {
    IpTcp,
    IpUdp,
    /// Named or anonymous pipe.
    Pipe,
    /// In-process communication.
    Inproc,
    Other,
}

impl NetTransport {
    pub fn as_str(self) -> &'static str {
        match self {
            NetTransport::IpTcp => "ip_tcp",
            NetTransport::IpUdp => "ip_udp",
            NetTransport::Pipe => "pipe",
            NetTransport::Inproc => "inproc",
            NetTransport::Other => "other",
        }
    }
}

impl fmt::Display for NetTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Values for `net.sock.family`.
///
/// [`SockFamily::Inet`] is the default and is never recorded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SockFamily {
    #[default]
    Inet,
    Inet6,
    Unix,
}

impl SockFamily {
    pub fn as_str(self) -> &'static str {
        match self {
            SockFamily::Inet => "inet",
            SockFamily::Inet6 => "inet6",
            SockFamily::Unix => "unix",
        }
    }
}

impl fmt::Display for SockFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
