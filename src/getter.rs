use std::net::SocketAddr;

use crate::semconv::{NetTransport, SockFamily};

/// Source of peer identity for one kind of outbound client call.
///
/// The application-level fields (`peer_name`, `peer_port`) describe what the
/// caller asked for. The `sock_*` fields describe the connection that was
/// actually made and default to unknown.
pub trait NetClientAttributesGetter {
    type Request;
    type Response;

    fn peer_name(&self, request: &Self::Request) -> Option<String>;

    fn peer_port(&self, request: &Self::Request) -> Option<i32>;

    fn transport(
        &self,
        request: &Self::Request,
        response: Option<&Self::Response>,
    ) -> Option<NetTransport>;

    fn sock_peer_addr(
        &self,
        _request: &Self::Request,
        _response: Option<&Self::Response>,
    ) -> Option<String> {
        None
    }

    fn sock_peer_port(
        &self,
        _request: &Self::Request,
        _response: Option<&Self::Response>,
    ) -> Option<i32> {
        None
    }

    fn sock_family(
        &self,
        _request: &Self::Request,
        _response: Option<&Self::Response>,
    ) -> Option<SockFamily> {
        None
    }

    fn sock_peer_name(
        &self,
        _request: &Self::Request,
        _response: Option<&Self::Response>,
    ) -> Option<String> {
        None
    }
}

/// A client that knows the connected peer as a [`SocketAddr`].
///
/// Wrap it in [`SocketAddrGetter`] to get a [`NetClientAttributesGetter`].
pub trait SocketAddrSource {
    type Request;
    type Response;

    fn peer_name(&self, request: &Self::Request) -> Option<String>;

    fn peer_port(&self, request: &Self::Request) -> Option<i32>;

    fn transport(
        &self,
        request: &Self::Request,
        response: Option<&Self::Response>,
    ) -> Option<NetTransport>;

    fn peer_socket_addr(
        &self,
        request: &Self::Request,
        response: Option<&Self::Response>,
    ) -> Option<SocketAddr>;

    fn sock_peer_name(
        &self,
        _request: &Self::Request,
        _response: Option<&Self::Response>,
    ) -> Option<String> {
        None
    }
}

/// Derives the socket-level fields from a [`SocketAddrSource`].
#[derive(Clone, Debug, Default)]
pub struct SocketAddrGetter<S>(pub S);

impl<S: SocketAddrSource> NetClientAttributesGetter for SocketAddrGetter<S> {
    type Request = S::Request;
    type Response = S::Response;

    fn peer_name(&self, request: &Self::Request) -> Option<String> {
        self.0.peer_name(request)
    }

    fn peer_port(&self, request: &Self::Request) -> Option<i32> {
        self.0.peer_port(request)
    }

    fn transport(
        &self,
        request: &Self::Request,
        response: Option<&Self::Response>,
    ) -> Option<NetTransport> {
        self.0.transport(request, response)
    }

    fn sock_peer_addr(
        &self,
        request: &Self::Request,
        response: Option<&Self::Response>,
    ) -> Option<String> {
        self.0
            .peer_socket_addr(request, response)
            .map(|addr| addr.ip().to_string())
    }

    fn sock_peer_port(
        &self,
        request: &Self::Request,
        response: Option<&Self::Response>,
    ) -> Option<i32> {
        self.0
            .peer_socket_addr(request, response)
            .map(|addr| i32::from(addr.port()))
    }

    fn sock_family(
        &self,
        request: &Self::Request,
        response: Option<&Self::Response>,
    ) -> Option<SockFamily> {
        self.0
            .peer_socket_addr(request, response)
            .map(|addr| match addr {
                SocketAddr::V4(_) => SockFamily::Inet,
                SocketAddr::V6(_) => SockFamily::Inet6,
            })
    }

    fn sock_peer_name(
        &self,
        request: &Self::Request,
        response: Option<&Self::Response>,
    ) -> Option<String> {
        self.0.sock_peer_name(request, response)
    }
}
