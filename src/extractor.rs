use crate::filter::{CaptureAllPorts, PortCaptureFilter};
use crate::getter::NetClientAttributesGetter;
use crate::semconv::{self, SockFamily};
use crate::sink::{AttributeSink, set_opt};

/// Writes `net.*` peer attributes for an outbound client call.
///
/// Application-level peer name and port are written when the call starts.
/// Socket-level attributes are written when it ends, and only when the socket
/// address differs from the peer name.
#[derive(Clone, Debug)]
pub struct NetClientAttributesExtractor<G, F = CaptureAllPorts> {
    getter: G,
    capture_peer_port: F,
}

#[bon::bon]
impl<G, F> NetClientAttributesExtractor<G, F>
where
    G: NetClientAttributesGetter,
    F: PortCaptureFilter<G::Request>,
{
    #[builder]
    pub fn new(getter: G, capture_peer_port: F) -> Self {
        Self {
            getter,
            capture_peer_port,
        }
    }
}

impl<G> NetClientAttributesExtractor<G, CaptureAllPorts>
where
    G: NetClientAttributesGetter,
{
    pub fn new_with_getter(getter: G) -> Self {
        Self {
            getter,
            capture_peer_port: CaptureAllPorts,
        }
    }
}

impl<G, F> NetClientAttributesExtractor<G, F>
where
    G: NetClientAttributesGetter,
    F: PortCaptureFilter<G::Request>,
{
    pub fn on_start<S>(&self, sink: &mut S, request: &G::Request)
    where
        S: AttributeSink + ?Sized,
    {
        let Some(peer_name) = self.getter.peer_name(request) else {
            return;
        };
        sink.set(semconv::NET_PEER_NAME, peer_name.into());

        if let Some(peer_port) = self.getter.peer_port(request).filter(|port| *port > 0) {
            if self.capture_peer_port.should_capture(peer_port, request) {
                sink.set(semconv::NET_PEER_PORT, peer_port.into());
            } else {
                log::trace!("peer port {peer_port} rejected by capture filter");
            }
        }
    }

    pub fn on_end<S>(&self, sink: &mut S, request: &G::Request, response: Option<&G::Response>)
    where
        S: AttributeSink + ?Sized,
    {
        set_opt(
            sink,
            semconv::NET_TRANSPORT,
            self.getter
                .transport(request, response)
                .map(|transport| transport.as_str()),
        );

        let peer_name = self.getter.peer_name(request);
        let peer_port = self.getter.peer_port(request);

        let Some(sock_peer_addr) = self.getter.sock_peer_addr(request, response) else {
            return;
        };
        if peer_name.as_deref() == Some(sock_peer_addr.as_str()) {
            log::trace!("socket address {sock_peer_addr} matches peer name");
            return;
        }
        sink.set(semconv::NET_SOCK_PEER_ADDR, sock_peer_addr.into());

        set_opt(
            sink,
            semconv::NET_SOCK_PEER_PORT,
            self.getter
                .sock_peer_port(request, response)
                .filter(|port| *port > 0 && Some(*port) != peer_port),
        );

        set_opt(
            sink,
            semconv::NET_SOCK_FAMILY,
            self.getter
                .sock_family(request, response)
                .filter(|family| *family != SockFamily::Inet)
                .map(|family| family.as_str()),
        );

        set_opt(
            sink,
            semconv::NET_SOCK_PEER_NAME,
            self.getter
                .sock_peer_name(request, response)
                .filter(|name| peer_name.as_ref() != Some(name)),
        );
    }
}
