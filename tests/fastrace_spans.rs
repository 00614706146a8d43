use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use fastrace::collector::{Config, Reporter};
use fastrace::prelude::*;
use fastrace_net_peer::{
    CurrentLocalSpan, NetClientAttributesExtractor, NetTransport, SkipPorts, SocketAddrGetter,
    SocketAddrSource,
};

struct Collect(Arc<Mutex<Vec<SpanRecord>>>);

impl Reporter for Collect {
    fn report(&mut self, spans: Vec<SpanRecord>) {
        self.0.lock().unwrap().extend(spans);
    }
}

struct HttpCall {
    host: &'static str,
    port: u16,
}

struct HttpGetter;

impl SocketAddrSource for HttpGetter {
    type Request = HttpCall;
    type Response = SocketAddr;

    fn peer_name(&self, request: &HttpCall) -> Option<String> {
        Some(request.host.to_string())
    }

    fn peer_port(&self, request: &HttpCall) -> Option<i32> {
        Some(request.port.into())
    }

    fn transport(&self, _: &HttpCall, _: Option<&SocketAddr>) -> Option<NetTransport> {
        Some(NetTransport::IpTcp)
    }

    fn peer_socket_addr(&self, _: &HttpCall, response: Option<&SocketAddr>) -> Option<SocketAddr> {
        response.copied()
    }
}

fn properties(span: &SpanRecord) -> Vec<(&str, &str)> {
    span.properties
        .iter()
        .map(|(k, v)| (k.as_ref(), v.as_ref()))
        .collect()
}

#[test]
fn peer_attributes_land_on_spans() {
    let collected = Arc::new(Mutex::new(Vec::new()));
    fastrace::set_reporter(Collect(collected.clone()), Config::default());

    let extractor = NetClientAttributesExtractor::builder()
        .getter(SocketAddrGetter(HttpGetter))
        .capture_peer_port(SkipPorts::HTTP_DEFAULTS)
        .build();

    let call = HttpCall {
        host: "api.example.com",
        port: 443,
    };
    let connected: SocketAddr = "[2606:2800:220:1::248]:443".parse().unwrap();

    {
        let mut root = Span::root("GET /", SpanContext::random());
        extractor.on_start(&mut root, &call);

        let _guard = root.set_local_parent();
        let _connect = LocalSpan::enter_with_local_parent("connect");
        extractor.on_end(&mut CurrentLocalSpan, &call, Some(&connected));
    }

    {
        let failed = HttpCall {
            host: "api.example.com",
            port: 8443,
        };
        let mut root = Span::root("GET /retry", SpanContext::random());
        extractor.on_start(&mut root, &failed);
        extractor.on_end(&mut root, &failed, None);
    }

    fastrace::flush();

    let spans = collected.lock().unwrap();
    let find = |name: &str| {
        spans
            .iter()
            .find(|span| span.name == name)
            .unwrap_or_else(|| panic!("span {name} not reported"))
    };

    assert_eq!(
        properties(find("GET /")),
        vec![("net.peer.name", "api.example.com")]
    );
    assert_eq!(
        properties(find("connect")),
        vec![
            ("net.transport", "ip_tcp"),
            ("net.sock.peer.addr", "2606:2800:220:1::248"),
            ("net.sock.family", "inet6"),
        ]
    );
    assert_eq!(
        properties(find("GET /retry")),
        vec![
            ("net.peer.name", "api.example.com"),
            ("net.peer.port", "8443"),
            ("net.transport", "ip_tcp"),
        ]
    );
}
