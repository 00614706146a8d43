//! Example: Record peer attributes on a client span and print it.
//!
//! Usage:
//!     cargo run --example simple <HOST> <PORT> <CONNECTED_ADDR>
//!
//! e.g. `cargo run --example simple example.com 443 93.184.216.34:443`

use std::env;
use std::net::SocketAddr;

use fastrace::collector::{Config, ConsoleReporter};
use fastrace::prelude::*;
use fastrace_net_peer::{
    NetClientAttributesExtractor, NetTransport, SocketAddrGetter, SocketAddrSource,
};

struct Target {
    host: String,
    port: u16,
}

struct TargetGetter;

impl SocketAddrSource for TargetGetter {
    type Request = Target;
    type Response = SocketAddr;

    fn peer_name(&self, request: &Target) -> Option<String> {
        Some(request.host.clone())
    }

    fn peer_port(&self, request: &Target) -> Option<i32> {
        Some(request.port.into())
    }

    fn transport(&self, _: &Target, _: Option<&SocketAddr>) -> Option<NetTransport> {
        Some(NetTransport::IpTcp)
    }

    fn peer_socket_addr(&self, _: &Target, response: Option<&SocketAddr>) -> Option<SocketAddr> {
        response.copied()
    }
}

fn main() {
    // Parse command-line arguments
    let args: Vec<String> = env::args().collect();
    if args.len() != 4 {
        eprintln!("Usage: {} <HOST> <PORT> <CONNECTED_ADDR>", args[0]);
        std::process::exit(1);
    }
    let target = Target {
        host: args[1].clone(),
        port: args[2].parse().expect("PORT must be a number"),
    };
    let connected: SocketAddr = args[3]
        .parse()
        .expect("CONNECTED_ADDR must be an ip:port pair");

    fastrace::set_reporter(ConsoleReporter, Config::default());

    // Only record ports other than 443
    let extractor = NetClientAttributesExtractor::builder()
        .getter(SocketAddrGetter(TargetGetter))
        .capture_peer_port(|port: i32, _: &Target| port != 443)
        .build();

    {
        let mut root = Span::root("client call", SpanContext::random());
        extractor.on_start(&mut root, &target);
        extractor.on_end(&mut root, &target, Some(&connected));
    }

    fastrace::flush();
}
