//! `net.*` peer attributes for outbound client spans recorded with [fastrace].
//!
//! A [`NetClientAttributesExtractor`] reconciles the peer the caller asked
//! for (`net.peer.name`, `net.peer.port`) with the socket it actually reached
//! (`net.sock.peer.*`), recording socket details only when they add
//! information.
//!
//! ```no_run
//! use fastrace::prelude::*;
//! use fastrace_net_peer::{NetClientAttributesExtractor, NetClientAttributesGetter, NetTransport};
//!
//! struct Call {
//!     host: String,
//!     port: u16,
//! }
//!
//! struct CallGetter;
//!
//! impl NetClientAttributesGetter for CallGetter {
//!     type Request = Call;
//!     type Response = ();
//!
//!     fn peer_name(&self, request: &Call) -> Option<String> {
//!         Some(request.host.clone())
//!     }
//!
//!     fn peer_port(&self, request: &Call) -> Option<i32> {
//!         Some(request.port.into())
//!     }
//!
//!     fn transport(&self, _: &Call, _: Option<&()>) -> Option<NetTransport> {
//!         Some(NetTransport::IpTcp)
//!     }
//! }
//!
//! let extractor = NetClientAttributesExtractor::new_with_getter(CallGetter);
//! let call = Call { host: "api.example.com".into(), port: 443 };
//!
//! let mut span = Span::root("GET /", SpanContext::random());
//! extractor.on_start(&mut span, &call);
//! extractor.on_end(&mut span, &call, None);
//! ```

mod extractor;
mod filter;
mod getter;
pub mod semconv;
mod sink;

pub use extractor::NetClientAttributesExtractor;
pub use filter::{CaptureAllPorts, PortCaptureFilter, SkipPorts};
pub use getter::{NetClientAttributesGetter, SocketAddrGetter, SocketAddrSource};
pub use semconv::{NetTransport, SockFamily};
pub use sink::{AttributeSink, CurrentLocalSpan, Value};
