/// Decides whether a peer port may be recorded for a request.
pub trait PortCaptureFilter<Req: ?Sized> {
    fn should_capture(&self, port: i32, request: &Req) -> bool;
}

impl<Req: ?Sized, F> PortCaptureFilter<Req> for F
where
    F: Fn(i32, &Req) -> bool,
{
    fn should_capture(&self, port: i32, request: &Req) -> bool {
        self(port, request)
    }
}

/// Records every port.
#[derive(Clone, Copy, Debug, Default)]
pub struct CaptureAllPorts;

impl<Req: ?Sized> PortCaptureFilter<Req> for CaptureAllPorts {
    fn should_capture(&self, _port: i32, _request: &Req) -> bool {
        true
    }
}

/// Records every port except the listed ones, e.g. the default port of a
/// URL scheme.
#[derive(Clone, Copy, Debug)]
pub struct SkipPorts(pub &'static [i32]);

impl SkipPorts {
    /// Skips 80 and 443.
    pub const HTTP_DEFAULTS: SkipPorts = SkipPorts(&[80, 443]);
}

impl<Req: ?Sized> PortCaptureFilter<Req> for SkipPorts {
    fn should_capture(&self, port: i32, _request: &Req) -> bool {
        !self.0.contains(&port)
    }
}
