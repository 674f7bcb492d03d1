/// Handle for one outstanding frame callback request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameRequest(pub u64);

/// Display-refresh subscription primitive.
///
/// Each request yields at most one frame callback. The host delivers that callback by calling the
/// scheduler's `on_frame` with the refresh timestamp.
pub trait DisplayRefresh {
    /// Ask for one callback on the next display refresh.
    fn request_frame(&mut self) -> FrameRequest;
    /// Withdraw an outstanding request. Unknown or already-fired requests are ignored.
    fn cancel_frame(&mut self, request: FrameRequest);
}

/// In-memory refresh source for tests and headless drivers.
#[derive(Debug, Default)]
pub struct ManualRefresh {
    next_id: u64,
    pending: Option<FrameRequest>,
    requested: u64,
    cancelled: u64,
}

impl ManualRefresh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the outstanding request, as the host does right before firing the callback.
    pub fn fire(&mut self) -> Option<FrameRequest> {
        self.pending.take()
    }

    pub fn pending(&self) -> Option<FrameRequest> {
        self.pending
    }

    pub fn requested(&self) -> u64 {
        self.requested
    }

    pub fn cancelled(&self) -> u64 {
        self.cancelled
    }
}

impl DisplayRefresh for ManualRefresh {
    fn request_frame(&mut self) -> FrameRequest {
        let req = FrameRequest(self.next_id);
        self.next_id += 1;
        self.requested += 1;
        self.pending = Some(req);
        req
    }

    fn cancel_frame(&mut self, request: FrameRequest) {
        if self.pending == Some(request) {
            self.pending = None;
            self.cancelled += 1;
        }
    }
}

impl<R: DisplayRefresh + ?Sized> DisplayRefresh for &mut R {
    fn request_frame(&mut self) -> FrameRequest {
        (**self).request_frame()
    }

    fn cancel_frame(&mut self, request: FrameRequest) {
        (**self).cancel_frame(request);
    }
}
