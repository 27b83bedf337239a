/// StopReason records why a transfer fetch stopped paginating
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    // The watermark reached the end of the requested window
    WindowCovered,
    // The server reported no further page
    NoNextPage,
    // The server returned a page without rows
    EmptyPage,
    // The configured page limit was reached
    PageLimit,
    // A request failed after some rows were already collected
    Degraded,
}

impl StopReason {
    /// Degraded fetches returned partial data; every other reason is a clean stop.
    pub fn is_degraded(&self) -> bool {
        matches!(self, StopReason::Degraded)
    }
}
