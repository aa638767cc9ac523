/// Collects render requests and terminal resizes between two update cycles,
/// so a burst of them costs one draw and one resize.
#[derive(Debug, Default)]
pub struct Coalescer {
    render_requests: usize,
    saw_render_event: bool,
    resizes: Vec<(u16, u16)>,
    last_size: Option<(u16, u16)>,
}

impl Coalescer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A `Cmd::RequestRender` reached the runner
    pub fn request_render(&mut self) {
        self.render_requests += 1;
    }

    /// The terminal's frame timer fired
    pub fn note_render_event(&mut self) {
        self.saw_render_event = true;
    }

    pub fn note_resize(&mut self, width: u16, height: u16) {
        self.resizes.push((width, height));
    }

    /// Size to apply this cycle, if any resize arrived since the last one
    pub fn take_resize(&mut self) -> Option<(u16, u16)> {
        if self.resizes.is_empty() {
            return None;
        }
        let size = Self::decide_resize(self.last_size, &self.resizes);
        self.resizes.clear();
        if size.is_some() {
            self.last_size = size;
        }
        size
    }

    /// Whether to draw now; resets the collected inputs
    pub fn take_render(&mut self) -> bool {
        let render = Self::decide_render(self.render_requests, self.saw_render_event);
        self.render_requests = 0;
        self.saw_render_event = false;
        render
    }

    /// Pure decision function: whether to render this loop based on coalesced inputs
    #[inline]
    pub fn decide_render(queued_render_reqs: usize, saw_tui_render: bool) -> bool {
        queued_render_reqs > 0 || saw_tui_render
    }

    /// Pure decision function: coalesce multiple resizes into last-only
    #[inline]
    pub fn decide_resize(
        last_seen: Option<(u16, u16)>,
        events: &[(u16, u16)],
    ) -> Option<(u16, u16)> {
        events.last().copied().or(last_seen)
    }
}
