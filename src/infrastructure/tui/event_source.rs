use std::collections::VecDeque;
use std::sync::Arc;

use tokio::sync::{mpsc, Mutex};

use crate::infrastructure::tui;

/// Where the runner pulls terminal events from
pub enum EventSource {
    /// The TUI's own event stream
    Real(Arc<Mutex<dyn tui::TuiLike + Send>>),
    /// A fixed script; exhausted scripts read as end of input
    Test(VecDeque<tui::Event>),
    /// Events pushed by a test while the runner is live
    Channel(mpsc::UnboundedReceiver<tui::Event>),
}

impl EventSource {
    pub fn real(tui: Arc<Mutex<dyn tui::TuiLike + Send>>) -> Self {
        EventSource::Real(tui)
    }

    pub fn test(events: impl IntoIterator<Item = tui::Event>) -> Self {
        EventSource::Test(events.into_iter().collect())
    }

    pub fn channel() -> (mpsc::UnboundedSender<tui::Event>, Self) {
        let (tx, rx) = mpsc::unbounded_channel();
        (tx, EventSource::Channel(rx))
    }

    pub async fn next(&mut self) -> Option<tui::Event> {
        match self {
            EventSource::Real(tui) => {
                let mut guard = tui.lock().await;
                guard.next().await
            }
            EventSource::Test(queue) => queue.pop_front(),
            EventSource::Channel(rx) => rx.recv().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::infrastructure::tui::{test::TestTui, Event};

    #[tokio::test]
    async fn test_script_source() {
        let mut source = EventSource::test([Event::Tick, Event::Quit]);
        assert_eq!(source.next().await, Some(Event::Tick));
        assert_eq!(source.next().await, Some(Event::Quit));
        assert_eq!(source.next().await, None);
    }

    #[tokio::test]
    async fn test_channel_source() {
        let (tx, mut source) = EventSource::channel();
        let _ = tx.send(Event::Paste("/tmp/a.pdf".into()));
        drop(tx);
        assert_eq!(source.next().await, Some(Event::Paste("/tmp/a.pdf".into())));
        assert_eq!(source.next().await, None);
    }

    #[tokio::test]
    async fn test_real_source_reads_from_tui() -> color_eyre::Result<()> {
        let tui: Arc<Mutex<dyn tui::TuiLike + Send>> =
            Arc::new(Mutex::new(TestTui::with_events(10, 2, [Event::Render])?));
        let mut source = EventSource::real(tui);
        assert_eq!(source.next().await, Some(Event::Render));
        Ok(())
    }
}
