use std::sync::Arc;
use crate::drivers::source::{ListenerId, SampleListener, SampleSource};
/// Registration of one listener with one source. Dropping it detaches.
pub struct Subscription {
    source: Arc<dyn SampleSource>,
    id: Option<ListenerId>,
}
impl Subscription {
    pub fn attach(source: Arc<dyn SampleSource>, listener: Arc<dyn SampleListener>) -> Self {
        let history = listener.required_history();
        let name = listener.name().to_owned();
        let id = source.attach(listener);
        log::info!("{name} subscribed with {history:?} of required history");
        Self {
            source,
            id: Some(id),
        }
    }
    pub fn is_attached(&self) -> bool {
        self.id.is_some()
    }
    /// Unregisters from the source. Blocks until any delivery already in progress
    /// has returned; nothing is delivered afterwards.
    pub fn detach(&mut self) {
        if let Some(id) = self.id.take() {
            if !self.source.detach(id) {
                log::warn!("listener {id:?} was already gone from its source");
            }
        }
    }
}
impl Drop for Subscription {
    fn drop(&mut self) {
        self.detach();
    }
}
