use crate::search::Overlay;

/// Receives a snapshot of the overlay after every expansion and once more
/// after the route has been annotated. Observers cannot influence the search.
pub trait ExpansionObserver {
    fn on_expansion(&mut self, overlay: &Overlay);
}

impl<F> ExpansionObserver for F
where
    F: FnMut(&Overlay),
{
    fn on_expansion(&mut self, overlay: &Overlay) {
        self(overlay)
    }
}

/// Discards every snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl ExpansionObserver for NullObserver {
    fn on_expansion(&mut self, _overlay: &Overlay) {}
}
