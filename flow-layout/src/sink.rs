//! Output sinks for published layout updates.
//!
//! Every update the controller produces is also returned from the call that
//! caused it; a sink is only needed when the consumer lives elsewhere (a
//! rendering task, a test recorder).

use std::hash::Hash;

use tokio::sync::mpsc;

use crate::controller::LayoutUpdate;

/// Receives every layout update a controller publishes.
pub trait LayoutSink<Id: Hash + Eq> {
    fn publish(&mut self, update: &LayoutUpdate<Id>);
}

impl<Id, F> LayoutSink<Id> for F
where
    Id: Hash + Eq,
    F: FnMut(&LayoutUpdate<Id>),
{
    fn publish(&mut self, update: &LayoutUpdate<Id>) {
        self(update)
    }
}

/// Sink that forwards updates over an unbounded tokio channel.
pub struct ChannelSink<Id: Hash + Eq> {
    tx: mpsc::UnboundedSender<LayoutUpdate<Id>>,
}

impl<Id: Hash + Eq> ChannelSink<Id> {
    pub fn new(tx: mpsc::UnboundedSender<LayoutUpdate<Id>>) -> Self {
        Self { tx }
    }
}

impl<Id: Clone + Hash + Eq> LayoutSink<Id> for ChannelSink<Id> {
    fn publish(&mut self, update: &LayoutUpdate<Id>) {
        if self.tx.send(update.clone()).is_err() {
            tracing::debug!(generation = update.generation, "layout receiver dropped; update discarded");
        }
    }
}

/// Create a channel sink and the receiver its updates arrive on.
pub fn channel<Id: Hash + Eq>() -> (ChannelSink<Id>, mpsc::UnboundedReceiver<LayoutUpdate<Id>>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (ChannelSink::new(tx), rx)
}
