//! Live-push notifier backed by the in-process registry

mod live;

pub use live::LiveNotifier;
