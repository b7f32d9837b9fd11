// Adapters layer: concrete output sinks the notifiers write through.

pub mod sink;

pub use sink::{MemorySink, StdoutSink};
