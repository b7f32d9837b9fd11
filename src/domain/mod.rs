// Domain layer: the notifier capability and the output port it writes through.
// No external dependencies beyond the crate's error type.

pub mod ports;
