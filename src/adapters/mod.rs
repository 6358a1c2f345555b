// Adapters layer: console implementations of the domain ports.

pub mod console;
