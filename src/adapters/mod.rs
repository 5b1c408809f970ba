// Adapters layer: concrete implementations for external systems (input file, console, output file).

pub mod sink;
pub mod source;
