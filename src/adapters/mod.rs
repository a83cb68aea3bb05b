// Adapters layer: concrete implementations of the domain ports.

pub mod render;

pub use render::{DelimitedRenderer, JsonRenderer, OutputFormat, TextRenderer};
