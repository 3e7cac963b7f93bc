#![forbid(unsafe_code)]

mod rendering;

pub use rendering::{init_tracing, render_sample_set_to_png, RenderConfig};
