mod structured_text;

pub use structured_text::*;
