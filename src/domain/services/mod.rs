mod line_diff;

pub use line_diff::*;
