pub mod formatter;

pub use formatter::{format_aliases, format_languages};
