mod formatter;

pub use formatter::OutlineFormatter;
