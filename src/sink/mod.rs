//! Output sinks driven by the writer thread

pub mod console;
pub mod file;

pub use console::StdoutMirror;
pub use file::FileSink;
