pub(crate) mod destination;
pub(crate) mod formatter;
pub(crate) mod output_config;
pub(crate) mod output_mode;
pub(crate) mod write_error;
pub(crate) mod writer;

pub use destination::{Destination, expand_home};
pub use formatter::{ERROR_LINE_PREFIX, format};
pub use output_config::OutputConfig;
pub use output_mode::OutputMode;
pub use write_error::{Result as WriteResult, WriteError};
pub use writer::write_to;
