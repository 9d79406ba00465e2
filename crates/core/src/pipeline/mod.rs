pub mod backend;
pub mod errors;
pub mod infrastructure;
pub mod pipeline_logger;
pub mod session;
