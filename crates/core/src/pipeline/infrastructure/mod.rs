pub mod default_backend;
