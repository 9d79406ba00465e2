pub mod frame_preprocessor;
pub mod preprocess_params;
