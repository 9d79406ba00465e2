pub mod app_config;
pub mod constants;
pub mod frame;
pub mod gray_frame;
pub mod model_resolver;
#[cfg(feature = "opencv")]
pub mod opencv_mat;
pub mod region;
pub mod video_metadata;
