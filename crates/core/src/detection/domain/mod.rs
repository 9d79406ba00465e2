pub mod classifier_set;
pub mod detection_params;
pub mod object_detector;
