pub const FRONTAL_FACE_CASCADE: &str = "haarcascade_frontalface_default.xml";

pub const WINDOW_TITLE: &str = "OpenCV Experimental Classification Application";

/// Key code reported by the window toolkit for Escape.
pub const ESC_KEY_CODE: i32 = 27;

pub const DEFAULT_CAMERA_INDEX: i32 = 0;

pub const DEFAULT_SCALE_FACTOR: f64 = 1.3;
pub const DEFAULT_MIN_NEIGHBORS: i32 = 2;
pub const DEFAULT_MIN_SIZE: (i32, i32) = (8, 8);

pub const DEFAULT_CLIP_LIMIT: f64 = 2.0;
pub const DEFAULT_TILE_GRID: (u32, u32) = (8, 8);

/// Annotation color in BGR order.
pub const ANNOTATION_GREEN: [u8; 3] = [0, 255, 0];

/// Largest outline thickness `imgproc::rectangle` accepts.
pub const MAX_ANNOTATION_THICKNESS: u32 = 32767;

pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "tiff", "tif", "webp"];

/// Where OpenCV installs its bundled cascade files on common platforms.
pub const OPENCV_CASCADE_DIRS: &[&str] = &[
    "/usr/share/opencv4/haarcascades",
    "/usr/local/share/opencv4/haarcascades",
    "/usr/share/opencv/haarcascades",
    "/opt/homebrew/share/opencv4/haarcascades",
];
