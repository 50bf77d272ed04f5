pub const YOLO_MODEL_NAME: &str = "yolo11n-pose_widerface.onnx";
pub const YOLO_MODEL_URL: &str =
    "https://github.com/neutrinographics/faceguard/releases/download/v0.1.0/yolo11n-pose_widerface.onnx";

/// Directory name under the platform cache dir where models are kept.
pub const CACHE_APP_DIR: &str = "FaceSym";

pub const BOX_COLOR: [u8; 3] = [0, 0, 255];
pub const LABEL_TEXT_COLOR: [u8; 3] = [255, 255, 255];
pub const MIDLINE_COLOR: [u8; 3] = [255, 255, 0];
pub const MIDLINE_WIDTH: u32 = 10;

/// Sources processed when the driver is run without arguments.
pub const DEFAULT_SOURCES: &[&str] = &[
    "https://pbs.twimg.com/media/E7okHDEVUAE1O6i?format=jpg&name=orig",
    "https://pbs.twimg.com/media/E7jaibgUcAUWvg-?format=jpg&name=orig",
    "https://pbs.twimg.com/media/E7jahEbUcAMNLdU?format=jpg&name=orig",
    "https://pbs.twimg.com/media/E7Jqli9VEAEStvs?format=jpg&name=orig",
    "https://pbs.twimg.com/media/E7Jqk-aUcAcfg3o?format=jpg&name=orig",
    "https://pbs.twimg.com/media/E7EhGi2XoAsMrO5?format=jpg&name=orig",
    "https://pbs.twimg.com/media/E5dhLccUYAUD5Yx?format=jpg&name=orig",
    "https://pbs.twimg.com/media/E5TOAqUVUAMckXT?format=jpg&name=orig",
    "https://pbs.twimg.com/media/E4vK6e0VgAAksnK?format=jpg&name=orig",
    "https://pbs.twimg.com/media/E4Va7u4VkAAKde3?format=jpg&name=orig",
    "https://pbs.twimg.com/media/E4A0ksEUYAIpynP?format=jpg&name=orig",
    "https://pbs.twimg.com/media/E3xXzcyUYAIX1dC?format=jpg&name=orig",
    "https://pbs.twimg.com/media/E2zkvONVcAQEE_S?format=jpg&name=orig",
    "https://pbs.twimg.com/media/E1cBsxDUcAIe_LZ?format=jpg&name=orig",
    "https://pbs.twimg.com/media/E1W4HTRVUAgYkmo?format=jpg&name=orig",
    "https://pbs.twimg.com/media/E1HbVAeVIAId5yP?format=jpg&name=orig",
    "https://pbs.twimg.com/media/E09INVFUcAYpcWo?format=jpg&name=orig",
    "https://pbs.twimg.com/media/E0oh0hmUUAAfJV9?format=jpg&name=orig",
];
