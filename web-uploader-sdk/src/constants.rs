// ABOUTME: Centralized constants for the web uploader
// ABOUTME: Contains registration identifiers, request defaults, timeouts and notification text

/// Identifiers the uploader is registered and configured under
pub mod plugin {
    /// Uploader id exposed to the host registry
    pub const UPLOADER_ID: &str = "web-uploader";

    /// Display name shown in the host's uploader list
    pub const DISPLAY_NAME: &str = "Custom Web Uploader";

    /// Host configuration key holding the uploader settings
    pub const CONFIG_KEY: &str = "picBed.web-uploader";
}

/// Request defaults
pub mod request {
    pub const METHOD: &str = "POST";

    pub const MULTIPART_CONTENT_TYPE: &str = "multipart/form-data";

    pub const USER_AGENT: &str = "PicGo";

    /// Fallback MIME type for file parts with an unknown extension
    pub const OCTET_STREAM: &str = "application/octet-stream";
}

/// HTTP and request timeouts
pub mod timeouts {
    use std::time::Duration;

    /// Default timeout for a single upload request
    pub const HTTP_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
}

/// Notification titles and bodies emitted to the host
pub mod notifications {
    pub const PARSE_FAILED_TITLE: &str = "Response parsing failed";
    pub const PARSE_FAILED_BODY: &str = "Check the jsonPath setting";
    pub const UPLOAD_FAILED_TITLE: &str = "Upload failed";
}
