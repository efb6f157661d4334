//! Camera / landmark-model availability.
//!
//! Losing the sensor never stops the scene: the tree keeps rendering in its
//! current mode and the UI offers a retry.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SensorError {
    #[error("camera permission denied")]
    PermissionDenied,
    #[error("no camera found")]
    NoCamera,
    #[error("hand landmark model failed to load: {0}")]
    ModelLoad(String),
    #[error("camera error: {0}")]
    Other(String),
}

impl SensorError {
    /// Map a `DOMException` name from `getUserMedia` to an error.
    pub fn from_dom_exception(name: &str, message: &str) -> Self {
        match name {
            "NotAllowedError" | "SecurityError" => SensorError::PermissionDenied,
            "NotFoundError" | "OverconstrainedError" => SensorError::NoCamera,
            _ => SensorError::Other(if message.is_empty() {
                name.to_string()
            } else {
                message.to_string()
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SensorStatus {
    #[default]
    Idle,
    /// Waiting on the permission prompt or model download.
    Requesting,
    Streaming,
    Unavailable(SensorError),
}

impl SensorStatus {
    pub fn can_start(&self) -> bool {
        matches!(self, SensorStatus::Idle | SensorStatus::Unavailable(_))
    }

    pub fn can_retry(&self) -> bool {
        matches!(self, SensorStatus::Unavailable(_))
    }

    pub fn is_streaming(&self) -> bool {
        matches!(self, SensorStatus::Streaming)
    }

    pub fn label(&self) -> &'static str {
        match self {
            SensorStatus::Idle => "Start AI Camera",
            SensorStatus::Requesting => "Connecting...",
            SensorStatus::Streaming => "AI Gesture Control: Active",
            SensorStatus::Unavailable(SensorError::PermissionDenied) => "Camera blocked - retry",
            SensorStatus::Unavailable(_) => "Camera unavailable - retry",
        }
    }
}

/// Tracks the two halves of hand tracking: the camera stream and the
/// landmark model. Streaming only once both are up.
#[derive(Debug, Default)]
pub struct HandSensor {
    status: SensorStatus,
    camera_live: bool,
    model_ready: bool,
}

impl HandSensor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &SensorStatus {
        &self.status
    }

    /// User asked for the camera. Returns false if a request is already
    /// pending or the camera is live.
    pub fn request(&mut self) -> bool {
        if !self.status.can_start() {
            return false;
        }
        self.camera_live = false;
        self.set(SensorStatus::Requesting);
        true
    }

    pub fn camera_started(&mut self) {
        self.camera_live = true;
        self.refresh();
    }

    pub fn camera_failed(&mut self, err: SensorError) {
        self.camera_live = false;
        self.set(SensorStatus::Unavailable(err));
    }

    pub fn model_ready(&mut self) {
        self.model_ready = true;
        self.refresh();
    }

    pub fn model_failed(&mut self, message: &str) {
        self.model_ready = false;
        self.set(SensorStatus::Unavailable(SensorError::ModelLoad(
            message.to_string(),
        )));
    }

    fn refresh(&mut self) {
        if self.camera_live && self.model_ready {
            self.set(SensorStatus::Streaming);
        }
    }

    fn set(&mut self, status: SensorStatus) {
        if self.status != status {
            log::info!("[sensor] {:?} -> {:?}", self.status, status);
            self.status = status;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dom_exception_names_map_to_errors() {
        assert_eq!(
            SensorError::from_dom_exception("NotAllowedError", "denied"),
            SensorError::PermissionDenied
        );
        assert_eq!(
            SensorError::from_dom_exception("NotFoundError", ""),
            SensorError::NoCamera
        );
        assert_eq!(
            SensorError::from_dom_exception("AbortError", ""),
            SensorError::Other("AbortError".into())
        );
    }

    #[test]
    fn only_failures_offer_retry() {
        assert!(!SensorStatus::Idle.can_retry());
        assert!(SensorStatus::Idle.can_start());
        assert!(!SensorStatus::Requesting.can_start());
        let failed = SensorStatus::Unavailable(SensorError::NoCamera);
        assert!(failed.can_retry() && failed.can_start());
        assert!(!SensorStatus::Streaming.can_start());
    }

    #[test]
    fn streaming_needs_camera_and_model() {
        let mut s = HandSensor::new();
        assert!(s.request());
        assert!(!s.request());
        s.camera_started();
        assert_eq!(*s.status(), SensorStatus::Requesting);
        s.model_ready();
        assert!(s.status().is_streaming());
    }

    #[test]
    fn failures_allow_a_retry() {
        let mut s = HandSensor::new();
        s.model_ready();
        assert!(s.request());
        s.camera_failed(SensorError::PermissionDenied);
        assert!(s.status().can_retry());
        assert!(s.request());
        s.camera_started();
        assert!(s.status().is_streaming());

        s.model_failed("offline");
        assert_eq!(
            *s.status(),
            SensorStatus::Unavailable(SensorError::ModelLoad("offline".into()))
        );
    }
}
