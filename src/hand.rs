//! Hand-tracking bridge.
//!
//! The page's landmark model runs in JS and calls the exported functions
//! below once per video frame. Each call classifies the frame and publishes
//! the result into the mailbox the render loop reads; nothing here touches
//! the simulation directly.

use crate::constants::*;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;
use wish_tree_core::{classify_frame, HandLandmarks, HandSensor, SensorError, SignalMailbox};

thread_local! {
    static MAILBOX: SignalMailbox = SignalMailbox::new();
    static SENSOR: Rc<RefCell<HandSensor>> = Rc::new(RefCell::new(HandSensor::new()));
}

pub fn mailbox() -> SignalMailbox {
    MAILBOX.with(SignalMailbox::clone)
}

pub fn sensor() -> Rc<RefCell<HandSensor>> {
    SENSOR.with(Rc::clone)
}

/// One tracked hand as flat `x, y[, z]` values (`stride` 2 or 3).
#[wasm_bindgen]
pub fn push_hand_landmarks(flat: &[f32], stride: usize) {
    let signal = match HandLandmarks::from_flat(flat, stride) {
        Ok(hand) => classify_frame(Some(&hand)),
        Err(e) => {
            log::warn!("[hand] dropped frame: {}", e);
            None
        }
    };
    MAILBOX.with(|m| m.publish(signal));
}

#[wasm_bindgen]
pub fn push_no_hand() {
    MAILBOX.with(|m| m.publish(None));
}

#[wasm_bindgen]
pub fn tracker_ready() {
    SENSOR.with(|s| s.borrow_mut().model_ready());
}

#[wasm_bindgen]
pub fn tracker_failed(message: String) {
    log::error!("[hand] landmark model failed: {}", message);
    SENSOR.with(|s| s.borrow_mut().model_failed(&message));
    MAILBOX.with(SignalMailbox::clear);
}

/// Ask for the camera and attach it to the preview video. Failures land in
/// the sensor status; the scene keeps running either way.
pub async fn start_camera(document: web::Document) {
    let sensor = sensor();
    if !sensor.borrow_mut().request() {
        return;
    }
    match open_camera(&document).await {
        Ok(()) => {
            log::info!("[hand] camera streaming");
            sensor.borrow_mut().camera_started();
        }
        Err(err) => {
            log::warn!("[hand] camera unavailable: {}", err);
            sensor.borrow_mut().camera_failed(err);
        }
    }
}

async fn open_camera(document: &web::Document) -> Result<(), SensorError> {
    let video = document
        .get_element_by_id(HAND_VIDEO_ID)
        .and_then(|el| el.dyn_into::<web::HtmlVideoElement>().ok())
        .ok_or_else(|| SensorError::Other(format!("missing #{}", HAND_VIDEO_ID)))?;
    let devices = web::window()
        .ok_or_else(|| SensorError::Other("no window".into()))?
        .navigator()
        .media_devices()
        .map_err(|_| SensorError::NoCamera)?;

    let video_opts = js_sys::Object::new();
    _ = js_sys::Reflect::set(&video_opts, &"width".into(), &VIDEO_WIDTH.into());
    _ = js_sys::Reflect::set(&video_opts, &"height".into(), &VIDEO_HEIGHT.into());
    let constraints = web::MediaStreamConstraints::new();
    constraints.set_video(&video_opts);

    let promise = devices
        .get_user_media_with_constraints(&constraints)
        .map_err(to_sensor_error)?;
    let stream: web::MediaStream = JsFuture::from(promise)
        .await
        .map_err(to_sensor_error)?
        .dyn_into()
        .map_err(|_| SensorError::Other("getUserMedia returned no stream".into()))?;

    video.set_muted(true);
    video.set_src_object(Some(&stream));
    if let Ok(play) = video.play() {
        JsFuture::from(play).await.map_err(to_sensor_error)?;
    }
    Ok(())
}

fn to_sensor_error(value: JsValue) -> SensorError {
    match value.dyn_ref::<web::DomException>() {
        Some(ex) => SensorError::from_dom_exception(&ex.name(), &ex.message()),
        None => SensorError::Other(format!("{:?}", value)),
    }
}
