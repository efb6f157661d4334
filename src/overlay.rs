use crate::constants::*;
use crate::dom;
use crate::view::ViewState;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Push a changed view to the page. `prev` is what the page currently shows.
pub fn apply(document: &web::Document, prev: Option<&ViewState>, next: &ViewState) {
    let changed = |f: fn(&ViewState) -> bool| prev.map_or(true, |p| f(p) != f(next));

    if prev.map_or(true, |p| p.mode != next.mode || p.transmitting != next.transmitting) {
        dom::set_text(document, STATUS_TEXT_ID, next.status_text());
        dom::set_class(document, STATUS_DOT_ID, next.dot_class());
        dom::set_text(document, MODE_LABEL_ID, next.mode_label());
        dom::set_text(document, SEND_BUTTON_ID, next.send_label());
    }
    if changed(|v| v.send_enabled) {
        dom::set_button_enabled(document, SEND_BUTTON_ID, next.send_enabled);
    }
    if changed(|v| v.input_enabled) {
        if let Some(input) = dom::input_element(document, WISH_INPUT_ID) {
            input.set_disabled(!next.input_enabled);
        }
    }
    if changed(|v| v.result_visible) {
        dom::set_hidden(document, RESULT_MODAL_ID, !next.result_visible);
        dom::set_hidden(document, WISH_PANEL_ID, next.result_visible);
        if let Some(canvas) = document.get_element_by_id(CANVAS_ID) {
            let cl = canvas.class_list();
            _ = if next.result_visible {
                cl.add_1("dimmed")
            } else {
                cl.remove_1("dimmed")
            };
        }
    }
    if prev.map_or(true, |p| p.sensor_label != next.sensor_label) {
        dom::set_text(document, SENSOR_LABEL_ID, next.sensor_label);
        dom::set_text(document, CAMERA_BUTTON_ID, next.sensor_label);
    }
    if changed(|v| v.camera_button_visible) {
        dom::set_hidden(document, CAMERA_BUTTON_ID, !next.camera_button_visible);
    }
    if changed(|v| v.spinner_visible) {
        dom::set_hidden(document, CAMERA_SPINNER_ID, !next.spinner_visible);
    }
    if changed(|v| v.tracking_stalled) {
        dom::set_hidden(document, HAND_CURSOR_ID, next.tracking_stalled);
    }
}

pub fn move_hand_cursor(document: &web::Document, left_pct: f32, top_pct: f32) {
    if let Some(el) = document
        .get_element_by_id(HAND_CURSOR_ID)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    {
        let style = el.style();
        _ = style.set_property("left", &format!("{:.2}%", left_pct));
        _ = style.set_property("top", &format!("{:.2}%", top_pct));
    }
}

#[inline]
pub fn toggle_help(document: &web::Document) {
    let hidden = dom::is_hidden(document, HELP_PANEL_ID);
    dom::set_hidden(document, HELP_PANEL_ID, !hidden);
}

pub fn clear_wish(document: &web::Document) {
    if let Some(input) = dom::input_element(document, WISH_INPUT_ID) {
        input.set_value("");
    }
}

pub fn wish_text(document: &web::Document) -> String {
    dom::input_element(document, WISH_INPUT_ID)
        .map(|i| i.value())
        .unwrap_or_default()
}

/// Keep the caret in the input after a rejected send.
pub fn focus_wish(document: &web::Document) {
    if let Some(input) = dom::input_element(document, WISH_INPUT_ID) {
        _ = input.focus();
    }
}

pub fn release_wish_focus(document: &web::Document) {
    if let Some(input) = dom::input_element(document, WISH_INPUT_ID) {
        _ = input.blur();
    }
}
