use crate::constants::WISH_INPUT_ID;
use crate::input::{key_action, KeyAction};
use crate::overlay;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;
use wish_tree_core::TreeSimulation;

fn typing_in_wish_input(document: &web::Document) -> bool {
    document
        .active_element()
        .map(|el| el.id() == WISH_INPUT_ID)
        .unwrap_or(false)
}

pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    document: &web::Document,
    sim: &Rc<RefCell<TreeSimulation>>,
) {
    let typing = typing_in_wish_input(document);
    let Some(action) = key_action(&ev.key(), typing) else {
        return;
    };
    match action {
        KeyAction::SubmitWish => super::submit_wish(document, sim),
        KeyAction::ToggleHelp => overlay::toggle_help(document),
        KeyAction::DismissResult => super::play_again(document, sim),
    }
    log::debug!("[keys] {:?}", action);
    ev.prevent_default();
}

pub fn wire_global_keydown(document: web::Document, sim: Rc<RefCell<TreeSimulation>>) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &document, &sim);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
