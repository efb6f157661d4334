mod keyboard;
mod pointer;

pub use keyboard::wire_global_keydown;
pub use pointer::wire_orbit_controls;

use crate::overlay;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;
use wish_tree_core::TreeSimulation;

/// Send whatever is in the wish input. A rejected wish stays in the input
/// for another try.
pub fn submit_wish(document: &web::Document, sim: &Rc<RefCell<TreeSimulation>>) {
    let wish = overlay::wish_text(document);
    if let Err(reason) = sim.borrow_mut().submit_wish(&wish) {
        log::info!("[wish] not sent: {}", reason);
        overlay::focus_wish(document);
    }
}

/// Close the result modal and start over with an empty input.
pub fn play_again(document: &web::Document, sim: &Rc<RefCell<TreeSimulation>>) {
    let mut sim = sim.borrow_mut();
    if sim.controller.is_result_visible() {
        sim.dismiss_result();
        overlay::clear_wish(document);
    }
}
