use korimako_core::taxonomy::ConservationStatus;

use crate::view::console;

/// List the conservation-status vocabulary with its indicator colours.
pub fn show_statuses() {
    println!("Conservation statuses (least to most at risk):\n");
    for status in &ConservationStatus::ALL {
        println!(
            "  {} {}",
            console::indicator_dot(status.style_token()),
            status.label()
        );
    }
}
