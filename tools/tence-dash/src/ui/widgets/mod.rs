//! Overlay widgets drawn on top of the dashboard.

mod agent_modal;
mod help_overlay;

use ratatui::layout::{Constraint, Flex, Layout, Rect};

pub use agent_modal::{agent_modal_area, close_button_area, render_agent_modal};
pub use help_overlay::render_help_overlay;

/// Create a centered rectangle.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([Constraint::Percentage(percent_y)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Percentage(percent_x)]).flex(Flex::Center);

    let [area] = vertical.areas(area);
    let [area] = horizontal.areas(area);
    area
}
