//! UI module - TUI rendering components.
//!
//! The UI follows a component-based architecture:
//! - `layout.rs`: Main layout orchestration and mouse hit-testing
//! - `left_panel.rs`: Agent list + Session summary
//! - `right_panel.rs`: Main column, delegating to `panels/`
//! - `panels/`: Knowledge graph, model status, terminal, settings
//! - `widgets/`: Agent modal and help overlay
//!
//! Every renderer takes `&App`; views never change dashboard state.

mod layout;
mod left_panel;
mod right_panel;

pub mod panels;
pub mod widgets;

pub use layout::{hit_test, regions, render, Regions};
