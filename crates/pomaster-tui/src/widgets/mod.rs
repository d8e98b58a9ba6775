//! Widget library for the dashboard
//!
//! Each widget is a thin `Widget` impl over borrowed state; all mutation
//! happens in the update handlers, never during rendering.

mod activities;
mod consultant;
mod controls;
mod kpis;
mod section_header;
mod sidebar;
mod workplan;

pub use activities::ActivityCards;
pub use consultant::ConsultantPanel;
pub use controls::ControlsTable;
pub use kpis::KpiCards;
pub use section_header::SectionHeader;
pub use sidebar::Sidebar;
pub use workplan::WorkplanTimeline;
