//! Provider area. Every page renders inside [`DashboardLayout`], which
//! sends anonymous visitors to the login page.

mod layout;
mod overview;
mod photos;
mod plans;
mod profile_editor;

pub use layout::DashboardLayout;
pub use overview::Dashboard;
pub use photos::Photos;
pub use plans::{Plans, PlansPage};
pub use profile_editor::ProfileEditor;
