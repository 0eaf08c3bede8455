//! Pages rendered by the router.

mod admin;
mod dashboard;
mod forgot_password;
mod home;
mod listing_detail;
mod listings;
mod login;
mod navbar;
mod register;

pub use admin::Admin;
pub use dashboard::{Dashboard, DashboardLayout, Photos, Plans, PlansPage, ProfileEditor};
pub use forgot_password::ForgotPassword;
pub use home::Home;
pub use listing_detail::ListingDetailView;
pub use listings::{CityListings, Listings};
pub use login::Login;
pub use navbar::{Navbar, NotFound};
pub use register::Register;
