//! Application routing configuration.

use dioxus::prelude::*;

use crate::views::{
    Admin, CityListings, Dashboard, DashboardLayout, ForgotPassword, Home, ListingDetailView,
    Listings, Login, Navbar, NotFound, Photos, Plans, PlansPage, ProfileEditor, Register,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]
        #[route("/")]
        Home {},

        // Public browsing
        #[route("/acompanhantes")]
        Listings {},
        #[route("/acompanhantes/:cidade")]
        CityListings { cidade: String },
        #[route("/acompanhante/:slug")]
        ListingDetailView { slug: String },

        // Auth routes
        #[route("/login")]
        Login {},
        #[route("/cadastro")]
        Register {},
        #[route("/esqueci-senha")]
        ForgotPassword {},

        #[route("/planos")]
        PlansPage {},

        // Provider area, behind the login guard
        #[nest("/dashboard")]
            #[layout(DashboardLayout)]
                #[route("/")]
                Dashboard {},
                #[route("/perfil")]
                ProfileEditor {},
                #[route("/fotos")]
                Photos {},
                #[route("/planos")]
                Plans {},
            #[end_layout]
        #[end_nest]

        #[route("/admin")]
        Admin {},

        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}
