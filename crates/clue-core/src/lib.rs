#![deny(warnings)]
pub mod game;
pub mod ledger;
pub mod model;

pub struct AppInfo;

impl AppInfo {
    pub const fn name() -> &'static str {
        "mdclue"
    }

    pub const fn codename() -> &'static str {
        "Case Closed"
    }

    pub const fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}
