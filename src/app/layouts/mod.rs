pub mod navbar;
pub mod footer;

pub use navbar::{Navbar, NAV_CONTAINER_ID};
pub use footer::Footer;
