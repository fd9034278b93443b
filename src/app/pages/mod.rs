pub mod home;
pub mod routes;

pub use home::Home;
pub use routes::{App, Route};
