pub mod errors;
pub mod logging;
pub mod media;
pub mod animation;
pub mod dom;

// Available in fullstack mode (both client and server)
pub mod hooks;
