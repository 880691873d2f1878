pub mod dump;
pub mod logging;
