pub mod conf;
pub mod logging;
mod proxy;
pub mod redirect;
pub mod server;
