mod appointment;
mod service;
mod settings;
mod time_block;
mod user;

#[allow(unused)]
pub use appointment::*;
#[allow(unused)]
pub use service::*;
#[allow(unused)]
pub use settings::*;
#[allow(unused)]
pub use time_block::*;
#[allow(unused)]
pub use user::*;
