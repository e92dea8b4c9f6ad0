mod login;
mod logout;
mod register;
mod utils;
mod whoami;

pub use login::login;
pub use logout::logout;
pub use register::register;
pub use whoami::whoami;
