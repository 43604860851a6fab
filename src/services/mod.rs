mod login;
mod recover;
mod register;

pub use login::{login, LoginOutcome};
pub use recover::recover;
pub use register::register;
