pub mod session;
pub mod user;

pub use session::SessionUser;
pub use user::User;
