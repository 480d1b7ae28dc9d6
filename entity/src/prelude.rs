pub use super::badminton_session::Entity as BadmintonSession;
pub use super::member::Entity as Member;
pub use super::request::Entity as Request;
pub use super::user::Entity as User;
