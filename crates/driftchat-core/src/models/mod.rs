pub mod message;
pub mod session;

pub use message::{Message, MessageKind};
pub use session::{PermissionSettings, Session};
