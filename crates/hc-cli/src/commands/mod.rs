pub mod dispatch;
pub mod receptor;
pub mod schema;
pub mod status;
pub mod system;
pub mod systems;
