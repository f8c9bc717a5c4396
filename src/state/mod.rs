// ============================================================================
// STATE MODULE - State Management con Rc<RefCell>
// ============================================================================

pub mod auth_state;
pub mod app_state;

pub use auth_state::*;
pub use app_state::*;
