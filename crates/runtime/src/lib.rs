pub mod clock;
pub mod events;
pub mod logging;
pub mod metrics;
pub mod session;

pub use events::SessionEvent;
pub use session::GameSession;

pub fn module_ready() -> bool {
    true
}
