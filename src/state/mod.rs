pub mod cursor;
pub mod konami;
pub mod ripple;
pub mod scroll_spy;
pub mod typing;

pub use cursor::CursorState;
pub use konami::KonamiState;
pub use ripple::{MoveGate, RippleKind, RipplePool};
pub use typing::TypingState;
