mod state;

pub use state::{AppState, HandRow, InputAction};
