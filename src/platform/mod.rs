//! Browser seams behind small traits.
//!
//! Local storage, page navigation, blocking dialogs and timers each have a
//! web-sys implementation for the WASM build and an in-memory one for
//! server-side rendering and tests.

pub mod dialog;
pub mod navigation;
pub mod storage;
pub mod timer;

pub use navigation::{MemoryNavigator, Navigator};
pub use storage::{MemoryStorage, SessionStorage};

#[cfg(target_arch = "wasm32")]
pub use navigation::BrowserNavigator;
#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;
