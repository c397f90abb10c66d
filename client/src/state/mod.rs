//! Client-side state modules.
//!
//! DESIGN
//! ======
//! `wishes` owns the persisted data; `splash` owns the first-run routing
//! lifecycle that reads and bumps the run counter.

pub mod splash;
pub mod wishes;
