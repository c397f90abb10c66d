//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates shared rendering
//! to `components`.

pub mod how_to;
pub mod splash;
pub mod wish_add;
pub mod wish_list;
