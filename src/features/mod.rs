//! Domain-level client features and their shared logic. Routes import these
//! modules to keep view code focused on rendering.

pub mod users;
