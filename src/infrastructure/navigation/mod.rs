//! Navigator Implementations

mod session;

pub use session::SessionNavigator;
