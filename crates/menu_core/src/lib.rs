//! In-memory menu store and the view controller that drives the Home, Add and
//! Filter tabs over it.

pub mod controller;
pub mod store;

pub use controller::{AddForm, ViewController};
pub use store::MenuStore;
