pub mod dispatcher;
pub mod dispatcher_tests;

pub use dispatcher::{CommandDispatcher, CommandObserver};
