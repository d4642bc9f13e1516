pub mod notifier;
pub mod queue;
pub mod reminder;
pub mod status;
pub mod worker;
