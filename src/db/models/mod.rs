pub mod menu;
pub mod message;
pub mod vote;

pub use menu::MenuRecord;
pub use message::MessageRecord;
pub use vote::VoteRecord;
