pub mod finding;
pub mod markdown;
pub mod terminal;
