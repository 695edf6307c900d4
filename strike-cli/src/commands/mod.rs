pub mod book;
pub mod confirmation;
pub mod quote;
pub mod serve;
