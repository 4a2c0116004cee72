pub mod cursor;
pub mod error;
pub mod keywords;
pub mod options;
pub mod scanner;
pub mod token;
