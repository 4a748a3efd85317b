pub mod check;
pub mod expenses;
pub mod init;
pub mod query;
pub mod validate;
