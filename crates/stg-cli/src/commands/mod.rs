pub mod check;
pub mod dispatch;
pub mod file;
pub mod index;
pub mod serve;
