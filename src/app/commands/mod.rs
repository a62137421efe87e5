pub mod check;
pub mod endpoint;
pub mod init;
pub mod load;
pub mod locate;
pub mod resolve;
pub mod show;
