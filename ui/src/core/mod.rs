pub mod platform;
pub mod session;
pub mod storage;
pub mod timing;
