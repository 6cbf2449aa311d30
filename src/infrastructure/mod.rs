pub mod convert;
pub mod credentials;
pub mod storage;
