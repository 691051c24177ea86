pub mod logger;
pub mod defaults;
pub mod session_rng;
pub mod snake;
pub mod storage;
