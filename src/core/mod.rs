pub mod config;
pub mod converter;
pub mod feed;
pub mod storage;
