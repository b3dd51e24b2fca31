pub mod ids;
pub mod models;
pub mod parser;
pub mod storage;
pub mod store;
pub mod view;
pub mod writer;
