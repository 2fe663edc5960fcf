pub mod config;
pub mod db;
pub mod feed;
pub mod http;
pub mod repositories;
pub mod request_id;
