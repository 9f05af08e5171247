pub mod error;
pub mod consts;
pub mod config;
pub mod source;
pub mod sample;
pub mod gray;
pub mod edges;
pub mod hough;
pub mod tracker;
pub mod detector;
