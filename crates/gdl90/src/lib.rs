#![doc = include_str!("../readme.md")]

pub mod bits;
pub mod crc;
pub mod error;
pub mod frame;
pub mod message;
pub mod render;
pub mod stream;
