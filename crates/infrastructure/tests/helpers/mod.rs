#![allow(dead_code)]

pub mod echo_handler;
pub mod packets;

pub use echo_handler::EchoHandler;
pub use packets::*;
