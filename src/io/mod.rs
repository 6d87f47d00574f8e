//! I/O module for reading and writing scene interchange formats

pub mod json;
pub mod obj;

pub use json::{read_json_scene, write_json_scene};
pub use obj::{decode, encode};
