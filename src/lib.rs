#[macro_use] extern crate log;
#[macro_use] extern crate lazy_static;

pub mod alg;
pub mod scalar;
pub mod random;
pub mod frustum;
pub mod entity;
pub mod components;
pub mod config;
pub mod error;
mod lut;

pub use crate::error::{ConfigError, MathError};
