//! rapid-recall - rapid serial visual presentation word trainer
//!
//! Words are flashed one at a time, each aligned on its optimal
//! recognition point (ORP) so the eye does not have to move.
//!
//! - [`highlight`]: picks the focus character of every token
//! - [`store`]: word sets, reading positions and speeds, written through
//!   to a [`storage::KeyValueStore`] on every change
//! - [`reader`]: a terminal front-end over both
//! - [`cli`]: one-shot commands for the `rapid-recall` binary

pub mod cli;
pub mod config;
pub mod error;
pub mod highlight;
pub mod logging;
pub mod reader;
pub mod storage;
pub mod store;
pub mod theme;
