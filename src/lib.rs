//! Logical volume sensor contract.
//!
//! Defines the capability every concrete logical-volume sensor must provide:
//! reading current data about a logical volume from whatever source the
//! implementation chooses (an OS API, a management interface, a file, a
//! network call). Polling, scheduling, and reporting belong to the callers
//! of this crate.

pub mod data;
pub mod error;
pub mod sensor;

pub use data::VolumeData;
pub use error::{Error, Result};
pub use sensor::LogicalVolumeSensor;
