//! The logical volume sensor contract.

use crate::{Result, VolumeData};

/// Trait for all logical volume sensors.
///
/// A concrete sensor reads current data about a logical volume from some
/// source of its choosing. The trait imposes no concurrency model, retry
/// policy, or timeout; implementations decide those. `read_data` is a
/// query against the sensor's source and is not expected to mutate state
/// outside the sensor itself.
pub trait LogicalVolumeSensor: Send {
    /// Reads logical volume data from the sensor's source.
    ///
    /// On failure the caller observes the error and no partial record.
    fn read_data(&mut self) -> Result<VolumeData>;
}
