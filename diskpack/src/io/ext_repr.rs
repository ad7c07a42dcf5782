use serde::{Deserialize, Serialize};

/// External representation of a [`Disk`](crate::geometry::primitives::Disk): one row of the disk table.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtDisk {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

/// One row of the attempt table: `count` disks were accepted after exactly `attempts` rejected tries.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExtAttemptCount {
    pub attempts: usize,
    pub count: usize,
}

/// One row of the diameter table: `count` disks have a diameter in `[diameter, diameter + bin_width)`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtDiameterCount {
    pub diameter: f64,
    pub count: usize,
}

/// External representation of a finished packing.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtPacking {
    pub sheet_width: f64,
    pub sheet_height: f64,
    /// Accepted disks, in acceptance order
    pub disks: Vec<ExtDisk>,
    /// Sorted by `attempts`
    pub attempts: Vec<ExtAttemptCount>,
    /// Sorted by `diameter`
    pub diameters: Vec<ExtDiameterCount>,
    /// Fraction of the sheet covered by the disks
    pub efficiency: f64,
}

/// A flat table that can be written as comma separated values.
pub trait TableRow {
    /// Column names
    const HEADER: &'static [&'static str];

    /// Values of the row, one per column
    fn values(&self) -> Vec<String>;
}

impl TableRow for ExtDisk {
    const HEADER: &'static [&'static str] = &["x", "y", "radius"];

    fn values(&self) -> Vec<String> {
        vec![
            self.x.to_string(),
            self.y.to_string(),
            self.radius.to_string(),
        ]
    }
}

impl TableRow for ExtAttemptCount {
    const HEADER: &'static [&'static str] = &["attempts", "count"];

    fn values(&self) -> Vec<String> {
        vec![self.attempts.to_string(), self.count.to_string()]
    }
}

impl TableRow for ExtDiameterCount {
    const HEADER: &'static [&'static str] = &["diameter", "count"];

    fn values(&self) -> Vec<String> {
        vec![self.diameter.to_string(), self.count.to_string()]
    }
}
