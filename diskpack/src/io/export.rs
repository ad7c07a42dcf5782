use anyhow::Result;

use crate::entities::{AttemptHistogram, Sheet, diameter_histogram, efficiency};
use crate::geometry::primitives::Disk;
use crate::io::ext_repr::{ExtAttemptCount, ExtDiameterCount, ExtDisk, ExtPacking};

pub fn export_disks(disks: &[Disk]) -> Vec<ExtDisk> {
    disks
        .iter()
        .map(|d| ExtDisk {
            x: d.x(),
            y: d.y(),
            radius: d.radius,
        })
        .collect()
}

pub fn export_attempts(histogram: &AttemptHistogram) -> Vec<ExtAttemptCount> {
    histogram
        .iter()
        .map(|(attempts, count)| ExtAttemptCount { attempts, count })
        .collect()
}

pub fn export_diameters(disks: &[Disk], bin_width: f64) -> Result<Vec<ExtDiameterCount>> {
    let rows = diameter_histogram(disks, bin_width)?
        .into_iter()
        .map(|(bin, count)| ExtDiameterCount {
            diameter: bin as f64 * bin_width,
            count,
        })
        .collect();
    Ok(rows)
}

/// Exports a finished packing out of the library
pub fn export_packing(
    sheet: &Sheet,
    disks: &[Disk],
    histogram: &AttemptHistogram,
    diameter_bin_width: f64,
) -> Result<ExtPacking> {
    Ok(ExtPacking {
        sheet_width: sheet.width,
        sheet_height: sheet.height,
        disks: export_disks(disks),
        attempts: export_attempts(histogram),
        diameters: export_diameters(disks, diameter_bin_width)?,
        efficiency: efficiency(sheet.width, sheet.height, disks)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::primitives::Point;

    #[test]
    fn packing_tables() {
        let sheet = Sheet::try_new(40.0, 20.0).unwrap();
        let disks = [
            Disk::new(Point(5.0, 5.0), 5.0),
            Disk::new(Point(20.0, 10.0), 5.0),
            Disk::new(Point(33.0, 10.0), 6.0),
        ];
        let mut hist = AttemptHistogram::new();
        [4, 0, 0].into_iter().for_each(|a| hist.record(a));

        let ext = export_packing(&sheet, &disks, &hist, 1.0).unwrap();
        assert_eq!(ext.disks.len(), 3);
        assert_eq!(ext.disks[1], ExtDisk { x: 20.0, y: 10.0, radius: 5.0 });
        assert_eq!(
            ext.attempts,
            vec![
                ExtAttemptCount { attempts: 0, count: 2 },
                ExtAttemptCount { attempts: 4, count: 1 }
            ]
        );
        assert_eq!(
            ext.diameters,
            vec![
                ExtDiameterCount { diameter: 10.0, count: 2 },
                ExtDiameterCount { diameter: 12.0, count: 1 }
            ]
        );
    }
}
