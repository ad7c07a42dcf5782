use serde::{Deserialize, Serialize};

///Configuration of the collision detection (overlap checking) of a [`DiskLayout`](crate::entities::DiskLayout)
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Default)]
pub struct CDEConfig {
    ///Structure used to restrict overlap checks to nearby disks
    #[serde(default)]
    pub spatial_index: SpatialIndexConfig,
}

///Which [`SpatialIndex`](crate::collision_detection::spatial_index::SpatialIndex) backs the overlap checks, if any
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Default)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SpatialIndexConfig {
    ///No index, every candidate is checked against all accepted disks
    Naive,
    ///2-d tree, rebuilt from scratch after every accepted disk
    #[default]
    KdTree,
    ///Incremental uniform grid.
    ///If `cell_size` is undefined, the largest diameter that can be placed is used.
    Grid {
        #[serde(default)]
        cell_size: Option<f64>,
    },
}
