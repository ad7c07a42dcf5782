/// Exporting a packing out of the library
pub mod export;

/// External representations of the entities, as flat rows
pub mod ext_repr;
