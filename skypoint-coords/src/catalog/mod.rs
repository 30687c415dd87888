//! External lookups a sky point delegates to.
//!
//! Sky points do not carry object databases or boundary tables. Name lookup
//! goes through a [`NameResolver`] and constellation lookup through a
//! [`ConstellationCatalog`]; both are passed in by the caller.
//!
//! | Trait | In-memory implementation |
//! |-------|--------------------------|
//! | [`NameResolver`] | [`StaticResolver`] |
//! | [`ConstellationCatalog`] | [`BoundaryTable`] |

pub mod constellation;
pub mod resolver;

pub use constellation::{BoundaryTable, BoundaryZone, ConstellationCatalog};
pub use resolver::{NameResolver, StaticResolver};
