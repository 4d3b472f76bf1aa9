//! Geographic code resolution against a fixed African country table.

mod countries;
mod resolver;

pub use countries::{AFRICAN_ISO_A3, COUNTRY_CODES, country_table, is_allowed, iso_a3_for};
pub use resolver::{GeoResolver, ResolveReport};
