//! Display formatting for type names, cross-references and member headers.

pub mod cref;
pub mod signature;
pub mod type_name;

pub use cref::format_cref;
pub use signature::format_member_header;
pub use type_name::format_type_name;
