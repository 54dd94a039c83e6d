//! Service layer providing the blood bank entry repository.
//! - Owns all mutable state: the entry collection and the id allocator.
//! - Applies the filter → sort → paginate pipeline for list/search reads.
//! - Provides clear error types and documented interfaces.

pub mod blood_bank;
pub mod errors;
