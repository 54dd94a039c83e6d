pub mod memory;
pub mod repository;

pub use memory::BloodBankStore;
pub use repository::EntryRepository;
