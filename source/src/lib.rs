pub mod classifier;
pub mod error;
pub mod mapping;
pub mod records;

pub use classifier::Classifier;
pub use classifier::GroupedTable;
pub use classifier::DEFAULT_EXCLUDED;

pub use error::Result;
pub use error::SourceError;

pub use mapping::CategoryMapping;
pub use mapping::CategoryName;
pub use mapping::GENERAL_CATEGORIES;

pub use records::parse_record;
pub use records::CharacterRecord;
pub use records::Records;
