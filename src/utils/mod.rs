pub mod extractor;
pub mod validate;

pub use extractor::SafeDistributionId;
pub use validate::validate_record_id;
