pub mod error;
pub mod executor;
pub mod extractor;
pub mod storage;

pub use error::UploadError;
pub use executor::UploadExecutor;
