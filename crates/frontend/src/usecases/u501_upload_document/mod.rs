//! Upload Document UseCase UI (MVVM)
//!
//! Structure:
//! - state.rs: pure state + `update` reducer, no browser APIs
//! - api.rs: the multipart POST to the backend
//! - view_model.rs: UploadDocumentVm, signals and effect execution
//! - view.rs: UploadDocumentView component

pub mod api;
pub mod state;
mod view;
mod view_model;

pub use view::UploadDocumentView;
pub use view_model::UploadDocumentVm;
