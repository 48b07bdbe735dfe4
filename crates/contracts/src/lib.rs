//! Shared wire types between the upload form and the extraction service.

pub mod usecases;
