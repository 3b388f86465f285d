pub mod job;
pub mod resource;

pub use job::{Job, JobStatus, product};
pub use resource::{BatchResource, UploadOptions};
