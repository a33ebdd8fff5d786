pub mod health_file;

pub use health_file::HealthFile;
