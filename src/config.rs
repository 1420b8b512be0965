use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Directory containing `<Name>.sample.<ext>` playground files
    pub samples_directory: PathBuf,
    /// Package specifier the UI kit is imported from in sample files
    pub library_package: String,
    /// Maximum sample file size to load (in bytes)
    pub max_file_size: u64,
    /// Maximum number of concurrent sample file reads during discovery
    pub max_concurrency: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            samples_directory: PathBuf::from("playground/samples"),
            library_package: "@ui-kit/react".to_string(),
            max_file_size: 1024 * 1024, // 1MB, samples are single-component demos
            max_concurrency: 10,
        }
    }
}
