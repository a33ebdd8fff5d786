/// Maximum accepted upload size, enforced at the transport boundary.
pub const MAX_FILE_SIZE: usize = 16 * 1024 * 1024; // 16 MiB
