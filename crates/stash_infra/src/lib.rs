mod fs_create_dirs;
mod fs_meta;
mod fs_read;
mod fs_read_dir;
mod fs_remove;
mod fs_write;
mod infra;

pub use fs_create_dirs::StashCreateDirsService;
pub use fs_meta::StashFileMetaService;
pub use fs_read::StashFileReadService;
pub use fs_read_dir::StashDirectoryReaderService;
pub use fs_remove::StashFileRemoveService;
pub use fs_write::StashFileWriteService;
pub use infra::*;
