//! Media Storage Adapter

mod media_dir;

pub use media_dir::MediaDirStorage;
