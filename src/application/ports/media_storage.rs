//! Media Storage Port - 媒体存储抽象
//!
//! 单层目录、只增不删的存储区。所有写入分配全新随机文件名，
//! 并发写入互不冲突。

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::song::TrackKind;

/// 存储错误
#[derive(Debug, Error)]
pub enum MediaStorageError {
    /// 文件不存在（非法文件名同样归入此类）
    #[error("File not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// 已落盘的媒体文件
#[derive(Debug, Clone)]
pub struct StoredMedia {
    /// 存储区内的文件名（`{prefix}_{32hex}.{ext}`）
    pub file_name: String,
    /// 磁盘路径
    pub path: PathBuf,
}

/// Media Storage Port
#[async_trait]
pub trait MediaStoragePort: Send + Sync {
    /// 保存字节流，按产物类型分配全新文件名
    async fn save(
        &self,
        kind: TrackKind,
        ext: &str,
        data: &[u8],
    ) -> Result<StoredMedia, MediaStorageError>;

    /// 读取整个文件
    async fn read(&self, file_name: &str) -> Result<Vec<u8>, MediaStorageError>;

    /// 打开文件用于流式响应，返回句柄与字节数
    async fn open(&self, file_name: &str) -> Result<(tokio::fs::File, u64), MediaStorageError>;

    /// 文件是否存在（非法名视为不存在）
    async fn exists(&self, file_name: &str) -> bool;
}
