//! Media Dir Storage - 单层目录媒体存储实现
//!
//! 实现 MediaStoragePort trait。所有产物平铺在一个目录下，
//! 文件名由产物类型前缀与 128 位随机 hex 组成，只增不删。

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::application::ports::{MediaStorageError, MediaStoragePort, StoredMedia};
use crate::domain::song::{MediaFileName, TrackKind};

/// 单层目录媒体存储
pub struct MediaDirStorage {
    /// 存储根目录
    media_dir: PathBuf,
}

impl MediaDirStorage {
    /// 创建新的媒体存储（目录不存在时创建）
    pub async fn new(media_dir: impl AsRef<Path>) -> Result<Self, MediaStorageError> {
        let media_dir = media_dir.as_ref().to_path_buf();

        // 确保目录存在
        fs::create_dir_all(&media_dir)
            .await
            .map_err(|e| MediaStorageError::IoError(e.to_string()))?;

        Ok(Self { media_dir })
    }

    /// 获取存储根目录
    pub fn media_dir(&self) -> &Path {
        &self.media_dir
    }

    /// 解析存储区内的文件路径，非法文件名一律视为不存在
    fn resolve(&self, file_name: &str) -> Result<PathBuf, MediaStorageError> {
        match MediaFileName::parse(file_name) {
            Ok(name) => Ok(self.media_dir.join(name.as_str())),
            Err(_) => {
                tracing::debug!(file_name = %file_name, "Rejected invalid media file name");
                Err(MediaStorageError::NotFound(file_name.to_string()))
            }
        }
    }
}

#[async_trait]
impl MediaStoragePort for MediaDirStorage {
    async fn save(
        &self,
        kind: TrackKind,
        ext: &str,
        data: &[u8],
    ) -> Result<StoredMedia, MediaStorageError> {
        let name = MediaFileName::allocate(kind, ext);
        let path = self.media_dir.join(name.as_str());

        fs::write(&path, data)
            .await
            .map_err(|e| MediaStorageError::IoError(e.to_string()))?;

        tracing::debug!(
            file_name = %name,
            size = data.len(),
            "Media saved"
        );

        Ok(StoredMedia {
            file_name: name.as_str().to_string(),
            path,
        })
    }

    async fn read(&self, file_name: &str) -> Result<Vec<u8>, MediaStorageError> {
        let path = self.resolve(file_name)?;

        match fs::read(&path).await {
            Ok(data) => Ok(data),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(MediaStorageError::NotFound(file_name.to_string()))
            }
            Err(e) => Err(MediaStorageError::IoError(e.to_string())),
        }
    }

    async fn open(&self, file_name: &str) -> Result<(fs::File, u64), MediaStorageError> {
        let path = self.resolve(file_name)?;

        let file = match fs::File::open(&path).await {
            Ok(f) => f,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(MediaStorageError::NotFound(file_name.to_string()));
            }
            Err(e) => return Err(MediaStorageError::IoError(e.to_string())),
        };

        let metadata = file
            .metadata()
            .await
            .map_err(|e| MediaStorageError::IoError(e.to_string()))?;

        if metadata.is_dir() {
            return Err(MediaStorageError::NotFound(file_name.to_string()));
        }

        Ok((file, metadata.len()))
    }

    async fn exists(&self, file_name: &str) -> bool {
        match self.resolve(file_name) {
            Ok(path) => fs::try_exists(&path).await.unwrap_or(false),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_save_and_read() {
        let temp_dir = tempdir().unwrap();
        let storage = MediaDirStorage::new(temp_dir.path()).await.unwrap();

        let data = b"fake mp3 data";
        let media = storage.save(TrackKind::Song, "mp3", data).await.unwrap();

        assert!(media.file_name.starts_with("song_"));
        assert!(media.file_name.ends_with(".mp3"));
        assert!(media.path.exists());

        let read_data = storage.read(&media.file_name).await.unwrap();
        assert_eq!(read_data, data);
        assert!(storage.exists(&media.file_name).await);
    }

    #[tokio::test]
    async fn test_names_are_unique() {
        let temp_dir = tempdir().unwrap();
        let storage = MediaDirStorage::new(temp_dir.path()).await.unwrap();

        let first = storage.save(TrackKind::Vocals, "wav", b"a").await.unwrap();
        let second = storage.save(TrackKind::Vocals, "wav", b"b").await.unwrap();

        assert_ne!(first.file_name, second.file_name);
        assert_eq!(storage.read(&first.file_name).await.unwrap(), b"a");
        assert_eq!(storage.read(&second.file_name).await.unwrap(), b"b");
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let temp_dir = tempdir().unwrap();
        let storage = MediaDirStorage::new(temp_dir.path()).await.unwrap();

        let result = storage.read("song_deadbeef.mp3").await;
        assert!(matches!(result, Err(MediaStorageError::NotFound(_))));
        assert!(!storage.exists("song_deadbeef.mp3").await);
    }

    #[tokio::test]
    async fn test_rejects_path_traversal() {
        let temp_dir = tempdir().unwrap();
        let media_dir = temp_dir.path().join("generated");
        let storage = MediaDirStorage::new(&media_dir).await.unwrap();

        // 存储区外的文件不可达
        std::fs::write(temp_dir.path().join("secret.txt"), b"secret").unwrap();

        for name in ["../secret.txt", "..", "a/b.wav", "a\\b.wav", ""] {
            let result = storage.read(name).await;
            assert!(
                matches!(result, Err(MediaStorageError::NotFound(_))),
                "name {:?} should be rejected",
                name
            );
            assert!(!storage.exists(name).await);
        }
    }

    #[tokio::test]
    async fn test_open_reports_size() {
        let temp_dir = tempdir().unwrap();
        let storage = MediaDirStorage::new(temp_dir.path()).await.unwrap();

        let data = vec![7u8; 1234];
        let media = storage
            .save(TrackKind::Instrumental, "wav", &data)
            .await
            .unwrap();

        let (_file, size) = storage.open(&media.file_name).await.unwrap();
        assert_eq!(size, 1234);
    }
}
