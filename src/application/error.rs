//! 应用层错误定义
//!
//! 统一的命令错误类型

use thiserror::Error;

use crate::application::ports::{AudioEngineError, MediaStorageError, SynthesisError};

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 资源未找到
    #[error("{resource_type} not found: {name}")]
    NotFound {
        resource_type: &'static str,
        name: String,
    },

    /// 验证错误
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 音轨生成引擎错误
    #[error("Synthesis error: {0}")]
    SynthesisError(String),

    /// 音频引擎错误
    #[error("Audio engine error: {0}")]
    AudioError(String),

    /// 存储错误
    #[error("Storage error: {0}")]
    StorageError(String),

    /// 内部错误
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApplicationError {
    /// 创建 NotFound 错误
    pub fn not_found(resource_type: &'static str, name: impl Into<String>) -> Self {
        Self::NotFound {
            resource_type,
            name: name.into(),
        }
    }

    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    /// 创建内部错误
    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError(message.into())
    }
}

impl From<SynthesisError> for ApplicationError {
    fn from(err: SynthesisError) -> Self {
        Self::SynthesisError(err.to_string())
    }
}

impl From<AudioEngineError> for ApplicationError {
    fn from(err: AudioEngineError) -> Self {
        Self::AudioError(err.to_string())
    }
}

impl From<MediaStorageError> for ApplicationError {
    fn from(err: MediaStorageError) -> Self {
        match err {
            MediaStorageError::NotFound(name) => Self::NotFound {
                resource_type: "Media file",
                name,
            },
            other => Self::StorageError(other.to_string()),
        }
    }
}
