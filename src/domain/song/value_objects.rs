//! Song Context - Value Objects

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::SongError;

/// 歌曲唯一标识
///
/// 128 位随机值，对外展示为 32 位十六进制（无连字符）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SongId(Uuid);

impl SongId {
    /// 分配新标识
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SongId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SongId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

/// 生成产物类型
///
/// 决定存储文件名的前缀
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackKind {
    /// 伴奏音轨
    Instrumental,
    /// 人声音轨
    Vocals,
    /// 用户上传的参考人声
    VoiceSample,
    /// 混音成品
    Song,
}

impl TrackKind {
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Instrumental => "instrumental",
            Self::Vocals => "vocals",
            Self::VoiceSample => "voice",
            Self::Song => "song",
        }
    }
}

/// 媒体输出格式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaFormat {
    Wav,
    #[default]
    Mp3,
    Opus,
}

impl MediaFormat {
    /// 存储文件使用的扩展名（Opus 封装在 OGG 容器中）
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Wav => "wav",
            Self::Mp3 => "mp3",
            Self::Opus => "ogg",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Wav => "audio/wav",
            Self::Mp3 => "audio/mpeg",
            Self::Opus => "audio/ogg",
        }
    }
}

impl fmt::Display for MediaFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Wav => "wav",
            Self::Mp3 => "mp3",
            Self::Opus => "opus",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for MediaFormat {
    type Err = SongError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "wav" => Ok(Self::Wav),
            "mp3" => Ok(Self::Mp3),
            "opus" | "ogg" => Ok(Self::Opus),
            other => Err(SongError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// 存储区内的媒体文件名
///
/// 不变量:
/// - 非空的单一路径段（不含分隔符，不为 "." / ".."）
/// - 不含控制字符
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaFileName(String);

impl MediaFileName {
    /// 为指定产物分配全新文件名：`{prefix}_{32hex}.{ext}`
    pub fn allocate(kind: TrackKind, ext: &str) -> Self {
        Self(format!("{}_{}.{}", kind.prefix(), Uuid::new_v4().simple(), ext))
    }

    /// 校验外部传入的文件名
    pub fn parse(name: &str) -> Result<Self, SongError> {
        if name.is_empty() || name == "." || name == ".." {
            return Err(SongError::InvalidFileName(name.to_string()));
        }
        if name
            .chars()
            .any(|c| c == '/' || c == '\\' || c.is_control())
        {
            return Err(SongError::InvalidFileName(name.to_string()));
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 小写扩展名（无扩展名时为 None）
    pub fn extension(&self) -> Option<String> {
        std::path::Path::new(&self.0)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
    }

    /// 按存储的实际格式推断 Content-Type
    pub fn content_type(&self) -> &'static str {
        match self.extension().as_deref() {
            Some("wav") => "audio/wav",
            Some("mp3") => "audio/mpeg",
            Some("flac") => "audio/flac",
            Some("ogg") => "audio/ogg",
            Some("opus") => "audio/opus",
            Some("m4a") => "audio/mp4",
            _ => "application/octet-stream",
        }
    }
}

impl fmt::Display for MediaFileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for MediaFileName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_song_id_displays_as_32_hex() {
        let id = SongId::new();
        let text = id.to_string();
        assert_eq!(text.len(), 32);
        assert!(text.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_allocate_file_name_layout() {
        let name = MediaFileName::allocate(TrackKind::Song, "mp3");
        assert!(name.as_str().starts_with("song_"));
        assert!(name.as_str().ends_with(".mp3"));
        assert_eq!(name.extension().as_deref(), Some("mp3"));
    }

    #[test]
    fn test_parse_rejects_path_segments() {
        assert!(MediaFileName::parse("").is_err());
        assert!(MediaFileName::parse(".").is_err());
        assert!(MediaFileName::parse("..").is_err());
        assert!(MediaFileName::parse("a/b.wav").is_err());
        assert!(MediaFileName::parse("a\\b.wav").is_err());
        assert!(MediaFileName::parse("evil\nname.mp3").is_err());
    }

    #[test]
    fn test_parse_accepts_plain_name() {
        let name = MediaFileName::parse("song_0123.mp3").unwrap();
        assert_eq!(name.as_str(), "song_0123.mp3");
        assert_eq!(name.content_type(), "audio/mpeg");
    }

    #[test]
    fn test_media_format_from_str() {
        assert_eq!("mp3".parse::<MediaFormat>().unwrap(), MediaFormat::Mp3);
        assert_eq!("OGG".parse::<MediaFormat>().unwrap(), MediaFormat::Opus);
        assert!("aiff".parse::<MediaFormat>().is_err());
    }
}
