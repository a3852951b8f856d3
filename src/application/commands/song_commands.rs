//! Song Commands

/// 上传的参考人声样本
#[derive(Debug, Clone)]
pub struct VoiceSampleUpload {
    /// 客户端提供的文件名（用于推断扩展名）
    pub file_name: Option<String>,
    /// 文件内容
    pub data: Vec<u8>,
}

/// 生成歌曲命令
#[derive(Debug, Clone)]
pub struct GenerateSong {
    pub lyrics: String,
    pub genre: String,
    pub voice_sample: Option<VoiceSampleUpload>,
}
