//! Error types shared by the site's services.
//!
//! Every `Display` string here is what the visitor or admin gets to read,
//! so they are written for humans rather than for logs.

use thiserror::Error;

/// Inquiry form field, used to point validation messages at an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Contact,
    Email,
    Message,
}

impl FormField {
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "성함 / 업체명",
            FormField::Contact => "연락처",
            FormField::Email => "이메일 주소",
            FormField::Message => "상담 요청 내용",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{}을(를) 입력해 주세요.", .0.label())]
    Missing(FormField),

    #[error("올바른 이메일 주소를 입력해 주세요.")]
    InvalidEmail,
}

impl ValidationError {
    pub fn field(&self) -> FormField {
        match self {
            ValidationError::Missing(field) => *field,
            ValidationError::InvalidEmail => FormField::Email,
        }
    }
}

/// Failure of any outbound HTTP call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("network request failed: {0}")]
    Network(String),

    #[error("request timed out after {0} ms")]
    Timeout(u32),

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    Decode(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("browser storage is not available")]
    Unavailable,

    #[error("could not write `{0}` to browser storage (quota exceeded?)")]
    Write(String),

    #[error("could not serialize `{key}`: {reason}")]
    Serialize { key: String, reason: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("인증 정보가 올바르지 않습니다.")]
    InvalidCredentials,

    #[error("세션을 저장할 수 없습니다: {0}")]
    Storage(#[from] StorageError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyncError {
    #[error("저장소에 연결하지 못했습니다: {0}")]
    Transport(TransportError),

    #[error("{repo} 저장소에서 {path} 파일을 찾을 수 없습니다. 저장소 이름과 경로를 확인해 주세요.")]
    NotFound { repo: String, path: String },

    #[error("파일에서 `{0}` 블록을 찾을 수 없습니다. 파일 구조가 변경되었는지 확인해 주세요.")]
    PatternNotFound(String),

    #[error("마지막으로 불러온 이후 원격 파일이 변경되었습니다. 새로 불러온 뒤 다시 동기화해 주세요.")]
    Conflict,

    #[error("액세스 토큰이 거부되었습니다. 토큰의 권한과 만료일을 확인해 주세요.")]
    Unauthorized,

    #[error("파일 내용을 UTF-8 텍스트로 해석할 수 없습니다: {0}")]
    Encoding(String),

    #[error("동기화 설정이 비어 있습니다: {0}")]
    InvalidTarget(&'static str),

    #[error("저장소가 예상하지 못한 응답을 보냈습니다 (status {0}).")]
    Status(u16),

    #[error("동기화 설정을 저장하지 못했습니다: {0}")]
    Storage(#[from] StorageError),
}

impl From<TransportError> for SyncError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Status(status) => SyncError::Status(status),
            other => SyncError::Transport(other),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThumbnailError {
    #[error("이미지 파일만 업로드할 수 있습니다.")]
    NotAnImage,

    #[error("이미지가 너무 큽니다 ({size} bytes, 최대 {limit} bytes).")]
    TooLarge { size: usize, limit: usize },

    #[error("파일을 읽지 못했습니다: {0}")]
    Read(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntakeError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("문의 내용을 저장하지 못했습니다: {0}")]
    Storage(#[from] StorageError),
}
