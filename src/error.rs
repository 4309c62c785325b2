use crate::domain::compose::ComposeError;
use crate::domain::filename_triplet::NameError;
use crate::domain::input_source::path_error::PathError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/Oエラーが発生しました: {0}")]
    Io(#[from] std::io::Error),

    #[error("パス関連のエラー: {0}")]
    Path(#[from] PathError),

    #[error("ファイル名の解析エラー: {0}")]
    Name(#[from] NameError),

    #[error("画像合成エラー: {0}")]
    Compose(#[from] ComposeError),
}
