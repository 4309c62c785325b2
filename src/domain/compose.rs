// --- 依存モジュール ---

// image クレートを利用して PNG のデコード・合成・エンコードを行います。
// imageops::overlay が重ね合わせ（アルファブレンディング込み）の実体です。
use image::{imageops, RgbaImage};
use std::fmt;
use std::path::Path;

/// 画像の読み込みや書き出し時に発生する可能性のあるエラーを定義する列挙型。
/// どのファイルで問題が起きたかをパス付きで保持します。
#[derive(Debug)]
pub enum ComposeError {
    /// 入力ファイルのデコードに失敗した場合。
    /// ファイルが存在しない場合も image クレートの I/O エラーとしてここに入ります。
    LoadFailed {
        path: String,
        source: image::ImageError,
    },
    /// 合成結果のエンコード・書き込みに失敗した場合。
    /// 例えば、書き込み権限がないパスを指定した場合などが該当します。
    SaveFailed {
        path: String,
        source: image::ImageError,
    },
}

/// メモリ上に合成された1枚のスクリーンショットを保持する構造体。
///
/// 2Dスクリーンショットをベースレイヤーとし、その上に3Dスクリーンショット
/// （自身のアルファチャンネルを持つ前提）を重ねた結果です。
/// 1ループ反復の中で生成・書き出し・破棄され、反復をまたいで共有されません。
#[derive(Debug)]
pub struct ComposedScreenshot {
    image: RgbaImage,
}

impl ComposedScreenshot {
    /// 2D/3Dスクリーンショットのペアを読み込み、合成結果を生成します。
    ///
    /// 出力の寸法はベース（2D側）の寸法になります。両者の寸法の整合性は
    /// 命名規約によって担保される前提であり、ここでは検証しません。
    ///
    /// # 引数
    /// - `path_2d`: ベースレイヤーとなる2DスクリーンショットのPNGパス。
    /// - `path_3d`: 上に重ねる3DスクリーンショットのPNGパス。
    ///
    /// # 戻り値
    /// - `Ok(Self)`: 合成に成功した場合。
    /// - `Err(ComposeError::LoadFailed)`: どちらかの読み込みに失敗した場合。
    pub fn create(path_2d: &Path, path_3d: &Path) -> Result<Self, ComposeError> {
        // STEP 1: 両方の入力をRGBAバッファとしてデコードする
        let base = load_rgba(path_2d)?;
        let top = load_rgba(path_3d)?;

        // STEP 2: ベース（2D）の上に3Dをオフセット(0, 0)で重ねる
        // アルファブレンディングの規則は imageops::overlay に委譲する
        let mut canvas = base;
        imageops::overlay(&mut canvas, &top, 0, 0);

        Ok(Self { image: canvas })
    }

    /// 合成結果をPNGとして指定パスに書き出します。既存ファイルは確認なしで上書きします。
    pub fn save_to_path(&self, path: &Path) -> Result<(), ComposeError> {
        // 拡張子 .png から自動的にPNGエンコーダが選択される
        self.image.save(path).map_err(|e| ComposeError::SaveFailed {
            path: path.display().to_string(),
            source: e,
        })
    }

    /// (幅, 高さ) をまとめて取得。
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }
}

/// PNGファイルをRGBAバッファとしてデコードするヘルパー関数。
fn load_rgba(path: &Path) -> Result<RgbaImage, ComposeError> {
    let img = image::open(path).map_err(|e| ComposeError::LoadFailed {
        path: path.display().to_string(),
        source: e,
    })?;
    Ok(img.into_rgba8())
}

// --- トレイト実装 ---

impl fmt::Display for ComposeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComposeError::LoadFailed { path, source } => {
                write!(f, "画像 '{}' の読み込みに失敗しました: {}", path, source)
            }
            ComposeError::SaveFailed { path, source } => {
                write!(f, "画像 '{}' の書き込みに失敗しました: {}", path, source)
            }
        }
    }
}

impl std::error::Error for ComposeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ComposeError::LoadFailed { source, .. } => Some(source),
            ComposeError::SaveFailed { source, .. } => Some(source),
        }
    }
}

// --- テストモジュール ---
