// use宣言：必要なモジュールをスコープに取り込む

use std::fmt; // エラーメッセージのフォーマットのために fmt モジュールを利用

// --- 定数定義 ---

/// 3Dスクリーンショットのファイル名が持つ固定プレフィックス。
const PREFIX_3D: &str = "screenshot_3d_";

/// 合成対象として成立するために、プレフィックス除去後のサフィックスに
/// 最低限必要な文字数（インデックス 0 と 4..6 を参照するため）。
const MIN_SUFFIX_LEN: usize = 6;

// --- 構造体定義 ---

/// 1つの合成ペアに対応する、3つの関連ファイル名のセット。
///
/// 3Dスクリーンショットのファイル名から固定の文字位置で `panel` と
/// `value` を切り出し、対になる2Dスクリーンショット名と出力名を導出します。
/// `parse` コンストラクタを通じてのみインスタンス化でき、その際に以下が保証されます。
/// - 名前がプレフィックス `screenshot_3d_` で始まること
/// - サフィックスが位置指定の切り出しに足りる長さであること
///
/// 切り出しは純粋に位置ベースであり、切り出した文字の内容は検証しません
/// （命名規約が守られていることが前提）。
#[derive(Debug, PartialEq)]
pub struct FilenameTriplet {
    name_3d: String,
    name_2d: String,
    output_name: String,
}

// --- エラー定義 ---

/// ファイル名の解析時に発生する可能性のあるエラー。
#[derive(Debug, PartialEq)]
pub enum NameError {
    /// 名前がプレフィックス `screenshot_3d_` で始まっていない場合。
    MissingPrefix(String),
    /// プレフィックス除去後のサフィックスが短すぎて、
    /// 固定位置の切り出しができない場合。
    SuffixTooShort(String),
}

// --- 実装ブロック ---

impl FilenameTriplet {
    /// 3Dスクリーンショットのファイル名から `FilenameTriplet` を導出します。
    ///
    /// # 引数
    /// * `name_3d`: `screenshot_3d_` で始まるファイル名。
    ///
    /// # 戻り値
    /// * `Ok(FilenameTriplet)`: 導出に成功した場合。
    /// * `Err(NameError)`: プレフィックスがない、またはサフィックスが短すぎる場合。
    pub fn parse(name_3d: &str) -> Result<Self, NameError> {
        let suffix = name_3d
            .strip_prefix(PREFIX_3D)
            .ok_or_else(|| NameError::MissingPrefix(name_3d.to_string()))?;

        // 位置指定の切り出しのため、文字単位で扱う（バイト境界でのpanicを避ける）
        let chars: Vec<char> = suffix.chars().collect();
        if chars.len() < MIN_SUFFIX_LEN {
            return Err(NameError::SuffixTooShort(name_3d.to_string()));
        }

        // panel はサフィックスの先頭1文字、value はインデックス 4..6 の2文字
        let panel = chars[0];
        let value: String = chars[4..6].iter().collect();

        Ok(Self {
            name_3d: name_3d.to_string(),
            name_2d: format!("screenshot_2d_{}_0.{}.png", panel, value),
            output_name: format!("img{}_{}.png", panel, value),
        })
    }

    /// ファイル名が3Dスクリーンショットの命名パターンに一致するか判定します。
    /// 発見フェーズでのフィルタに使用します（glob `screenshot_3d_*.png` 相当）。
    pub fn matches_3d_pattern(name: &str) -> bool {
        name.starts_with(PREFIX_3D) && name.ends_with(".png")
    }

    // --- ゲッターメソッド ---

    pub fn name_3d(&self) -> &str {
        &self.name_3d
    }
    pub fn name_2d(&self) -> &str {
        &self.name_2d
    }
    pub fn output_name(&self) -> &str {
        &self.output_name
    }
}

// --- トレイト実装 ---

impl fmt::Display for NameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameError::MissingPrefix(name) => {
                write!(
                    f,
                    "ファイル名 '{}' はプレフィックス '{}' で始まっていません。",
                    name, PREFIX_3D
                )
            }
            NameError::SuffixTooShort(name) => {
                write!(
                    f,
                    "ファイル名 '{}' のサフィックスが短すぎて panel/value を切り出せません。",
                    name
                )
            }
        }
    }
}

impl std::error::Error for NameError {}

// --- テストモジュール ---
