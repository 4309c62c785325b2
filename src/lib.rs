//! 3Dスクリーンショットを対応する2Dスクリーンショットへ重ね合わせる
//! バッチ合成ツールのライブラリ部分。

pub mod domain;
pub mod error;
