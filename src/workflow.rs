//! アプリケーションのメインワークフローを定義するモジュール。
//!
//! このモジュールは、UI層（`cli`）とドメイン層（`domain`）を仲介し、
//! スクリーンショットのペアを合成するバッチ処理の具体的なフローを実装します。

use crate::cli::Args;
use screenshot_compose::domain::compose::ComposedScreenshot;
use screenshot_compose::domain::filename_triplet::FilenameTriplet;
use screenshot_compose::domain::input_source::directory_path::DirectoryPath;
use screenshot_compose::error::AppError;
use walkdir::WalkDir;

// --- public な main 関数 ---

/// アプリケーションのメインロジックを実行します。
///
/// # 引数
/// * `args`: コマンドラインからパースされた引数 (`cli::Args`)。
///
/// # 戻り値
/// * `Ok(())`: すべてのペアの合成が正常に完了した場合（対象0件も成功とする）。
/// * `Err(AppError)`: 処理中にエラーが発生した場合。最初の失敗で即座に中断し、
///   以降のペアは処理しない（ペア単位のリカバリは行わない）。
pub fn run(args: Args) -> Result<(), AppError> {
    // 1. 作業ディレクトリの検証
    // DirectoryPath::new を使うことで、パスが存在し、かつディレクトリであることが保証される。
    let work_dir = DirectoryPath::new(&args.input_dir)?;

    // 2. 3Dスクリーンショットのファイル名を収集してソート
    // 実行を決定的にするため、ファイルシステムの列挙順ではなく辞書順で処理する。
    let mut names_3d = find_3d_screenshots(&work_dir);
    names_3d.sort();

    // 3. 各ペアを順番に処理
    // 反復間で共有される状態はなく、画像バッファは1反復のスコープで解放される。
    for name_3d in &names_3d {
        let triplet = FilenameTriplet::parse(name_3d)?;

        // 合成の前に、処理対象のペアを標準出力へ1行報告する
        println!("{} {}", triplet.name_2d(), triplet.name_3d());

        let composed = ComposedScreenshot::create(
            &work_dir.join(triplet.name_2d()),
            &work_dir.join(triplet.name_3d()),
        )?;
        composed.save_to_path(&work_dir.join(triplet.output_name()))?;
    }

    Ok(())
}

// --- private なヘルパー関数 ---

/// 作業ディレクトリ直下から3Dスクリーンショットのファイル名を収集します。
fn find_3d_screenshots(dir: &DirectoryPath) -> Vec<String> {
    WalkDir::new(dir.as_path())
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .filter_map(|e| e.file_name().to_str().map(|s| s.to_string()))
        .filter(|name| FilenameTriplet::matches_3d_pattern(name))
        .collect()
}
