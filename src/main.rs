mod cli;
mod workflow;

use clap::Parser;
use cli::Args;
use std::process::ExitCode;

fn main() -> ExitCode {
    // コマンドライン引数を解析します
    let args = Args::parse();

    // 最初の失敗で即座に中断する。途中まで書き出した合成結果はそのまま残る。
    match workflow::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("エラー: {}", e);
            ExitCode::FAILURE
        }
    }
}
