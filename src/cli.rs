use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// 作業ディレクトリのパス (省略時はカレントディレクトリ)
    #[arg(default_value = ".")]
    pub input_dir: PathBuf,
}
