use std::path::PathBuf;
use std::process;

use clap::Parser;
use env_logger::Env;

const USAGE: &str = "Usage: line_merger <input_file> <output_file>";

#[derive(clap::Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Args {
    /// 输入的文本文件路径，每行形如 `前缀: 内容`
    #[arg(allow_hyphen_values = true)]
    input: PathBuf,

    /// 输出的文件路径，已存在时会被覆盖
    #[arg(allow_hyphen_values = true)]
    output: PathBuf,
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    // 两个参数都按路径处理；参数个数不对时打印用法并以 1 退出
    let Ok(args) = Args::try_parse() else {
        println!("{USAGE}");
        process::exit(1);
    };

    match line_merger::merge(&args.input, &args.output) {
        Ok(_) => log::info!("处理成功！输出文件已保存。"),
        Err(e) => {
            log::error!("{e}");
            process::exit(1);
        }
    }
}
