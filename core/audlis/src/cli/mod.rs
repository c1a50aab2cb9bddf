//! CLI レイヤー: 引数解析と出力整形

mod args;
pub(crate) mod render;

pub use args::{parse_args, print_completion, ParseOutcome};
#[cfg(test)]
pub use args::parse_from;
