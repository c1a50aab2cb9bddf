//! テスト用: ポートの固定応答実装（ネットワーク・ディスクを使わない）


#[cfg(test)]
pub use stub::*;
