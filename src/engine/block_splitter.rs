// ==========================================
// カスタムオーダー抽出ツール - 製作内容ブロック分割
// ==========================================
// マーカー: "〇" + 任意の空白 + 10 桁以上の数字（注文番号）
// 手順: 1) マーカー開始位置を全て求める  2) 開始位置間で切り出す
// ==========================================
// マーカーなしの非空テキスト → 全体で 1 ブロック
// 空テキスト → 0 ブロック
// 最初のマーカーより前のテキストはどのブロックにも含めない
// ==========================================

use tracing::debug;

/// ブロック開始記号
pub const MARKER_SYMBOL: char = '〇';

/// マーカーに続く注文番号の最小桁数
pub const MIN_MARKER_DIGITS: usize = 10;

#[derive(Debug, Clone, Copy, Default)]
pub struct BlockSplitter;

impl BlockSplitter {
    pub fn new() -> Self {
        Self
    }

    /// テキストを製作内容ブロックに分割する
    pub fn split(&self, text: &str) -> Vec<String> {
        let offsets = self.find_marker_offsets(text);

        if offsets.is_empty() {
            let trimmed = text.trim();
            return if trimmed.is_empty() {
                Vec::new()
            } else {
                vec![trimmed.to_string()]
            };
        }

        if offsets[0] > 0 && !text[..offsets[0]].trim().is_empty() {
            debug!(
                preamble_len = offsets[0],
                "最初のマーカーより前のテキストを除外します"
            );
        }

        offsets
            .iter()
            .enumerate()
            .map(|(idx, &start)| {
                let end = offsets.get(idx + 1).copied().unwrap_or(text.len());
                text[start..end].trim().to_string()
            })
            .collect()
    }

    /// マーカーの開始位置（バイトオフセット、昇順）を返す
    ///
    /// 改行をまたいだ空白もマーカーの一部として扱う。
    pub fn find_marker_offsets(&self, text: &str) -> Vec<usize> {
        text.char_indices()
            .filter(|&(idx, c)| c == MARKER_SYMBOL && self.is_marker_at(text, idx))
            .map(|(idx, _)| idx)
            .collect()
    }

    /// `offset` の "〇" がマーカーの条件を満たすか
    fn is_marker_at(&self, text: &str, offset: usize) -> bool {
        let rest = &text[offset + MARKER_SYMBOL.len_utf8()..];
        let digits = rest
            .chars()
            .skip_while(|c| c.is_whitespace())
            .take_while(|&c| is_decimal_digit(c))
            .take(MIN_MARKER_DIGITS)
            .count();
        digits >= MIN_MARKER_DIGITS
    }
}

/// 半角・全角の 10 進数字
///
/// 受注番号に現れる数字だけを対象とし、他の文字体系の 10 進数字
/// （アラビア・インド数字など）や丸数字はマーカーの数字として扱わない。
fn is_decimal_digit(c: char) -> bool {
    c.is_ascii_digit() || ('０'..='９').contains(&c)
}
