// ==========================================
// カスタムオーダー抽出ツール - 文字コード変換
// ==========================================
// 入力: CP932 (Windows-31J) / UTF-8 のバイト列
// 出力: CP932 バイト列（変換不能文字は '?' に置換）
// ==========================================
// encoding_rs の SHIFT_JIS は WHATWG 定義で CP932 の拡張文字を含む
// ==========================================

use crate::importer::error::{ExtractError, ExtractResult};
use encoding_rs::{EncoderResult, SHIFT_JIS, UTF_8};
use std::fmt;
use std::str::FromStr;

/// 変換できない文字の代替バイト
pub const SUBSTITUTION_BYTE: u8 = b'?';

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// 入力ファイルの文字コード
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextEncoding {
    #[default]
    Cp932,
    Utf8,
}

impl TextEncoding {
    pub fn label(&self) -> &'static str {
        match self {
            TextEncoding::Cp932 => "cp932",
            TextEncoding::Utf8 => "utf8",
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TextEncoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cp932" | "shift_jis" | "shift-jis" | "sjis" | "windows-31j" => Ok(TextEncoding::Cp932),
            "utf8" | "utf-8" => Ok(TextEncoding::Utf8),
            other => Err(format!("未対応の文字コードです: {}", other)),
        }
    }
}

/// バイト列を文字列に変換する
///
/// 不正なバイト列はファイル全体の読み込みエラーとする（置換しない）。
pub fn decode(bytes: &[u8], encoding: TextEncoding) -> ExtractResult<String> {
    let decoded = match encoding {
        TextEncoding::Cp932 => SHIFT_JIS.decode_without_bom_handling_and_without_replacement(bytes),
        TextEncoding::Utf8 => {
            let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
            UTF_8.decode_without_bom_handling_and_without_replacement(body)
        }
    };

    decoded
        .map(|text| text.into_owned())
        .ok_or_else(|| ExtractError::DecodeError {
            encoding: encoding.label().to_string(),
            message: "不正なバイト列が含まれています".to_string(),
        })
}

/// CP932 変換結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedOutput {
    pub bytes: Vec<u8>,
    /// '?' に置換した文字数
    pub replaced: usize,
}

/// 文字列を CP932 に変換する（変換できない文字は '?' に置換、エラーにしない）
pub fn encode_cp932_lossy(text: &str) -> EncodedOutput {
    let mut encoder = SHIFT_JIS.new_encoder();
    let mut bytes = Vec::with_capacity(text.len());
    let mut buffer = [0u8; 4096];
    let mut remaining = text;
    let mut replaced = 0;

    loop {
        let (result, read, written) =
            encoder.encode_from_utf8_without_replacement(remaining, &mut buffer, false);
        bytes.extend_from_slice(&buffer[..written]);
        remaining = &remaining[read..];

        match result {
            EncoderResult::InputEmpty => break,
            EncoderResult::OutputFull => continue,
            EncoderResult::Unmappable(_) => {
                bytes.push(SUBSTITUTION_BYTE);
                replaced += 1;
            }
        }
    }

    // 終端処理（Shift_JIS は状態を持たないため通常は何も出力されない）
    let (_, _, written) = encoder.encode_from_utf8_without_replacement("", &mut buffer, true);
    bytes.extend_from_slice(&buffer[..written]);

    EncodedOutput { bytes, replaced }
}
