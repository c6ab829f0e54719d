//! Hex dump description of a buffer for diagnostic printing.

use crate::config::DataConfig;
use crate::data::DataBuffer;
use std::fmt;

/// Widest line `describe` will lay out; larger configured widths are clamped.
pub const MAX_BYTES_PER_LINE: usize = 256;

impl DataBuffer {
    /// Render the buffer as an offset-prefixed hex dump.
    ///
    /// ```text
    /// 0x00000000: 41 00 00 00 42 43 44                             A...BCD
    /// ```
    pub fn describe(&self, config: &DataConfig) -> String {
        if self.is_empty() {
            return "<no data>".to_string();
        }
        let per_line = config.bytes_per_line.clamp(1, MAX_BYTES_PER_LINE);
        let mut out = String::new();
        for (line, chunk) in self.bytes().chunks(per_line).enumerate() {
            if line > 0 {
                out.push('\n');
            }
            let hex = chunk
                .iter()
                .map(|b| format!("{b:02x}"))
                .collect::<Vec<_>>()
                .join(" ");
            out.push_str(&format!("{:#010x}: {}", line * per_line, hex));
            if config.show_ascii {
                let pad = (per_line * 3 - 1).saturating_sub(hex.len());
                let ascii: String = chunk
                    .iter()
                    .map(|&b| {
                        if b.is_ascii_graphic() || b == b' ' {
                            b as char
                        } else {
                            '.'
                        }
                    })
                    .collect();
                out.push_str(&format!("{:pad$}  {}", "", ascii, pad = pad));
            }
        }
        out
    }
}

impl fmt::Display for DataBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe(&DataConfig::default()))
    }
}
