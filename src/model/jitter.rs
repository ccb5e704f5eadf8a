use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "version", rename_all = "kebab-case")]
pub enum JitterScheme {
    /// `((sum of UTF-16 code units of label) mod 100 / 100 - center) * scale`
    CharSumV1 { center: f64, scale: f64 },
}

impl Default for JitterScheme {
    fn default() -> Self {
        JitterScheme::CharSumV1 {
            center: 0.5,
            scale: 0.3,
        }
    }
}

pub fn char_code_sum(label: &str) -> u64 {
    label.encode_utf16().map(u64::from).sum()
}

impl JitterScheme {
    pub fn offset(&self, label: &str) -> f64 {
        match *self {
            JitterScheme::CharSumV1 { center, scale } => {
                let bucket = (char_code_sum(label) % 100) as f64 / 100.0;
                (bucket - center) * scale
            }
        }
    }

    pub fn bounds(&self) -> (f64, f64) {
        match *self {
            JitterScheme::CharSumV1 { center, scale } => {
                let lo = (0.0 - center) * scale;
                let hi = (0.99 - center) * scale;
                (lo.min(hi), lo.max(hi))
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/jitter.rs"]
mod tests;
