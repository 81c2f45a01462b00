use once_cell::sync::Lazy;
use regex::Regex;

static RECORD_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]{1,64}$").expect("Invalid record id regex"));

/// 校验记录 ID：1~64 位字母、数字、下划线或连字符
pub fn validate_record_id(id: &str) -> Result<(), &'static str> {
    if !RECORD_ID_RE.is_match(id) {
        return Err("Geçersiz kimlik: yalnızca harf, rakam, '_' veya '-' (1-64 karakter)");
    }
    Ok(())
}
