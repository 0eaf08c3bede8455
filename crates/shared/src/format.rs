//! Display formatting for Brazilian phone numbers, money, dates and links.

use chrono::{DateTime, Datelike, NaiveDate};

/// Country code prepended to WhatsApp numbers that lack one.
pub const WHATSAPP_COUNTRY_CODE: &str = "55";

/// Keep only ASCII digits.
pub fn digits_only(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Format a Brazilian phone number as `(21) 99999-9999` or `(21) 3333-4444`.
///
/// Inputs that do not have 10 or 11 digits are returned unchanged.
pub fn format_phone(phone: &str) -> String {
    let digits = digits_only(phone);
    match digits.len() {
        11 => format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..]),
        10 => format!("({}) {}-{}", &digits[..2], &digits[2..6], &digits[6..]),
        _ => phone.to_string(),
    }
}

/// Format a value as Brazilian reais: `R$ 1.234,56`.
pub fn format_currency(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}R$ {grouped},{fraction:02}")
}

/// Format a date as `dd/mm/yyyy`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Parse an ISO date (`2024-03-01`) or RFC 3339 timestamp and format it.
pub fn format_date_str(value: &str) -> Option<String> {
    parse_date(value).map(format_date)
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|dt| dt.date_naive()))
}

/// Age in whole years on `today` for someone born on `birth`.
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

/// Age from an ISO birth date string, relative to the local clock.
pub fn age_from_birth_date(birth: &str) -> Option<i32> {
    let birth = parse_date(birth)?;
    Some(age_on(birth, chrono::Local::now().date_naive()))
}

fn fold_accent(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        'ñ' => 'n',
        'ý' | 'ÿ' => 'y',
        other => other,
    }
}

/// URL slug: lowercase, accents stripped, punctuation dropped, whitespace
/// runs turned into single dashes.
pub fn slugify(text: &str) -> String {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(fold_accent)
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-' || c.is_whitespace())
        .collect();

    let mut slug = String::with_capacity(cleaned.len());
    for word in cleaned.split_whitespace() {
        if !slug.is_empty() {
            slug.push('-');
        }
        slug.push_str(word);
    }

    while slug.contains("--") {
        slug = slug.replace("--", "-");
    }
    slug.trim_matches('-').to_string()
}

/// Cut `text` to at most `length` characters, appending `...` when cut.
pub fn truncate(text: &str, length: usize) -> String {
    if text.chars().count() <= length {
        return text.to_string();
    }
    let head: String = text.chars().take(length).collect();
    format!("{}...", head.trim_end())
}

/// `https://wa.me/` deep link with the Brazilian country code and an
/// optional prefilled message.
pub fn whatsapp_link(phone: &str, message: Option<&str>) -> String {
    let digits = digits_only(phone);
    let number = if digits.starts_with(WHATSAPP_COUNTRY_CODE) {
        digits
    } else {
        format!("{WHATSAPP_COUNTRY_CODE}{digits}")
    };
    match message.filter(|m| !m.is_empty()) {
        Some(text) => format!("https://wa.me/{number}?text={}", urlencoding::encode(text)),
        None => format!("https://wa.me/{number}"),
    }
}

/// `tel:` link for the dialer.
pub fn tel_link(phone: &str) -> String {
    format!("tel:{}", phone.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_formats_mobile_and_landline() {
        assert_eq!(format_phone("21999998888"), "(21) 99999-8888");
        assert_eq!(format_phone("(21) 3333-4444"), "(21) 3333-4444");
        assert_eq!(format_phone("2133334444"), "(21) 3333-4444");
        assert_eq!(format_phone("12345"), "12345");
    }

    #[test]
    fn currency_uses_brazilian_separators() {
        assert_eq!(format_currency(0.0), "R$ 0,00");
        assert_eq!(format_currency(300.0), "R$ 300,00");
        assert_eq!(format_currency(1234.5), "R$ 1.234,50");
        assert_eq!(format_currency(1_000_000.0), "R$ 1.000.000,00");
        assert_eq!(format_currency(-15.25), "-R$ 15,25");
    }

    #[test]
    fn dates_format_day_first() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(format_date(date), "07/03/2024");
        assert_eq!(format_date_str("2024-12-25").as_deref(), Some("25/12/2024"));
        assert_eq!(
            format_date_str("2024-12-25T10:00:00-03:00").as_deref(),
            Some("25/12/2024")
        );
        assert_eq!(format_date_str("yesterday"), None);
    }

    #[test]
    fn age_counts_only_completed_years() {
        let birth = NaiveDate::from_ymd_opt(2000, 6, 15).unwrap();
        assert_eq!(age_on(birth, NaiveDate::from_ymd_opt(2024, 6, 14).unwrap()), 23);
        assert_eq!(age_on(birth, NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()), 24);
    }

    #[test]
    fn slugify_strips_accents_and_punctuation() {
        assert_eq!(slugify("São João de Meriti"), "sao-joao-de-meriti");
        assert_eq!(slugify("  Copacabana!! - Posto 6 "), "copacabana-posto-6");
        assert_eq!(slugify("Niterói"), "niteroi");
    }

    #[test]
    fn slugify_trims_edge_dashes() {
        assert_eq!(slugify("-abc-"), "abc");
        assert_eq!(slugify("--Barra da Tijuca--"), "barra-da-tijuca");
        assert_eq!(slugify(" - "), "");
    }

    #[test]
    fn truncate_appends_ellipsis_only_when_cut() {
        assert_eq!(truncate("curto", 10), "curto");
        assert_eq!(truncate("uma frase longa", 8), "uma fras...");
        assert_eq!(truncate("uma frase", 4), "uma...");
    }

    #[test]
    fn whatsapp_link_adds_country_code_and_encodes_text() {
        assert_eq!(
            whatsapp_link("21999999999", Some("hi")),
            "https://wa.me/5521999999999?text=hi"
        );
        assert_eq!(
            whatsapp_link("(21) 99999-9999", Some("Olá, tudo bem?")),
            "https://wa.me/5521999999999?text=Ol%C3%A1%2C%20tudo%20bem%3F"
        );
        assert_eq!(
            whatsapp_link("5521999999999", None),
            "https://wa.me/5521999999999"
        );
    }
}
