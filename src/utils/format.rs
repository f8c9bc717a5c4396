// ============================================================================
// FORMAT - Escape HTML y formato de fechas
// ============================================================================

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Escapa `& < > " '` para insertar texto del servidor en innerHTML
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

/// Fecha del backend → DD/MM/YYYY
///
/// Acepta RFC 3339, `YYYY-MM-DDTHH:MM:SS[.fff]` y `YYYY-MM-DD`.
/// Vacío o ausente → "N/A"; cualquier otro formato se devuelve tal cual.
pub fn format_date(value: Option<&str>) -> String {
    let raw = match value.map(str::trim) {
        Some(v) if !v.is_empty() => v,
        _ => return "N/A".to_string(),
    };

    let date = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()))
        .ok()
        .or_else(|| local_date_prefix(raw));

    match date {
        Some(d) => d.format("%d/%m/%Y").to_string(),
        None => raw.to_string(),
    }
}

// LocalDateTime de Java omite los segundos cuando valen 0 ("2024-03-05T10:15")
fn local_date_prefix(raw: &str) -> Option<NaiveDate> {
    let prefix = raw.get(..10)?;
    let rest = &raw[10..];
    if !(rest.is_empty() || rest.starts_with('T') || rest.starts_with(' ')) {
        return None;
    }
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
}

/// Hora de medición o "N/A"
pub fn or_not_available(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_all_special_characters() {
        assert_eq!(
            escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#039;Jerry&#039;&lt;/b&gt;"
        );
        assert_eq!(escape_html("Peça nº 3"), "Peça nº 3");
    }

    #[test]
    fn formats_backend_timestamps() {
        assert_eq!(format_date(Some("2024-03-05T10:15:00")), "05/03/2024");
        assert_eq!(format_date(Some("2024-03-05T10:15:00.123456")), "05/03/2024");
        assert_eq!(format_date(Some("2024-12-31T23:59:59Z")), "31/12/2024");
        assert_eq!(format_date(Some("2024-01-09")), "09/01/2024");
        assert_eq!(format_date(Some("2024-01-09 08:00:00")), "09/01/2024");
        assert_eq!(format_date(Some("2024-03-05T10:15")), "05/03/2024");
    }

    #[test]
    fn missing_or_unknown_dates() {
        assert_eq!(format_date(None), "N/A");
        assert_eq!(format_date(Some("   ")), "N/A");
        assert_eq!(format_date(Some("ontem")), "ontem");
    }

    #[test]
    fn measurement_time_fallback() {
        assert_eq!(or_not_available(Some("14:30")), "14:30");
        assert_eq!(or_not_available(Some("")), "N/A");
        assert_eq!(or_not_available(None), "N/A");
    }
}
