/// Approximate `value` in plain ASCII.
///
/// Turkish letters (and a handful of other Latin accents) map to their base
/// letter; anything else outside ASCII is dropped.
#[must_use]
pub fn transliterate_ascii(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        if ch.is_ascii() {
            out.push(ch);
            continue;
        }
        let mapped = match ch {
            'ç' => "c",
            'Ç' => "C",
            'ğ' => "g",
            'Ğ' => "G",
            'ı' => "i",
            'İ' => "I",
            'ö' => "o",
            'Ö' => "O",
            'ş' => "s",
            'Ş' => "S",
            'ü' => "u",
            'Ü' => "U",
            'â' | 'á' | 'à' | 'ä' => "a",
            'Â' | 'Á' | 'À' | 'Ä' => "A",
            'î' | 'í' | 'ì' | 'ï' => "i",
            'Î' | 'Í' | 'Ì' | 'Ï' => "I",
            'û' | 'ú' | 'ù' => "u",
            'Û' | 'Ú' | 'Ù' => "U",
            'é' | 'è' | 'ê' | 'ë' => "e",
            'É' | 'È' | 'Ê' | 'Ë' => "E",
            'ô' | 'ó' | 'ò' => "o",
            'Ô' | 'Ó' | 'Ò' => "O",
            'ß' => "ss",
            '\u{2013}' | '\u{2014}' => "-",
            '\u{2018}' | '\u{2019}' => "'",
            '\u{201c}' | '\u{201d}' => "\"",
            _ => "",
        };
        out.push_str(mapped);
    }
    out
}

/// Attachment filename for a report: `<student>_<suffix>.pdf`, ASCII only.
///
/// Falls back to `Student` when no name is set. Characters that would break a
/// quoted `Content-Disposition` value are removed.
#[must_use]
pub fn report_filename(student_name: &str, suffix: &str) -> String {
    let ascii = transliterate_ascii(student_name.trim());
    let cleaned: String = ascii
        .chars()
        .filter(|c| !c.is_ascii_control() && !matches!(c, '"' | '\\' | '/'))
        .collect();
    let stem = if cleaned.trim().is_empty() {
        "Student"
    } else {
        cleaned.trim()
    };
    format!("{stem}_{suffix}.pdf")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turkish_letters_are_approximated() {
        assert_eq!(transliterate_ascii("Çağrı Işık Öğüt Şen"), "Cagri Isik Ogut Sen");
        assert_eq!(transliterate_ascii("İsmet ÇÜÇEN"), "Ismet CUCEN");
    }

    #[test]
    fn unknown_symbols_are_dropped() {
        assert_eq!(transliterate_ascii("Plan 📚 ok"), "Plan  ok");
    }

    #[test]
    fn filename_uses_student_name_or_fallback() {
        assert_eq!(
            report_filename("Ayşe Gül", "Exam_Report"),
            "Ayse Gul_Exam_Report.pdf"
        );
        assert_eq!(report_filename("  ", "Weekly_Schedule"), "Student_Weekly_Schedule.pdf");
        assert_eq!(report_filename("a\"b/c", "X"), "abc_X.pdf");
    }
}
