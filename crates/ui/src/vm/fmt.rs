use url::form_urlencoded;

/// Whole numbers print without decimals, others with at most two.
#[must_use]
pub fn format_number(value: f64) -> String {
    let fixed = format!("{value:.2}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_owned()
    } else {
        trimmed.to_owned()
    }
}

#[must_use]
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// `path?key=value` with the value form-encoded.
#[must_use]
pub fn query_href(path: &str, key: &str, value: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair(key, value)
        .finish();
    format!("{path}?{query}")
}
