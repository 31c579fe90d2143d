/// Case transformer: uppercase unless lowercase was explicitly requested.
///
/// `None` and `Some(true)` both uppercase; only `Some(false)` lowercases.
pub fn format_string(input: &str, to_upper: Option<bool>) -> String {
    match to_upper {
        Some(false) => input.to_lowercase(),
        _ => input.to_uppercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_ascii_casing() {
        assert_eq!(format_string("grüße", None), "GRÜSSE");
        assert_eq!(format_string("ÆGIR", Some(false)), "ægir");
    }
}
