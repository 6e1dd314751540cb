use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for ISO 3166-1 numeric codes: exactly three digits
    /// - Valid: "008", "076", "792"
    /// - Invalid: "8", "0080", "07A"
    pub static ref NUMERIC_CODE_REGEX: Regex = Regex::new(r"^[0-9]{3}$").unwrap();

    /// Regex for ISO 3166-1 alpha-2 codes: exactly two uppercase letters
    /// - Valid: "AL", "BR", "TR"
    /// - Invalid: "al", "A", "ALB"
    pub static ref ALPHA_CODE2_REGEX: Regex = Regex::new(r"^[A-Z]{2}$").unwrap();

    /// Regex for ISO 3166-1 alpha-3 codes: exactly three uppercase letters
    /// - Valid: "ALB", "BRA", "TUR"
    /// - Invalid: "AL", "alb", "ALBA"
    pub static ref ALPHA_CODE3_REGEX: Regex = Regex::new(r"^[A-Z]{3}$").unwrap();
}
