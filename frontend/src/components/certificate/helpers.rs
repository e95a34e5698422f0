//! Pure helpers for the certificate form: input masks and field validation.
//!
//! Everything here is side-effect free. The masks run on every keystroke and
//! are idempotent, so re-formatting already formatted text reproduces it
//! unchanged (cursor position is not managed).

use common::model::certificate::CertificateRequest;
use regex::Regex;

/// Keeps only the ASCII digits of `raw`, in order.
fn digits(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Formats a CPF progressively as `XXX.XXX.XXX-XX`, accepting partial input.
/// Non-digits are stripped and at most 11 digits are kept.
pub fn format_cpf(raw: &str) -> String {
    let mut numbers = digits(raw);
    numbers.truncate(11);

    match numbers.len() {
        0..=3 => numbers,
        4..=6 => format!("{}.{}", &numbers[..3], &numbers[3..]),
        7..=9 => format!("{}.{}.{}", &numbers[..3], &numbers[3..6], &numbers[6..]),
        _ => format!(
            "{}.{}.{}-{}",
            &numbers[..3],
            &numbers[3..6],
            &numbers[6..9],
            &numbers[9..]
        ),
    }
}

/// Formats a phone number progressively as `(DD) NNNNN-NNNN`. Handles both
/// 10-digit (fixed line) and 11-digit (mobile) numbers without a
/// distinguishing flag: the shape depends only on how many digits are
/// present at the time of the keystroke.
pub fn format_phone(raw: &str) -> String {
    let mut numbers = digits(raw);
    numbers.truncate(11);

    match numbers.len() {
        0..=2 => format!("({}", numbers),
        3..=7 => format!("({}) {}", &numbers[..2], &numbers[2..]),
        _ => format!("({}) {}-{}", &numbers[..2], &numbers[2..7], &numbers[7..]),
    }
}

/// Inline validation errors, one slot per form field; `None` means the field
/// passed. An all-`None` value means the form may be submitted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormErrors {
    pub nome: Option<String>,
    pub email: Option<String>,
    pub telefone: Option<String>,
    pub cpf: Option<String>,
    pub endereco: Option<String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.nome.is_none()
            && self.email.is_none()
            && self.telefone.is_none()
            && self.cpf.is_none()
            && self.endereco.is_none()
    }
}

/// Validates the five form fields. Every rule is evaluated; nothing
/// short-circuits, so the user sees all problems at once.
///
/// The CPF rule is digit count only; no checksum is computed.
pub fn validate(data: &CertificateRequest) -> FormErrors {
    let mut errors = FormErrors::default();

    if data.nome.chars().count() < 3 {
        errors.nome = Some("Nome deve ter pelo menos 3 caracteres".to_string());
    } else if data.nome.chars().count() > 100 {
        errors.nome = Some("Nome deve ter no máximo 100 caracteres".to_string());
    }

    let email_re = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    if !email_re.is_match(&data.email) {
        errors.email = Some("E-mail inválido".to_string());
    }

    let phone_digits = digits(&data.telefone).len();
    if !(10..=11).contains(&phone_digits) {
        errors.telefone = Some("Telefone deve ter 10 ou 11 dígitos".to_string());
    }

    if digits(&data.cpf).len() != 11 {
        errors.cpf = Some("CPF inválido".to_string());
    }

    if data.endereco.chars().count() < 10 {
        errors.endereco = Some("Endereço deve ter pelo menos 10 caracteres".to_string());
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(
        nome: &str,
        email: &str,
        telefone: &str,
        cpf: &str,
        endereco: &str,
    ) -> CertificateRequest {
        CertificateRequest {
            nome: nome.to_string(),
            email: email.to_string(),
            telefone: telefone.to_string(),
            cpf: cpf.to_string(),
            endereco: endereco.to_string(),
        }
    }

    fn valid_request() -> CertificateRequest {
        request(
            "Maria Silva",
            "a@b.com",
            "(11) 91234-5678",
            "123.456.789-09",
            "Rua Teste, 123",
        )
    }

    #[test]
    fn cpf_mask_grows_with_the_input() {
        assert_eq!(format_cpf(""), "");
        assert_eq!(format_cpf("1"), "1");
        assert_eq!(format_cpf("123"), "123");
        assert_eq!(format_cpf("1234"), "123.4");
        assert_eq!(format_cpf("123456"), "123.456");
        assert_eq!(format_cpf("1234567"), "123.456.7");
        assert_eq!(format_cpf("123456789"), "123.456.789");
        assert_eq!(format_cpf("1234567890"), "123.456.789-0");
        assert_eq!(format_cpf("12345678909"), "123.456.789-09");
    }

    #[test]
    fn cpf_mask_strips_noise_and_truncates_at_eleven_digits() {
        assert_eq!(format_cpf("123.456.789-09"), "123.456.789-09");
        assert_eq!(format_cpf("12a34b56c78d909"), "123.456.789-09");
        assert_eq!(format_cpf("123456789091234"), "123.456.789-09");
        assert_eq!(format_cpf("abc"), "");
    }

    #[test]
    fn cpf_mask_is_idempotent_and_round_trips_digits() {
        for len in 0..=11 {
            let input: String = "12345678909".chars().take(len).collect();
            let formatted = format_cpf(&input);
            assert_eq!(format_cpf(&formatted), formatted, "input {input:?}");

            let back: String = formatted.chars().filter(|c| c.is_ascii_digit()).collect();
            assert_eq!(back, input, "digits lost for {input:?}");
        }
    }

    #[test]
    fn phone_mask_grows_with_the_input() {
        assert_eq!(format_phone(""), "(");
        assert_eq!(format_phone("1"), "(1");
        assert_eq!(format_phone("11"), "(11");
        assert_eq!(format_phone("119"), "(11) 9");
        assert_eq!(format_phone("1191234"), "(11) 91234");
        assert_eq!(format_phone("11912345"), "(11) 91234-5");
        assert_eq!(format_phone("1133334444"), "(11) 33334-444");
        assert_eq!(format_phone("11912345678"), "(11) 91234-5678");
    }

    #[test]
    fn phone_mask_hyphen_appears_only_past_seven_digits() {
        for len in 0..=7 {
            let input: String = "11912345678".chars().take(len).collect();
            assert!(!format_phone(&input).contains('-'), "input {input:?}");
        }
        for len in 8..=11 {
            let input: String = "11912345678".chars().take(len).collect();
            assert!(format_phone(&input).contains('-'), "input {input:?}");
        }
    }

    #[test]
    fn phone_mask_is_idempotent_and_round_trips_digits() {
        for len in 0..=11 {
            let input: String = "11912345678".chars().take(len).collect();
            let formatted = format_phone(&input);
            assert_eq!(format_phone(&formatted), formatted, "input {input:?}");

            let back: String = formatted.chars().filter(|c| c.is_ascii_digit()).collect();
            assert_eq!(back, input, "digits lost for {input:?}");
        }
    }

    #[test]
    fn phone_mask_truncates_at_eleven_digits() {
        assert_eq!(format_phone("119123456789999"), "(11) 91234-5678");
    }

    #[test]
    fn valid_form_passes_all_rules() {
        assert!(validate(&valid_request()).is_empty());
    }

    #[test]
    fn short_name_is_flagged_alone() {
        let mut data = valid_request();
        data.nome = "Jo".to_string();

        let errors = validate(&data);
        assert_eq!(
            errors.nome.as_deref(),
            Some("Nome deve ter pelo menos 3 caracteres")
        );
        assert!(errors.email.is_none());
        assert!(errors.telefone.is_none());
        assert!(errors.cpf.is_none());
        assert!(errors.endereco.is_none());
    }

    #[test]
    fn oversized_name_is_flagged() {
        let mut data = valid_request();
        data.nome = "a".repeat(101);
        assert_eq!(
            validate(&data).nome.as_deref(),
            Some("Nome deve ter no máximo 100 caracteres")
        );

        data.nome = "a".repeat(100);
        assert!(validate(&data).nome.is_none());
    }

    #[test]
    fn email_shape_is_enforced() {
        for bad in [
            "",
            "semarroba.com",
            "dois@@a.com",
            "user@dominio",
            "user name@a.com",
            "a@b. com",
            "@dominio.com",
        ] {
            let mut data = valid_request();
            data.email = bad.to_string();
            assert!(validate(&data).email.is_some(), "accepted {bad:?}");
        }

        let mut data = valid_request();
        data.email = "user.name+tag@sub.dominio.br".to_string();
        assert!(validate(&data).email.is_none());
    }

    #[test]
    fn phone_digit_count_is_enforced() {
        let counts = [
            ("(11) 9123-456", true),  // 9 digits
            ("123456789012", true),   // 12 digits, mask bypassed
            ("1133334444", false),    // 10 digits, fixed line
            ("(11) 91234-5678", false), // 11 digits, mobile
        ];
        for (telefone, flagged) in counts {
            let mut data = valid_request();
            data.telefone = telefone.to_string();
            assert_eq!(validate(&data).telefone.is_some(), flagged, "{telefone:?}");
        }
    }

    #[test]
    fn cpf_digit_count_is_enforced_without_checksum() {
        let mut data = valid_request();
        data.cpf = "123.456.789-0".to_string();
        assert!(validate(&data).cpf.is_some());

        // Any 11 digits pass; there is no checksum here.
        data.cpf = "000.000.000-00".to_string();
        assert!(validate(&data).cpf.is_none());
    }

    #[test]
    fn short_address_is_flagged() {
        let mut data = valid_request();
        data.endereco = "Rua A".to_string();
        assert!(validate(&data).endereco.is_some());
    }

    #[test]
    fn all_failing_fields_are_reported_together() {
        let errors = validate(&request("", "", "", "", ""));
        assert!(errors.nome.is_some());
        assert!(errors.email.is_some());
        assert!(errors.telefone.is_some());
        assert!(errors.cpf.is_some());
        assert!(errors.endereco.is_some());
    }

    #[test]
    fn validate_is_pure() {
        let data = request("Jo", "x", "1", "2", "curto");
        assert_eq!(validate(&data), validate(&data));
    }
}
