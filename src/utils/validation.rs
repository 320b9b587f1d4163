// ============================================================================
// VALIDACIÓN - Reglas de formulario del lado del cliente
// ============================================================================
// Un formulario con errores de validación nunca llega a la red
// ============================================================================

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::TreatmentFields;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Equivalente a un chequeo `algo@algo.algo`: parte local no vacía y dominio
/// con al menos un punto interior, sin espacios.
pub fn is_valid_email(email: &str) -> bool {
    if email.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    match domain.split_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Valida el formulario de login. Mapa vacío ⇒ formulario válido.
pub fn validate_login(email: &str, password: &str) -> HashMap<String, String> {
    let mut errors = HashMap::new();

    if email.trim().is_empty() {
        errors.insert("email".to_string(), "Email is required".to_string());
    } else if !is_valid_email(email.trim()) {
        errors.insert("email".to_string(), "Email is invalid".to_string());
    }

    if password.trim().is_empty() {
        errors.insert("password".to_string(), "Password is required".to_string());
    }

    errors
}

/// Valida el formulario de registro.
pub fn validate_register(name: &str, email: &str, password: &str) -> HashMap<String, String> {
    let mut errors = HashMap::new();

    if name.trim().is_empty() {
        errors.insert("name".to_string(), "Name is required".to_string());
    }

    if email.trim().is_empty() {
        errors.insert("email".to_string(), "Email is required".to_string());
    } else if !is_valid_email(email.trim()) {
        errors.insert("email".to_string(), "Email is invalid".to_string());
    }

    if password.is_empty() {
        errors.insert("password".to_string(), "Password is required".to_string());
    } else if password.len() < 6 {
        errors.insert(
            "password".to_string(),
            "Password must be at least 6 characters".to_string(),
        );
    }

    errors
}

/// Valida los campos de un tratamiento nuevo.
pub fn validate_treatment(fields: &TreatmentFields) -> HashMap<String, String> {
    let mut errors = HashMap::new();

    if fields.name.trim().is_empty() {
        errors.insert("name".to_string(), "Treatment name is required".to_string());
    }
    if fields.dosage.trim().is_empty() {
        errors.insert("dosage".to_string(), "Dosage is required".to_string());
    }
    if fields.frequency.trim().is_empty() {
        errors.insert("frequency".to_string(), "Frequency is required".to_string());
    }
    if fields.start_date.trim().is_empty() {
        errors.insert("startDate".to_string(), "Start date is required".to_string());
    }
    if fields.end_date.trim().is_empty() {
        errors.insert("endDate".to_string(), "End date is required".to_string());
    }

    // Rango de fechas: solo se compara si ambas parsean (inputs type=date)
    if let (Ok(start), Ok(end)) = (
        NaiveDate::parse_from_str(fields.start_date.trim(), DATE_FORMAT),
        NaiveDate::parse_from_str(fields.end_date.trim(), DATE_FORMAT),
    ) {
        if end < start {
            errors.insert(
                "endDate".to_string(),
                "End date cannot be before start date".to_string(),
            );
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str, start: &str, end: &str) -> TreatmentFields {
        TreatmentFields {
            name: name.to_string(),
            dosage: "500mg".to_string(),
            frequency: "2x/day".to_string(),
            start_date: start.to_string(),
            end_date: end.to_string(),
            description: None,
        }
    }

    #[test]
    fn email_rules() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("user.name@sub.example.org"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("sin-arroba.com"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@sinpunto"));
        assert!(!is_valid_email("a b@c.com"));
    }

    #[test]
    fn login_requires_both_fields() {
        let errors = validate_login("", "");
        assert_eq!(errors.get("email").unwrap(), "Email is required");
        assert_eq!(errors.get("password").unwrap(), "Password is required");

        let errors = validate_login("no-es-email", "secret");
        assert_eq!(errors.get("email").unwrap(), "Email is invalid");
        assert!(!errors.contains_key("password"));

        assert!(validate_login("a@b.com", "secret").is_empty());
    }

    #[test]
    fn register_checks_password_length() {
        let errors = validate_register("Ana", "a@b.com", "123");
        assert_eq!(
            errors.get("password").unwrap(),
            "Password must be at least 6 characters"
        );
        assert!(validate_register("Ana", "a@b.com", "123456").is_empty());
    }

    #[test]
    fn treatment_requires_name() {
        let errors = validate_treatment(&fields("", "2024-01-01", "2024-02-01"));
        assert_eq!(errors.get("name").unwrap(), "Treatment name is required");
    }

    #[test]
    fn treatment_rejects_inverted_date_range() {
        let errors = validate_treatment(&fields("Ibuprofeno", "2024-02-01", "2024-01-01"));
        assert_eq!(
            errors.get("endDate").unwrap(),
            "End date cannot be before start date"
        );

        assert!(validate_treatment(&fields("Ibuprofeno", "2024-01-01", "2024-01-01")).is_empty());
    }
}
