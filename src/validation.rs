use regex::Regex;
use std::sync::OnceLock;

use crate::models::{NewReservation, PackageType, PaymentMethod, ReservationForm, TripType};

/// Checks address syntax with a simplified RFC 5322 pattern
/// (`local@domain.tld`, dotted domain labels).
pub fn is_valid_email(email: &str) -> bool {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = EMAIL_REGEX.get_or_init(|| {
        Regex::new(
            r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$",
        )
        .unwrap()
    });
    re.is_match(email)
}

/// Validates a submitted reservation form.
///
/// Every rule is checked independently and all violations are collected
/// into one report; no rule short-circuits another. On success the returned
/// record carries the trimmed text fields and the parsed enumerations.
pub fn validate(form: &ReservationForm) -> Result<NewReservation, Vec<String>> {
    let mut errors = Vec::new();

    let nombre_cliente = form.nombre_cliente.trim();
    if nombre_cliente.is_empty() {
        errors.push("El nombre del cliente no puede estar vacío".to_string());
    }

    let email = form.email.trim();
    if !is_valid_email(email) {
        errors.push("Dirección de email no válida".to_string());
    }

    let telefono = form.telefono.trim();
    if telefono.is_empty() {
        errors.push("El teléfono no puede estar vacío".to_string());
    }

    let destino = form.destino.trim();
    if destino.is_empty() {
        errors.push("El destino no puede estar vacío".to_string());
    }

    if form.num_personas <= 0 {
        errors.push("Debe haber al menos una persona".to_string());
    }

    if form.fecha_regreso <= form.fecha_salida {
        errors.push("La fecha de regreso debe ser posterior a la de salida".to_string());
    }

    let tipo_paquete = PackageType::parse(&form.tipo_paquete);
    if tipo_paquete.is_none() {
        errors.push("Tipo de paquete no válido".to_string());
    }

    let tipo_viaje = TripType::parse(&form.tipo_viaje);
    if tipo_viaje.is_none() {
        errors.push("Tipo de viaje no válido".to_string());
    }

    let forma_pago = PaymentMethod::parse(&form.forma_pago);
    if forma_pago.is_none() {
        errors.push("Forma de pago no válida".to_string());
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    // A failed parse always pushed an error, so all three are Some here
    let (Some(tipo_paquete), Some(tipo_viaje), Some(forma_pago)) =
        (tipo_paquete, tipo_viaje, forma_pago)
    else {
        return Err(errors);
    };

    Ok(NewReservation {
        nombre_cliente: nombre_cliente.to_string(),
        email: email.to_string(),
        telefono: telefono.to_string(),
        destino: destino.to_string(),
        fecha_salida: form.fecha_salida,
        fecha_regreso: form.fecha_regreso,
        num_personas: form.num_personas,
        tipo_paquete,
        tipo_viaje,
        forma_pago,
    })
}
