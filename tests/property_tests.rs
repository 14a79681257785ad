/// Property-based tests using proptest
/// Tests invariants that should hold for all validator inputs
use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

use gotrip::models::{PackageType, PaymentMethod, ReservationForm, TripType};
use gotrip::validation::{is_valid_email, validate};

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
}

// Property: email validation should never panic
proptest! {
    #[test]
    fn email_validation_never_panics(email in "\\PC*") {
        let _ = is_valid_email(&email);
    }
}

// Property: the validator should never panic, whatever the submission
proptest! {
    #[test]
    fn validator_never_panics(
        nombre in "\\PC*",
        email in "\\PC*",
        telefono in "\\PC*",
        destino in "\\PC*",
        personas in any::<i32>(),
        salida_offset in -400i64..400,
        regreso_offset in -400i64..400,
        paquete in "\\PC*",
        viaje in "\\PC*",
        pago in "\\PC*",
    ) {
        let form = ReservationForm {
            nombre_cliente: nombre,
            email,
            telefono,
            destino,
            fecha_salida: base_date() + Duration::days(salida_offset),
            fecha_regreso: base_date() + Duration::days(regreso_offset),
            num_personas: personas,
            tipo_paquete: paquete,
            tipo_viaje: viaje,
            forma_pago: pago,
        };
        let _ = validate(&form);
    }
}

// Property: well-formed submissions always validate, with trimming applied
proptest! {
    #[test]
    fn well_formed_submissions_accepted(
        nombre in "[A-Za-z]{1,20}",
        pad_left in " {0,3}",
        pad_right in " {0,3}",
        local in "[a-z]{1,10}",
        domain in "[a-z]{1,10}",
        tld in "[a-z]{2,4}",
        telefono in "[0-9]{7,12}",
        destino in "[A-Za-z]{1,20}",
        personas in 1i32..=50,
        trip_days in 1i64..365,
        paquete_idx in 0usize..3,
        viaje_idx in 0usize..6,
        pago_idx in 0usize..2,
    ) {
        let form = ReservationForm {
            nombre_cliente: format!("{}{}{}", pad_left, nombre, pad_right),
            email: format!("{}@{}.{}", local, domain, tld),
            telefono: telefono.clone(),
            destino: destino.clone(),
            fecha_salida: base_date(),
            fecha_regreso: base_date() + Duration::days(trip_days),
            num_personas: personas,
            tipo_paquete: PackageType::ALL[paquete_idx].as_str().to_string(),
            tipo_viaje: TripType::ALL[viaje_idx].as_str().to_string(),
            forma_pago: PaymentMethod::ALL[pago_idx].as_str().to_string(),
        };

        let reserva = validate(&form);
        prop_assert!(
            reserva.is_ok(),
            "expected acceptance, got {:?}",
            reserva.as_ref().err()
        );

        let reserva = reserva.unwrap();
        // Stored text is the trimmed submission
        prop_assert_eq!(reserva.nombre_cliente, nombre);
        prop_assert_eq!(reserva.telefono, telefono);
        prop_assert_eq!(reserva.destino, destino);
        prop_assert_eq!(reserva.num_personas, personas);
        prop_assert!(reserva.fecha_regreso > reserva.fecha_salida);
    }
}

// Property: a non-positive party size is always rejected
proptest! {
    #[test]
    fn non_positive_party_size_always_rejected(
        personas in i32::MIN..=0,
        trip_days in 1i64..365,
    ) {
        let form = ReservationForm {
            nombre_cliente: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            telefono: "555-1234".to_string(),
            destino: "Cancún".to_string(),
            fecha_salida: base_date(),
            fecha_regreso: base_date() + Duration::days(trip_days),
            num_personas: personas,
            tipo_paquete: "estandar".to_string(),
            tipo_viaje: "ocio".to_string(),
            forma_pago: "pago_unico".to_string(),
        };

        let errors = validate(&form).expect_err("must be rejected");
        prop_assert!(errors.iter().any(|e| e.contains("al menos una persona")));
    }
}

// Property: a return date on or before the departure is always rejected
proptest! {
    #[test]
    fn non_increasing_dates_always_rejected(offset in -365i64..=0) {
        let form = ReservationForm {
            nombre_cliente: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            telefono: "555-1234".to_string(),
            destino: "Cancún".to_string(),
            fecha_salida: base_date(),
            fecha_regreso: base_date() + Duration::days(offset),
            num_personas: 2,
            tipo_paquete: "estandar".to_string(),
            tipo_viaje: "ocio".to_string(),
            forma_pago: "pago_unico".to_string(),
        };

        let errors = validate(&form).expect_err("must be rejected");
        prop_assert!(errors.iter().any(|e| e.contains("fecha de regreso")));
    }
}
