use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ============ Database Models ============

/// A travel booking, the one entity this system manages.
///
/// Field names mirror the `reservas` table columns. Invariants (non-empty
/// text, date ordering, party size) are enforced at validation time, not by
/// storage.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Reservation {
    /// Storage-assigned identifier, immutable after creation.
    pub id: i64,
    pub nombre_cliente: String,
    pub email: String,
    pub telefono: String,
    pub destino: String,
    pub fecha_salida: NaiveDate,
    /// Always strictly later than `fecha_salida` for validated records.
    pub fecha_regreso: NaiveDate,
    pub num_personas: i32,
    pub tipo_paquete: PackageType,
    pub tipo_viaje: TripType,
    pub forma_pago: PaymentMethod,
}

/// A validated, id-less field set: output of the validator, input to the
/// repository's `insert` and `update`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewReservation {
    pub nombre_cliente: String,
    pub email: String,
    pub telefono: String,
    pub destino: String,
    pub fecha_salida: NaiveDate,
    pub fecha_regreso: NaiveDate,
    pub num_personas: i32,
    pub tipo_paquete: PackageType,
    pub tipo_viaje: TripType,
    pub forma_pago: PaymentMethod,
}

/// Raw form payload as decoded from the request body.
///
/// Enum fields stay `String` here: membership in the enumerations is a
/// business rule reported by the validator together with every other
/// violation, not a decode failure. Dates and the party size are typed, so
/// an unparseable value is rejected by the framework before validation, the
/// same split the original form layer had.
#[derive(Debug, Clone, Deserialize)]
pub struct ReservationForm {
    pub nombre_cliente: String,
    pub email: String,
    pub telefono: String,
    pub destino: String,
    pub fecha_salida: NaiveDate,
    pub fecha_regreso: NaiveDate,
    pub num_personas: i32,
    pub tipo_paquete: String,
    pub tipo_viaje: String,
    pub forma_pago: String,
}

impl From<&Reservation> for ReservationForm {
    /// Pre-fills an edit form from a stored record.
    fn from(r: &Reservation) -> Self {
        Self {
            nombre_cliente: r.nombre_cliente.clone(),
            email: r.email.clone(),
            telefono: r.telefono.clone(),
            destino: r.destino.clone(),
            fecha_salida: r.fecha_salida,
            fecha_regreso: r.fecha_regreso,
            num_personas: r.num_personas,
            tipo_paquete: r.tipo_paquete.as_str().to_string(),
            tipo_viaje: r.tipo_viaje.as_str().to_string(),
            forma_pago: r.forma_pago.as_str().to_string(),
        }
    }
}

// ============ Enumerations ============

/// Package tier. Persisted as its lowercase wire value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum PackageType {
    Economico,
    Estandar,
    Lujo,
}

impl PackageType {
    pub const ALL: [PackageType; 3] = [
        PackageType::Economico,
        PackageType::Estandar,
        PackageType::Lujo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PackageType::Economico => "economico",
            PackageType::Estandar => "estandar",
            PackageType::Lujo => "lujo",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.as_str() == value)
    }

    /// Human-readable label for form options.
    pub fn label(&self) -> &'static str {
        match self {
            PackageType::Economico => "Económico",
            PackageType::Estandar => "Estándar",
            PackageType::Lujo => "Lujo",
        }
    }
}

/// Trip style. Persisted as its lowercase wire value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum TripType {
    Ocio,
    Familiar,
    Aventura,
    Naturaleza,
    Gastronomico,
    Cultural,
}

impl TripType {
    pub const ALL: [TripType; 6] = [
        TripType::Ocio,
        TripType::Familiar,
        TripType::Aventura,
        TripType::Naturaleza,
        TripType::Gastronomico,
        TripType::Cultural,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TripType::Ocio => "ocio",
            TripType::Familiar => "familiar",
            TripType::Aventura => "aventura",
            TripType::Naturaleza => "naturaleza",
            TripType::Gastronomico => "gastronomico",
            TripType::Cultural => "cultural",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.as_str() == value)
    }

    pub fn label(&self) -> &'static str {
        match self {
            TripType::Ocio => "Ocio",
            TripType::Familiar => "Familiar",
            TripType::Aventura => "Aventura",
            TripType::Naturaleza => "Naturaleza",
            TripType::Gastronomico => "Gastronómico",
            TripType::Cultural => "Cultural",
        }
    }
}

/// Payment arrangement. Persisted as its snake_case wire value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum PaymentMethod {
    PagoUnico,
    APlazos,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 2] = [PaymentMethod::PagoUnico, PaymentMethod::APlazos];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::PagoUnico => "pago_unico",
            PaymentMethod::APlazos => "a_plazos",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.as_str() == value)
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::PagoUnico => "Pago único",
            PaymentMethod::APlazos => "A plazos",
        }
    }
}
