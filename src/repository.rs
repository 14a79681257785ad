use sqlx::mysql::MySqlPool;

use crate::errors::AppError;
use crate::models::{NewReservation, Reservation};

/// Data access for the `reservas` table. Every operation is a single
/// parameterized statement with a connection scoped to the call; writes
/// commit before returning.
pub struct ReservationRepository {
    pool: MySqlPool,
}

impl ReservationRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Every reservation, ordered ascending by departure date.
    pub async fn list_all(&self) -> Result<Vec<Reservation>, AppError> {
        let reservas = sqlx::query_as::<_, Reservation>(
            "SELECT id, nombre_cliente, email, telefono, destino, fecha_salida, fecha_regreso, \
             num_personas, tipo_paquete, tipo_viaje, forma_pago \
             FROM reservas ORDER BY fecha_salida",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(reservas)
    }

    /// The matching reservation, or `None` when the id resolves to no row.
    pub async fn fetch_by_id(&self, id: i64) -> Result<Option<Reservation>, AppError> {
        let reserva = sqlx::query_as::<_, Reservation>(
            "SELECT id, nombre_cliente, email, telefono, destino, fecha_salida, fecha_regreso, \
             num_personas, tipo_paquete, tipo_viaje, forma_pago \
             FROM reservas WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(reserva)
    }

    /// Inserts an already-validated reservation and returns its new id.
    ///
    /// An id of 0 from the driver means no row was assigned an identifier;
    /// that is an explicit failure, never a sentinel return.
    pub async fn insert(&self, reserva: &NewReservation) -> Result<i64, AppError> {
        let result = sqlx::query(
            "INSERT INTO reservas \
             (nombre_cliente, email, telefono, destino, fecha_salida, fecha_regreso, \
              num_personas, tipo_paquete, tipo_viaje, forma_pago) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&reserva.nombre_cliente)
        .bind(&reserva.email)
        .bind(&reserva.telefono)
        .bind(&reserva.destino)
        .bind(reserva.fecha_salida)
        .bind(reserva.fecha_regreso)
        .bind(reserva.num_personas)
        .bind(reserva.tipo_paquete)
        .bind(reserva.tipo_viaje)
        .bind(reserva.forma_pago)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_id();
        if id == 0 {
            return Err(AppError::Internal(
                "insert did not assign a reservation id".to_string(),
            ));
        }

        tracing::debug!("Inserted reservation {}", id);
        Ok(id as i64)
    }

    /// Overwrites every field of the reservation matching `id`.
    ///
    /// Returns whether the row existed. MySQL reports changed rows rather
    /// than matched rows, so an overwrite with identical values comes back
    /// as 0 affected; existence is re-checked before reporting `false`.
    pub async fn update(&self, id: i64, reserva: &NewReservation) -> Result<bool, AppError> {
        let result = sqlx::query(
            "UPDATE reservas SET \
             nombre_cliente = ?, email = ?, telefono = ?, destino = ?, \
             fecha_salida = ?, fecha_regreso = ?, num_personas = ?, \
             tipo_paquete = ?, tipo_viaje = ?, forma_pago = ? \
             WHERE id = ?",
        )
        .bind(&reserva.nombre_cliente)
        .bind(&reserva.email)
        .bind(&reserva.telefono)
        .bind(&reserva.destino)
        .bind(reserva.fecha_salida)
        .bind(reserva.fecha_regreso)
        .bind(reserva.num_personas)
        .bind(reserva.tipo_paquete)
        .bind(reserva.tipo_viaje)
        .bind(reserva.forma_pago)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() > 0 {
            return Ok(true);
        }

        Ok(self.fetch_by_id(id).await?.is_some())
    }

    /// Removes the reservation matching `id`. Returns whether a row existed;
    /// deleting an absent id is not an error.
    pub async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM reservas WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
