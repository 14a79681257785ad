//! Server-rendered HTML pages. Markup is built inline; every interpolated
//! user value goes through [`escape`].

use crate::models::{PackageType, PaymentMethod, Reservation, ReservationForm, TripType};

/// Escapes text for interpolation into HTML element bodies and attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Maps the `msg` query parameter to a banner; unknown values show nothing.
fn banner(msg: &str) -> Option<(&'static str, &'static str)> {
    match msg {
        "success" => Some(("flash", "¡Reserva creada con éxito!")),
        "updated" => Some(("flash", "¡Reserva actualizada correctamente!")),
        "deleted" => Some(("flash", "La reserva ha sido eliminada.")),
        "error" => Some((
            "flash flash-error",
            "Ha ocurrido un error inesperado. Inténtalo de nuevo.",
        )),
        _ => None,
    }
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="es">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} – GoTrip</title>
    <style>
        body {{ font-family: sans-serif; margin: 0; background: #f5f6f8; color: #222; }}
        header {{ background: #16425b; color: #fff; padding: 1rem 2rem; }}
        header a {{ color: #fff; text-decoration: none; font-weight: bold; }}
        main {{ max-width: 960px; margin: 1.5rem auto; padding: 0 1rem; }}
        table {{ width: 100%; border-collapse: collapse; background: #fff; }}
        th, td {{ padding: .5rem .75rem; border-bottom: 1px solid #ddd; text-align: left; }}
        .flash {{ background: #d9f2e5; border: 1px solid #2e9e6b; padding: .75rem 1rem; margin-bottom: 1rem; }}
        .flash-error {{ background: #fbe3e4; border-color: #c0392b; }}
        .errores {{ background: #fbe3e4; border: 1px solid #c0392b; padding: .75rem 1rem; margin-bottom: 1rem; }}
        form label {{ display: block; margin-top: .75rem; }}
        form input, form select {{ padding: .4rem; width: 100%; max-width: 24rem; }}
        .acciones {{ margin-top: 1rem; }}
        button, .boton {{ background: #16425b; color: #fff; border: none; padding: .5rem 1rem; cursor: pointer; text-decoration: none; display: inline-block; }}
        button.peligro {{ background: #c0392b; }}
    </style>
</head>
<body>
    <header><a href="/">GoTrip – Agencia de Viajes</a></header>
    <main>
{body}
    </main>
</body>
</html>
"#
    )
}

/// The reservation listing with optional status banner.
pub fn index_page(reservas: &[Reservation], msg: Option<&str>) -> String {
    let mut body = String::new();

    if let Some((class, text)) = msg.and_then(banner) {
        body.push_str(&format!("<div class=\"{class}\">{text}</div>\n"));
    }

    body.push_str("<h1>Reservas</h1>\n");
    body.push_str("<p><a class=\"boton\" href=\"/reservas/nueva\">Nueva reserva</a></p>\n");

    if reservas.is_empty() {
        body.push_str("<p>No hay reservas todavía.</p>\n");
    } else {
        body.push_str(
            "<table>\n<thead><tr>\
             <th>Cliente</th><th>Destino</th><th>Salida</th><th>Regreso</th>\
             <th>Personas</th><th>Paquete</th><th>Viaje</th><th>Pago</th><th></th>\
             </tr></thead>\n<tbody>\n",
        );
        for r in reservas {
            body.push_str(&format!(
                "<tr>\
                 <td>{nombre}</td><td>{destino}</td>\
                 <td>{salida}</td><td>{regreso}</td>\
                 <td>{personas}</td><td>{paquete}</td><td>{viaje}</td><td>{pago}</td>\
                 <td><a href=\"/reservas/editar/{id}\">Editar</a> \
                 <button class=\"peligro\" onclick=\"eliminarReserva({id})\">Eliminar</button></td>\
                 </tr>\n",
                nombre = escape(&r.nombre_cliente),
                destino = escape(&r.destino),
                salida = r.fecha_salida.format("%d/%m/%Y"),
                regreso = r.fecha_regreso.format("%d/%m/%Y"),
                personas = r.num_personas,
                paquete = r.tipo_paquete.label(),
                viaje = r.tipo_viaje.label(),
                pago = r.forma_pago.label(),
                id = r.id,
            ));
        }
        body.push_str("</tbody>\n</table>\n");
    }

    body.push_str(
        r#"<script>
async function eliminarReserva(id) {
    if (!confirm('¿Eliminar esta reserva?')) return;
    const resp = await fetch(`/reservas/${id}`, { method: 'DELETE' });
    window.location = resp.ok ? '/?msg=deleted' : '/?msg=error';
}
</script>
"#,
    );

    layout("Reservas", &body)
}

/// Empty (or re-rendered after validation failure) creation form.
pub fn new_reservation_page(form: Option<&ReservationForm>, errors: &[String]) -> String {
    let body = format!(
        "<h1>Nueva reserva</h1>\n{}",
        reservation_form("/reservas/nueva", "Crear reserva", form, errors)
    );
    layout("Nueva reserva", &body)
}

/// Edit form, pre-filled from storage or from a rejected submission.
pub fn edit_reservation_page(id: i64, form: &ReservationForm, errors: &[String]) -> String {
    let body = format!(
        "<h1>Editar reserva</h1>\n{}",
        reservation_form(
            &format!("/reservas/editar/{id}"),
            "Guardar cambios",
            Some(form),
            errors
        )
    );
    layout("Editar reserva", &body)
}

fn error_list(errors: &[String]) -> String {
    if errors.is_empty() {
        return String::new();
    }
    let items: String = errors
        .iter()
        .map(|e| format!("<li>{}</li>", escape(e)))
        .collect();
    format!("<div class=\"errores\"><ul>{items}</ul></div>\n")
}

fn select_options<'a, I>(variants: I, current: Option<&str>) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    variants
        .into_iter()
        .map(|(value, label)| {
            let selected = if current == Some(value) {
                " selected"
            } else {
                ""
            };
            format!("<option value=\"{value}\"{selected}>{label}</option>")
        })
        .collect()
}

fn reservation_form(
    action: &str,
    submit_label: &str,
    form: Option<&ReservationForm>,
    errors: &[String],
) -> String {
    let text = |f: fn(&ReservationForm) -> &String| {
        form.map(|v| escape(f(v))).unwrap_or_default()
    };
    let fecha_salida = form
        .map(|v| v.fecha_salida.format("%Y-%m-%d").to_string())
        .unwrap_or_default();
    let fecha_regreso = form
        .map(|v| v.fecha_regreso.format("%Y-%m-%d").to_string())
        .unwrap_or_default();
    let num_personas = form
        .map(|v| v.num_personas.to_string())
        .unwrap_or_default();

    let paquetes = select_options(
        PackageType::ALL.iter().map(|p| (p.as_str(), p.label())),
        form.map(|v| v.tipo_paquete.as_str()),
    );
    let viajes = select_options(
        TripType::ALL.iter().map(|t| (t.as_str(), t.label())),
        form.map(|v| v.tipo_viaje.as_str()),
    );
    let pagos = select_options(
        PaymentMethod::ALL.iter().map(|p| (p.as_str(), p.label())),
        form.map(|v| v.forma_pago.as_str()),
    );

    format!(
        r#"{errores}<form method="post" action="{action}">
    <label>Nombre del cliente
        <input type="text" name="nombre_cliente" value="{nombre_cliente}" required>
    </label>
    <label>Email
        <input type="email" name="email" value="{email}" required>
    </label>
    <label>Teléfono
        <input type="text" name="telefono" value="{telefono}" required>
    </label>
    <label>Destino
        <input type="text" name="destino" value="{destino}" required>
    </label>
    <label>Fecha de salida
        <input type="date" name="fecha_salida" value="{fecha_salida}" required>
    </label>
    <label>Fecha de regreso
        <input type="date" name="fecha_regreso" value="{fecha_regreso}" required>
    </label>
    <label>Número de personas
        <input type="number" name="num_personas" value="{num_personas}" min="1" required>
    </label>
    <label>Tipo de paquete
        <select name="tipo_paquete">{paquetes}</select>
    </label>
    <label>Tipo de viaje
        <select name="tipo_viaje">{viajes}</select>
    </label>
    <label>Forma de pago
        <select name="forma_pago">{pagos}</select>
    </label>
    <div class="acciones">
        <button type="submit">{submit_label}</button>
        <a class="boton" href="/">Cancelar</a>
    </div>
</form>
"#,
        errores = error_list(errors),
        nombre_cliente = text(|v| &v.nombre_cliente),
        email = text(|v| &v.email),
        telefono = text(|v| &v.telefono),
        destino = text(|v| &v.destino),
    )
}
