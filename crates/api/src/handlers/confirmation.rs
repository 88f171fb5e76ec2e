//! Public booking confirmation page (`/t/{transaction_id}`).
//!
//! This is the link sent by SMS, so it is served as HTML and sits outside
//! the API-key protected tree.

use axum::extract::{Path, State};
use axum::response::Html;
use makeup_core::booking::format_due_date;
use makeup_core::error::CoreError;
use makeup_db::models::appointment::Appointment;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /t/{transaction_id}
///
/// Renders the booking and marks it viewed. A failure to record the view is
/// logged and does not block the page.
pub async fn show(
    State(state): State<AppState>,
    Path(transaction_id): Path<String>,
) -> AppResult<Html<String>> {
    let appointment = state
        .store
        .find_appointment(&transaction_id)
        .await?
        .ok_or_else(|| CoreError::NotFound {
            entity: "Appointment",
            key: transaction_id.clone(),
        })?;

    if !appointment.is_viewed {
        if let Err(e) = state.store.mark_appointment_viewed(&transaction_id).await {
            tracing::warn!(transaction_id = %transaction_id, error = %e, "Failed to mark appointment viewed");
        }
    }

    Ok(Html(render_page(&appointment)))
}

/// Render the confirmation page. Every user-supplied field is escaped.
pub fn render_page(a: &Appointment) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Veri Görüntüleme</title>
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <link rel="stylesheet" href="https://maxcdn.bootstrapcdn.com/bootstrap/4.5.2/css/bootstrap.min.css">
</head>
<body>
    <div class="container-fluid">
        <h1 class="text-center">Kişisel Bilgiler</h1>
        <div class="row justify-content-center">
            <div class="col-md-6">
                <p><strong>Ad:</strong> {first_name} {last_name}</p>
                <p><strong>E-posta:</strong> {email}</p>
                <p><strong>Telefon:</strong> {phone}</p>
                <p><strong>Bölge:</strong> {district}</p>
            </div>
        </div>
        <div class="row justify-content-center">
            <div class="col-md-6">
                <h2 class="mt-4">Ek Bilgiler</h2>
                <p><strong>Tercih Edilen Zaman Dilimi:</strong> {period}</p>
                <p><strong>Oluşturulma Tarihi:</strong> {created_at}</p>
                <p><strong>Talep Edilen Tarih:</strong> {due_date}</p>
                <p><strong>Mesaj:</strong> {message}</p>
            </div>
        </div>
    </div>
</body>
</html>
"#,
        first_name = escape_html(&a.first_name),
        last_name = escape_html(&a.last_name),
        email = escape_html(&a.email),
        phone = escape_html(&a.phone_number),
        district = escape_html(&a.district),
        period = escape_html(&a.prefer_time_period_in_day),
        created_at = a.created_at.format("%Y-%m-%d %H:%M:%S"),
        due_date = format_due_date(&a.due_date),
        message = escape_html(&a.message),
    )
}

/// Escape the five HTML-significant characters.
fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
