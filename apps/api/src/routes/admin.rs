//! Admin panel — a single HTML page listing every reading with its delivery
//! status and a per-row send action.

use axum::{extract::State, response::Html};

use crate::errors::AppError;
use crate::state::AppState;
use crate::store::Reading;

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Soulmate Admin</title>
    <meta charset="utf-8">
    <style>
        body {
            font-family: Arial, sans-serif;
            max-width: 1200px;
            margin: 50px auto;
            padding: 20px;
            background: #f5f5f5;
        }
        h1 { color: #333; }
        table {
            width: 100%;
            background: white;
            border-collapse: collapse;
            box-shadow: 0 2px 4px rgba(0,0,0,0.1);
        }
        th, td {
            padding: 12px;
            text-align: left;
            border-bottom: 1px solid #ddd;
        }
        th {
            background: #6366f1;
            color: white;
            font-weight: bold;
        }
        button {
            padding: 8px 16px;
            background: #10b981;
            color: white;
            border: none;
            border-radius: 4px;
            cursor: pointer;
            font-size: 14px;
        }
        button:hover { background: #059669; }
        button:disabled {
            background: #ccc;
            cursor: not-allowed;
        }
        .status {
            padding: 4px 8px;
            border-radius: 4px;
            font-size: 12px;
            font-weight: bold;
        }
        .status.sent { background: #d1fae5; color: #065f46; }
        .status.pending { background: #fef3c7; color: #92400e; }
        .email { color: #6366f1; }
    </style>
</head>
<body>
    <h1>📧 Soulmate Admin - Pending Reports</h1>
    <p>Total readings: <strong>{total}</strong></p>
    <table>
        <thead>
            <tr>
                <th>Email</th>
                <th>Name</th>
                <th>Created</th>
                <th>Status</th>
                <th>Action</th>
            </tr>
        </thead>
        <tbody>
{rows}
        </tbody>
    </table>

    <script>
        async function sendReport(readingId) {
            if (!confirm('Send full report to this user?')) return;

            try {
                const response = await fetch(`/api/send-report/${readingId}`, {
                    method: 'POST'
                });

                if (response.ok) {
                    alert('✅ Report sent successfully!');
                    location.reload();
                } else {
                    const error = await response.json();
                    alert('❌ Error: ' + error.error);
                }
            } catch (err) {
                alert('❌ Network error: ' + err.message);
            }
        }
    </script>
</body>
</html>
"#;

const ROW_TEMPLATE: &str = r#"            <tr>
                <td class="email">{email}</td>
                <td>{name}</td>
                <td>{created}</td>
                <td><span class="status {status_class}">{status_text}</span></td>
                <td>
                    <button onclick="sendReport('{reading_id}')" {disabled}>
                        Send Report
                    </button>
                </td>
            </tr>
"#;

/// GET /admin
pub async fn handle_admin_panel(
    State(state): State<AppState>,
) -> Result<Html<String>, AppError> {
    let readings = state.store.list_all().await?;
    Ok(Html(render_admin_page(&readings)))
}

fn render_admin_page(readings: &[Reading]) -> String {
    let rows: String = readings.iter().map(render_row).collect();
    PAGE_TEMPLATE
        .replace("{total}", &readings.len().to_string())
        .replace("{rows}", &rows)
}

fn render_row(reading: &Reading) -> String {
    let (status_class, status_text, disabled) = if reading.sent {
        ("sent", "✅ Sent", "disabled")
    } else {
        ("pending", "⏳ Pending", "")
    };

    ROW_TEMPLATE
        .replace("{email}", &escape_html(&reading.email))
        .replace("{name}", &escape_html(&reading.name))
        .replace(
            "{created}",
            &reading.created_at.format("%Y-%m-%dT%H:%M:%S").to_string(),
        )
        .replace("{status_class}", status_class)
        .replace("{status_text}", status_text)
        .replace("{reading_id}", &reading.reading_id.to_string())
        .replace("{disabled}", disabled)
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
