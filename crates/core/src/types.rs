/// Primary keys of the `projects` table are PostgreSQL SERIAL.
pub type DbId = i32;

/// `date_added` is a `TIMESTAMP` without time zone, assigned by the server.
pub type Timestamp = chrono::NaiveDateTime;

/// Display format for the "Added on" line of a project.
pub const DATE_ADDED_FORMAT: &str = "%Y-%m-%d";

/// Format a `date_added` value for display.
pub fn format_date_added(ts: &Timestamp) -> String {
    ts.format(DATE_ADDED_FORMAT).to_string()
}
