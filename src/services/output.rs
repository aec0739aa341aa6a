use crate::domain::models::JsonOut;
use serde::Serialize;

/// Non-finite areas print as `nan`, `inf` or `-inf`.
pub fn format_area(area: f64) -> String {
    if area.is_nan() {
        return "nan".to_string();
    }
    format!("{:.2}", area)
}

pub fn print_out<T: Serialize>(
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        for d in data {
            println!("{}", row(d));
        }
    }
    Ok(())
}
