use crate::domain::models::JsonOut;
use serde::Serialize;

pub fn print_out<T: Serialize>(
    json: bool,
    ok: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok, data })?
        );
    } else {
        for d in data {
            println!("{}", row(d));
        }
    }
    Ok(())
}

/// Like `print_out` for a single value; `render` returns the text lines.
pub fn print_one<T: Serialize>(
    json: bool,
    ok: bool,
    data: T,
    render: impl Fn(&T) -> Vec<String>,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok, data })?
        );
    } else {
        for line in render(&data) {
            println!("{}", line);
        }
    }
    Ok(())
}
