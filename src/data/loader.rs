use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde_json::{Map, Value as JsonValue};

use super::model::{SalesDataset, SalesRecord};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a sales dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.json` – `[{ "product": ..., "category": ..., "region": ..., "sales": ... }, ...]`
/// * `.csv`  – header row with `product`, `category`, `region`, `sales`
pub fn load_file(path: &Path) -> Result<SalesDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "json" => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            parse_json(&text)
        }
        "csv" => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("opening {}", path.display()))?;
            parse_csv(file)
        }
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented):
///
/// ```json
/// [
///   { "product": "Laptop", "category": "Electronics", "region": "North", "sales": 1200 },
///   { "product": "Desk",   "category": "Furniture",   "region": 4,       "sales": "350.5" }
/// ]
/// ```
///
/// `region` may be a number and `sales` may be a numeric string; both are
/// normalised here so nothing downstream has to coerce again.
pub fn parse_json(text: &str) -> Result<SalesDataset> {
    let root: JsonValue = serde_json::from_str(text).context("parsing JSON")?;

    let rows = root.as_array().context("Expected top-level JSON array")?;

    let mut records = Vec::with_capacity(rows.len());

    for (i, row) in rows.iter().enumerate() {
        let obj = row
            .as_object()
            .with_context(|| format!("Row {i} is not a JSON object"))?;

        records.push(SalesRecord {
            product: json_text(obj, "product", i)?,
            category: json_text(obj, "category", i)?,
            region: json_label(obj, "region", i)?,
            sales: json_sales(obj.get("sales"), i)?,
        });
    }

    Ok(SalesDataset::from_records(records))
}

fn json_text(obj: &Map<String, JsonValue>, key: &str, row: usize) -> Result<String> {
    obj.get(key)
        .and_then(|v| v.as_str())
        .map(str::to_string)
        .with_context(|| format!("Row {row}: missing or non-string '{key}'"))
}

/// A label that the source sometimes writes as a number (e.g. region codes).
fn json_label(obj: &Map<String, JsonValue>, key: &str, row: usize) -> Result<String> {
    match obj.get(key) {
        Some(JsonValue::String(s)) => Ok(s.clone()),
        Some(JsonValue::Number(n)) => Ok(n.to_string()),
        _ => bail!("Row {row}: missing or invalid '{key}'"),
    }
}

fn json_sales(val: Option<&JsonValue>, row: usize) -> Result<f64> {
    let amount = match val {
        Some(JsonValue::Number(n)) => n
            .as_f64()
            .with_context(|| format!("Row {row}: 'sales' out of range"))?,
        Some(JsonValue::String(s)) => parse_amount(s, row)?,
        Some(JsonValue::Null) => 0.0,
        None => bail!("Row {row}: missing 'sales'"),
        Some(other) => bail!("Row {row}: 'sales' must be a number, got {other}"),
    };
    Ok(amount)
}

/// Coerce a textual amount. Surrounding whitespace is ignored and an empty
/// string counts as zero.
fn parse_amount(s: &str, row: usize) -> Result<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    let value = trimmed
        .parse::<f64>()
        .with_context(|| format!("Row {row}: sales '{s}' is not a number"))?;
    if !value.is_finite() {
        bail!("Row {row}: sales '{s}' is not a finite number");
    }
    Ok(value)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row naming `product`, `category`, `region` and
/// `sales` in any order. Extra columns are ignored.
pub fn parse_csv<R: Read>(input: R) -> Result<SalesDataset> {
    let mut reader = csv::Reader::from_reader(input);
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.trim().to_ascii_lowercase())
        .collect();

    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h == name)
            .with_context(|| format!("CSV missing '{name}' column"))
    };
    let product_idx = column("product")?;
    let category_idx = column("category")?;
    let region_idx = column("region")?;
    let sales_idx = column("sales")?;

    let mut records = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let row = result.with_context(|| format!("CSV row {row_no}"))?;
        let field = |idx: usize| row.get(idx).unwrap_or("").to_string();

        records.push(SalesRecord {
            product: field(product_idx),
            category: field(category_idx),
            region: field(region_idx),
            sales: parse_amount(row.get(sales_idx).unwrap_or(""), row_no)?,
        });
    }

    Ok(SalesDataset::from_records(records))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_coerces_string_sales_and_numeric_regions() {
        let ds = parse_json(
            r#"[
                {"product": "A", "category": "X", "region": "E", "sales": 10},
                {"product": "B", "category": "Y", "region": 7, "sales": " 5.5 "},
                {"product": "C", "category": "X", "region": "W", "sales": null},
                {"product": "D", "category": "Z", "region": "W", "sales": ""}
            ]"#,
        )
        .unwrap();

        let sales: Vec<f64> = ds.records.iter().map(|r| r.sales).collect();
        assert_eq!(sales, vec![10.0, 5.5, 0.0, 0.0]);
        assert_eq!(ds.records[1].region, "7");
        assert_eq!(ds.categories, vec!["X", "Y", "Z"]);
    }

    #[test]
    fn json_rejects_non_numeric_sales_with_row_context() {
        let err = parse_json(r#"[{"product": "A", "category": "X", "region": "E", "sales": "lots"}]"#)
            .unwrap_err();
        assert!(format!("{err:#}").contains("Row 0"));
    }

    #[test]
    fn json_rejects_non_array_root() {
        assert!(parse_json(r#"{"product": "A"}"#).is_err());
        assert!(parse_json("not json").is_err());
    }

    #[test]
    fn json_requires_product_name() {
        let err = parse_json(r#"[{"category": "X", "region": "E", "sales": 1}]"#).unwrap_err();
        assert!(err.to_string().contains("product"));
    }

    #[test]
    fn empty_array_is_an_empty_dataset() {
        let ds = parse_json("[]").unwrap();
        assert!(ds.is_empty());
        assert!(ds.categories.is_empty());
    }

    #[test]
    fn csv_columns_in_any_order() {
        let input = "sales,region,Product,category,note\n12,North,Lamp,Home,x\n3.25,South,Pen,Office,y\n";
        let ds = parse_csv(input.as_bytes()).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[0], SalesRecord::new("Lamp", "Home", "North", 12.0));
        assert_eq!(ds.records[1].sales, 3.25);
    }

    #[test]
    fn csv_missing_column_is_an_error() {
        let err = parse_csv("product,category,sales\nA,X,1\n".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("region"));
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let err = load_file(Path::new("sales.parquet")).unwrap_err();
        assert!(err.to_string().contains(".parquet"));
    }
}
