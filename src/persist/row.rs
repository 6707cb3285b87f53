use std::borrow::Cow;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::types::Record;

/// First line of every inventory file.
pub const HEADER: &str = "itemId,name,category,quantity,price,supplier";

/// Number of columns a row must carry. Extra trailing columns are ignored.
pub const COLUMNS: usize = 6;

/// One record as a CSV line (no line terminator).
///
/// ```text
/// 7,"Desk, standing",Furniture,3,249.5,"Bob's ""Best"" Desks"
/// ```
pub fn encode(record: &Record) -> String {
    format!(
        "{},{},{},{},{},{}",
        record.id,
        escape(&record.name),
        escape(&record.category),
        record.quantity,
        record.price,
        escape(&record.supplier),
    )
}

/// Quote a text field if it holds a comma, quote or line break; quotes
/// inside are doubled.
pub fn escape(value: &str) -> Cow<'_, str> {
    if value.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

/// Build a record from already-unquoted fields. Rows that parse but break
/// a field rule (zero id, blank text, negative price) are `Corruption`.
pub fn decode(fields: &[String]) -> Result<Record> {
    if fields.len() < COLUMNS {
        return Err(Error::Corruption(format!(
            "expected {COLUMNS} fields, found {}",
            fields.len()
        )));
    }

    let record = Record {
        id: parse_number(&fields[0], "itemId")?,
        name: fields[1].clone(),
        category: fields[2].clone(),
        quantity: parse_number(&fields[3], "quantity")?,
        price: parse_number(&fields[4], "price")?,
        supplier: fields[5].clone(),
    };
    // Same field rules as a record created through the store.
    record.validate().map_err(|err| match err {
        Error::InvalidArgument(reason) => Error::Corruption(reason),
        other => other,
    })?;
    Ok(record)
}

fn parse_number<N: FromStr>(field: &str, column: &str) -> Result<N> {
    field
        .trim()
        .parse()
        .map_err(|_| Error::Corruption(format!("{column} is not a valid number: {field:?}")))
}
