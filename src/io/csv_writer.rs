use tokio::io::{AsyncWrite, AsyncWriteExt};

use super::error::IoError;
use crate::query::{Report, WantedItems};

/// Separator between customer names inside one CSV cell
pub const NAME_SEPARATOR: &str = ";";

/// Encode the item -> customers table as CSV
fn wanted_items_csv(wanted_items: &WantedItems) -> Result<Vec<u8>, IoError> {
    let mut csv = csv::Writer::from_writer(Vec::new());
    csv.write_record(["item", "customers"])?;
    for (item, customers) in wanted_items {
        let names: Vec<&str> = customers.iter().map(String::as_str).collect();
        csv.write_record([item.as_str(), names.join(NAME_SEPARATOR).as_str()])?;
    }
    csv.into_inner().map_err(|e| IoError::Io(e.into_error()))
}

/// Write the item -> customers table as CSV
pub async fn write_wanted_items<W>(wanted_items: &WantedItems, mut writer: W) -> Result<(), IoError>
where
    W: AsyncWrite + Unpin + Send,
{
    writer.write_all(&wanted_items_csv(wanted_items)?).await?;
    writer.flush().await?;
    Ok(())
}

/// Write a full report: summary lines followed by the wanted-items table
pub async fn write_report<W>(report: &Report, mut writer: W) -> Result<(), IoError>
where
    W: AsyncWrite + Unpin + Send,
{
    let not_on_sale: Vec<&str> = report.items_not_on_sale.iter().map(String::as_str).collect();
    let summary = format!(
        "customers: {}\nnot on sale: {}\nenough money: {}\n",
        report.customer_names,
        not_on_sale.join(","),
        report.customers_with_enough_money.join(","),
    );

    writer.write_all(summary.as_bytes()).await?;
    write_wanted_items(&report.wanted_items, writer).await
}
