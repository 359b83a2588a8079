//! Per-product grouping of the filtered inputs.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::record::{ForecastRecord, InventoryBatch};

/// One product's share of the filtered inputs.
#[derive(Debug, Default)]
pub(crate) struct ProductInputs<'a> {
    pub(crate) forecast: Vec<&'a ForecastRecord>,
    pub(crate) batches: Vec<&'a InventoryBatch>,
}

/// Groups both inputs by product id, dropping forecast records dated
/// strictly before `as_of` and batches expiring strictly before it.
///
/// The reported product set is the union of ids surviving the filter on
/// either side; a product whose only batches have already expired (and
/// has no future forecast) gets no entry. Keys are ordered, so iteration
/// yields products ascending by id.
pub(crate) fn partition_products<'a>(
    forecast: &'a [ForecastRecord],
    inventory: &'a [InventoryBatch],
    as_of: NaiveDate,
) -> BTreeMap<&'a str, ProductInputs<'a>> {
    let mut products: BTreeMap<&str, ProductInputs<'a>> = BTreeMap::new();

    for record in forecast.iter().filter(|r| r.date >= as_of) {
        products
            .entry(record.product_id.as_str())
            .or_default()
            .forecast
            .push(record);
    }
    for batch in inventory.iter().filter(|b| b.expiry_date >= as_of) {
        products
            .entry(batch.product_id.as_str())
            .or_default()
            .batches
            .push(batch);
    }

    products
}
