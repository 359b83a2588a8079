//! Per-product forward depletion simulation.

use chrono::NaiveDate;

use crate::record::{ForecastRecord, InventoryBatch};

/// Mutable remaining quantity for one batch.
///
/// The `Vec<BatchState>` built inside [`run_depletion`] is owned entirely
/// by that call frame; caller-owned batches are never mutated. Entries are
/// ordered ascending by `(expiry_date, batch_id)`, so ties on expiry break
/// deterministically by batch id.
#[derive(Debug, Clone)]
struct BatchState {
    expiry_date: NaiveDate,
    remaining: f64,
}

/// Outcome of one per-product simulation run.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DepletionOutcome {
    /// Consecutive forward days whose demand the stock satisfied.
    pub(crate) days_covered: u32,
    /// Total stock unexpired at the anchor date, before any consumption.
    pub(crate) total_inventory: f64,
}

/// Runs the forward depletion walk for one product.
///
/// `forecast` and `batches` may arrive unsorted and unfiltered: records
/// dated strictly before `as_of` and batches expiring strictly before
/// `as_of` are ignored. A batch remains usable on its expiry date and is
/// removed when the walk advances past it.
///
/// Walking forecast days in ascending date order, a day is covered when
/// the surviving stock meets its demand; covered demand is consumed from
/// batches in ascending `(expiry_date, batch_id)` order. The first
/// shortfall ends the count. A day with zero demand is always covered,
/// even once every batch has expired.
pub(crate) fn run_depletion(
    forecast: &[&ForecastRecord],
    batches: &[&InventoryBatch],
    as_of: NaiveDate,
) -> DepletionOutcome {
    let mut demand: Vec<&ForecastRecord> = forecast
        .iter()
        .copied()
        .filter(|r| r.date >= as_of)
        .collect();
    demand.sort_by_key(|r| r.date);

    let mut live: Vec<&InventoryBatch> = batches
        .iter()
        .copied()
        .filter(|b| b.expiry_date >= as_of)
        .collect();
    live.sort_by(|a, b| {
        (a.expiry_date, a.batch_id.as_str()).cmp(&(b.expiry_date, b.batch_id.as_str()))
    });

    // Arena of per-batch remaining quantities, owned by this call.
    let mut arena: Vec<BatchState> = live
        .iter()
        .map(|b| BatchState {
            expiry_date: b.expiry_date,
            remaining: b.quantity,
        })
        .collect();

    let total_inventory: f64 = arena.iter().map(|b| b.remaining).sum();

    if arena.is_empty() || demand.is_empty() {
        return DepletionOutcome {
            days_covered: 0,
            total_inventory,
        };
    }

    let mut days_covered = 0u32;
    // Index of the earliest-expiring batch still alive. Only ever advances:
    // expired batches never come back.
    let mut first_live = 0usize;

    for record in &demand {
        while first_live < arena.len() && arena[first_live].expiry_date < record.date {
            first_live += 1;
        }

        let remaining: f64 = arena[first_live..].iter().map(|b| b.remaining).sum();
        if remaining < record.forecasted_sales {
            break;
        }
        days_covered += 1;

        // FIFO consumption: drain earliest-expiring batches first. A batch
        // may be left at zero; only the expiry check above removes it.
        let mut to_fulfill = record.forecasted_sales;
        for batch in arena[first_live..].iter_mut() {
            if to_fulfill <= 0.0 {
                break;
            }
            if batch.remaining >= to_fulfill {
                batch.remaining -= to_fulfill;
                to_fulfill = 0.0;
            } else {
                to_fulfill -= batch.remaining;
                batch.remaining = 0.0;
            }
        }
    }

    DepletionOutcome {
        days_covered,
        total_inventory,
    }
}
