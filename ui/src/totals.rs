use std::collections::BTreeMap;

use api::cash_amount::CashAmount;
use api::currency::Currency;
use api::transaction::CashTransaction;
use num_traits::CheckedAdd;

/// Net cash flow and realized P&L of a set of rows in one currency.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurrencyTotals {
    pub net: CashAmount,
    pub pnl: CashAmount,
}

/// Sums rows per currency, ordered by currency code. P&L amounts in a
/// currency other than the row's own are summed under their own currency.
///
/// A currency whose sums overflow is left out, with a warning.
pub fn totals_by_currency(rows: &[CashTransaction]) -> Vec<CurrencyTotals> {
    // `None` marks a currency that overflowed.
    let mut by_currency: BTreeMap<Currency, Option<CurrencyTotals>> = BTreeMap::new();
    for row in rows {
        accumulate(&mut by_currency, row.amount, |t| &mut t.net);
        if let Some(pnl) = row.pnl {
            accumulate(&mut by_currency, pnl, |t| &mut t.pnl);
        }
    }
    by_currency.into_values().flatten().collect()
}

fn accumulate(
    by_currency: &mut BTreeMap<Currency, Option<CurrencyTotals>>,
    amount: CashAmount,
    field: impl Fn(&mut CurrencyTotals) -> &mut CashAmount,
) {
    let currency = amount.currency();
    let slot = by_currency.entry(currency).or_insert(Some(CurrencyTotals {
        net: CashAmount::zero(currency),
        pnl: CashAmount::zero(currency),
    }));
    let Some(totals) = slot else {
        return;
    };
    let sum = field(totals);
    match sum.checked_add(&amount) {
        Some(total) => *sum = total,
        None => {
            dioxus_logger::tracing::warn!("{} totals overflow, leaving them out", currency.code());
            *slot = None;
        }
    }
}
