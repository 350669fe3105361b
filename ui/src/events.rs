//! Outward events of the cash transactions view.
//!
//! Every event leaves the view through [`Subscribers::dispatch`]. The structural
//! stream (`on_event`) sees all of them; the convenience callbacks
//! (`on_row_click`, `on_minimize`) each see their own kind.

use api::transaction::CashTransaction;
use dioxus::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub enum CashTransactionsEvent {
    /// The viewer activated a row.
    RowClick(CashTransaction),
    /// The view went from expanded to minimized.
    Minimize,
}

/// Something that can receive a value emitted by the view.
pub trait EventSink<T> {
    fn emit(&self, value: T);
}

impl<T: 'static> EventSink<T> for Option<EventHandler<T>> {
    fn emit(&self, value: T) {
        if let Some(handler) = self {
            handler.call(value);
        }
    }
}

#[derive(Clone, Copy)]
pub struct Subscribers<S, R, M> {
    pub stream: S,
    pub row_click: R,
    pub minimize: M,
}

impl<S, R, M> Subscribers<S, R, M>
where
    S: EventSink<CashTransactionsEvent>,
    R: EventSink<CashTransaction>,
    M: EventSink<()>,
{
    pub fn dispatch(&self, event: CashTransactionsEvent) {
        match &event {
            CashTransactionsEvent::RowClick(row) => {
                dioxus_logger::tracing::debug!("row-click: {}", row.id);
                self.row_click.emit(row.clone());
            }
            CashTransactionsEvent::Minimize => {
                dioxus_logger::tracing::debug!("minimize");
                self.minimize.emit(());
            }
        }
        self.stream.emit(event);
    }
}

/// The subscribers wired from component props.
pub type PropSubscribers = Subscribers<
    Option<EventHandler<CashTransactionsEvent>>,
    Option<EventHandler<CashTransaction>>,
    Option<EventHandler<()>>,
>;

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use api::cash_amount::CashAmount;
    use api::currency::Currency;
    use api::transaction::CashTransactionKind;
    use chrono::NaiveDate;

    use super::*;

    struct Recorder<T>(RefCell<Vec<T>>);

    impl<T> Default for Recorder<T> {
        fn default() -> Self {
            Self(RefCell::new(Vec::new()))
        }
    }

    impl<T> EventSink<T> for &Recorder<T> {
        fn emit(&self, value: T) {
            self.0.borrow_mut().push(value);
        }
    }

    /// Stands in for a callback the caller did not supply.
    struct Absent;

    impl<T> EventSink<T> for Absent {
        fn emit(&self, _value: T) {}
    }

    fn sample_row() -> CashTransaction {
        CashTransaction {
            id: "t42".to_string(),
            account_id: "acc-1".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 5, 17).unwrap(),
            kind: CashTransactionKind::Dividend,
            description: "ACME dividend".to_string(),
            amount: CashAmount::new_from_minor(1250, Currency::USD),
            pnl: Some(CashAmount::new_from_minor(1250, Currency::USD)),
            balance: None,
        }
    }

    #[test]
    fn row_click_reaches_stream_and_callback_once() {
        let stream = Recorder::<CashTransactionsEvent>::default();
        let rows = Recorder::<CashTransaction>::default();
        let minimize = Recorder::<()>::default();
        let subscribers = Subscribers {
            stream: &stream,
            row_click: &rows,
            minimize: &minimize,
        };

        subscribers.dispatch(CashTransactionsEvent::RowClick(sample_row()));

        assert_eq!(
            *stream.0.borrow(),
            vec![CashTransactionsEvent::RowClick(sample_row())]
        );
        assert_eq!(*rows.0.borrow(), vec![sample_row()]);
        assert!(minimize.0.borrow().is_empty());
    }

    #[test]
    fn row_click_without_callback_still_streams() {
        let stream = Recorder::<CashTransactionsEvent>::default();
        let subscribers = Subscribers {
            stream: &stream,
            row_click: Absent,
            minimize: Absent,
        };

        subscribers.dispatch(CashTransactionsEvent::RowClick(sample_row()));

        assert_eq!(stream.0.borrow().len(), 1);
    }

    #[test]
    fn minimize_carries_no_payload() {
        let stream = Recorder::<CashTransactionsEvent>::default();
        let rows = Recorder::<CashTransaction>::default();
        let minimize = Recorder::<()>::default();
        let subscribers = Subscribers {
            stream: &stream,
            row_click: &rows,
            minimize: &minimize,
        };

        subscribers.dispatch(CashTransactionsEvent::Minimize);

        assert_eq!(*stream.0.borrow(), vec![CashTransactionsEvent::Minimize]);
        assert_eq!(*minimize.0.borrow(), vec![()]);
        assert!(rows.0.borrow().is_empty());
    }
}
