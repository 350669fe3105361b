//! The cash transactions view: a table of one account's cash movements.

use std::rc::Rc;

use api::prefs::table_prefs::TablePrefs;
use api::source::TransactionStore;
use api::transaction::CashTransaction;
use dioxus::prelude::*;

use crate::components::columns_popup::ColumnsPopup;
use crate::components::empty_state::EmptyState;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;
use crate::components::sortable_header::SortableHeader;
use crate::components::transaction_row::pnl_class;
use crate::components::transaction_row::TransactionRow;
use crate::events::CashTransactionsEvent;
use crate::events::PropSubscribers;
use crate::events::Subscribers;
use crate::totals::totals_by_currency;
use crate::view_state::sorted_rows;
use crate::view_state::ViewState;

const TITLE: &str = "Cash Transactions";

const CASH_TX_CSS: &str = r#"
    .cash-tx-header { display: flex; justify-content: space-between; align-items: center; gap: 0.5rem; margin-bottom: 1rem; }
    .cash-tx-header h3 { margin-bottom: 0; }
    .cash-tx-actions { display: flex; align-items: center; gap: 0.5rem; }
    .cash-tx-actions button { margin-bottom: 0; padding: 0.25rem 0.75rem; }
    .cash-tx-row:hover { background-color: var(--pico-secondary-background); }
    .pnl-positive { color: var(--pico-ins-color, #1e8e3e); font-weight: 600; }
    .pnl-negative { color: var(--pico-del-color, #c62828); font-weight: 600; }
    .pnl-zero { color: var(--pico-muted-color); }
"#;

/// Props of [`CashTransactions`].
#[derive(Props, Clone, PartialEq)]
pub struct CashTransactionsProps {
    /// The account whose transactions are shown. Must not be empty.
    #[props(into)]
    pub account_id: String,

    /// Emphasize profit and loss figures.
    #[props(default)]
    pub highlight_pnl: bool,

    /// Called with the row the viewer activated.
    #[props(optional)]
    pub on_row_click: Option<EventHandler<CashTransaction>>,

    /// Render the title as a link, for dashboards with routing.
    #[props(default)]
    pub show_header_link: bool,

    /// The current viewer, forwarded to the transaction source for access control.
    #[props(optional)]
    pub user_id: Option<String>,

    /// Called when the viewer minimizes the view.
    #[props(optional)]
    pub on_minimize: Option<EventHandler<()>>,

    /// Receives every event the view emits.
    #[props(optional)]
    pub on_event: Option<EventHandler<CashTransactionsEvent>>,

    /// Target of the title link. Defaults to `/accounts/{account_id}/cash`.
    #[props(optional)]
    pub header_href: Option<String>,
}

impl CashTransactionsProps {
    fn header_href(&self) -> String {
        self.header_href
            .clone()
            .unwrap_or_else(|| format!("/accounts/{}/cash", self.account_id))
    }

    fn subscribers(&self) -> PropSubscribers {
        Subscribers {
            stream: self.on_event,
            row_click: self.on_row_click,
            minimize: self.on_minimize,
        }
    }
}

/// Renders the cash transactions of `account_id`, read from the
/// `TransactionStore` in context.
///
/// Query failures are handed to the nearest `ErrorBoundary`.
#[component]
pub fn CashTransactions(props: CashTransactionsProps) -> Element {
    let store = use_context::<TransactionStore>();

    let account_id = props.account_id.clone();
    let user_id = props.user_id.clone();
    let rows = use_resource(use_reactive(
        (&account_id, &user_id),
        move |(account_id, user_id)| {
            let query = store.cash_transactions(&account_id, user_id.as_deref());
            async move { query.await.map(Rc::new) }
        },
    ));

    let loaded = match &*rows.read() {
        None => None,
        Some(Ok(list)) => Some(list.clone()),
        Some(Err(e)) => {
            dioxus_logger::tracing::warn!(
                "failed to load cash transactions for {}: {}",
                props.account_id,
                e
            );
            return Err(e.clone().into());
        }
    };

    rsx! {
        CashTransactionsPanel {
            config: props,
            rows: loaded,
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct CashTransactionsPanelProps {
    config: CashTransactionsProps,
    /// `None` while the rows are loading.
    #[props(!optional)]
    rows: Option<Rc<Vec<CashTransaction>>>,
}

/// Owns the local state of one view instance.
#[component]
pub fn CashTransactionsPanel(props: CashTransactionsPanelProps) -> Element {
    let CashTransactionsPanelProps { config, rows } = props;
    let prefs = use_hook(|| try_consume_context::<TablePrefs>().unwrap_or_default());
    let view = use_signal(|| ViewState::new(&prefs));

    rsx! {
        PanelFrame { config, rows, prefs, view }
    }
}

/// Something the viewer did inside the panel.
#[derive(Clone, Debug, PartialEq)]
enum PanelAction {
    ActivateRow(CashTransaction),
    Minimize,
    Restore,
}

/// Applies `action` to the view state, then emits the event it causes, if any.
fn perform(action: PanelAction, mut view: Signal<ViewState>, subscribers: &PropSubscribers) {
    let event = match action {
        PanelAction::ActivateRow(row) => Some(CashTransactionsEvent::RowClick(row)),
        PanelAction::Minimize => view
            .write()
            .minimize()
            .then_some(CashTransactionsEvent::Minimize),
        PanelAction::Restore => {
            view.write().expand();
            None
        }
    };
    if let Some(event) = event {
        subscribers.dispatch(event);
    }
}

/// The header and body of the view.
#[component]
fn PanelFrame(
    config: CashTransactionsProps,
    #[props(!optional)] rows: Option<Rc<Vec<CashTransaction>>>,
    prefs: TablePrefs,
    view: Signal<ViewState>,
) -> Element {
    let subscribers = config.subscribers();
    let minimized = view.read().is_minimized();
    let href = config.header_href();

    rsx! {
        style { {CASH_TX_CSS} }
        Card {
            class: "cash-tx",
            header {
                class: "cash-tx-header",
                h3 {
                    class: "cash-tx-title",
                    if config.show_header_link {
                        a { href: "{href}", "{TITLE}" }
                    } else {
                        "{TITLE}"
                    }
                }
                div {
                    class: "cash-tx-actions",
                    if minimized {
                        Button {
                            button_type: ButtonType::Secondary,
                            outline: true,
                            title: "Restore".to_string(),
                            on_click: move |_| perform(PanelAction::Restore, view, &subscribers),
                            "+"
                        }
                    } else {
                        ColumnsPopup { view }
                        Button {
                            button_type: ButtonType::Secondary,
                            outline: true,
                            title: "Minimize".to_string(),
                            on_click: move |_| perform(PanelAction::Minimize, view, &subscribers),
                            "−"
                        }
                    }
                }
            }
            if !minimized {
                match rows {
                    None => rsx! {
                        p { "Loading..." }
                        progress {}
                    },
                    Some(list) if list.is_empty() => rsx! {
                        EmptyState {
                            title: "No Cash Transactions".to_string(),
                            description: Some(format!("Account {} has no cash movements yet.", config.account_id)),
                            icon: rsx! { "💵" },
                        }
                    },
                    Some(list) => rsx! {
                        TransactionsTable {
                            rows: list,
                            view,
                            highlight_pnl: config.highlight_pnl,
                            date_format: prefs.date_format.clone(),
                            show_totals: prefs.show_totals,
                            on_activate: move |row| perform(PanelAction::ActivateRow(row), view, &subscribers),
                        }
                    },
                }
            }
        }
    }
}

#[component]
fn TransactionsTable(
    rows: Rc<Vec<CashTransaction>>,
    view: Signal<ViewState>,
    highlight_pnl: bool,
    date_format: String,
    show_totals: bool,
    on_activate: EventHandler<CashTransaction>,
) -> Element {
    let (columns, sort) = {
        let state = view.read();
        (state.columns().visible().to_vec(), state.sort())
    };
    let display_rows = sorted_rows(&rows, sort);
    let totals = if show_totals {
        totals_by_currency(&rows)
    } else {
        Vec::new()
    };

    rsx! {
        div {
            style: "max-height: 70vh; overflow-y: auto;",
            table {
                class: "cash-tx-table",
                thead {
                    tr {
                        for column in columns.iter().copied() {
                            SortableHeader { key: "{column.key()}", column, view }
                        }
                    }
                }
                tbody {
                    for row in display_rows {
                        TransactionRow {
                            key: "{row.id}",
                            row: row.clone(),
                            columns: columns.clone(),
                            highlight_pnl,
                            date_format: date_format.clone(),
                            on_activate,
                        }
                    }
                }
                if !totals.is_empty() {
                    tfoot {
                        for total in totals {
                            tr {
                                key: "{total.net.currency().code()}",
                                class: "cash-tx-totals",
                                td {
                                    colspan: "{columns.len()}",
                                    style: "text-align: right;",
                                    "Net {total.net.to_string_with_code()} · P&L "
                                    span {
                                        class: if highlight_pnl { pnl_class(&total.pnl) } else { "" },
                                        "{total.pnl.to_string_signed()} {total.pnl.currency().code()}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::cell::RefCell;

    use api::cash_amount::CashAmount;
    use api::currency::Currency;
    use api::prefs::column::Column;
    use api::source::InMemoryTransactions;
    use api::transaction::CashTransactionKind;
    use chrono::NaiveDate;
    use dioxus::dioxus_core::NoOpMutations;
    use dioxus::dioxus_core::ScopeId;
    use dioxus::dioxus_core::VirtualDom;

    use super::*;

    fn config(account_id: &str) -> CashTransactionsProps {
        CashTransactionsProps {
            account_id: account_id.to_string(),
            highlight_pnl: false,
            on_row_click: None,
            show_header_link: false,
            user_id: None,
            on_minimize: None,
            on_event: None,
            header_href: None,
        }
    }

    fn prefs(show_totals: bool, hidden_columns: Vec<Column>) -> TablePrefs {
        TablePrefs {
            hidden_columns,
            show_totals,
            ..TablePrefs::from_lookup(|_| None)
        }
    }

    fn usd(minor: i64) -> CashAmount {
        CashAmount::new_from_minor(minor, Currency::USD)
    }

    fn tx(id: &str, day: u32, kind: CashTransactionKind, amount: i64, pnl: Option<i64>) -> CashTransaction {
        CashTransaction {
            id: id.to_string(),
            account_id: "acc-1".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 4, day).unwrap(),
            kind,
            description: format!("{} {}", kind, id),
            amount: usd(amount),
            pnl: pnl.map(usd),
            balance: None,
        }
    }

    fn sample_rows() -> Rc<Vec<CashTransaction>> {
        Rc::new(vec![
            tx("t2", 9, CashTransactionKind::Trade, 25_000, Some(1_500)),
            tx("t1", 2, CashTransactionKind::Deposit, 100_000, None),
            tx("t3", 12, CashTransactionKind::Fee, -1_250, Some(-1_250)),
            tx("t4", 15, CashTransactionKind::Transfer, -5_000, Some(0)),
        ])
    }

    fn render_panel(
        config: CashTransactionsProps,
        rows: Option<Rc<Vec<CashTransaction>>>,
        prefs: TablePrefs,
    ) -> String {
        let mut dom = VirtualDom::new_with_props(
            CashTransactionsPanel,
            CashTransactionsPanelProps { config, rows },
        )
        .with_root_context(prefs);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn row_ids(html: &str) -> Vec<String> {
        html.split("data-row-id=\"")
            .skip(1)
            .filter_map(|rest| rest.split('"').next())
            .map(str::to_string)
            .collect()
    }

    /// The `<table>` element, leaving out the stylesheet and header.
    fn table_html(html: &str) -> &str {
        let start = html.find("<table").unwrap_or(html.len());
        let end = html.find("</table>").map_or(html.len(), |i| i + "</table>".len());
        &html[start..end.max(start)]
    }

    /// Everything a host passed to the view's callbacks.
    #[derive(Clone, Default)]
    struct Received {
        stream: Rc<RefCell<Vec<CashTransactionsEvent>>>,
        row_clicks: Rc<RefCell<Vec<String>>>,
        minimizes: Rc<Cell<usize>>,
    }

    /// Lets a test act on a mounted panel from outside the VirtualDom.
    #[derive(Clone, Default)]
    struct PanelHandle(Rc<RefCell<Option<(Signal<ViewState>, PropSubscribers)>>>);

    impl PanelHandle {
        fn act(&self, dom: &VirtualDom, action: PanelAction) {
            let (view, subscribers) = (*self.0.borrow()).expect("panel is mounted");
            dom.in_runtime(|| perform(action, view, &subscribers));
        }
    }

    #[component]
    fn ListeningHost() -> Element {
        let received = use_context::<Received>();
        let handle = use_context::<PanelHandle>();
        let config = use_hook(|| {
            let stream = received.stream.clone();
            let row_clicks = received.row_clicks.clone();
            let minimizes = received.minimizes.clone();
            CashTransactionsProps {
                on_event: Some(EventHandler::new(move |event: CashTransactionsEvent| {
                    stream.borrow_mut().push(event);
                })),
                on_row_click: Some(EventHandler::new(move |row: CashTransaction| {
                    row_clicks.borrow_mut().push(row.id);
                })),
                on_minimize: Some(EventHandler::new(move |_: ()| {
                    minimizes.set(minimizes.get() + 1);
                })),
                ..config("acc-1")
            }
        });
        let view = use_signal(|| ViewState::new(&prefs(false, vec![])));
        *handle.0.borrow_mut() = Some((view, config.subscribers()));

        rsx! {
            PanelFrame {
                config,
                rows: Some(sample_rows()),
                prefs: prefs(false, vec![]),
                view,
            }
        }
    }

    fn mount_listening_host() -> (VirtualDom, Received, PanelHandle) {
        let received = Received::default();
        let handle = PanelHandle::default();
        let mut dom = VirtualDom::new(ListeningHost)
            .with_root_context(received.clone())
            .with_root_context(handle.clone());
        dom.rebuild_in_place();
        (dom, received, handle)
    }

    #[derive(Clone, Default)]
    struct EventCount(Rc<Cell<usize>>);

    #[component]
    fn CountingHost() -> Element {
        let count = use_context::<EventCount>();
        let on_event = EventHandler::new(move |_: CashTransactionsEvent| {
            count.0.set(count.0.get() + 1);
        });
        rsx! {
            CashTransactionsPanel {
                config: CashTransactionsProps {
                    on_event: Some(on_event),
                    ..config("acc-1")
                },
                rows: Some(sample_rows()),
            }
        }
    }

    #[test]
    fn optional_props_default_off() {
        let props = CashTransactionsProps::builder()
            .account_id("acc-1")
            .build()
            .inner;
        assert!(props == config("acc-1"));
        assert!(!props.highlight_pnl);
        assert!(!props.show_header_link);
        assert_eq!(props.user_id, None);
    }

    #[test]
    fn renders_rows_in_source_order() {
        let html = render_panel(config("acc-1"), Some(sample_rows()), prefs(false, vec![]));

        assert!(html.contains(TITLE));
        assert!(!html.contains("<a href"));
        assert_eq!(row_ids(&html), ["t2", "t1", "t3", "t4"]);
        assert!(html.contains("+$15.00"));
        assert!(html.contains("-$12.50"));
    }

    #[test]
    fn highlight_changes_only_emphasis() {
        let plain = render_panel(config("acc-1"), Some(sample_rows()), prefs(false, vec![]));
        let highlighted = render_panel(
            CashTransactionsProps {
                highlight_pnl: true,
                ..config("acc-1")
            },
            Some(sample_rows()),
            prefs(false, vec![]),
        );
        let (plain, highlighted) = (table_html(&plain), table_html(&highlighted));

        assert!(!plain.is_empty());
        assert!(!plain.contains("pnl-positive"));
        assert!(highlighted.contains(r#"class="cash-tx-pnl pnl-positive""#));
        assert!(highlighted.contains(r#"class="cash-tx-pnl pnl-negative""#));
        assert!(highlighted.contains(r#"class="cash-tx-pnl pnl-zero""#));
        assert_eq!(row_ids(plain), row_ids(highlighted));

        let stripped = highlighted
            .replace("pnl-positive", "")
            .replace("pnl-negative", "")
            .replace("pnl-zero", "");
        assert_eq!(stripped, plain);
    }

    #[test]
    fn header_link_wraps_only_the_title() {
        let plain = render_panel(config("acc-1"), Some(sample_rows()), prefs(true, vec![]));
        let linked = render_panel(
            CashTransactionsProps {
                show_header_link: true,
                ..config("acc-1")
            },
            Some(sample_rows()),
            prefs(true, vec![]),
        );

        let anchor = r#"<a href="/accounts/acc-1/cash">"#;
        assert!(linked.contains(anchor));
        assert_eq!(linked.replacen(anchor, "", 1).replacen("</a>", "", 1), plain);
    }

    #[test]
    fn header_link_target_can_be_overridden() {
        let html = render_panel(
            CashTransactionsProps {
                show_header_link: true,
                header_href: Some("/dash/cash?acct=acc-1".to_string()),
                ..config("acc-1")
            },
            Some(sample_rows()),
            prefs(true, vec![]),
        );
        assert!(html.contains(r#"href="/dash/cash?acct=acc-1""#));
    }

    #[test]
    fn hidden_columns_are_not_rendered() {
        let html = render_panel(
            config("acc-1"),
            Some(sample_rows()),
            prefs(false, vec![Column::Balance, Column::Kind]),
        );
        assert!(!html.contains("cash-tx-balance"));
        assert!(!html.contains("cash-tx-kind"));
        assert!(html.contains("cash-tx-pnl"));
        assert!(html.contains("cash-tx-date"));
    }

    #[test]
    fn totals_footer_sums_the_account() {
        let html = render_panel(config("acc-1"), Some(sample_rows()), prefs(true, vec![]));
        assert!(html.contains("Net 1187.50 USD"));
        assert!(html.contains("+2.50 USD"));

        let without = render_panel(config("acc-1"), Some(sample_rows()), prefs(false, vec![]));
        assert!(!without.contains("cash-tx-totals"));
    }

    #[test]
    fn loading_and_empty_states() {
        let loading = render_panel(config("acc-1"), None, prefs(true, vec![]));
        assert!(loading.contains("Loading..."));
        assert!(row_ids(&loading).is_empty());

        let empty = render_panel(config("acc-1"), Some(Rc::new(vec![])), prefs(true, vec![]));
        assert!(empty.contains("No Cash Transactions"));
        assert!(!empty.contains("<table"));
    }

    #[test]
    fn activated_row_reaches_both_callbacks_once() {
        let (dom, received, handle) = mount_listening_host();
        let row = sample_rows()[2].clone();

        handle.act(&dom, PanelAction::ActivateRow(row.clone()));

        assert_eq!(*received.row_clicks.borrow(), ["t3"]);
        assert_eq!(
            *received.stream.borrow(),
            vec![CashTransactionsEvent::RowClick(row)]
        );
        assert_eq!(received.minimizes.get(), 0);
    }

    #[test]
    fn minimize_emits_once_and_hides_the_body() {
        let (mut dom, received, handle) = mount_listening_host();
        assert_eq!(row_ids(&dioxus_ssr::render(&dom)).len(), 4);

        handle.act(&dom, PanelAction::Minimize);
        handle.act(&dom, PanelAction::Minimize);
        dom.render_immediate(&mut NoOpMutations);
        let minimized = dioxus_ssr::render(&dom);

        assert_eq!(received.minimizes.get(), 1);
        assert_eq!(*received.stream.borrow(), vec![CashTransactionsEvent::Minimize]);
        assert!(!minimized.contains("<table"));
        assert!(!minimized.contains("data-row-id"));
        assert!(minimized.contains(r#"title="Restore""#));

        handle.act(&dom, PanelAction::Restore);
        dom.render_immediate(&mut NoOpMutations);

        assert_eq!(received.stream.borrow().len(), 1);
        assert_eq!(row_ids(&dioxus_ssr::render(&dom)).len(), 4);
    }

    #[test]
    fn rerendering_emits_nothing() {
        let count = EventCount::default();
        let mut dom = VirtualDom::new(CountingHost)
            .with_root_context(count.clone())
            .with_root_context(prefs(true, vec![]));
        dom.rebuild_in_place();
        dom.mark_dirty(ScopeId::ROOT);
        dom.render_immediate(&mut NoOpMutations);

        assert!(dioxus_ssr::render(&dom).contains("data-row-id"));
        assert_eq!(count.0.get(), 0);
    }

    #[test]
    fn fetching_view_renders_its_header() {
        let source = InMemoryTransactions::new().with_account("acc-1");
        let mut dom = VirtualDom::new_with_props(CashTransactions, config("acc-1"))
            .with_root_context(TransactionStore::new(source))
            .with_root_context(prefs(true, vec![]));
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains(TITLE));
        assert!(html.contains("cash-tx-header"));
    }
}
