use crate::errors::{ArcdeskError, ArcdeskResult};
use crate::structs::filtered_list::{filter_rows, FilteredList};
use crate::structs::transaction::{Transaction, TransactionFilters, TransactionPage};
use crate::traits::backend::Backend;

/// Ledger view: server-side pages and filters, client-side search within the page.
#[derive(Debug)]
pub struct TransactionListController {
    list: FilteredList<Transaction>,
    filters: TransactionFilters,
    page: u32,
    pages: u32,
    total: u64,
    error: Option<String>,
}

impl Default for TransactionListController {
    fn default() -> Self {
        Self {
            list: FilteredList::default(),
            filters: TransactionFilters::default(),
            page: 1,
            pages: 1,
            total: 0,
            error: None,
        }
    }
}

impl TransactionListController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current page, starting at 1.
    pub const fn page(&self) -> u32 {
        self.page
    }

    pub const fn pages(&self) -> u32 {
        self.pages
    }

    /// Total matching transactions across all pages.
    pub const fn total(&self) -> u64 {
        self.total
    }

    pub const fn filters(&self) -> &TransactionFilters {
        &self.filters
    }

    /// Banner from the last failed load.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Transactions on the current page.
    pub fn transactions(&self) -> &[Transaction] {
        self.list.items()
    }

    /// Current page rows matching the search.
    pub fn filtered(&self) -> &[Transaction] {
        self.list.filtered()
    }

    pub fn query(&self) -> &str {
        self.list.query()
    }

    /// Changing filters always starts again from page 1.
    pub fn set_filters(&mut self, filters: TransactionFilters) {
        if filters != self.filters {
            self.page = 1;
        }
        self.filters = filters;
    }

    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    /// Filters the current page by code, title, description or payment method.
    pub fn search(&mut self, query: &str) -> &[Transaction] {
        self.list.search(query)
    }

    /// Fetches the current page with the active filters.
    pub async fn load(&mut self, backend: &dyn Backend) -> ArcdeskResult<()> {
        self.error = None;
        match backend.list_transactions(self.page, &self.filters).await {
            Ok(TransactionPage { transactions, page, pages, total }) => {
                log::debug!("Loaded {} transaction(s), page {}/{}", transactions.len(), page, pages);
                self.list.set_items(transactions);
                self.page = page.max(1);
                self.pages = pages.max(1);
                self.total = total;
                Ok(())
            }
            Err(e) => {
                let error = ArcdeskError::from_api("Failed to fetch transactions", e.without_message());
                self.error = Some(error.banner());
                Err(error)
            }
        }
    }

    /// Every page under the active filters with the current search applied. A page
    /// that fails ends the walk; what was fetched before it is kept.
    pub async fn fetch_all_for_export(&self, backend: &dyn Backend) -> ArcdeskResult<Vec<Transaction>> {
        let mut all = Vec::new();
        let mut page = 1;

        loop {
            match backend.list_transactions(page, &self.filters).await {
                Ok(result) => {
                    all.extend(result.transactions);
                    if page >= result.pages {
                        break;
                    }
                    page += 1;
                }
                Err(e) if page == 1 => return Err(ArcdeskError::from_api("Failed to fetch transactions for export", e.without_message())),
                Err(e) => {
                    log::warn!("⚠️  Stopping export at page {}: {}", page, e);
                    break;
                }
            }
        }

        Ok(filter_rows(&all, self.list.query()))
    }
}
