use crate::config::Config;
use crate::dataset::{Dataset, Record};
use crate::query::{FilterInstruction, SortInstruction};

/// Shared application state: the loaded dataset and the instructions the
/// drop-down widgets have dispatched so far.
///
/// The root component owns one instance and hands cloned views to the
/// gallery whenever an instruction changes, so no widget ever mutates the
/// dataset directly.
pub struct AppContext {
    pub config: Config,
    dataset: Option<Dataset>,
    filter: Option<FilterInstruction>,
    sort: Option<SortInstruction>,
}

impl AppContext {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            dataset: None,
            filter: None,
            sort: None,
        }
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.dataset = Some(dataset);
    }

    pub fn filter(&self) -> Option<&FilterInstruction> {
        self.filter.as_ref()
    }

    pub fn set_filter(&mut self, filter: Option<FilterInstruction>) {
        self.filter = filter;
    }

    pub fn sort(&self) -> Option<&SortInstruction> {
        self.sort.as_ref()
    }

    pub fn set_sort(&mut self, sort: Option<SortInstruction>) {
        self.sort = sort;
    }

    /// The records matching the current instructions, in display order.
    pub fn visible_records(&self) -> Vec<Record> {
        match &self.dataset {
            Some(dataset) => dataset
                .select(self.filter.as_ref(), self.sort.as_ref())
                .into_iter()
                .cloned()
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn total_records(&self) -> usize {
        self.dataset.as_ref().map(|dataset| dataset.records.len()).unwrap_or(0)
    }
}
