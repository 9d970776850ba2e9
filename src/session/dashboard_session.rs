use std::collections::HashSet;
use std::io;
use std::sync::Arc;

use chrono::NaiveDate;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info, warn};

use crate::engine::evaluate;
use crate::models::{FilterCriteria, ProductSelection, ALL_PRODUCTS};
use crate::presentation::Renderer;
use crate::session::command::{CategorySelection, Command, HELP};
use crate::session::errors::CommandError;
use crate::storage::Dataset;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Flow {
    Continue,
    Quit
}

enum Outcome {
    Refresh,
    Help,
    Options,
    Quit
}

/// The interactive front end: owns the current criteria and redraws the whole
/// dashboard whenever they change.
pub struct DashboardSession<R: Renderer> {
    dataset: Arc<Dataset>,
    criteria: FilterCriteria,
    show_details: bool,
    renderer: R
}

impl<R: Renderer> DashboardSession<R> {
    /// Starts with the dataset's full date range, every category and all products.
    pub fn new(dataset: Arc<Dataset>, renderer: R) -> Self {
        let criteria = FilterCriteria::unrestricted(&dataset);

        Self {
            dataset,
            criteria,
            show_details: false,
            renderer
        }
    }

    #[cfg(test)]
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    #[cfg(test)]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Draws the dashboard, then handles input lines until `quit` or end of input.
    pub async fn run<I: AsyncBufRead + Unpin>(&mut self, input: I) -> io::Result<()> {
        self.refresh()?;

        let mut lines = input.lines();

        while let Some(line) = lines.next_line().await? {
            if self.handle(&line)? == Flow::Quit {
                break;
            }
        }

        info!("Dashboard session ended");

        Ok(())
    }

    /// Re-runs the full pipeline for the current criteria and draws the result.
    pub fn refresh(&mut self) -> io::Result<()> {
        let dashboard = evaluate(&self.dataset, &self.criteria);
        dashboard.render(&mut self.renderer, self.show_details)
    }

    /// Applies one line of input. Rejected input is reported to the user and leaves
    /// the criteria untouched; only renderer failures are returned as errors.
    pub fn handle(&mut self, line: &str) -> io::Result<Flow> {
        let command = match Command::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(Flow::Continue),
            Err(error) => return self.reject(error)
        };

        match self.apply(command) {
            Ok(Outcome::Refresh) => {
                debug!(
                    "Criteria now [{}] to [{}] with {} categories and product [{}]",
                    self.criteria.start, self.criteria.end, self.criteria.categories.len(), self.criteria.product
                );
                self.refresh()?;
            }
            Ok(Outcome::Help) => self.renderer.render_notice(HELP)?,
            Ok(Outcome::Options) => {
                let options = self.options();
                self.renderer.render_notice(&options)?;
            }
            Ok(Outcome::Quit) => return Ok(Flow::Quit),
            Err(error) => return self.reject(error)
        }

        Ok(Flow::Continue)
    }

    fn apply(&mut self, command: Command) -> Result<Outcome, CommandError> {
        match command {
            Command::From(date) => self.criteria.start = self.within_dataset(date)?,
            Command::To(date) => self.criteria.end = self.within_dataset(date)?,
            Command::Categories(selection) => self.criteria.categories = self.resolve_categories(selection)?,
            Command::Product(selection) => self.criteria.product = self.resolve_product(selection)?,
            Command::Details => self.show_details = !self.show_details,
            Command::Reset => {
                self.criteria = FilterCriteria::unrestricted(&self.dataset);
                self.show_details = false;
            }
            Command::Show => {}
            Command::Options => return Ok(Outcome::Options),
            Command::Help => return Ok(Outcome::Help),
            Command::Quit => return Ok(Outcome::Quit)
        }

        Ok(Outcome::Refresh)
    }

    /// The choices the category and product commands accept, with "All" leading the products.
    fn options(&self) -> String {
        let products: Vec<&str> = std::iter::once(ALL_PRODUCTS)
            .chain(self.dataset.products().iter().map(String::as_str))
            .collect();

        format!("Categories: {}\nProducts: {}", self.dataset.categories().join(", "), products.join(", "))
    }

    fn reject(&mut self, error: CommandError) -> io::Result<Flow> {
        warn!("{error}");
        self.renderer.render_notice(&error.to_string())?;

        Ok(Flow::Continue)
    }

    fn within_dataset(&self, date: NaiveDate) -> Result<NaiveDate, CommandError> {
        match self.dataset.date_range() {
            Some((first, last)) if date < first || date > last => {
                Err(CommandError::DateOutOfRange { date, first, last })
            }
            _ => Ok(date)
        }
    }

    fn resolve_categories(&self, selection: CategorySelection) -> Result<HashSet<String>, CommandError> {
        match selection {
            CategorySelection::All => Ok(self.dataset.categories().iter().cloned().collect()),
            CategorySelection::None => Ok(HashSet::new()),
            CategorySelection::Only(names) => {
                if let Some(unknown) = names.iter().find(|name| !self.dataset.has_category(name)) {
                    return Err(CommandError::UnknownCategory(unknown.clone()));
                }
                Ok(names.into_iter().collect())
            }
        }
    }

    fn resolve_product(&self, selection: ProductSelection) -> Result<ProductSelection, CommandError> {
        if let ProductSelection::Only(product_name) = &selection {
            if !self.dataset.has_product(product_name) {
                return Err(CommandError::UnknownProduct(product_name.clone()));
            }
        }

        Ok(selection)
    }
}
