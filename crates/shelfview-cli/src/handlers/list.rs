use anyhow::Result;
use shelfview_runtime::{Controller, Renderer};
use shelfview_types::{
    Action, CategoryFilter, FilterChange, PriceRange, RatingFilter, SortKey, StatusFilter,
    ViewMode,
};

use crate::args::OutputFormat;
use crate::output::{JsonRenderer, TableRenderer};

pub struct ListOpts {
    pub search: Option<String>,
    pub category: Option<CategoryFilter>,
    pub price: Option<PriceRange>,
    pub rating: Option<RatingFilter>,
    pub status: Option<StatusFilter>,
    pub sort: Option<SortKey>,
    pub page: usize,
    pub view: Option<ViewMode>,
}

pub fn handle(controller: &mut Controller, opts: ListOpts, format: OutputFormat) -> Result<()> {
    if let Some(term) = opts.search {
        controller.dispatch(Action::SetFilter(FilterChange::Search(term)))?;
    }
    if let Some(category) = opts.category {
        controller.dispatch(Action::SetFilter(FilterChange::Category(category)))?;
    }
    if let Some(price) = opts.price {
        controller.dispatch(Action::SetFilter(FilterChange::Price(price)))?;
    }
    if let Some(rating) = opts.rating {
        controller.dispatch(Action::SetFilter(FilterChange::Rating(rating)))?;
    }
    if let Some(status) = opts.status {
        controller.dispatch(Action::SetFilter(FilterChange::Status(status)))?;
    }
    if let Some(sort) = opts.sort {
        controller.dispatch(Action::SetSort(sort))?;
    }
    if let Some(view) = opts.view {
        controller.dispatch(Action::SetViewMode(view))?;
    }
    // Page selection goes last so the bound check sees the filtered view.
    if opts.page != 1 {
        controller.dispatch(Action::SetPage(opts.page))?;
    }

    let frame = controller.frame()?;

    let mut renderer: Box<dyn Renderer> = match format {
        OutputFormat::Plain => Box::new(TableRenderer::stdout()),
        OutputFormat::Json => Box::new(JsonRenderer),
    };
    renderer.render(&frame)?;

    Ok(())
}
