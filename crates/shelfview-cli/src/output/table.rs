use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use shelfview_runtime::{Renderer, ViewFrame};
use shelfview_types::{Item, ViewMode};

use crate::output::format::{
    format_price, format_rating, format_relative_time, truncate_for_display,
};

const NAME_COLUMN_WIDTH: usize = 40;
const DESCRIPTION_PREVIEW_WIDTH: usize = 70;

/// Human-readable frame output. Grid mode prints one block per item,
/// list mode one line per item; both honor the frame's view-mode flag.
pub struct TableRenderer {
    use_color: bool,
}

impl TableRenderer {
    pub fn stdout() -> Self {
        Self {
            use_color: std::io::stdout().is_terminal(),
        }
    }

    #[cfg(test)]
    fn plain() -> Self {
        Self { use_color: false }
    }

    fn render_lines(&self, frame: &ViewFrame) -> Vec<String> {
        let mut lines = Vec::new();

        lines.push(self.header_line(frame));
        lines.push(String::new());

        if frame.items.is_empty() {
            lines.push("No items match the current view.".to_string());
            return lines;
        }

        for item in &frame.items {
            match frame.view_mode {
                ViewMode::Grid => lines.extend(self.grid_block(item)),
                ViewMode::List => lines.push(self.list_line(item)),
            }
        }

        lines.push(String::new());
        lines.push(format!(
            "Progress: {}% ({}/{} done)",
            frame.stats.progress_percent, frame.stats.completed, frame.stats.total
        ));

        lines
    }

    fn header_line(&self, frame: &ViewFrame) -> String {
        let text = format!(
            "Page {}/{} - showing {} of {} matching ({} total)",
            frame.page,
            frame.total_pages,
            frame.items.len(),
            frame.matching,
            frame.total
        );
        if self.use_color {
            format!("{}", text.bold())
        } else {
            text
        }
    }

    fn checkbox(&self, item: &Item) -> String {
        if item.completed {
            if self.use_color {
                format!("{}", "[x]".green())
            } else {
                "[x]".to_string()
            }
        } else {
            "[ ]".to_string()
        }
    }

    fn grid_block(&self, item: &Item) -> Vec<String> {
        let mut block = vec![format!(
            "{} {}  {:<width$} {:>8}  {}",
            self.checkbox(item),
            item.id.short(),
            truncate_for_display(&item.name, NAME_COLUMN_WIDTH),
            format_price(item.price),
            format_rating(item.rating),
            width = NAME_COLUMN_WIDTH
        )];

        let mut meta = Vec::new();
        if let Some(category) = &item.category {
            meta.push(category.clone());
        }
        meta.push(if item.in_stock {
            "in stock".to_string()
        } else {
            "out of stock".to_string()
        });
        meta.push(format_relative_time(item.created_at));
        block.push(format!("    {}", meta.join(" / ")));

        if !item.description.is_empty() {
            block.push(format!(
                "    {}",
                truncate_for_display(&item.description, DESCRIPTION_PREVIEW_WIDTH)
            ));
        }
        block.push(String::new());

        block
    }

    fn list_line(&self, item: &Item) -> String {
        format!(
            "{} {}  {:<width$} {:>8}  {}  {}",
            self.checkbox(item),
            item.id.short(),
            truncate_for_display(&item.name, NAME_COLUMN_WIDTH),
            format_price(item.price),
            format_rating(item.rating),
            item.category.as_deref().unwrap_or("-"),
            width = NAME_COLUMN_WIDTH
        )
    }
}

impl Renderer for TableRenderer {
    fn render(&mut self, frame: &ViewFrame) -> shelfview_runtime::Result<()> {
        for line in self.render_lines(frame) {
            println!("{}", line);
        }
        Ok(())
    }
}
