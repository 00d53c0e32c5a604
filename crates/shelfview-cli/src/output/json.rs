use shelfview_runtime::{Renderer, ViewFrame};

/// Machine-readable frame output: the whole frame as pretty JSON.
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&mut self, frame: &ViewFrame) -> shelfview_runtime::Result<()> {
        let text = serde_json::to_string_pretty(frame).map_err(std::io::Error::other)?;
        println!("{}", text);
        Ok(())
    }
}
