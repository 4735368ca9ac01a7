use crate::chart::SvgSurface;
use crate::controller::{Controller, DisplayState};

/// What the formatters render: the display state plus drawn chart markup.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub display: DisplayState,
    pub single_svg: Option<String>,
    pub comparison_svg: Option<String>,
}

impl Report {
    /// Snapshot a controller drawing on SVG surfaces.
    #[must_use]
    pub fn from_controller(controller: &Controller<SvgSurface>) -> Self {
        let charts = controller.charts();
        Self {
            display: controller.display_state(),
            single_svg: charts.single().surface().markup().map(str::to_string),
            comparison_svg: charts.comparison().surface().markup().map(str::to_string),
        }
    }
}
