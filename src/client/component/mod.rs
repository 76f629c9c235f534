pub mod header;
pub mod layout;
pub mod number_grid;
pub mod page;
pub mod stats_panel;
pub mod success_popup;

pub use header::Header;
pub use layout::Layout;
pub use number_grid::NumberGrid;
pub use page::Page;
pub use stats_panel::StatsPanel;
pub use success_popup::SuccessPopup;
