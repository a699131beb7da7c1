#[allow(clippy::module_inception)]
mod selection;
mod selector;
mod view;

pub use selection::Selection;
pub use selector::ResidueSelector;
pub use view::ResidueView;
