pub mod page;
pub mod paginator;

pub use page::{PageChange, PageEvent, PageState, page_count, reduce};
pub use paginator::{Control, PageItem, PaginatorView};
