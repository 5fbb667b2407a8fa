//! Notebook publishing for the portfolio site
//!
//!     This crate turns Jupyter notebooks into static, self-contained HTML pages that the site
//!     embeds in a sandboxed frame. It powers the nbpress binary but is shell agnostic: no code
//!     here prints, reads env vars or touches the filesystem except through [`Storage`].
//!
//!     The file structure :
//!     .
//!     ├── error.rs        # ConvertError / BatchError
//!     ├── notebook.rs     # nbformat 4 subset (cells, outputs, MIME bundles)
//!     ├── filter.rs       # Boilerplate filter: marker table + predicate
//!     ├── html
//!     │   ├── escape.rs   # Five-character escaping, ANSI stripping
//!     │   └── serializer.rs
//!     ├── storage.rs      # Storage capability (filesystem, in-memory)
//!     ├── convert.rs      # convert(path, slug) -> HTML
//!     └── batch.rs        # Fixed-list batch driver
//!
//! Pipeline
//!
//!     bytes --parse--> Notebook --render--> fragments --wrap--> page
//!
//!     Rendering walks the cells in order. Code cells emit their source and outputs, markdown
//!     cells pass through the boilerplate filter and are published as escaped prose, and an
//!     accepted markdown heading opens a section that collects what follows it. Raw cells and
//!     unknown kinds are dropped. Nothing is reordered.
//!
//!     Rendering is pure: the same notebook and options always give the same bytes. There are
//!     no timestamps, ids or environment lookups in the output.
//!
//! Failures
//!
//!     A notebook that is missing or malformed fails on its own. The batch driver logs a warning,
//!     records the skip and moves on; it never writes partial output.
//!
//! Testing
//!     tests
//!     ├── lib.rs
//!     ├── render/     # Rendering properties over synthetic notebooks
//!     └── batch/      # Batch driver against the real filesystem

pub mod batch;
pub mod convert;
pub mod error;
pub mod filter;
pub mod html;
pub mod notebook;
pub mod storage;

pub use batch::{run_batch, BatchReport, BatchSettings, NotebookEntry};
pub use convert::{convert, convert_with_options};
pub use error::{BatchError, ConvertError};
pub use filter::BoilerplateFilter;
pub use html::{get_default_css, HtmlOptions};
pub use notebook::{parse_notebook, Cell, Notebook, Output};
pub use storage::{FsStorage, MemoryStorage, Storage};
