// The job list pipeline: search/attribute filtering, skill-based
// recommendation, sorting, and the view selection feeding the renderer.
// Every stage is a pure function over the fetched list; nothing here
// performs I/O.

pub mod recommend;
pub mod search;
pub mod sort;
pub mod view;
