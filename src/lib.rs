//! Toggle helpers for the `music`, `debug` and `output` page elements.
//!
//! The [`ToggleAdapter`] works against any host that implements
//! [`ElementRegistry`]. [`Page`] is a deterministic in-memory host built from
//! an HTML fixture, so the adapter can be driven from plain Rust tests.

use std::collections::{HashMap, VecDeque};
use std::error::Error as StdError;
use std::fmt;

mod config;
mod core_dom_utils;
mod dom;
mod html;
mod music;
mod page;
mod registry;
mod toggles;
mod visibility;

pub use config::{HidePolicy, ToggleConfig};
pub use music::{MusicBridge, MusicTrack, PageUpdate};
pub use page::Page;
pub use registry::ElementRegistry;
pub use toggles::ToggleAdapter;
pub use visibility::{VisibilityLedger, VisibilityState};

use core_dom_utils::*;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    ElementNotFound(String),
    HtmlParse(String),
    UnsupportedSelector(String),
    InvalidConfig(String),
    AssertionFailed {
        selector: String,
        expected: String,
        actual: String,
        dom_snippet: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ElementNotFound(name) => write!(f, "element not found: {name}"),
            Self::HtmlParse(msg) => write!(f, "html parse error: {msg}"),
            Self::UnsupportedSelector(selector) => write!(f, "unsupported selector: {selector}"),
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::AssertionFailed {
                selector,
                expected,
                actual,
                dom_snippet,
            } => write!(
                f,
                "assertion failed for {selector}: expected {expected}, actual {actual}, snippet {dom_snippet}"
            ),
        }
    }
}

impl StdError for Error {}

/// Handle to a node of the in-memory page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
enum NodeType {
    Document,
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone)]
struct Node {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    node_type: NodeType,
}

#[derive(Debug, Clone)]
struct Element {
    tag_name: String,
    attrs: HashMap<String, String>,
    checked: bool,
}

#[derive(Debug, Clone)]
struct Dom {
    nodes: Vec<Node>,
    root: NodeId,
    id_index: HashMap<String, NodeId>,
}

#[derive(Debug)]
struct TraceState {
    enabled: bool,
    logs: VecDeque<String>,
    log_limit: usize,
    to_stderr: bool,
}

impl Default for TraceState {
    fn default() -> Self {
        Self {
            enabled: false,
            logs: VecDeque::new(),
            log_limit: 10_000,
            to_stderr: true,
        }
    }
}
