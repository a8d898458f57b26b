//! Reader state store.
//!
//! The reducible state shared by the shelf and reader views, provided to the
//! tree as a context from the composition root.

use std::rc::Rc;
use yew::prelude::*;

pub const MIN_FONT_SIZE: u8 = 12;
pub const MAX_FONT_SIZE: u8 = 24;
pub const DEFAULT_FONT_SIZE: u8 = 16;
const FONT_STEP: u8 = 2;

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ReaderState {
    /// File name of the currently open book, if any.
    pub open_book: Option<String>,
    pub menu_visible: bool,
    pub font_size: u8,
}

impl Default for ReaderState {
    fn default() -> Self {
        Self {
            open_book: None,
            menu_visible: false,
            font_size: DEFAULT_FONT_SIZE,
        }
    }
}

pub enum ReaderAction {
    OpenBook(String),
    CloseBook,
    ToggleMenu,
    FontSmaller,
    FontLarger,
}

impl Reducible for ReaderState {
    type Action = ReaderAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ReaderAction::OpenBook(file_name) => {
                next.open_book = Some(file_name);
                next.menu_visible = false;
            }
            ReaderAction::CloseBook => {
                next.open_book = None;
                next.menu_visible = false;
            }
            ReaderAction::ToggleMenu => next.menu_visible = !next.menu_visible,
            ReaderAction::FontSmaller => {
                next.font_size = next.font_size.saturating_sub(FONT_STEP).max(MIN_FONT_SIZE);
            }
            ReaderAction::FontLarger => {
                next.font_size = next.font_size.saturating_add(FONT_STEP).min(MAX_FONT_SIZE);
            }
        }
        Rc::new(next)
    }
}

/// Handle under which the store is provided as a context.
pub type ReaderStore = UseReducerHandle<ReaderState>;
