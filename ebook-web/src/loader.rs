//! On-demand view loading.
//!
//! The shelf and reader views are independent load units: a view's descriptor
//! is resolved the first time its route is matched, never eagerly at startup.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

/// The independently loadable views of the application.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ViewId {
    Shelf,
    Reader,
}

impl ViewId {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shelf => "shelf",
            Self::Reader => "reader",
        }
    }
}

/// What a loaded view unit exposes to its page.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ViewDescriptor {
    pub id: ViewId,
    pub title_key: &'static str,
    pub stylesheet: String,
}

fn build_descriptor(id: ViewId) -> ViewDescriptor {
    match id {
        ViewId::Shelf => ViewDescriptor {
            id,
            title_key: "shelf.title",
            stylesheet: crate::paths::asset_path("static/css/shelf.css"),
        },
        ViewId::Reader => ViewDescriptor {
            id,
            title_key: "reader.loading",
            stylesheet: crate::paths::asset_path("static/css/reader.css"),
        },
    }
}

/// Load-by-name registry for the view units.
///
/// `load` is idempotent: the first call for a view resolves its descriptor,
/// later calls return the cached one. The load count is observable so tests
/// can assert the deferred-loading contract.
#[derive(Default, Debug)]
pub struct ViewLoader {
    cache: RefCell<HashMap<ViewId, Rc<ViewDescriptor>>>,
    loads: Cell<usize>,
}

impl ViewLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(&self, id: ViewId) -> Rc<ViewDescriptor> {
        if let Some(found) = self.cache.borrow().get(&id) {
            return Rc::clone(found);
        }
        self.loads.set(self.loads.get() + 1);
        log::debug!("loading view unit `{}`", id.name());
        let descriptor = Rc::new(build_descriptor(id));
        self.cache
            .borrow_mut()
            .insert(id, Rc::clone(&descriptor));
        descriptor
    }

    #[must_use]
    pub fn is_loaded(&self, id: ViewId) -> bool {
        self.cache.borrow().contains_key(&id)
    }

    #[must_use]
    pub fn load_count(&self) -> usize {
        self.loads.get()
    }
}
