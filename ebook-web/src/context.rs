use std::rc::Rc;
use yew::prelude::*;

use crate::i18n::I18n;
use crate::loader::ViewLoader;

/// Composition-root context: built once at startup and passed down the tree
/// instead of living in module-level singletons.
#[derive(Clone, Debug)]
pub struct AppContext {
    pub i18n: Rc<I18n>,
    pub views: Rc<ViewLoader>,
    /// Switches the display language and persists the choice.
    pub on_locale_change: Callback<String>,
}

impl PartialEq for AppContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.i18n, &other.i18n)
            && Rc::ptr_eq(&self.views, &other.views)
            && self.on_locale_change == other.on_locale_change
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_equality_holds_while_parts_are_shared() {
        let ctx = AppContext {
            i18n: Rc::new(I18n::new("en")),
            views: Rc::new(ViewLoader::new()),
            on_locale_change: Callback::noop(),
        };
        // A clone shares every part, so providers see an unchanged context
        assert_eq!(ctx, ctx.clone());
    }

    #[test]
    fn context_changes_when_a_part_is_rebuilt() {
        let ctx = AppContext {
            i18n: Rc::new(I18n::new("en")),
            views: Rc::new(ViewLoader::new()),
            on_locale_change: Callback::noop(),
        };
        let switched = AppContext {
            i18n: Rc::new(I18n::new("cn")),
            views: Rc::clone(&ctx.views),
            on_locale_change: ctx.on_locale_change.clone(),
        };
        assert_ne!(ctx, switched);

        let rebuilt_callback = AppContext {
            i18n: Rc::clone(&ctx.i18n),
            views: Rc::clone(&ctx.views),
            on_locale_change: Callback::from(|_| {}),
        };
        assert_ne!(ctx, rebuilt_callback);
    }
}
