use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::context::AppContext;
use crate::i18n::I18n;
use crate::loader::ViewLoader;
use crate::routes::{switch, Route};
use crate::storage::{BrowserLocaleStore, LocaleStore};
use crate::store::{ReaderState, ReaderStore};
use crate::{i18n, paths};

#[derive(Properties, Clone, PartialEq)]
pub struct AppProps {
    /// Locale resolved once during bootstrap, before mounting.
    pub locale: AttrValue,
}

/// Root application component.
///
/// Provides the router context for the whole tree and renders [`AppInner`].
/// This is the component mounted onto the `#app` anchor at startup.
#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <BrowserRouter basename={paths::router_base()}>
            <AppInner locale={props.locale.clone()} />
        </BrowserRouter>
    }
}

#[function_component(AppInner)]
pub fn app_inner(props: &AppProps) -> Html {
    // Startup composition: resolved locale -> translation table -> view
    // loader -> store, each created once and shared through contexts.
    let i18n_handle = use_state(|| Rc::new(I18n::new(&props.locale)));
    let views = use_state(|| Rc::new(ViewLoader::new()));
    let store: ReaderStore = use_reducer(ReaderState::default);

    // Memoized so context equality holds across re-renders.
    let on_locale_change = {
        let i18n_handle = i18n_handle.clone();
        use_callback((), move |code: String, ()| {
            BrowserLocaleStore.save(&code);
            i18n::set_document_lang(&code);
            i18n_handle.set(Rc::new(I18n::new(&code)));
        })
    };

    let ctx = AppContext {
        i18n: (*i18n_handle).clone(),
        views: (*views).clone(),
        on_locale_change,
    };

    html! {
        <ContextProvider<AppContext> context={ctx}>
            <ContextProvider<ReaderStore> context={store}>
                <main id="main" role="main">
                    <Switch<Route> render={switch} />
                </main>
            </ContextProvider<ReaderStore>>
        </ContextProvider<AppContext>>
    }
}
