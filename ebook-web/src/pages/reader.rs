use yew::prelude::*;
use yew_router::prelude::*;

use crate::catalog::Catalog;
use crate::components::menu_bar::MenuBar;
use crate::context::AppContext;
use crate::loader::ViewId;
use crate::routes::Route;
use crate::store::{ReaderAction, ReaderStore, DEFAULT_FONT_SIZE};

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    /// Dynamic path segment naming the book to open.
    pub file_name: AttrValue,
}

/// Reader view behind `/ebook/:file_name`.
#[function_component(EbookReader)]
pub fn ebook_reader(props: &Props) -> Html {
    let Some(ctx) = use_context::<AppContext>() else {
        return Html::default();
    };
    let store = use_context::<ReaderStore>();
    let view = ctx.views.load(ViewId::Reader);
    let catalog = use_memo((), |()| Catalog::load_from_static());
    let navigator = use_navigator();

    // Record the open book in the store whenever the segment changes.
    {
        let store = store.clone();
        use_effect_with(props.file_name.clone(), move |file_name| {
            if let Some(store) = store {
                store.dispatch(ReaderAction::OpenBook(file_name.to_string()));
            }
            || {}
        });
    }

    let title = catalog.find(&props.file_name).map_or_else(
        || ctx.i18n.t("reader.untitled"),
        |book| book.title.clone(),
    );
    let font_size = store
        .as_ref()
        .map_or(DEFAULT_FONT_SIZE, |handle| handle.font_size);

    let back = {
        let store = store.clone();
        Callback::from(move |_| {
            if let Some(store) = store.as_ref() {
                store.dispatch(ReaderAction::CloseBook);
            }
            if let Some(nav) = navigator.as_ref() {
                nav.push(&Route::Shelf);
            }
        })
    };

    html! {
        <section class="panel reader" data-view={view.id.name()} data-file={props.file_name.clone()}>
            <link rel="stylesheet" href={view.stylesheet.clone()} />
            <header class="reader-header">
                <h1>{ title }</h1>
                <button type="button" class="reader-back" onclick={back}>
                    { ctx.i18n.t("reader.back_to_shelf") }
                </button>
            </header>
            <article class="reader-page" style={format!("font-size:{font_size}px")}>
                <p class="muted" role="status">{ ctx.i18n.t(view.title_key) }</p>
            </article>
            <MenuBar />
        </section>
    }
}
